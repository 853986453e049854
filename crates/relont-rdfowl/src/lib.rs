//! RDF/OWL ontology assembly for relont.
//!
//! This crate turns parsed relation statements into an OWL-flavoured RDF
//! graph:
//!
//! - every distinct term becomes an `owl:Class` with an `rdfs:label`,
//! - hierarchical predicates become direct `rdfs:subClassOf` edges,
//! - every other predicate becomes a reified `owl:ObjectProperty` node whose
//!   IRI is content-addressed from `(subject, predicate, object)`, so repeated
//!   statements collapse onto the same node.
//!
//! The graph is held as a plain set of triples and handed to **Sophia** only
//! at serialization time (RDF/XML, Turtle, N-Triples).

pub mod builder;
pub mod convert;
pub mod graph;
pub mod iri;
pub mod triples;
pub mod vocab;

pub use builder::{build_concept, build_relation, ConceptTriples, RelationTriples};
pub use convert::{
    convert, Conversion, ConversionReport, ConversionSummary, Converter, ConverterConfig,
    LineDiagnostic,
};
pub use graph::{OntologyGraph, RdfFormat};
pub use iri::{relation_identifier, term_to_uri, Namespace, DEFAULT_BASE_IRI};
pub use triples::{Object, Triple};

#[derive(Debug, thiserror::Error)]
pub enum OntologyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("relation tables: {0}")]
    Tables(#[from] relont_dsl::TablesError),
    #[error("not a valid IRI: <{0}>")]
    InvalidIri(String),
    #[error("serialization failed: {0}")]
    Serialize(String),
    #[error("unsupported RDF format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T, E = OntologyError> = std::result::Result<T, E>;
