//! Triple construction for concepts and relations.
//!
//! Pure: nothing here touches the graph. Callers insert the returned triples
//! and rely on the container's set semantics for repeats.

use crate::iri::Namespace;
use crate::triples::{Object, Triple};
use crate::vocab;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptTriples {
    pub iri: String,
    /// `rdf:type owl:Class` and `rdfs:label "<term>"`.
    pub triples: [Triple; 2],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationTriples {
    /// `None` for hierarchical predicates (no reified node).
    pub relation: Option<String>,
    pub triples: Vec<Triple>,
}

/// Concept node for `term`. The label keeps the term exactly as written.
pub fn build_concept(ns: &Namespace, term: &str) -> ConceptTriples {
    let iri = ns.term_iri(term);
    let triples = [
        Triple::new(iri.as_str(), vocab::RDF_TYPE, Object::iri(vocab::OWL_CLASS)),
        Triple::new(iri.as_str(), vocab::RDFS_LABEL, Object::literal(term)),
    ];
    ConceptTriples { iri, triples }
}

/// Triples for an already-normalized relation between two concept IRIs.
pub fn build_relation(
    ns: &Namespace,
    subject_iri: &str,
    object_iri: &str,
    predicate: &str,
    hierarchical: bool,
) -> RelationTriples {
    if hierarchical {
        return RelationTriples {
            relation: None,
            triples: vec![Triple::new(
                subject_iri,
                vocab::RDFS_SUBCLASS_OF,
                Object::iri(object_iri),
            )],
        };
    }

    let relation = ns.relation_iri(subject_iri, predicate, object_iri);
    let triples = vec![
        Triple::new(relation.as_str(), vocab::RDFS_LABEL, Object::literal(predicate)),
        Triple::new(relation.as_str(), vocab::RDFS_DOMAIN, Object::iri(subject_iri)),
        Triple::new(relation.as_str(), vocab::RDFS_RANGE, Object::iri(object_iri)),
        Triple::new(
            relation.as_str(),
            vocab::RDF_TYPE,
            Object::iri(vocab::OWL_OBJECT_PROPERTY),
        ),
    ];
    RelationTriples {
        relation: Some(relation),
        triples,
    }
}
