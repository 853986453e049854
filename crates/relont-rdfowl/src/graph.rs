//! Triple container and serialization.
//!
//! `OntologyGraph` is a set: adding an exact repeat is a no-op. Iteration is
//! ordered, so serialized output is reproducible for the same input.
//!
//! Serialization goes through Sophia. The whole document is rendered in memory
//! first and written with a single call; a failed run never leaves a partial
//! file behind that looks complete.
//!
//! Concept IRIs keep term punctuation verbatim, so noisy input can produce
//! identifiers that are not valid IRIs (`https://example.org/1._[dog`). Those,
//! and any identifier containing `%`, are percent-encoded on the way out, `%`
//! itself included, so two distinct identifiers never serialize to the same
//! IRI. An identifier that is still invalid after encoding (e.g. one without a
//! scheme) fails the run.

use crate::triples::{Object, Triple};
use crate::{OntologyError, Result};
use sophia::api::graph::MutableGraph;
use sophia::api::serializer::TripleSerializer;
use sophia::inmem::graph::LightGraph;
use sophia::iri::Iri;
use sophia::turtle::serializer::nt::NtSerializer;
use sophia::turtle::serializer::turtle::{TurtleConfig, TurtleSerializer};
use sophia::xml::serializer::{RdfXmlConfig, RdfXmlSerializer};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RdfFormat {
    #[default]
    RdfXml,
    Turtle,
    NTriples,
}

impl RdfFormat {
    /// Format implied by a file extension, if any.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "xml" | "rdf" | "owl" => Some(Self::RdfXml),
            "ttl" | "turtle" => Some(Self::Turtle),
            "nt" | "ntriples" => Some(Self::NTriples),
            _ => None,
        }
    }
}

impl FromStr for RdfFormat {
    type Err = OntologyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rdfxml" | "rdf/xml" | "xml" | "pretty-xml" => Ok(Self::RdfXml),
            "turtle" | "ttl" => Ok(Self::Turtle),
            "ntriples" | "n-triples" | "nt" => Ok(Self::NTriples),
            other => Err(OntologyError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RdfXml => "rdfxml",
            Self::Turtle => "turtle",
            Self::NTriples => "ntriples",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OntologyGraph {
    triples: BTreeSet<Triple>,
}

impl OntologyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple; returns `false` if it was already present.
    pub fn add(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    pub fn extend<I: IntoIterator<Item = Triple>>(&mut self, triples: I) {
        self.triples.extend(triples);
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Number of distinct subjects carrying `rdf:type <class_iri>`.
    pub fn count_typed(&self, class_iri: &str) -> usize {
        self.triples
            .iter()
            .filter(|t| {
                t.predicate == crate::vocab::RDF_TYPE && t.object.as_iri() == Some(class_iri)
            })
            .count()
    }

    pub fn count_predicate(&self, predicate_iri: &str) -> usize {
        self.triples
            .iter()
            .filter(|t| t.predicate == predicate_iri)
            .count()
    }

    fn to_sophia(&self) -> Result<LightGraph> {
        let mut graph = LightGraph::new();
        for triple in &self.triples {
            let s = serializable_iri(&triple.subject)?;
            let p = serializable_iri(&triple.predicate)?;
            let inserted = match &triple.object {
                Object::Iri(iri) => graph.insert(s, p, serializable_iri(iri)?),
                Object::Literal(text) => graph.insert(s, p, text.as_str()),
            };
            inserted.map_err(|e| OntologyError::Serialize(e.to_string()))?;
        }
        Ok(graph)
    }

    pub fn to_bytes(&self, format: RdfFormat) -> Result<Vec<u8>> {
        let graph = self.to_sophia()?;
        let mut out: Vec<u8> = Vec::new();
        match format {
            RdfFormat::RdfXml => {
                let config = RdfXmlConfig::default().with_indentation(2);
                let mut serializer = RdfXmlSerializer::new_with_config(&mut out, config);
                serializer
                    .serialize_graph(&graph)
                    .map_err(|e| OntologyError::Serialize(e.to_string()))?;
            }
            RdfFormat::Turtle => {
                let config = TurtleConfig::default().with_pretty(true);
                let mut serializer = TurtleSerializer::new_with_config(&mut out, config);
                serializer
                    .serialize_graph(&graph)
                    .map_err(|e| OntologyError::Serialize(e.to_string()))?;
            }
            RdfFormat::NTriples => {
                let mut serializer = NtSerializer::new(&mut out);
                serializer
                    .serialize_graph(&graph)
                    .map_err(|e| OntologyError::Serialize(e.to_string()))?;
            }
        }
        Ok(out)
    }

    pub fn serialize_to_string(&self, format: RdfFormat) -> Result<String> {
        let bytes = self.to_bytes(format)?;
        String::from_utf8(bytes).map_err(|e| OntologyError::Serialize(e.to_string()))
    }

    /// Render the whole graph, then write it to `path` in one call.
    pub fn write(&self, path: &Path, format: RdfFormat) -> Result<()> {
        let bytes = self.to_bytes(format)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a OntologyGraph {
    type Item = &'a Triple;
    type IntoIter = std::collections::btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

/// Verbatim when the identifier is already a valid IRI without `%`; otherwise
/// fully escaped, `%` included. Escaped output always carries a `%` while
/// verbatim output never does, so distinct identifiers stay distinct.
fn serializable_iri(iri: &str) -> Result<Iri<String>> {
    if !iri.contains('%') {
        if let Ok(valid) = Iri::new(iri.to_string()) {
            return Ok(valid);
        }
    }
    Iri::new(percent_encode_iri(iri)).map_err(|_| OntologyError::InvalidIri(iri.to_string()))
}

fn percent_encode_iri(iri: &str) -> String {
    const KEEP: &str = "-._~!$&'()*+,;=:@/";
    let mut out = String::with_capacity(iri.len());
    for c in iri.chars() {
        if c.is_ascii_alphanumeric() || KEEP.contains(c) || !(c.is_ascii() || c.is_control()) {
            out.push(c);
            continue;
        }
        let mut buf = [0u8; 4];
        for b in c.encode_utf8(&mut buf).bytes() {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}
