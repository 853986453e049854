//! Stable identifiers for concepts and relation instances.
//!
//! Concept IRIs are `base + lowercase(term)` with spaces replaced by
//! underscores. No other escaping is applied: punctuation passes through
//! verbatim, which decides which distinct terms share a node.
//!
//! Relation IRIs are content-addressed: the MD5 hex digest of
//! `"{subject_iri}-{predicate}-{object_iri}"`, minted under the same base.
//! Direction is resolved before this call, so `a part_of b` and `b part_of a`
//! get different nodes.

use md5::{Digest, Md5};

pub const DEFAULT_BASE_IRI: &str = "https://example.org/";

/// Base namespace under which concept and relation IRIs are minted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    base: String,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_IRI)
    }
}

impl Namespace {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn term_iri(&self, term: &str) -> String {
        format!("{}{}", self.base, normalize_term(term))
    }

    pub fn relation_iri(&self, subject_iri: &str, predicate: &str, object_iri: &str) -> String {
        self.term_iri(&md5_hex(&format!("{subject_iri}-{predicate}-{object_iri}")))
    }
}

/// The identity rule for concepts: lowercase, spaces to underscores.
pub fn normalize_term(term: &str) -> String {
    term.to_lowercase().replace(' ', "_")
}

fn md5_hex(text: &str) -> String {
    format!("{:x}", Md5::digest(text.as_bytes()))
}

/// Concept IRI under [`DEFAULT_BASE_IRI`].
pub fn term_to_uri(term: &str) -> String {
    Namespace::default().term_iri(term)
}

/// Relation-instance IRI under [`DEFAULT_BASE_IRI`].
pub fn relation_identifier(subject_iri: &str, predicate: &str, object_iri: &str) -> String {
    Namespace::default().relation_iri(subject_iri, predicate, object_iri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_and_space_variants_share_an_iri() {
        assert_eq!(term_to_uri("Heart Disease"), term_to_uri("heart disease"));
        assert_eq!(term_to_uri("Heart Disease"), "https://example.org/heart_disease");
    }

    #[test]
    fn punctuation_is_not_escaped() {
        assert_eq!(term_to_uri("Type-2 Diabetes"), "https://example.org/type-2_diabetes");
        assert_ne!(term_to_uri("covid-19"), term_to_uri("covid 19"));
    }

    #[test]
    fn md5_digest_matches_known_vector() {
        assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn relation_identifier_hashes_the_joined_triple() {
        let subject = term_to_uri("Aspirin");
        let object = term_to_uri("Headache");
        let expected = format!(
            "https://example.org/{}",
            md5_hex("https://example.org/aspirin-treats-https://example.org/headache")
        );
        assert_eq!(relation_identifier(&subject, "treats", &object), expected);
    }

    #[test]
    fn relation_identifier_depends_on_direction_and_predicate() {
        let a = term_to_uri("a");
        let b = term_to_uri("b");
        let ab = relation_identifier(&a, "part_of", &b);
        assert_eq!(ab, relation_identifier(&a, "part_of", &b));
        assert_ne!(ab, relation_identifier(&b, "part_of", &a));
        assert_ne!(ab, relation_identifier(&a, "contains", &b));
    }

    #[test]
    fn custom_base_is_used_for_both_kinds() {
        let ns = Namespace::new("urn:test:");
        assert_eq!(ns.term_iri("Dog"), "urn:test:dog");
        assert!(ns.relation_iri("urn:test:a", "r", "urn:test:b").starts_with("urn:test:"));
    }
}
