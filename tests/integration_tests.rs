//! Integration tests for the complete relont pipeline
//!
//! These tests run statement files end to end:
//! - line parsing → predicate normalization → triple building
//! - graph container → RDF/XML / Turtle / N-Triples on disk
//!
//! Run with: cargo test --test integration_tests

use relont_dsl::RelationTables;
use relont_rdfowl::{
    relation_identifier, term_to_uri, vocab, Converter, ConverterConfig, Object, OntologyError,
    RdfFormat, Triple,
};
use std::path::PathBuf;
use tempfile::tempdir;

fn demo_input() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/ontology.rela")
}

// ============================================================================
// Demo statement file
// ============================================================================

#[test]
fn test_demo_file_report() {
    let conversion = Converter::default()
        .convert_file(&demo_input())
        .expect("demo converts");

    let report = &conversion.report;
    assert_eq!(report.lines_read, 14);
    assert_eq!(report.lines_parsed, 10);
    assert_eq!(report.lines_skipped, 4);
    assert_eq!(report.hierarchical_edges, 2);
    assert_eq!(report.relation_nodes, 6);
    assert_eq!(report.triples, conversion.graph.len());
}

#[test]
fn test_demo_file_diagnostics() {
    let conversion = Converter::default()
        .convert_file(&demo_input())
        .expect("demo converts");

    let lines: Vec<String> = conversion
        .diagnostics
        .iter()
        .map(ToString::to_string)
        .collect();

    // List numbering in front of a statement is kept in the subject term.
    assert_eq!(lines[0], "1. [Heart Disease, isa, Cardiovascular Disease");
    assert!(lines.contains(&"Aspirin, treats, Headache".to_string()));
    assert!(lines.contains(&"Heart Valve, part_of, Heart".to_string()));
    assert!(lines.contains(&"Infection, isa, Disease".to_string()));
    assert!(lines.contains(&"Neuropathy, complicates, Diabetes".to_string()));
    assert_eq!(lines.len(), 10);
}

#[test]
fn test_inverse_and_direct_statements_share_relation_node() {
    let conversion = Converter::default()
        .convert_file(&demo_input())
        .expect("demo converts");
    let graph = &conversion.graph;

    let node = relation_identifier(&term_to_uri("Aspirin"), "treats", &term_to_uri("Headache"));
    let described: Vec<&Triple> = graph.iter().filter(|t| t.subject == node).collect();
    assert_eq!(described.len(), 4);
    assert!(graph.contains(&Triple::new(
        node.as_str(),
        vocab::RDFS_DOMAIN,
        Object::iri(term_to_uri("aspirin")),
    )));

    assert!(graph.contains(&Triple::new(
        term_to_uri("Infection"),
        vocab::RDFS_SUBCLASS_OF,
        Object::iri(term_to_uri("Disease")),
    )));
}

// ============================================================================
// Serialization on disk
// ============================================================================

#[test]
fn test_convert_file_to_rdfxml() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("ontology.xml");

    let conversion = Converter::default()
        .convert_file_to(&demo_input(), &out)
        .expect("convert + write");
    assert!(conversion.report.triples > 0);

    let xml = std::fs::read_to_string(&out).unwrap();
    assert!(xml.contains("rdf:RDF"));
    assert!(xml.contains("https://example.org/heart_valve"));
    assert!(xml.contains(">Heart Valve<"));
    assert!(xml.contains("http://www.w3.org/2002/07/owl#"));
}

#[test]
fn test_format_follows_extension_and_override() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.rela");
    std::fs::write(&input, "[Dog]-(isa)->[Animal]\n[Aspirin]-(treats)->[Headache]\n").unwrap();

    let nt = dir.path().join("out.nt");
    Converter::default().convert_file_to(&input, &nt).unwrap();
    let text = std::fs::read_to_string(&nt).unwrap();
    assert_eq!(text.lines().filter(|l| !l.trim().is_empty()).count(), 13);

    let forced = dir.path().join("out.data");
    let converter = Converter::new(ConverterConfig {
        format: Some(RdfFormat::Turtle),
        ..Default::default()
    });
    converter.convert_file_to(&input, &forced).unwrap();
    let ttl = std::fs::read_to_string(&forced).unwrap();
    assert!(ttl.contains("https://example.org/dog"));
    assert!(!ttl.contains("rdf:RDF"));
}

#[test]
fn test_missing_input_is_fatal_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("ontology.xml");
    let err = Converter::default()
        .convert_file_to(&dir.path().join("nope.rela"), &out)
        .unwrap_err();
    assert!(matches!(err, OntologyError::Io(_)));
    assert!(!out.exists());
}

// ============================================================================
// Custom tables
// ============================================================================

#[test]
fn test_custom_tables_from_json() {
    let dir = tempdir().unwrap();
    let tables_path = dir.path().join("tables.json");
    std::fs::write(
        &tables_path,
        r#"{
            "alternative_forms": {"cures": "treats"},
            "inverse_relations": {"is_cured_by": "cures"},
            "hierarchical": ["kind_of"]
        }"#,
    )
    .unwrap();

    let tables = RelationTables::from_json_path(&tables_path).expect("tables");
    let converter = Converter::new(ConverterConfig {
        tables,
        ..Default::default()
    });
    let conversion = converter.convert_lines([
        "[Aspirin]-(cures)->[Headache]",
        "[Headache]-(is_cured_by)->[Aspirin]",
        "[Dog]-(kind_of)->[Animal]",
        "[Dog]-(isa)->[Animal]",
    ]);

    let lines: Vec<String> = conversion
        .diagnostics
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        lines,
        vec![
            "Aspirin, treats, Headache",
            "Aspirin, cures, Headache",
            "Dog, isa, Animal",
            "Dog, isa, Animal",
        ]
    );
    // `isa` is not hierarchical under these tables.
    assert_eq!(conversion.report.hierarchical_edges, 1);
    assert_eq!(conversion.report.relation_nodes, 3);
}
