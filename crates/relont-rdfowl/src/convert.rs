//! Line-oriented conversion: relation statements → ontology graph.
//!
//! For each input line:
//!
//! 1. parse `[subject]-(predicate)->[object]` (non-matching lines are skipped),
//! 2. mint concept IRIs for both terms and normalize the predicate,
//! 3. emit both concept descriptions (always, even for hierarchical or
//!    repeated statements),
//! 4. emit the subclass edge or the reified relation node,
//! 5. record one diagnostic for the line.
//!
//! The run is sequential and owns its graph. Line order only affects the
//! order of diagnostics, never the resulting set of triples.

use crate::builder::{build_concept, build_relation};
use crate::graph::{OntologyGraph, RdfFormat};
use crate::iri::{Namespace, DEFAULT_BASE_IRI};
use crate::{vocab, Result};
use relont_dsl::{parse_line, RelationTables};
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Label used in diagnostics for every hierarchical predicate.
pub const HIERARCHICAL_LABEL: &str = "isa";

#[derive(Debug, Clone)]
pub struct ConverterConfig {
    pub base_iri: String,
    pub tables: RelationTables,
    /// Output format; `None` picks one from the output extension, else RDF/XML.
    pub format: Option<RdfFormat>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            base_iri: DEFAULT_BASE_IRI.to_string(),
            tables: RelationTables::default(),
            format: None,
        }
    }
}

/// One record per parsed line: `first, relation, second`.
///
/// Terms are the raw texts in the order the canonical relation reads, i.e.
/// already swapped when the predicate was an inverse form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineDiagnostic {
    pub line_number: usize,
    pub first: String,
    pub relation: String,
    pub second: String,
}

impl fmt::Display for LineDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.first, self.relation, self.second)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub lines_read: usize,
    pub lines_parsed: usize,
    pub lines_skipped: usize,
    pub hierarchical_edges: usize,
    pub relation_nodes: usize,
    pub triples: usize,
}

#[derive(Debug, Clone)]
pub struct Conversion {
    pub graph: OntologyGraph,
    pub diagnostics: Vec<LineDiagnostic>,
    pub report: ConversionReport,
}

/// Serializable view of a run: counters plus every per-line record.
#[derive(Debug, Serialize)]
pub struct ConversionSummary<'a> {
    pub report: &'a ConversionReport,
    pub diagnostics: &'a [LineDiagnostic],
}

impl Conversion {
    pub fn summary(&self) -> ConversionSummary<'_> {
        ConversionSummary {
            report: &self.report,
            diagnostics: &self.diagnostics,
        }
    }

    /// Serialize the graph to `path` (format from config, extension, or RDF/XML).
    pub fn write(&self, path: &Path, format: Option<RdfFormat>) -> Result<RdfFormat> {
        let format = format
            .or_else(|| RdfFormat::from_path(path))
            .unwrap_or_default();
        self.graph.write(path, format)?;
        tracing::info!(
            path = %path.display(),
            %format,
            triples = self.graph.len(),
            "wrote ontology"
        );
        Ok(format)
    }
}

#[derive(Debug, Clone)]
pub struct Converter {
    namespace: Namespace,
    tables: RelationTables,
    format: Option<RdfFormat>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            namespace: Namespace::new(config.base_iri),
            tables: config.tables,
            format: config.format,
        }
    }

    pub fn convert_lines<'a, I>(&self, lines: I) -> Conversion
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut graph = OntologyGraph::new();
        let mut diagnostics = Vec::new();
        let mut report = ConversionReport::default();

        for (index, raw) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            report.lines_read += 1;

            let Some(line) = parse_line(raw) else {
                report.lines_skipped += 1;
                tracing::debug!(line = line_number, "no relation statement; skipped");
                continue;
            };
            report.lines_parsed += 1;

            let subject = build_concept(&self.namespace, line.subject);
            let object = build_concept(&self.namespace, line.object);

            let normalized = self.tables.normalize(
                (subject.iri.as_str(), line.subject),
                line.predicate,
                (object.iri.as_str(), line.object),
            );
            let (subject_iri, first) = normalized.subject;
            let (object_iri, second) = normalized.object;

            let relation = build_relation(
                &self.namespace,
                subject_iri,
                object_iri,
                &normalized.predicate,
                normalized.hierarchical,
            );

            let diagnostic = LineDiagnostic {
                line_number,
                first: first.to_string(),
                relation: if normalized.hierarchical {
                    HIERARCHICAL_LABEL.to_string()
                } else {
                    normalized.predicate.clone()
                },
                second: second.to_string(),
            };
            tracing::info!(
                line = line_number,
                first = %diagnostic.first,
                relation = %diagnostic.relation,
                second = %diagnostic.second,
                swapped = normalized.swapped,
                "relation"
            );
            diagnostics.push(diagnostic);

            graph.extend(subject.triples);
            graph.extend(object.triples);
            graph.extend(relation.triples);
        }

        report.hierarchical_edges = graph.count_predicate(vocab::RDFS_SUBCLASS_OF);
        report.relation_nodes = graph.count_typed(vocab::OWL_OBJECT_PROPERTY);
        report.triples = graph.len();
        tracing::info!(
            lines_read = report.lines_read,
            lines_parsed = report.lines_parsed,
            lines_skipped = report.lines_skipped,
            hierarchical_edges = report.hierarchical_edges,
            relation_nodes = report.relation_nodes,
            triples = report.triples,
            "conversion finished"
        );

        Conversion {
            graph,
            diagnostics,
            report,
        }
    }

    /// Lines end at `\n`, `\r\n` or a lone `\r`.
    pub fn convert_str(&self, text: &str) -> Conversion {
        self.convert_lines(split_lines(text))
    }

    /// Read the whole input file, then convert it. A missing file is fatal.
    pub fn convert_file(&self, path: &Path) -> Result<Conversion> {
        let text = std::fs::read_to_string(path)?;
        tracing::info!(path = %path.display(), "read relations");
        Ok(self.convert_str(&text))
    }

    /// Convert `input` and serialize the result to `output`.
    pub fn convert_file_to(&self, input: &Path, output: &Path) -> Result<Conversion> {
        let conversion = self.convert_file(input)?;
        conversion.write(output, self.format)?;
        Ok(conversion)
    }
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(|c: char| c == '\n' || c == '\r') else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + skip..];
        Some(line)
    })
}

/// Convert lines with the default namespace and tables.
pub fn convert<'a, I>(lines: I) -> OntologyGraph
where
    I: IntoIterator<Item = &'a str>,
{
    Converter::default().convert_lines(lines).graph
}
