//! Line grammar: `[subject]-(predicate)->[object]`.
//!
//! Input lines come from machine-generated text and are noisy. A line either
//! matches the statement pattern somewhere inside it, or it carries no signal
//! and is skipped (`None`), never an error.
//!
//! Matching is greedy on all three captures: the subject runs up to the *last*
//! `]-(` that still leaves a valid tail, and brackets inside terms are kept
//! verbatim. The opening bracket of the subject is optional, so any noise in
//! front of the statement (list markers, numbering) ends up in the subject.

use regex::Regex;
use std::sync::OnceLock;

const LINE_PATTERN: &str = r"\[?(.*)\]-\((.*)\)->\[(.*)\]";

fn line_regex() -> &'static Regex {
    static LINE_REGEX: OnceLock<Regex> = OnceLock::new();
    LINE_REGEX.get_or_init(|| match Regex::new(LINE_PATTERN) {
        Ok(re) => re,
        Err(err) => unreachable!("statement pattern is a valid literal regex: {err}"),
    })
}

/// One parsed statement, with term and predicate text exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationLine<'a> {
    pub subject: &'a str,
    pub predicate: &'a str,
    pub object: &'a str,
}

/// Extract `(subject, predicate, object)` from one raw input line.
pub fn parse_line(raw: &str) -> Option<RelationLine<'_>> {
    let caps = line_regex().captures(raw)?;
    Some(RelationLine {
        subject: caps.get(1)?.as_str(),
        predicate: caps.get(2)?.as_str(),
        object: caps.get(3)?.as_str(),
    })
}
