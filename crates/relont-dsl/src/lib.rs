//! Relation statement surface syntax for relont.
//!
//! This crate owns the *textual* side of the pipeline:
//!
//! - `line`: the `[subject]-(predicate)->[object]` statement grammar, and
//! - `relations`: the predicate tables (alternative spellings, inverse
//!   directions, hierarchical predicates) and the normalizer that applies them.
//!
//! Nothing here knows about RDF; identifiers are opaque strings supplied by the
//! caller (see `relont-rdfowl`).

pub mod line;
pub mod relations;

pub use line::{parse_line, RelationLine};
pub use relations::{NormalizedRelation, RelationTables, TablesError};
