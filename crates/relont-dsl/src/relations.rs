//! Predicate normalization.
//!
//! Relation text produced by extraction is inconsistent: the same relation
//! shows up under several spellings (`is_part_of`, `are_part_of`) and in both
//! directions (`has_part` vs `part_of`). Normalization maps every predicate to
//! one canonical name and one direction, and classifies it as hierarchical
//! (rendered as `rdfs:subClassOf`) or general (rendered as a reified
//! `owl:ObjectProperty` node).
//!
//! The three steps run in a fixed order, each feeding the next:
//!
//! 1. alternative-form rewrite (no swap),
//! 2. inverse-direction rewrite (swaps subject and object),
//! 3. hierarchy classification of the final name.
//!
//! A predicate that appears in more than one table is therefore only ever
//! looked up in step 2 under its step-1 output.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

const HIERARCHICAL: &[&str] = &["isa", "is_child_of", "is_a_sub_class_of", "has_sub_class"];

const INVERSE_RELATIONS: &[(&str, &str)] = &[
    ("has_child", "isa"),
    ("has_part", "part_of"),
    ("has_sub_class", "is_a_sub_class_of"),
    ("is_contained_in", "contains"),
    ("is_affected_by", "affects"),
    ("is_managed_by", "manages"),
    ("is_treated_by", "treats"),
    ("is_disrupted_by", "disrupts"),
    ("is_complicated_by", "complicates"),
    ("is_prevented_by", "prevents"),
    ("is_enhanced_by", "enhances"),
    ("are_enhanced_by", "enhances"),
    ("has_result", "result_of"),
];

const ALTERNATIVE_FORMS: &[(&str, &str)] = &[
    ("is_part_of", "part_of"),
    ("are_part_of", "part_of"),
    ("include", "contains"),
    ("is_result_of", "result_of"),
];

#[derive(Debug, thiserror::Error)]
pub enum TablesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid relation tables JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("inverse relation `{key}` maps to `{target}`, which is itself an inverse key")]
    ChainedInverse { key: String, target: String },
    #[error("relation tables contain an empty predicate name")]
    EmptyName,
}

/// Immutable predicate tables.
///
/// `Default` is the built-in table set. A replacement set can be loaded from
/// JSON; it is validated once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationTables {
    alternative_forms: BTreeMap<String, String>,
    inverse_relations: BTreeMap<String, String>,
    hierarchical: BTreeSet<String>,
}

/// Result of normalizing one `(subject, predicate, object)` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRelation<T> {
    pub subject: T,
    pub predicate: String,
    pub object: T,
    pub hierarchical: bool,
    /// `true` when an inverse rewrite swapped subject and object.
    pub swapped: bool,
}

impl Default for RelationTables {
    fn default() -> Self {
        let owned = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>()
        };
        Self {
            alternative_forms: owned(ALTERNATIVE_FORMS),
            inverse_relations: owned(INVERSE_RELATIONS),
            hierarchical: HIERARCHICAL.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RelationTables {
    pub fn new(
        alternative_forms: BTreeMap<String, String>,
        inverse_relations: BTreeMap<String, String>,
        hierarchical: BTreeSet<String>,
    ) -> Result<Self, TablesError> {
        let tables = Self {
            alternative_forms,
            inverse_relations,
            hierarchical,
        };
        tables.validate()?;
        Ok(tables)
    }

    pub fn from_json_str(text: &str) -> Result<Self, TablesError> {
        let tables: Self = serde_json::from_str(text)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn from_json_path(path: &Path) -> Result<Self, TablesError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, TablesError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), TablesError> {
        let names = self
            .alternative_forms
            .iter()
            .chain(self.inverse_relations.iter())
            .flat_map(|(k, v)| [k, v])
            .chain(self.hierarchical.iter());
        for name in names {
            if name.is_empty() {
                return Err(TablesError::EmptyName);
            }
        }

        for (key, target) in &self.inverse_relations {
            if self.inverse_relations.contains_key(target) {
                return Err(TablesError::ChainedInverse {
                    key: key.clone(),
                    target: target.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn alternative_form(&self, predicate: &str) -> Option<&str> {
        self.alternative_forms.get(predicate).map(String::as_str)
    }

    pub fn inverse_of(&self, predicate: &str) -> Option<&str> {
        self.inverse_relations.get(predicate).map(String::as_str)
    }

    pub fn is_hierarchical(&self, predicate: &str) -> bool {
        self.hierarchical.contains(predicate)
    }

    /// Canonicalize a predicate and order its endpoints.
    pub fn normalize<T>(&self, subject: T, predicate: &str, object: T) -> NormalizedRelation<T> {
        let predicate = self.alternative_form(predicate).unwrap_or(predicate);

        let (subject, predicate, object, swapped) = match self.inverse_of(predicate) {
            Some(inverse) => (object, inverse, subject, true),
            None => (subject, predicate, object, false),
        };

        NormalizedRelation {
            hierarchical: self.is_hierarchical(predicate),
            predicate: predicate.to_string(),
            subject,
            object,
            swapped,
        }
    }
}
