// src/validate.rs
//! Duplicate detection across the whole scan.
//!
//! Records are grouped by name in first-seen order; any group with more than one
//! occurrence fails the run with every location listed.

use indexmap::IndexMap;
use std::fmt;
use thiserror::Error;

use crate::declaration::{format_location, DeclarationRecord};

/// Header line of the duplicate listing on stderr.
pub const DUPLICATE_HEADER: &str = "Duplicate type definitions found:";

/// One place a name was declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occurrence {
    pub path: String,
    pub line: usize,
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_location(&self.path, self.line))
    }
}

/// A name declared more than once, with all of its occurrences in scan order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub name: String,
    pub occurrences: Vec<Occurrence>,
}

/// Fatal: at least one type name is declared more than once.
/// `Display` is the exact stderr listing, one `  name: path#Lline` line per occurrence.
#[derive(Error, Debug)]
#[error("{}", render_duplicates(.groups))]
pub struct DuplicateDeclarationError {
    pub groups: Vec<DuplicateGroup>,
}

fn render_duplicates(groups: &[DuplicateGroup]) -> String {
    let mut out = String::from(DUPLICATE_HEADER);
    for g in groups {
        for occ in &g.occurrences {
            out.push_str(&format!("\n  {}: {}", g.name, occ));
        }
    }
    out
}

/// name -> occurrences, insertion-ordered by first sighting.
#[derive(Debug, Default)]
pub struct DeclarationIndex {
    by_name: IndexMap<String, Vec<Occurrence>>,
}

impl DeclarationIndex {
    pub fn build(records: &[DeclarationRecord]) -> Self {
        let mut by_name: IndexMap<String, Vec<Occurrence>> = IndexMap::new();
        for r in records {
            by_name.entry(r.name.clone()).or_default().push(Occurrence {
                path: r.source_path.clone(),
                line: r.line_number,
            });
        }
        Self { by_name }
    }

    /// Names with two or more occurrences, in first-seen order.
    pub fn duplicates(&self) -> Vec<DuplicateGroup> {
        self.by_name
            .iter()
            .filter(|(_, occ)| occ.len() > 1)
            .map(|(name, occ)| DuplicateGroup { name: name.clone(), occurrences: occ.clone() })
            .collect()
    }
}

/// Pass-through when every name is unique; otherwise the full duplicate listing.
pub fn validate_unique(
    records: Vec<DeclarationRecord>,
) -> Result<Vec<DeclarationRecord>, DuplicateDeclarationError> {
    let groups = DeclarationIndex::build(&records).duplicates();
    if groups.is_empty() {
        Ok(records)
    } else {
        tracing::debug!(names = groups.len(), "duplicate declarations");
        Err(DuplicateDeclarationError { groups })
    }
}

/* ================================== Tests ================================== */
