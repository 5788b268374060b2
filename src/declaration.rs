// src/declaration.rs

use std::fmt;

/// Which keyword introduced the declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Struct,
    Enum,
}

impl TypeKind {
    /// Keyword spelling, as rendered in the `Kind` column.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Struct => "struct",
            TypeKind::Enum => "enum",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `struct`/`enum` head found by the line scanner.
/// Read-only once created; `source_path` is relative to the scan root with `/` separators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclarationRecord {
    pub name: String,
    pub kind: TypeKind,
    pub source_path: String,
    pub line_number: usize,
}

impl DeclarationRecord {
    /// `path#Lline`, the anchor used by both the report and the duplicate listing.
    pub fn location(&self) -> String {
        format_location(&self.source_path, self.line_number)
    }
}

pub fn format_location(path: &str, line: usize) -> String {
    format!("{path}#L{line}")
}

/* ================================== Tests ================================== */
