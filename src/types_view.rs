//! Type index view
//!
//! Renders the validated declarations as one markdown table, sorted by name.
//! - Byte-for-byte stable for identical input (no timestamps, fixed whitespace).
//! - Sort is byte-wise on the name, so `Zeta` precedes `alpha`.
//! - Every line ends in `\n`, including the last.
//!
//! Output: `docs/TYPE_INDEX.md`

use crate::declaration::DeclarationRecord;

/// Sort `records` by name and render the full document.
/// `regenerate_command` is quoted in the closing line.
pub fn render_type_index(mut records: Vec<DeclarationRecord>, regenerate_command: &str) -> String {
    records.sort_by(|a, b| a.name.cmp(&b.name));

    let mut lines = vec![
        "# Type Index".to_string(),
        String::new(),
        "This file lists every `struct` and `enum` defined in the repository.".to_string(),
        String::new(),
        "| Type | Kind | Location |".to_string(),
        "| --- | --- | --- |".to_string(),
    ];
    lines.extend(records.iter().map(render_row));
    lines.push(String::new());
    lines.push("Generated automatically to support DRY efforts.".to_string());
    lines.push(String::new());
    lines.push(format!("Run `{regenerate_command}` to regenerate."));
    // Trailing empty entry gives the final newline.
    lines.push(String::new());
    lines.join("\n")
}

fn render_row(r: &DeclarationRecord) -> String {
    format!("| {} | {} | `{}` |", r.name, r.kind, r.location())
}

/* ---------------- Tests ---------------- */
