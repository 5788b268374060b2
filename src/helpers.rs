// src/helpers.rs
//! Light single-line recognizer for type declaration heads.
//! - Comment-opening lines are rejected outright
//! - `[pub[(..)] ]struct|enum Name` anchored at line start
//! - No regex/AST; anything spanning lines is out of reach by construction
//! - Lines break on the full Unicode line-break set, not just `\n`

use crate::declaration::TypeKind;

/* ================================ Line splitting ================================ */

/// Split `text` into lines on every Unicode line break: `\n`, `\r`, `\r\n` (one break),
/// `\x0b`, `\x0c`, `\x1c`..`\x1e`, `\u{85}`, `\u{2028}`, `\u{2029}`.
/// A final break does not produce a trailing empty line.
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

#[derive(Clone, Debug)]
pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let Some((i, c)) = self.rest.char_indices().find(|&(_, c)| is_line_break(c)) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };
        let line = &self.rest[..i];
        let mut end = i + c.len_utf8();
        if c == '\r' && self.rest[end..].starts_with('\n') {
            end += 1;
        }
        self.rest = &self.rest[end..];
        Some(line)
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/* ============================== Comment detection ============================== */

/// True when the line, ignoring leading whitespace, opens a `//` or `/*` comment.
/// A keyword later on such a line never counts.
pub fn is_comment_line(line: &str) -> bool {
    let l = line.trim_start();
    l.starts_with("//") || l.starts_with("/*")
}

/* ============================ Declaration heads ============================ */

/// Match `line` against the declaration head, returning the kind and the type name.
///
/// Accepted shapes (leading whitespace allowed):
/// - `struct Name`
/// - `pub enum Name`
/// - `pub(crate) struct Name`, `pub(in a::b) enum Name`
///
/// The name must start with an ASCII uppercase letter; trailing text
/// (generics, braces, comments) is ignored.
pub fn match_declaration_line(line: &str) -> Option<(TypeKind, &str)> {
    let head = line.trim_start();
    // A failed visibility prefix leaves `pub...` in front of the keyword, which then fails too.
    let head = strip_visibility(head).unwrap_or(head);
    let (kind, rest) = next_keyword(head)?;
    let name = next_ident(rest)?;
    Some((kind, name))
}

/// Strip `pub` / `pub(..)` plus the mandatory whitespace after it.
fn strip_visibility(s: &str) -> Option<&str> {
    let mut rest = s.strip_prefix("pub")?;
    if rest.starts_with('(') {
        let close = rest.find(')')?;
        rest = &rest[close + 1..];
    }
    skip_required_ws(rest)
}

/// `struct`/`enum` followed by at least one whitespace char.
fn next_keyword(s: &str) -> Option<(TypeKind, &str)> {
    for (kw, kind) in [("struct", TypeKind::Struct), ("enum", TypeKind::Enum)] {
        if let Some(rest) = s.strip_prefix(kw) {
            return skip_required_ws(rest).map(|r| (kind, r));
        }
    }
    None
}

/// `[A-Z][A-Za-z0-9_]*` at the start of `s`.
fn next_ident(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    if !bytes.first()?.is_ascii_uppercase() {
        return None;
    }
    let end = bytes
        .iter()
        .position(|&c| !(c.is_ascii_alphanumeric() || c == b'_'))
        .unwrap_or(bytes.len());
    Some(&s[..end])
}

fn skip_required_ws(s: &str) -> Option<&str> {
    let t = s.trim_start();
    if t.len() == s.len() { None } else { Some(t) }
}

/* ===================================== Tests ===================================== */
