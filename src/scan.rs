// src/scan.rs

use anyhow::{
    Context,
    Result
};
use ignore::WalkBuilder;
use std::{
    fs,
    path::{
        Path,
        PathBuf
    },
};
use tracing::{
    debug,
    warn
};
use crate::{
    config::IndexConfig,
    declaration::DeclarationRecord,
    helpers::{
        is_comment_line,
        match_declaration_line,
        split_lines
    },
    util
};

/// A candidate file found by the walk. Content is read on demand and dropped after scanning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub rel_path: String,
    pub abs_path: PathBuf,
}

/// Scan every candidate file under `config.root` and return all declaration records,
/// in file-then-line order.
pub fn scan_tree(config: &IndexConfig) -> Result<Vec<DeclarationRecord>> {
    let files = walk_sources(config)?;
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for file in &files {
        let Some(text) = read_source(&file.abs_path)? else {
            // Undecodable files carry nothing of interest; left visible at debug for review.
            debug!(path = %file.rel_path, "skipping file that is not valid UTF-8");
            skipped += 1;
            continue;
        };
        let before = records.len();
        records.extend(scan_declarations(&file.rel_path, &text));
        debug!(path = %file.rel_path, found = records.len() - before, "scanned");
    }

    tracing::info!(files = files.len(), skipped, declarations = records.len(), "scan complete");
    Ok(records)
}

/// List `*.rs` files under the root, pruning ignored directories, sorted by relative path.
pub fn walk_sources(config: &IndexConfig) -> Result<Vec<SourceFile>> {
    let root = config.root.as_path();
    if !root.is_dir() {
        anyhow::bail!("scan root {} is not a directory", root.display());
    }

    let ignore_dirs = config.ignore_dirs.clone();
    let walker = WalkBuilder::new(root)
        // Exact ignore set only: no .gitignore, hidden-file or parent rules.
        .standard_filters(false)
        .filter_entry(move |dent| {
            dent.depth() == 0
                || !ignore_dirs.iter().any(|d| dent.file_name() == d.as_str())
        })
        .build();

    let mut files = Vec::new();
    for dent in walker {
        let dent = match dent {
            Ok(d) => d,
            Err(err) => {
                warn!("walk error under {}: {}", root.display(), err);
                continue;
            }
        };
        let path = dent.path();
        if !path.is_file() {
            continue;
        }
        let rel_path = util::normalize_rel(root, path);
        if !rel_path.ends_with(config.source_suffix.as_str()) {
            continue;
        }
        files.push(SourceFile { rel_path, abs_path: path.to_path_buf() });
    }

    // Deterministic regardless of directory iteration order.
    files.sort_by(|a, b| util::cmp_rel_paths(&a.rel_path, &b.rel_path));
    Ok(files)
}

/// Whole-file read. `Ok(None)` when the bytes are not UTF-8; I/O failures propagate.
pub fn read_source(path: &Path) -> Result<Option<String>> {
    let bytes = fs::read(path)
        .with_context(|| format!("read {}", path.display()))?;
    Ok(String::from_utf8(bytes).ok())
}

/// Line-by-line skim of one file's text. Lazily yields one record per matching line.
pub fn scan_declarations<'a>(
    rel_path: &'a str,
    text: &'a str,
) -> impl Iterator<Item = DeclarationRecord> + 'a {
    split_lines(text).enumerate().filter_map(move |(idx, line)| {
        if is_comment_line(line) {
            return None;
        }
        let (kind, name) = match_declaration_line(line)?;
        Some(DeclarationRecord {
            name: name.to_string(),
            kind,
            source_path: rel_path.to_string(),
            line_number: idx + 1,
        })
    })
}

/* ===================================== Tests ===================================== */
