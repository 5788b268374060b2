// src/util.rs

use std::{cmp::Ordering, path::Path};

/// Path relative to `root`, `/`-separated regardless of platform.
pub fn normalize_rel(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

/// Segment-wise comparison, so `a/b.rs` sorts before `a.rs` (directory `a` < file `a.rs`).
pub fn cmp_rel_paths(a: &str, b: &str) -> Ordering {
    a.split('/').cmp(b.split('/'))
}

/* --------------------------- Tests --------------------------- */
