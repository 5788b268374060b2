// src/config.rs

use std::path::{Path, PathBuf};

/// Directory names that exclude a file when they appear anywhere in its relative path.
pub const IGNORE_DIRS: [&str; 3] = [".git", "target", "node_modules"];

/// Only files with this suffix are scanned.
pub const SOURCE_SUFFIX: &str = ".rs";

/// Report location, relative to the root.
pub const OUTPUT_REL_PATH: &str = "docs/TYPE_INDEX.md";

/// Printed in the report trailer.
pub const REGENERATE_COMMAND: &str = "cargo run --bin type-index";

/// Resolved settings for one run. There are no user-facing knobs;
/// `for_repo` is the production configuration and `new` re-roots it for tests.
#[derive(Clone, Debug)]
pub struct IndexConfig {
    pub root: PathBuf,
    pub output_rel: String,
    pub ignore_dirs: Vec<String>,
    pub source_suffix: String,
    pub regenerate_command: String,
}

impl IndexConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output_rel: OUTPUT_REL_PATH.to_string(),
            ignore_dirs: IGNORE_DIRS.iter().map(|s| (*s).to_string()).collect(),
            source_suffix: SOURCE_SUFFIX.to_string(),
            regenerate_command: REGENERATE_COMMAND.to_string(),
        }
    }

    /// Root fixed at the crate's own manifest directory, independent of the caller's cwd.
    pub fn for_repo() -> Self {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
        let root = manifest.canonicalize().unwrap_or_else(|_| manifest.to_path_buf());
        Self::new(root)
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_rel)
    }

    pub fn is_ignored_segment(&self, segment: &str) -> bool {
        self.ignore_dirs.iter().any(|d| d == segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let c = IndexConfig::new("/tmp/repo");
        assert_eq!(c.output_path(), PathBuf::from("/tmp/repo/docs/TYPE_INDEX.md"));
        assert!(c.is_ignored_segment("target"));
        assert!(c.is_ignored_segment(".git"));
        assert!(c.is_ignored_segment("node_modules"));
        assert!(!c.is_ignored_segment("targets"));
        assert_eq!(c.source_suffix, ".rs");
    }

    #[test]
    fn repo_root_is_manifest_dir() {
        let c = IndexConfig::for_repo();
        assert!(c.root.join("Cargo.toml").exists());
    }
}
