// src/commands.rs

use anyhow::{
    Context,
    Result
};
use std::{
    fs,
    io::Write,
    path::Path
};
use tracing::{
    info,
    warn
};
use crate::{
    config::IndexConfig,
    scan,
    types_view,
    validate::{
        self,
        DuplicateDeclarationError
    }
};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Outcome of a successful run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub entries: usize,
    pub output_rel: String,
}

impl RunSummary {
    /// The one-line stdout summary.
    pub fn message(&self) -> String {
        format!("Wrote {} with {} entries.", self.output_rel, self.entries)
    }
}

/// Entry point for the binary: fixed repository root, no arguments.
pub fn run_cli() -> Result<RunSummary> {
    generate_type_index(&IndexConfig::for_repo())
}

/// Turn a run's outcome into process output and an exit status.
/// - success: summary line on `out`, status 0
/// - duplicates: the listing verbatim on `err_out`, status 1
/// - anything else: `error: <chain>` on `err_out`, status 1
pub fn report(result: Result<RunSummary>, out: &mut impl Write, err_out: &mut impl Write) -> u8 {
    match result {
        Ok(summary) => match writeln!(out, "{}", summary.message()) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                warn!("could not print summary: {e}");
                EXIT_FAILURE
            }
        },
        Err(err) => {
            let written = match err.downcast_ref::<DuplicateDeclarationError>() {
                Some(dup) => writeln!(err_out, "{dup}"),
                None => writeln!(err_out, "error: {err:#}"),
            };
            if let Err(e) = written {
                warn!("could not print diagnostics: {e}");
            }
            EXIT_FAILURE
        }
    }
}

/// Walk → scan → validate → render → write.
/// A duplicate surfaces as `validate::DuplicateDeclarationError` and nothing is written.
pub fn generate_type_index(config: &IndexConfig) -> Result<RunSummary> {
    let rendered = build_type_index(config)?;
    let out_path = config.output_path();
    write_atomic(&out_path, &rendered.document)
        .with_context(|| format!("writing {}", out_path.display()))?;
    info!(path = %out_path.display(), entries = rendered.entries, "type index written");
    Ok(RunSummary { entries: rendered.entries, output_rel: config.output_rel.clone() })
}

/// Rendered document plus the number of table rows, before anything touches disk.
#[derive(Clone, Debug)]
pub struct RenderedIndex {
    pub document: String,
    pub entries: usize,
}

pub fn build_type_index(config: &IndexConfig) -> Result<RenderedIndex> {
    let records = scan::scan_tree(config)
        .with_context(|| format!("scanning {}", config.root.display()))?;
    // No context here: the duplicate listing is printed as-is by main.
    let records = validate::validate_unique(records)?;
    let entries = records.len();
    let document = types_view::render_type_index(records, &config.regenerate_command);
    Ok(RenderedIndex { document, entries })
}

/// Write to a sibling temp file, then rename over the destination.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);
    fs::write(&tmp, contents)
        .with_context(|| format!("writing {}", tmp.display()))?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err).with_context(|| format!("renaming {} to {}", tmp.display(), path.display()));
    }
    Ok(())
}

/* ===================================== Tests ===================================== */

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn summary_line() {
        let s = RunSummary { entries: 2, output_rel: "docs/TYPE_INDEX.md".into() };
        assert_eq!(s.message(), "Wrote docs/TYPE_INDEX.md with 2 entries.");
    }

    fn write_src(root: &Path, rel: &str, lines: &[&str]) {
        let p = root.join(rel);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(p, lines.join("\n") + "\n").unwrap();
    }

    fn report_run(cfg: &IndexConfig) -> (u8, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = report(generate_type_index(cfg), &mut out, &mut err);
        (code, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn report_success_prints_summary() {
        let tmp = TempDir::new().unwrap();
        write_src(tmp.path(), "a.rs", &["", "", "pub struct Alpha { x: i32 }"]);
        write_src(tmp.path(), "b.rs", &["enum Beta { One, Two }"]);

        let (code, out, err) = report_run(&IndexConfig::new(tmp.path()));
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(out, "Wrote docs/TYPE_INDEX.md with 2 entries.\n");
        assert!(err.is_empty());
    }

    #[test]
    fn report_duplicates_exits_one_with_listing() {
        let tmp = TempDir::new().unwrap();
        write_src(tmp.path(), "one.rs", &["struct Gamma;"]);
        write_src(tmp.path(), "sub/two.rs", &["use x;", "pub struct Gamma {}"]);

        let cfg = IndexConfig::new(tmp.path());
        let (code, out, err) = report_run(&cfg);
        assert_eq!(code, EXIT_FAILURE);
        assert!(out.is_empty());
        assert_eq!(
            err,
            "Duplicate type definitions found:\n  Gamma: one.rs#L1\n  Gamma: sub/two.rs#L2\n"
        );
        assert!(!cfg.output_path().exists());
    }

    #[test]
    fn report_other_errors_are_prefixed() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("docs"), "").unwrap();

        let (code, out, err) = report_run(&IndexConfig::new(tmp.path()));
        assert_eq!(code, EXIT_FAILURE);
        assert!(out.is_empty());
        assert!(err.starts_with("error: writing "));
        assert!(err.ends_with('\n'));
    }

    #[test]
    fn atomic_write_creates_parent_and_overwrites() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("docs").join("OUT.md");
        write_atomic(&dest, "one\n").unwrap();
        write_atomic(&dest, "two\n").unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "two\n");
        assert!(!tmp.path().join("docs").join("OUT.md.tmp").exists());
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let tmp = TempDir::new().unwrap();
        // A regular file where the docs directory should be.
        fs::write(tmp.path().join("docs"), "").unwrap();
        let cfg = IndexConfig::new(tmp.path());
        let err = generate_type_index(&cfg).unwrap_err();
        assert!(format!("{err:#}").contains("docs"));
    }
}
