//! Scanning engine for `locount`.
//!
//! Streams files from a directory walk into a parallel read/classify stage
//! and folds the per-file results into a single [`ScanSummary`].

use rayon::prelude::*;
use std::path::Path;

pub mod classify;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod language;
pub mod summary;

pub use config::{ScanConfig, ScanConfigBuilder};
pub use error::{EngineError, Result};
pub use language::Language;
pub use summary::ScanSummary;

/// Run one scan rooted at `config.root`.
///
/// Files whose extension is not accepted by `config.extensions` are ignored.
/// Files that cannot be read or decoded are skipped without touching either
/// counter.
///
/// # Errors
///
/// Returns an error only when the root directory itself cannot be listed.
/// Individual file failures never propagate.
pub fn scan(config: &ScanConfig) -> Result<ScanSummary> {
    let (tx, rx) = crossbeam_channel::bounded(1024);
    let (err_tx, err_rx) = std::sync::mpsc::channel();

    let root = config.root.clone();
    std::thread::spawn(move || {
        if let Err(e) = filesystem::walk(&root, &tx) {
            let _ = err_tx.send(e);
        }
    });

    let extensions = config.extensions.as_deref();
    let summary = rx
        .into_iter()
        .par_bridge()
        .filter_map(|path| {
            let ext = file_extension(&path);
            accepts(extensions, &ext).then_some((path, ext))
        })
        .map(|(path, ext)| count_file(&path, &ext))
        .fold(ScanSummary::default, |mut acc, outcome| {
            match outcome {
                Ok(lines) => acc.record(lines),
                Err(e) => log::debug!("skipping file: {e}"),
            }
            acc
        })
        .reduce(ScanSummary::default, ScanSummary::merge);

    // A walk failure on the root arrives only after the channel drains.
    if let Ok(walk_err) = err_rx.try_recv() {
        return Err(walk_err);
    }

    Ok(summary)
}

fn file_extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}

fn accepts(allowed: Option<&[String]>, ext: &str) -> bool {
    allowed.is_none_or(|exts| exts.iter().any(|e| e == ext))
}

fn count_file(path: &Path, extension: &str) -> Result<usize> {
    let content = std::fs::read_to_string(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(classify::count_non_comment_lines(&content, extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn extension_is_derived_without_the_dot() {
        assert_eq!(file_extension(&PathBuf::from("a/b/app.tsx")), "tsx");
        assert_eq!(file_extension(&PathBuf::from("archive.tar.gz")), "gz");
        assert_eq!(file_extension(&PathBuf::from("Makefile")), "");
    }

    #[test]
    fn no_filter_accepts_everything_empty_filter_nothing() {
        assert!(accepts(None, "ts"));
        assert!(accepts(None, ""));
        assert!(!accepts(Some(&[]), "ts"));
        assert!(accepts(Some(&["ts".to_string()]), "ts"));
        assert!(!accepts(Some(&["ts".to_string()]), "py"));
    }
}
