//! Directory traversal.

use crate::error::{EngineError, Result};
use crossbeam_channel::Sender;
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Dependency caches that are never descended into.
const DEPENDENCY_DIRS: &[&str] = &["node_modules"];

/// Stream every regular file under `root` into `tx`, pre-order.
///
/// An entry whose name matches a dependency-cache name or starts with a
/// hidden marker is skipped entirely: directories are not descended into and
/// files are not yielded. The rule does not apply to `root` itself.
///
/// # Errors
///
/// Fails only when `root` cannot be listed. Anomalies on individual entries
/// during traversal are logged and skipped.
pub fn walk(root: &Path, tx: &Sender<PathBuf>) -> Result<()> {
    std::fs::read_dir(root).map_err(|e| EngineError::RootAccess {
        path: root.to_path_buf(),
        source: e,
    })?;

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded_name(entry.file_name()))
        .build();

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_file()) {
                    let _ = tx.send(entry.into_path());
                }
            }
            Err(err) => log::warn!("walk: {err}"),
        }
    }

    Ok(())
}

fn is_excluded_name(name: &OsStr) -> bool {
    let Some(name) = name.to_str() else {
        return false;
    };
    DEPENDENCY_DIRS.contains(&name) || name.starts_with('.')
}
