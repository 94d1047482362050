// Copyright (c) Cashview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_REPORTS_DIR: &str = "reports";

/// Where a snapshot lands: an auto-named `report_<unix-ts>.json` inside a
/// directory, or an explicitly named file. The timestamp is supplied by the
/// caller, not read here.
#[derive(Debug, Clone)]
pub enum SnapshotTarget {
    Auto { dir: PathBuf },
    Named { path: PathBuf },
}

impl SnapshotTarget {
    pub fn auto(dir: impl Into<PathBuf>) -> Self {
        Self::Auto { dir: dir.into() }
    }

    pub fn named(path: impl Into<PathBuf>) -> Self {
        Self::Named { path: path.into() }
    }

    fn path_for(&self, stamp: i64) -> PathBuf {
        match self {
            Self::Auto { dir } => dir.join(format!("report_{stamp}.json")),
            Self::Named { path } => path.clone(),
        }
    }
}

/// Serialize rows to row-oriented JSON and write them out. Non-ASCII text
/// is kept literal, not escaped.
pub fn write_snapshot<T: Serialize>(
    rows: &[T],
    target: &SnapshotTarget,
    stamp: i64,
) -> Result<PathBuf> {
    let path = target.path_for(stamp);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Create report dir {}", parent.display()))?;
        }
    }
    let body = serde_json::to_string(rows)?;
    fs::write(&path, body).with_context(|| format!("Write report {}", path.display()))?;
    info!("Report saved to {}", path.display());
    Ok(path)
}

/// Run a row-producing operation and persist whatever it returns, handing
/// the rows back unchanged. Persistence-after-call as explicit composition
/// rather than a hidden side effect of the report itself.
pub fn with_snapshot<T, F>(target: &SnapshotTarget, stamp: i64, producer: F) -> Result<Vec<T>>
where
    T: Serialize,
    F: FnOnce() -> Result<Vec<T>>,
{
    let rows = producer()?;
    write_snapshot(&rows, target, stamp)?;
    Ok(rows)
}
