// Copyright (c) 2025 Cashview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use log::info;
use std::path::Path;

use crate::analytics;
use crate::config;
use crate::models::SearchResponse;
use crate::ops;
use crate::utils::error_document;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let query = sub.get_one::<String>("query").unwrap();
    let doc = match config::resolve_operations_path(sub.get_one::<String>("file")) {
        Ok(path) => run(query, &path),
        Err(e) => error_document(&format!("{e:#}")),
    };
    println!("{doc}");
    Ok(())
}

/// Search never raises: missing file or malformed input comes back as a
/// structured `{"error"}` document.
pub fn run(query: &str, ops_path: &Path) -> String {
    match try_run(query, ops_path) {
        Ok(response) => match serde_json::to_string_pretty(&response) {
            Ok(s) => s,
            Err(e) => error_document(&e.to_string()),
        },
        Err(e) => error_document(&format!("{e:#}")),
    }
}

fn try_run(query: &str, ops_path: &Path) -> Result<SearchResponse> {
    let ops = ops::load_operations(ops_path)?;
    let response = analytics::search_operations(&ops, query)?;
    info!("Search '{}' matched {} operations", query, response.count);
    Ok(response)
}
