// Copyright (c) 2025 Cashview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("io.github", "Cashview", "cashview"));

pub const API_KEY_ENV: &str = "CASHVIEW_API_KEY";

/// Tracked currency codes and stock tickers; read-only for the duration of
/// a run.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub user_currencies: Vec<String>,
    #[serde(default)]
    pub user_stocks: Vec<String>,
}

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.to_path_buf())
}

pub fn default_operations_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("operations.csv"))
}

pub fn default_settings_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("user_settings.json"))
}

pub fn resolve_operations_path(arg: Option<&String>) -> Result<PathBuf> {
    match arg {
        Some(p) => Ok(PathBuf::from(p)),
        None => default_operations_path(),
    }
}

pub fn resolve_settings_path(arg: Option<&String>) -> Result<PathBuf> {
    match arg {
        Some(p) => Ok(PathBuf::from(p)),
        None => default_settings_path(),
    }
}

pub fn load_user_settings(path: &Path) -> Result<UserSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read user settings {}", path.display()))?;
    let settings = serde_json::from_str(&raw)
        .with_context(|| format!("Parse user settings {}", path.display()))?;
    Ok(settings)
}

/// Resolved at invocation time and passed into the workflow call; nothing is
/// read from the environment at load time.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty())
}
