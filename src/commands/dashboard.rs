// Copyright (c) 2025 Cashview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{NaiveDateTime, Timelike};
use std::path::Path;

use crate::analytics::{self, DateWindow, DEFAULT_TOP_N};
use crate::config;
use crate::models::{Dashboard, Operation};
use crate::ops;
use crate::quotes;
use crate::utils::{self, error_document};

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let date = sub.get_one::<String>("date").unwrap();
    let api_key = sub
        .get_one::<String>("api-key")
        .cloned()
        .or_else(config::api_key_from_env)
        .unwrap_or_default();

    let ops_path = config::resolve_operations_path(sub.get_one::<String>("file"));
    let settings_path = config::resolve_settings_path(sub.get_one::<String>("settings"));
    let doc = match (ops_path, settings_path) {
        (Ok(ops), Ok(settings)) => build(date, &ops, &settings, &api_key),
        (Err(e), _) | (_, Err(e)) => error_document(&format!("{e:#}")),
    };
    println!("{doc}");
    Ok(())
}

/// Assemble the dashboard document; any internal failure degrades to a
/// structured `{"error"}` document rather than aborting the run.
pub fn build(anchor: &str, ops_path: &Path, settings_path: &Path, api_key: &str) -> String {
    match try_build(anchor, ops_path, settings_path, api_key) {
        Ok(dashboard) => match serde_json::to_string_pretty(&dashboard) {
            Ok(s) => s,
            Err(e) => error_document(&e.to_string()),
        },
        Err(e) => error_document(&format!("{e:#}")),
    }
}

fn try_build(
    anchor: &str,
    ops_path: &Path,
    settings_path: &Path,
    api_key: &str,
) -> Result<Dashboard> {
    let anchor = utils::parse_anchor_datetime(anchor)?;
    let settings = config::load_user_settings(settings_path)?;
    let ops = ops::load_operations(ops_path)?;

    let window = DateWindow::month_to_date(anchor);
    // rows without a card number carry no suffix to group by
    let in_window: Vec<Operation> = ops
        .into_iter()
        .filter(|op| op.card.is_some() && window.contains(op.date))
        .collect();

    let cards = analytics::card_statistics(&in_window);
    let top_transactions = analytics::top_transactions(&in_window, DEFAULT_TOP_N);

    let client = utils::http_client()?;
    let currency_rates = quotes::fetch_currency_rates(&client, api_key, &settings.user_currencies)?;
    let stock_prices = quotes::fetch_stock_quotes(&client, api_key, &settings.user_stocks)?;

    Ok(Dashboard {
        greeting: get_greeting(anchor).to_string(),
        cards,
        top_transactions,
        currency_rates,
        stock_prices,
    })
}

pub fn get_greeting(at: NaiveDateTime) -> &'static str {
    match at.hour() {
        6..=11 => "Доброе утро",
        12..=17 => "Добрый день",
        18..=22 => "Добрый вечер",
        _ => "Доброй ночи",
    }
}
