// Copyright (c) 2025 Cashview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use rust_decimal::Decimal;
use std::path::Path;

use crate::models::Operation;
use crate::utils::{parse_decimal, parse_operation_datetime};

// Header matching is by literal column name; these strings are part of the
// export contract.
pub const DATE_COLUMN: &str = "Дата операции";
pub const CARD_COLUMN: &str = "Номер карты";
pub const AMOUNT_COLUMN: &str = "Сумма операции";
pub const CATEGORY_COLUMN: &str = "Категория";
pub const DESCRIPTION_COLUMN: &str = "Описание";
pub const CASHBACK_COLUMN: &str = "Кэшбэк";

struct HeaderIndex {
    date: usize,
    card: usize,
    amount: usize,
    category: usize,
    description: usize,
    cashback: usize,
}

fn column_index(headers: &StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        .with_context(|| format!("Column '{}' missing from operations header", name))
}

fn header_index(headers: &StringRecord) -> Result<HeaderIndex> {
    Ok(HeaderIndex {
        date: column_index(headers, DATE_COLUMN)?,
        card: column_index(headers, CARD_COLUMN)?,
        amount: column_index(headers, AMOUNT_COLUMN)?,
        category: column_index(headers, CATEGORY_COLUMN)?,
        description: column_index(headers, DESCRIPTION_COLUMN)?,
        cashback: column_index(headers, CASHBACK_COLUMN)?,
    })
}

/// Load the operations export. Rows with an unparseable date or amount are
/// dropped, missing cashback is zero, a missing card number becomes `None`.
pub fn load_operations(path: &Path) -> Result<Vec<Operation>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Open operations file {}", path.display()))?;
    let headers = rdr.headers()?.clone();
    let idx = header_index(&headers)?;

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for result in rdr.records() {
        let rec = result?;
        match parse_row(&rec, &idx) {
            Some(op) => rows.push(op),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!("{} malformed rows dropped from {}", dropped, path.display());
    }
    info!("{} operations loaded from {}", rows.len(), path.display());
    Ok(rows)
}

fn parse_row(rec: &StringRecord, idx: &HeaderIndex) -> Option<Operation> {
    let date = parse_operation_datetime(rec.get(idx.date)?).ok()?;
    let amount = parse_decimal(rec.get(idx.amount)?).ok()?;
    let card = rec
        .get(idx.card)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let category = rec.get(idx.category).unwrap_or("").trim().to_string();
    let description = rec.get(idx.description).unwrap_or("").trim().to_string();
    let cashback = rec
        .get(idx.cashback)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| parse_decimal(s).ok())
        .unwrap_or(Decimal::ZERO);

    Some(Operation {
        date,
        card,
        amount,
        category,
        description,
        cashback,
    })
}
