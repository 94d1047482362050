// Copyright (c) 2025 Cashview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

const UA: &str = concat!(
    "cashview/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/cashview/cashview)"
);

/// Source format of the `Дата операции` column.
pub const OPERATION_DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";
pub const OPERATION_DATE_FORMAT: &str = "%d.%m.%Y";

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_anchor_datetime(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M:%S")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD HH:MM:SS", s))
}

/// Operation timestamps come as `dd.mm.YYYY HH:MM:SS`; a bare date is taken
/// as midnight.
pub fn parse_operation_datetime(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, OPERATION_DATETIME_FORMAT) {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(s, OPERATION_DATE_FORMAT)
        .map(|d| d.and_time(NaiveTime::MIN))
        .with_context(|| format!("Invalid operation date '{}'", s))
}

/// Amounts in bank exports may carry group spaces, a plus sign and a comma
/// decimal separator.
pub fn parse_decimal(s: &str) -> Result<Decimal> {
    let normalized: String = s
        .chars()
        .filter(|ch| !matches!(*ch, ' ' | '\u{a0}' | '\u{202f}' | '+'))
        .map(|ch| if ch == ',' { '.' } else { ch })
        .collect();
    normalized
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s.trim()))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Shift a date back by whole calendar months, clamping the day of month to
/// the length of the target month (2022-12-31 minus 3 -> 2022-09-30).
pub fn shift_months_back(date: NaiveDate, months: u32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 - months as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// Structured error document returned by the dashboard and search workflows
/// instead of aborting the run.
pub fn error_document(message: &str) -> String {
    let doc = serde_json::json!({ "error": message });
    serde_json::to_string_pretty(&doc).unwrap_or_default()
}
