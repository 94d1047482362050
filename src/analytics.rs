// Copyright (c) Cashview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Datelike, NaiveDateTime, NaiveTime};
use log::info;
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{CardStat, Operation, SearchMatch, SearchResponse, TopTransaction};
use crate::utils::{
    shift_months_back, OPERATION_DATETIME_FORMAT, OPERATION_DATE_FORMAT,
};

pub const DEFAULT_TOP_N: usize = 5;

/// Inclusive date window [start, end] relative to an anchor.
#[derive(Debug, Clone, Copy)]
pub struct DateWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateWindow {
    /// First calendar day of the anchor's month through the anchor itself.
    pub fn month_to_date(anchor: NaiveDateTime) -> Self {
        let first = anchor.date().with_day(1).unwrap_or(anchor.date());
        Self {
            start: first.and_time(NaiveTime::MIN),
            end: anchor,
        }
    }

    /// Whole calendar months back from the anchor, day clamped to the
    /// target month's length.
    pub fn trailing_months(anchor: NaiveDateTime, months: u32) -> Self {
        let start = shift_months_back(anchor.date(), months);
        Self {
            start: start.and_time(NaiveTime::MIN),
            end: anchor,
        }
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at <= self.end
    }
}

/// Display/grouping key: the last four characters of the card field.
pub fn card_suffix(card: &str) -> String {
    let chars: Vec<char> = card.chars().collect();
    let start = chars.len().saturating_sub(4);
    chars[start..].iter().collect()
}

fn cashback_for(total: Decimal) -> Decimal {
    // 1% of the signed total, never below zero
    (total * Decimal::new(1, 2))
        .round_dp(2)
        .max(Decimal::ZERO)
}

/// Per-card totals over the given rows; rows without a card are skipped.
/// `total_spent` keeps the raw signed sum, the same convention the
/// top-transactions view sorts by.
pub fn card_statistics(ops: &[Operation]) -> Vec<CardStat> {
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for op in ops {
        let Some(card) = &op.card else { continue };
        *totals
            .entry(card_suffix(card))
            .or_insert(Decimal::ZERO) += op.amount;
    }
    totals
        .into_iter()
        .map(|(last_digits, total)| CardStat {
            last_digits,
            total_spent: total,
            cashback: cashback_for(total),
        })
        .collect()
}

/// First `n` rows by amount descending; asking for more rows than exist
/// returns them all.
pub fn top_transactions(ops: &[Operation], n: usize) -> Vec<TopTransaction> {
    let mut sorted: Vec<&Operation> = ops.iter().collect();
    sorted.sort_by(|a, b| b.amount.cmp(&a.amount));
    sorted
        .into_iter()
        .take(n)
        .map(|op| TopTransaction {
            date: op.date.format(OPERATION_DATE_FORMAT).to_string(),
            amount: op.amount,
            category: op.category.clone(),
            description: op.description.clone(),
        })
        .collect()
}

/// Case-insensitive substring match against description and category.
pub fn search_operations(ops: &[Operation], query: &str) -> Result<SearchResponse> {
    let pattern = Regex::new(&format!("(?i){}", regex::escape(query)))?;
    let results: Vec<SearchMatch> = ops
        .iter()
        .filter(|op| pattern.is_match(&op.description) || pattern.is_match(&op.category))
        .map(|op| SearchMatch {
            date: op.date.format(OPERATION_DATETIME_FORMAT).to_string(),
            category: op.category.clone(),
            description: op.description.clone(),
            amount: op.amount,
        })
        .collect();
    Ok(SearchResponse {
        search_query: query.to_string(),
        count: results.len(),
        results,
    })
}

/// Rows with an exact category match inside the trailing three-month
/// window. A filter, not a reducer: matched rows come back unmodified.
pub fn spending_by_category(
    ops: &[Operation],
    category: &str,
    anchor: NaiveDateTime,
) -> Vec<Operation> {
    let window = DateWindow::trailing_months(anchor, 3);
    let matched: Vec<Operation> = ops
        .iter()
        .filter(|op| op.category == category && window.contains(op.date))
        .cloned()
        .collect();
    info!("{} rows found for category '{}'", matched.len(), category);
    matched
}
