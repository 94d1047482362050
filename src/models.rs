// Copyright (c) 2025 Cashview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::OPERATION_DATETIME_FORMAT;

/// One row of the bank's operations export. Loaded once per workflow call,
/// never written back.
#[derive(Debug, Clone)]
pub struct Operation {
    pub date: NaiveDateTime,
    pub card: Option<String>,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub cashback: Decimal,
}

impl Operation {
    /// Snapshot projection keeping the source column names.
    pub fn to_record(&self) -> OperationRecord {
        OperationRecord {
            date: self.date.format(OPERATION_DATETIME_FORMAT).to_string(),
            card: self.card.clone(),
            amount: self.amount,
            category: self.category.clone(),
            description: self.description.clone(),
            cashback: self.cashback,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OperationRecord {
    #[serde(rename = "Дата операции")]
    pub date: String,
    #[serde(rename = "Номер карты")]
    pub card: Option<String>,
    #[serde(rename = "Сумма операции")]
    pub amount: Decimal,
    #[serde(rename = "Категория")]
    pub category: String,
    #[serde(rename = "Описание")]
    pub description: String,
    #[serde(rename = "Кэшбэк")]
    pub cashback: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardStat {
    pub last_digits: String,
    pub total_spent: Decimal,
    pub cashback: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopTransaction {
    pub date: String,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrencyRate {
    pub currency: String,
    pub rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StockPrice {
    pub stock: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub greeting: String,
    pub cards: Vec<CardStat>,
    pub top_transactions: Vec<TopTransaction>,
    pub currency_rates: Vec<CurrencyRate>,
    pub stock_prices: Vec<StockPrice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchMatch {
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub search_query: String,
    pub count: usize,
    pub results: Vec<SearchMatch>,
}
