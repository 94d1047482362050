// Copyright (c) 2025 Cashview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use log::info;
use serde::{Deserialize, Deserializer};

use crate::models::{CurrencyRate, StockPrice};

const API_BASE: &str = "https://financialmodelingprep.com/api/v3";

#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("Unauthorized access. Check your API key.")]
    Unauthorized,
    #[error("Pricing API returned HTTP {status}")]
    Status { status: u16 },
    #[error("Pricing API transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
pub struct ForexTicker {
    pub ticker: String,
    #[serde(deserialize_with = "de_price")]
    pub bid: f64,
}

#[derive(Debug, Deserialize)]
struct ForexListing {
    #[serde(rename = "forexList", default)]
    forex_list: Vec<ForexTicker>,
}

#[derive(Debug, Deserialize)]
pub struct SymbolQuote {
    pub symbol: String,
    #[serde(deserialize_with = "de_price")]
    pub price: f64,
}

// The API serves prices both as numbers and as quoted strings.
fn de_price<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }
    match Raw::deserialize(de)? {
        Raw::Num(v) => Ok(v),
        Raw::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

fn check_status(
    resp: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, QuoteError> {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(QuoteError::Unauthorized);
    }
    if !status.is_success() {
        return Err(QuoteError::Status {
            status: status.as_u16(),
        });
    }
    Ok(resp)
}

/// Current bid per tracked currency, matched by the `/<code>` ticker suffix
/// in the forex listing. Output follows the configured order; codes the
/// listing does not carry are skipped.
pub fn fetch_currency_rates(
    client: &reqwest::blocking::Client,
    api_key: &str,
    currencies: &[String],
) -> Result<Vec<CurrencyRate>, QuoteError> {
    if currencies.is_empty() {
        return Ok(Vec::new());
    }
    let url = format!("{API_BASE}/forex?apikey={api_key}");
    let resp = check_status(client.get(url).send()?)?;
    let listing: ForexListing = resp.json()?;
    let rates = rates_from_listing(&listing.forex_list, currencies);
    info!(
        "{} of {} tracked currencies matched by the forex listing",
        rates.len(),
        currencies.len()
    );
    Ok(rates)
}

pub fn rates_from_listing(tickers: &[ForexTicker], currencies: &[String]) -> Vec<CurrencyRate> {
    currencies
        .iter()
        .filter_map(|code| {
            let suffix = format!("/{code}");
            tickers
                .iter()
                .find(|t| t.ticker.ends_with(&suffix))
                .map(|t| CurrencyRate {
                    currency: code.clone(),
                    rate: t.bid,
                })
        })
        .collect()
}

/// Current quotes for the tracked stock tickers.
pub fn fetch_stock_quotes(
    client: &reqwest::blocking::Client,
    api_key: &str,
    stocks: &[String],
) -> Result<Vec<StockPrice>, QuoteError> {
    if stocks.is_empty() {
        return Ok(Vec::new());
    }
    let symbols = stocks.join(",");
    let url = format!("{API_BASE}/quote/{symbols}?apikey={api_key}");
    let resp = check_status(client.get(url).send()?)?;
    let listed: Vec<SymbolQuote> = resp.json()?;
    Ok(listed
        .into_iter()
        .map(|q| StockPrice {
            stock: q.symbol,
            price: q.price,
        })
        .collect())
}
