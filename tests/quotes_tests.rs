// Copyright (c) 2025 Cashview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashview::quotes::{rates_from_listing, ForexTicker, QuoteError, SymbolQuote};
use serde_json::json;

fn listing() -> Vec<ForexTicker> {
    vec![
        ForexTicker {
            ticker: "EUR/USD".to_string(),
            bid: 1.09,
        },
        ForexTicker {
            ticker: "USD/RUB".to_string(),
            bid: 92.5,
        },
        ForexTicker {
            ticker: "EUR/RUB".to_string(),
            bid: 100.8,
        },
    ]
}

#[test]
fn rates_match_ticker_suffix_in_settings_order() {
    let currencies = vec!["RUB".to_string(), "USD".to_string()];
    let rates = rates_from_listing(&listing(), &currencies);
    assert_eq!(rates.len(), 2);
    assert_eq!(rates[0].currency, "RUB");
    assert_eq!(rates[0].rate, 92.5);
    assert_eq!(rates[1].currency, "USD");
    assert_eq!(rates[1].rate, 1.09);
}

#[test]
fn unmatched_codes_are_skipped() {
    let currencies = vec!["CHF".to_string(), "USD".to_string()];
    let rates = rates_from_listing(&listing(), &currencies);
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0].currency, "USD");
}

#[test]
fn bid_accepts_quoted_strings_and_numbers() {
    let from_text: ForexTicker =
        serde_json::from_value(json!({"ticker": "USD/RUB", "bid": "92.5"})).unwrap();
    assert_eq!(from_text.bid, 92.5);

    let from_number: ForexTicker =
        serde_json::from_value(json!({"ticker": "USD/RUB", "bid": 92.5})).unwrap();
    assert_eq!(from_number.bid, 92.5);

    let quote: SymbolQuote =
        serde_json::from_value(json!({"symbol": "AAPL", "price": 150.0})).unwrap();
    assert_eq!(quote.symbol, "AAPL");
    assert_eq!(quote.price, 150.0);
}

#[test]
fn unauthorized_is_distinguished_from_other_statuses() {
    let unauthorized = QuoteError::Unauthorized.to_string();
    assert!(unauthorized.contains("Unauthorized"));
    assert!(unauthorized.contains("API key"));

    let server_error = QuoteError::Status { status: 503 }.to_string();
    assert!(server_error.contains("503"));
    assert!(!server_error.contains("Unauthorized"));
}
