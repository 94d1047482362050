// Copyright (c) 2025 Cashview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashview::commands::dashboard::{build, get_greeting};
use chrono::NaiveDateTime;
use std::path::Path;
use tempfile::tempdir;

const OPERATIONS_CSV: &str = "\
Дата операции,Номер карты,Сумма операции,Категория,Описание,Кэшбэк
01.12.2021 12:00:00,*1234,1000,Пополнение,Описание1,10
15.12.2021 11:59:59,*5678,500,Оплата,Описание2,5
31.12.2021 12:00:00,*9012,-200,Снятие,Описание3,0
20.12.2021 09:00:00,,777,Оплата,Без карты,
25.11.2021 10:00:00,*1234,900,Оплата,Прошлый месяц,9
";

// no tracked symbols, so assembling the dashboard never goes to the network
const EMPTY_SETTINGS: &str = r#"{"user_currencies": [], "user_stocks": []}"#;

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

#[test]
fn greeting_buckets_cover_the_day() {
    assert_eq!(get_greeting(dt("2021-12-31 09:00:00")), "Доброе утро");
    assert_eq!(get_greeting(dt("2021-12-31 12:00:00")), "Добрый день");
    assert_eq!(get_greeting(dt("2021-12-31 15:00:00")), "Добрый день");
    assert_eq!(get_greeting(dt("2021-12-31 20:00:00")), "Добрый вечер");
    assert_eq!(get_greeting(dt("2021-12-31 23:00:00")), "Доброй ночи");
    assert_eq!(get_greeting(dt("2021-12-31 02:00:00")), "Доброй ночи");
    assert_eq!(get_greeting(dt("2021-12-31 05:59:59")), "Доброй ночи");
}

#[test]
fn dashboard_aggregates_month_to_date() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("operations.csv");
    std::fs::write(&csv_path, OPERATIONS_CSV).unwrap();
    let settings_path = dir.path().join("user_settings.json");
    std::fs::write(&settings_path, EMPTY_SETTINGS).unwrap();

    let doc = build("2021-12-31 12:00:00", &csv_path, &settings_path, "");
    let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();

    assert_eq!(parsed["greeting"], "Добрый день");

    // the card-less row and the November row are gone
    let cards = parsed["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0]["last_digits"], "1234");
    assert_eq!(cards[0]["total_spent"], "1000");
    assert_eq!(cards[0]["cashback"], "10.00");
    assert_eq!(cards[2]["last_digits"], "9012");
    assert_eq!(cards[2]["cashback"], "0");

    let top = parsed["top_transactions"].as_array().unwrap();
    assert_eq!(top.len(), 3);
    assert_eq!(top[0]["amount"], "1000");
    assert_eq!(top[0]["date"], "01.12.2021");
    assert_eq!(top[1]["amount"], "500");
    assert_eq!(top[2]["amount"], "-200");

    assert_eq!(parsed["currency_rates"].as_array().unwrap().len(), 0);
    assert_eq!(parsed["stock_prices"].as_array().unwrap().len(), 0);
}

#[test]
fn missing_operations_file_becomes_error_document() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("user_settings.json");
    std::fs::write(&settings_path, EMPTY_SETTINGS).unwrap();

    let doc = build(
        "2021-12-31 12:00:00",
        Path::new("/no/such/operations.csv"),
        &settings_path,
        "",
    );
    let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
    assert!(parsed["error"].as_str().unwrap().contains("operations"));
}

#[test]
fn bad_anchor_becomes_error_document() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("operations.csv");
    std::fs::write(&csv_path, OPERATIONS_CSV).unwrap();
    let settings_path = dir.path().join("user_settings.json");
    std::fs::write(&settings_path, EMPTY_SETTINGS).unwrap();

    let doc = build("31.12.2021", &csv_path, &settings_path, "");
    let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
    assert!(parsed["error"]
        .as_str()
        .unwrap()
        .contains("YYYY-MM-DD HH:MM:SS"));
}
