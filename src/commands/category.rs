// Copyright (c) 2025 Cashview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Local, NaiveTime, Utc};

use crate::analytics;
use crate::config;
use crate::models::Operation;
use crate::ops;
use crate::report::SnapshotTarget;
use crate::utils::{self, maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("category", sub)) => category(sub),
        _ => Ok(()),
    }
}

fn category(sub: &clap::ArgMatches) -> Result<()> {
    let category = sub.get_one::<String>("category").unwrap();
    let path = config::resolve_operations_path(sub.get_one::<String>("file"))?;
    let anchor = match sub.get_one::<String>("date") {
        Some(d) => utils::parse_date(d)?.and_time(NaiveTime::MIN),
        None => Local::now().naive_local(),
    };
    let target = match sub.get_one::<String>("out") {
        Some(out) => SnapshotTarget::named(out),
        None => SnapshotTarget::auto(sub.get_one::<String>("dir").unwrap()),
    };

    let ops = ops::load_operations(&path)?;
    let rows = crate::report::with_snapshot(&target, Utc::now().timestamp(), || {
        Ok(analytics::spending_by_category(&ops, category, anchor)
            .iter()
            .map(Operation::to_record)
            .collect())
    })?;

    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let data = rows
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.category.clone(),
                    r.description.clone(),
                    r.amount.to_string(),
                    r.cashback.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Category", "Description", "Amount", "Cashback"],
                data,
            )
        );
    }
    Ok(())
}
