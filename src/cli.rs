// Copyright (c) 2025 Cashview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

use crate::report::DEFAULT_REPORTS_DIR;

pub fn build_cli() -> Command {
    Command::new("cashview")
        .about("Spending dashboard, transaction search and category reports over bank CSV exports")
        .subcommand(
            Command::new("dashboard")
                .about("Month-to-date card totals, top transactions and market quotes as JSON")
                .arg(
                    Arg::new("date")
                        .long("date")
                        .value_name("YYYY-MM-DD HH:MM:SS")
                        .required(true)
                        .help("Anchor date-time for the month-to-date window"),
                )
                .arg(file_arg())
                .arg(
                    Arg::new("settings")
                        .long("settings")
                        .value_name("JSON")
                        .help("User settings file with tracked currencies and stocks"),
                )
                .arg(
                    Arg::new("api-key")
                        .long("api-key")
                        .value_name("KEY")
                        .help("Pricing API key (falls back to CASHVIEW_API_KEY)"),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Case-insensitive search over descriptions and categories as JSON")
                .arg(
                    Arg::new("query")
                        .long("query")
                        .value_name("TEXT")
                        .required(true)
                        .help("Substring to look for"),
                )
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("report")
                .about("Reports persisted as JSON snapshots")
                .subcommand(
                    Command::new("category")
                        .about("Spending for one category over the last three calendar months")
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_name("NAME")
                                .required(true)
                                .help("Exact category name"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Anchor date, defaults to today"),
                        )
                        .arg(file_arg())
                        .arg(
                            Arg::new("out")
                                .long("out")
                                .value_name("FILE")
                                .help("Explicit snapshot file instead of an auto-named one"),
                        )
                        .arg(
                            Arg::new("dir")
                                .long("dir")
                                .value_name("DIR")
                                .default_value(DEFAULT_REPORTS_DIR)
                                .help("Directory for auto-named snapshots"),
                        )
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .action(ArgAction::SetTrue)
                                .help("Print matched rows as pretty JSON"),
                        )
                        .arg(
                            Arg::new("jsonl")
                                .long("jsonl")
                                .action(ArgAction::SetTrue)
                                .help("Print matched rows as JSON lines"),
                        ),
                ),
        )
}

fn file_arg() -> Arg {
    Arg::new("file")
        .long("file")
        .value_name("CSV")
        .help("Operations CSV export (defaults to the app data dir)")
}
