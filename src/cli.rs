// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn with_json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON value per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("tallybook")
        .about("Small-business bookkeeping: calendar ledger, trend reports, smart cost distribution")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the local ledger and settings"))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect ledger entries")
                .subcommand(
                    Command::new("add")
                        .about("Record one income or expense entry")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("income or expense"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Category label"),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Amount in the smallest currency unit"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD; defaults to today in Asia/Taipei"),
                        )
                        .arg(Arg::new("note").long("note").help("Free-text note")),
                )
                .subcommand(with_json_flags(
                    Command::new("list")
                        .about("List entries, optionally restricted to a year/month")
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .value_parser(value_parser!(i32)),
                        )
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_parser(value_parser!(u32).range(1..=12)),
                        ),
                ))
                .subcommand(
                    Command::new("delete").about("Delete one entry by id").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Reporting dashboard over a selected period")
                .subcommand(with_json_flags(
                    Command::new("stats")
                        .about("Income/expense/net totals for a year or month")
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .required(true)
                                .value_parser(value_parser!(i32)),
                        )
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_parser(value_parser!(u32).range(1..=12)),
                        ),
                ))
                .subcommand(with_json_flags(
                    Command::new("trend")
                        .about("Fixed-length trend series for one year")
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .required(true)
                                .value_parser(value_parser!(i32)),
                        )
                        .arg(
                            Arg::new("granularity")
                                .long("granularity")
                                .default_value("month")
                                .help("month, week, or day"),
                        ),
                ))
                .subcommand(with_json_flags(
                    Command::new("breakdown")
                        .about("Category breakdown for one transaction type")
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .required(true)
                                .value_parser(value_parser!(i32)),
                        )
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_parser(value_parser!(u32).range(1..=12)),
                        )
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .default_value("expense")
                                .help("income or expense"),
                        ),
                )),
        )
        .subcommand(
            Command::new("export").about("Export the full ledger").subcommand(
                Command::new("transactions")
                    .about("Write every entry to a CSV or JSON file")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .required(true)
                            .help("csv or json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(
            Command::new("sync")
                .about("Best-effort sync with the sheet-backed endpoint")
                .subcommand(Command::new("pull").about("Fetch the remote ledger; keep local on failure"))
                .subcommand(Command::new("push").about("Re-push every local entry to the remote")),
        )
        .subcommand(
            Command::new("config")
                .about("Show or change settings")
                .subcommand(with_json_flags(
                    Command::new("show").about("Print the active settings"),
                ))
                .subcommand(
                    Command::new("set-remote")
                        .about("Set or clear the remote sync endpoint")
                        .arg(Arg::new("url").long("url").help("Endpoint URL"))
                        .arg(
                            Arg::new("clear")
                                .long("clear")
                                .action(ArgAction::SetTrue)
                                .conflicts_with("url")
                                .help("Disable remote sync"),
                        ),
                ),
        )
}
