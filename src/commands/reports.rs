// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::config::Settings;
use crate::models::{Granularity, TxKind};
use crate::report::{aggregate, breakdown_by_category, build_trend, filter_by_month, filter_by_year};
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &Store, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("stats", sub)) => stats(store, sub)?,
        Some(("trend", sub)) => trend(store, settings, sub)?,
        Some(("breakdown", sub)) => breakdown(store, settings, sub)?,
        _ => {}
    }
    Ok(())
}

fn period_subset(store: &Store, sub: &clap::ArgMatches) -> Vec<crate::models::Transaction> {
    let year = *sub.get_one::<i32>("year").unwrap();
    let year_data = filter_by_year(store.transactions(), year);
    match sub.get_one::<u32>("month") {
        Some(&month) => filter_by_month(&year_data, month),
        None => year_data,
    }
}

fn stats(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let stats = aggregate(&period_subset(store, sub));
    if !maybe_print_json(json_flag, jsonl_flag, &stats)? {
        let rows = vec![vec![
            stats.income.to_string(),
            stats.expense.to_string(),
            stats.net.to_string(),
        ]];
        println!("{}", pretty_table(&["Income", "Expense", "Net"], rows));
    }
    Ok(())
}

fn trend(store: &Store, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let year = *sub.get_one::<i32>("year").unwrap();
    let granularity: Granularity = sub.get_one::<String>("granularity").unwrap().parse()?;
    let year_data = filter_by_year(store.transactions(), year);
    let points = build_trend(&year_data, granularity, year, &settings.report);
    if !maybe_print_json(json_flag, jsonl_flag, &points)? {
        let rows: Vec<Vec<String>> = points
            .iter()
            .map(|p| {
                vec![
                    p.label.clone(),
                    p.income.to_string(),
                    p.expense.to_string(),
                    p.net.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Period", "Income", "Expense", "Net"], rows)
        );
    }
    Ok(())
}

fn breakdown(store: &Store, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let kind: TxKind = sub.get_one::<String>("kind").unwrap().parse()?;
    let subset = period_subset(store, sub);
    let items = breakdown_by_category(&subset, kind, &settings.report);
    if !maybe_print_json(json_flag, jsonl_flag, &items)? {
        let rows: Vec<Vec<String>> = items
            .iter()
            .map(|b| vec![b.category.clone(), b.value.to_string()])
            .collect();
        println!("{}", pretty_table(&["Category", "Total"], rows));
    }
    Ok(())
}
