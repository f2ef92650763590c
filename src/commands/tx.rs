// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::config::Settings;
use crate::models::{Transaction, TxKind};
use crate::report::{filter_by_month, filter_by_year};
use crate::store::Store;
use crate::sync::{RemoteClient, SyncChange};
use crate::utils::{maybe_print_json, parse_amount, parse_date, pretty_table, today_taipei};

pub fn handle(store: &mut Store, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, settings, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("delete", sub)) => delete(store, settings, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let kind: TxKind = sub.get_one::<String>("kind").unwrap().parse()?;
    let category = sub.get_one::<String>("category").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today_taipei(),
    };
    let note = sub.get_one::<String>("note").cloned();

    let catalog = match kind {
        TxKind::Income => &settings.income_categories,
        TxKind::Expense => &settings.expense_categories,
    };
    if !catalog.iter().any(|c| c == category.trim()) {
        println!("Note: '{}' is not in the recognized category catalog", category);
    }

    let tx = store.add(date, kind, category, amount, note)?;
    store.persist()?;
    push_best_effort(settings, &SyncChange::Upsert { record: &tx });
    println!(
        "Recorded {} {} on {} ({}, id {})",
        kind, amount, date, tx.category, tx.id
    );
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut data: Vec<Transaction> = match sub.get_one::<i32>("year") {
        Some(&year) => {
            let year_data = filter_by_year(store.transactions(), year);
            match sub.get_one::<u32>("month") {
                Some(&month) => filter_by_month(&year_data, month),
                None => year_data,
            }
        }
        None => store.transactions().to_vec(),
    };
    data.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.date.to_string(),
                    t.kind.to_string(),
                    t.category.clone(),
                    t.amount.to_string(),
                    t.note.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Type", "Category", "Amount", "Note"], rows)
        );
    }
    Ok(())
}

fn delete(store: &mut Store, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    match store.delete(id) {
        Some(tx) => {
            store.persist()?;
            push_best_effort(settings, &SyncChange::Delete { id });
            println!("Deleted {} {} from {}", tx.kind, tx.amount, tx.date);
            Ok(())
        }
        None => anyhow::bail!("No entry with id {}", id),
    }
}

// Push failures never roll back the local mutation already applied.
fn push_best_effort(settings: &Settings, change: &SyncChange) {
    match RemoteClient::from_settings(settings) {
        Ok(Some(client)) => {
            if let Err(e) = client.push(change) {
                eprintln!("Remote push failed (local change kept): {}", e);
            }
        }
        Ok(None) => {}
        Err(e) => eprintln!("Remote client unavailable: {}", e),
    }
}
