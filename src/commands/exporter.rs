// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::export;
use crate::store::Store;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

// Exports always cover the complete store, independent of any
// report-period selection.
fn export_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let text = match fmt.as_str() {
        "csv" => export::to_csv(store.transactions())?,
        "json" => export::to_json(store.transactions())?,
        other => anyhow::bail!("Unknown format: {} (use csv|json)", other),
    };
    std::fs::write(out, text).with_context(|| format!("Write export to {}", out))?;
    println!("Exported {} transactions to {}", store.transactions().len(), out);
    Ok(())
}
