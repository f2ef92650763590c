// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::config::Settings;
use crate::store::Store;
use crate::sync::{RemoteClient, SyncChange};

pub fn handle(store: &mut Store, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("pull", _)) => pull(store, settings),
        Some(("push", _)) => push(store, settings),
        _ => Ok(()),
    }
}

fn require_client(settings: &Settings) -> Result<RemoteClient> {
    RemoteClient::from_settings(settings)?
        .ok_or_else(|| anyhow::anyhow!("No remote endpoint configured (see 'config set-remote')"))
}

// Pull replaces the local collection only on a successful fetch; any
// failure leaves the last-known-good snapshot in place.
fn pull(store: &mut Store, settings: &Settings) -> Result<()> {
    let client = require_client(settings)?;
    match client.fetch() {
        Ok(remote) => {
            let n = remote.len();
            store.replace_all(remote);
            store.persist()?;
            println!("Pulled {} transactions from the remote", n);
        }
        Err(e) => {
            eprintln!("Remote fetch failed, keeping local snapshot: {}", e);
        }
    }
    Ok(())
}

fn push(store: &Store, settings: &Settings) -> Result<()> {
    let client = require_client(settings)?;
    let mut failed = 0usize;
    for tx in store.transactions() {
        if client.push(&SyncChange::Upsert { record: tx }).is_err() {
            failed += 1;
        }
    }
    let total = store.transactions().len();
    if failed > 0 {
        eprintln!("Pushed {}/{} transactions ({} failed)", total - failed, total, failed);
    } else {
        println!("Pushed {} transactions to the remote", total);
    }
    Ok(())
}
