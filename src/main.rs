// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use tallybook::{cli, commands, config, store::Store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut settings = config::load()?;
    let mut store = Store::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            store.persist()?;
            config::save(&settings)?;
            println!("Ledger initialized at {}", Store::data_path()?.display());
        }
        Some(("tx", sub)) => commands::tx::handle(&mut store, &settings, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, &settings, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("sync", sub)) => commands::syncer::handle(&mut store, &settings, sub)?,
        Some(("config", sub)) => commands::settings::handle(&mut settings, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
