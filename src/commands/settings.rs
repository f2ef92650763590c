// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::config;
use crate::config::Settings;
use crate::utils::maybe_print_json;

pub fn handle(settings: &mut Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(settings, sub),
        Some(("set-remote", sub)) => set_remote(settings, sub),
        _ => Ok(()),
    }
}

fn show(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, settings)? {
        println!("{}", serde_json::to_string_pretty(settings)?);
        println!("Settings file: {}", config::config_path()?.display());
    }
    Ok(())
}

fn set_remote(settings: &mut Settings, sub: &clap::ArgMatches) -> Result<()> {
    if sub.get_flag("clear") {
        settings.remote_url = None;
        config::save(settings)?;
        println!("Remote sync disabled");
        return Ok(());
    }
    match sub.get_one::<String>("url") {
        Some(url) => {
            settings.remote_url = Some(url.clone());
            config::save(settings)?;
            println!("Remote endpoint set to {}", url);
        }
        None => anyhow::bail!("Pass --url URL or --clear"),
    }
    Ok(())
}
