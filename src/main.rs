// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use wealthtrack::store::{JsonStore, Store};
use wealthtrack::{cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = JsonStore::open_default()?;
    let mut state = store.load()?;

    match matches.subcommand() {
        Some(("account", sub)) => commands::accounts::handle(&mut state, &store, sub)?,
        Some(("snapshot", sub)) => commands::snapshots::handle(&mut state, &store, sub)?,
        Some(("expense", sub)) => commands::expenses::handle(&mut state, &store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&state, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&mut state, &store, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut state, &store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&state, sub)?,
        Some(("backup", sub)) => commands::backup::handle(&mut state, &store, sub)?,
        Some(("fx", sub)) => commands::fx::handle(sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&state)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
