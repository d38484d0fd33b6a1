// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::codec::{parse_assets_csv, parse_expenses_csv};
use crate::ledger::recompute;
use crate::models::AppState;
use crate::store::Store;
use anyhow::{Context, Result};
use std::fs;

pub fn handle(state: &mut AppState, store: &dyn Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("assets", sub)) => import_assets(state, store, sub),
        Some(("expenses", sub)) => import_expenses(state, store, sub),
        _ => Ok(()),
    }
}

// Imports replace the ledger wholesale; nothing is touched until the whole
// file has parsed.
fn import_assets(state: &mut AppState, store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let text = fs::read_to_string(path).with_context(|| format!("Open CSV {}", path))?;
    let mut settings = state.settings.clone();
    let records = parse_assets_csv(&text, &mut settings)
        .with_context(|| format!("Parse asset CSV {}", path))?;
    state.settings = settings;
    state.records = records;
    recompute(&mut state.records);
    store.save(state)?;
    println!("Imported {} snapshots from {}", state.records.len(), path);
    Ok(())
}

fn import_expenses(state: &mut AppState, store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let text = fs::read_to_string(path).with_context(|| format!("Open CSV {}", path))?;
    let expenses =
        parse_expenses_csv(&text).with_context(|| format!("Parse expense CSV {}", path))?;
    state.expenses = expenses;
    store.save(state)?;
    println!("Imported {} expenses from {}", state.expenses.len(), path);
    Ok(())
}
