// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::codec::{write_assets_csv, write_expenses_csv};
use crate::models::AppState;
use anyhow::{Context, Result};
use std::fs;

pub fn handle(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("assets", sub)) => {
            let out = sub.get_one::<String>("out").unwrap();
            let csv = write_assets_csv(&state.records, &state.settings)?;
            fs::write(out, csv).with_context(|| format!("Write {}", out))?;
            println!("Exported {} snapshots to {}", state.records.len(), out);
        }
        Some(("expenses", sub)) => {
            let out = sub.get_one::<String>("out").unwrap();
            let csv = write_expenses_csv(&state.expenses)?;
            fs::write(out, csv).with_context(|| format!("Write {}", out))?;
            println!("Exported {} expenses to {}", state.expenses.len(), out);
        }
        _ => {}
    }
    Ok(())
}
