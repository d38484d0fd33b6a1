// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::codec::{apply_backup, backup_to_json, decode_transfer, encode_transfer, parse_backup};
use crate::models::AppState;
use crate::store::Store;
use anyhow::{Context, Result};
use std::fs;

pub fn handle(state: &mut AppState, store: &dyn Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("export", sub)) => {
            let out = sub.get_one::<String>("out").unwrap();
            let json = backup_to_json(state)?;
            fs::write(out, json).with_context(|| format!("Write {}", out))?;
            println!("Backup written to {}", out);
        }
        Some(("restore", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let json = fs::read_to_string(path).with_context(|| format!("Open {}", path))?;
            // Parse fully before anything is applied; a bad file leaves the
            // current state untouched.
            let backup = parse_backup(&json).with_context(|| format!("Restore from {}", path))?;
            apply_backup(state, backup);
            store.save(state)?;
            println!(
                "Restored {} snapshots, {} expenses from {}",
                state.records.len(),
                state.expenses.len(),
                path
            );
        }
        Some(("encode", _)) => {
            println!("{}", encode_transfer(state)?);
        }
        Some(("decode", sub)) => {
            let code = sub.get_one::<String>("code").unwrap();
            let backup = decode_transfer(code).context("Decode transfer code")?;
            apply_backup(state, backup);
            store.save(state)?;
            println!(
                "Applied transfer code: {} snapshots, {} expenses",
                state.records.len(),
                state.expenses.len()
            );
        }
        _ => {}
    }
    Ok(())
}
