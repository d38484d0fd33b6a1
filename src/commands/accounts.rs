// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{AccountType, AppState};
use crate::registry;
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{anyhow, Result};

pub fn handle(state: &mut AppState, store: &dyn Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let raw_type = sub.get_one::<String>("type").unwrap();
            let r#type = AccountType::parse(raw_type)
                .ok_or_else(|| anyhow!("Unknown account type '{}' (use cash|investment|other)", raw_type))?;
            let account = registry::add_account(&mut state.settings, name, r#type)
                .ok_or_else(|| anyhow!("Account name must not be empty"))?;
            println!("Added account '{}' ({}, id {})", account.name, account.r#type, account.id);
            store.save(state)?;
        }
        Some(("rename", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let name = sub.get_one::<String>("name").unwrap();
            if !registry::rename_account(&mut state.settings, id, name) {
                return Err(anyhow!("No account with id '{}' (or empty name)", id));
            }
            println!("Renamed account {} to '{}'", id, name.trim());
            store.save(state)?;
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            if !registry::remove_account(&mut state.settings, id) {
                return Err(anyhow!("No account with id '{}'", id));
            }
            println!("Removed account {} (historical values are retained)", id);
            store.save(state)?;
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            if !maybe_print_json(json_flag, jsonl_flag, &state.settings.accounts)? {
                let rows = state
                    .settings
                    .accounts
                    .iter()
                    .map(|a| vec![a.id.clone(), a.name.clone(), a.r#type.to_string()])
                    .collect();
                println!("{}", pretty_table(&["Id", "Name", "Type"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}
