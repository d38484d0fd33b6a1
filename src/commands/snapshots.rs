// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::{delete_snapshot, recalculate_history, upsert_snapshot, SnapshotInput};
use crate::models::AppState;
use crate::registry::find_account;
use crate::store::Store;
use crate::utils::{format_amount, format_date, maybe_print_json, parse_amount, pretty_table};
use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

pub fn handle(state: &mut AppState, store: &dyn Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let input = read_input(state, sub, None)?;
            let id = upsert_snapshot(state, input);
            let rec = state.records.iter().find(|r| r.id == id).unwrap();
            println!(
                "Recorded snapshot {} on {} (total {})",
                id,
                rec.date,
                format_amount(rec.total_assets)
            );
            store.save(state)?;
        }
        Some(("edit", sub)) => {
            let id = sub.get_one::<String>("id").unwrap().clone();
            if !state.records.iter().any(|r| r.id == id) {
                return Err(anyhow!("No snapshot with id '{}'", id));
            }
            let input = read_input(state, sub, Some(id.clone()))?;
            upsert_snapshot(state, input);
            println!("Updated snapshot {}", id);
            store.save(state)?;
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            if !sub.get_flag("yes") {
                return Err(anyhow!(
                    "Deleting a snapshot is permanent; re-run with --yes to confirm"
                ));
            }
            if !delete_snapshot(state, id) {
                return Err(anyhow!("No snapshot with id '{}'", id));
            }
            println!("Deleted snapshot {}", id);
            store.save(state)?;
        }
        Some(("recalc", _)) => {
            recalculate_history(state);
            println!(
                "Recalculated {} snapshot totals against the current registry",
                state.records.len()
            );
            store.save(state)?;
        }
        Some(("list", sub)) => list(state, sub)?,
        _ => {}
    }
    Ok(())
}

fn read_input(
    state: &AppState,
    sub: &clap::ArgMatches,
    id: Option<String>,
) -> Result<SnapshotInput> {
    let mut values: BTreeMap<String, Decimal> = BTreeMap::new();
    if let Some(pairs) = sub.get_many::<String>("value") {
        for pair in pairs {
            let (key, raw) = pair
                .split_once('=')
                .ok_or_else(|| anyhow!("Expected ACCOUNT=AMOUNT, got '{}'", pair))?;
            let account = find_account(&state.settings, key)
                .ok_or_else(|| anyhow!("No account named '{}'", key))?;
            values.insert(account.id.clone(), parse_amount(raw));
        }
    }
    Ok(SnapshotInput {
        id,
        date: sub.get_one::<String>("date").unwrap().trim().to_string(),
        values,
        income: sub
            .get_one::<String>("income")
            .map(|s| parse_amount(s))
            .unwrap_or(Decimal::ZERO),
        mpf: sub
            .get_one::<String>("mpf")
            .map(|s| parse_amount(s))
            .unwrap_or(Decimal::ZERO),
        note: sub.get_one::<String>("note").cloned(),
    })
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let limit = sub
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(state.records.len());
    let shown: Vec<_> = state
        .records
        .iter()
        .rev()
        .take(limit)
        .rev()
        .cloned()
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &shown)? {
        let rows = shown
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    format_date(&r.date),
                    format_amount(r.total_assets),
                    format_amount(r.gain),
                    format_amount(r.income),
                    format_amount(r.mpf),
                    r.note.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Total Assets", "Gain", "Income", "MPF", "Note"],
                rows,
            )
        );
    }
    Ok(())
}
