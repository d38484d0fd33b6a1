// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::AppState;
use crate::registry::total_all;
use crate::utils::{date_key, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashSet;

pub fn handle(state: &AppState) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Ledger ordering and the gain equation
    let mut previous: Option<&crate::models::Snapshot> = None;
    for rec in &state.records {
        if let Some(prev) = previous {
            if date_key(&prev.date) > date_key(&rec.date) {
                rows.push(vec!["out_of_order".into(), format!("{} after {}", rec.date, prev.date)]);
            }
            let expected = rec.total_assets - prev.total_assets;
            if rec.gain != expected {
                rows.push(vec![
                    "gain_mismatch".into(),
                    format!("{}: gain {} expected {}", rec.id, rec.gain, expected),
                ]);
            }
        } else if rec.gain != Decimal::ZERO {
            rows.push(vec![
                "gain_mismatch".into(),
                format!("{}: first snapshot gain {} expected 0", rec.id, rec.gain),
            ]);
        }
        previous = Some(rec);
    }

    // 2) Totals drifted from the current registry (accounts added/removed
    //    since the write); 'snapshot recalc' fixes these deliberately.
    for rec in &state.records {
        let live = total_all(rec, &state.settings);
        if live != rec.total_assets {
            rows.push(vec![
                "total_drift".into(),
                format!("{}: recorded {} vs registry {}", rec.id, rec.total_assets, live),
            ]);
        }
    }

    // 3) Orphaned value keys and unparseable dates
    let known: HashSet<&str> = state.settings.accounts.iter().map(|a| a.id.as_str()).collect();
    for rec in &state.records {
        for key in rec.values.keys() {
            if !known.contains(key.as_str()) {
                rows.push(vec!["orphaned_value".into(), format!("{}: {}", rec.id, key)]);
            }
        }
        if date_key(&rec.date).is_none() {
            rows.push(vec!["unparsed_date".into(), format!("{}: '{}'", rec.id, rec.date)]);
        }
    }

    // 4) Expense categories outside the configured list (allowed, but worth
    //    surfacing)
    for e in &state.expenses {
        if !state.settings.expense_categories.contains(&e.category) {
            rows.push(vec![
                "unknown_category".into(),
                format!("{}: '{}'", e.id, e.category),
            ]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
