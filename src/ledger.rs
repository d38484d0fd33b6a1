// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{AppState, Snapshot};
use crate::registry::total_all;
use crate::utils::{date_key, new_id};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Caller-supplied snapshot fields. `total_assets` and `gain` are always
/// derived here, never taken from input.
#[derive(Debug, Clone, Default)]
pub struct SnapshotInput {
    pub id: Option<String>,
    pub date: String,
    pub values: BTreeMap<String, Decimal>,
    pub income: Decimal,
    pub mpf: Decimal,
    pub note: Option<String>,
}

/// Re-establishes the ledger invariants: ascending date order (stable over
/// equal dates, unparseable dates first) and gain = total minus previous
/// total, zero for the first record.
pub fn recompute(records: &mut [Snapshot]) {
    records.sort_by_key(|r| date_key(&r.date));
    let mut previous: Option<Decimal> = None;
    for rec in records.iter_mut() {
        rec.gain = match previous {
            Some(prev) => rec.total_assets - prev,
            None => Decimal::ZERO,
        };
        previous = Some(rec.total_assets);
    }
}

/// Inserts or replaces by id, preserving identity on edit. The record's total
/// is computed fresh from `values` against the registry as it stands at this
/// write; historical totals are not revisited (see `recalculate_history`).
pub fn upsert_snapshot(state: &mut AppState, input: SnapshotInput) -> String {
    let id = match input.id {
        Some(id) if state.records.iter().any(|r| r.id == id) => id,
        _ => new_id("rec"),
    };
    let mut snapshot = Snapshot {
        id: id.clone(),
        date: input.date,
        values: input.values,
        income: input.income,
        mpf: input.mpf,
        total_assets: Decimal::ZERO,
        gain: Decimal::ZERO,
        note: input.note.filter(|n| !n.trim().is_empty()),
    };
    snapshot.total_assets = total_all(&snapshot, &state.settings);

    match state.records.iter_mut().find(|r| r.id == id) {
        Some(existing) => *existing = snapshot,
        None => state.records.push(snapshot),
    }
    recompute(&mut state.records);
    id
}

pub fn delete_snapshot(state: &mut AppState, id: &str) -> bool {
    let before = state.records.len();
    state.records.retain(|r| r.id != id);
    if state.records.len() == before {
        return false;
    }
    recompute(&mut state.records);
    true
}

/// Deliberate, explicit rewrite of history: every snapshot's total is summed
/// against the *current* registry, then gains are rederived. This is the only
/// operation that touches totals recorded at write time.
pub fn recalculate_history(state: &mut AppState) {
    for rec in state.records.iter_mut() {
        rec.total_assets = total_all(rec, &state.settings);
    }
    recompute(&mut state.records);
}
