// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use wealthtrack::analytics::{
    allocation, average_income, gain_since_last, latest, metric_series, net_savings,
};
use wealthtrack::expenses::{upsert_expense, ExpenseInput};
use wealthtrack::ledger::{upsert_snapshot, SnapshotInput};
use wealthtrack::models::{AccountType, AppState};
use wealthtrack::registry::add_account;

fn dec(v: i64) -> Decimal {
    Decimal::from(v)
}

fn snap(date: &str, account: &str, amount: i64, income: i64) -> SnapshotInput {
    let mut values = BTreeMap::new();
    values.insert(account.to_string(), dec(amount));
    SnapshotInput {
        date: date.to_string(),
        values,
        income: dec(income),
        ..Default::default()
    }
}

#[test]
fn empty_ledger_yields_the_sentinel() {
    let records = Vec::new();
    let last = latest(&records);
    assert_eq!(last.date, "N/A");
    assert_eq!(last.total_assets, Decimal::ZERO);
    assert_eq!(gain_since_last(&records), (Decimal::ZERO, Decimal::ZERO));
}

#[test]
fn single_snapshot_gain_is_zero_not_nan() {
    let mut state = AppState::default();
    let acc = add_account(&mut state.settings, "Checking", AccountType::Cash)
        .unwrap()
        .id
        .clone();
    upsert_snapshot(&mut state, snap("2024-01-01", &acc, 1000, 0));
    assert_eq!(gain_since_last(&state.records), (Decimal::ZERO, Decimal::ZERO));
}

#[test]
fn gain_since_last_reports_delta_and_percent() {
    let mut state = AppState::default();
    let acc = add_account(&mut state.settings, "Checking", AccountType::Cash)
        .unwrap()
        .id
        .clone();
    upsert_snapshot(&mut state, snap("2024-01-01", &acc, 1000, 0));
    upsert_snapshot(&mut state, snap("2024-02-01", &acc, 1500, 0));
    let (delta, percent) = gain_since_last(&state.records);
    assert_eq!(delta, dec(500));
    assert_eq!(percent, dec(50));
}

#[test]
fn average_income_excludes_zero_months() {
    let mut state = AppState::default();
    let acc = add_account(&mut state.settings, "Checking", AccountType::Cash)
        .unwrap()
        .id
        .clone();
    upsert_snapshot(&mut state, snap("2024-01-01", &acc, 1000, 0));
    upsert_snapshot(&mut state, snap("2024-02-01", &acc, 1100, 5000));
    upsert_snapshot(&mut state, snap("2024-03-01", &acc, 1200, 6000));
    assert_eq!(average_income(&state.records), dec(5500));
}

#[test]
fn net_savings_may_be_negative() {
    let mut state = AppState::default();
    let acc = add_account(&mut state.settings, "Checking", AccountType::Cash)
        .unwrap()
        .id
        .clone();
    upsert_snapshot(&mut state, snap("2024-01-01", &acc, 1000, 2000));
    upsert_expense(
        &mut state,
        ExpenseInput {
            category: "Housing".into(),
            item: "Rent".into(),
            amount: dec(3000),
            ..Default::default()
        },
    );
    assert_eq!(net_savings(&state.records, &state.expenses), dec(-1000));
}

#[test]
fn metric_series_supports_fields_and_account_ids() {
    let mut state = AppState::default();
    let acc = add_account(&mut state.settings, "Checking", AccountType::Cash)
        .unwrap()
        .id
        .clone();
    upsert_snapshot(&mut state, snap("2024-01-01", &acc, 1000, 4000));
    upsert_snapshot(&mut state, snap("2024-02-01", &acc, 1500, 4500));

    let totals = metric_series(&state.records, "totalAssets");
    assert_eq!(totals[0].1, dec(1000));
    assert_eq!(totals[1].1, dec(1500));

    let by_account = metric_series(&state.records, &acc);
    assert_eq!(by_account[1].1, dec(1500));

    // Unknown keys read as zero for every snapshot.
    let missing = metric_series(&state.records, "no-such-key");
    assert!(missing.iter().all(|(_, v)| v.is_zero()));
}

#[test]
fn allocation_drops_zero_valued_types() {
    let mut state = AppState::default();
    let cash = add_account(&mut state.settings, "Checking", AccountType::Cash)
        .unwrap()
        .id
        .clone();
    add_account(&mut state.settings, "Broker", AccountType::Investment);
    upsert_snapshot(&mut state, snap("2024-01-01", &cash, 1000, 0));

    let breakdown = allocation(&latest(&state.records), &state.settings);
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0], (AccountType::Cash, dec(1000)));
}
