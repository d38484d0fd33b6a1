// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{AccountType, AppSettings, ExpenseRecord, Snapshot};
use rust_decimal::Decimal;

/// Chronologically last snapshot, or the zero sentinel for an empty ledger so
/// every dashboard metric stays well-defined.
pub fn latest(records: &[Snapshot]) -> Snapshot {
    records.last().cloned().unwrap_or_else(Snapshot::sentinel)
}

/// Absolute and percentage change of the latest total versus the previous
/// one. Both are zero when there is no previous snapshot or its total is
/// zero; division by zero never propagates.
pub fn gain_since_last(records: &[Snapshot]) -> (Decimal, Decimal) {
    if records.len() < 2 {
        return (Decimal::ZERO, Decimal::ZERO);
    }
    let last = &records[records.len() - 1];
    let prev = &records[records.len() - 2];
    let delta = last.total_assets - prev.total_assets;
    if prev.total_assets.is_zero() {
        return (delta, Decimal::ZERO);
    }
    (delta, delta / prev.total_assets * Decimal::ONE_HUNDRED)
}

/// Working average: mean of income over the snapshots that recorded one.
/// Zero-income months are excluded from both sum and count.
pub fn average_income(records: &[Snapshot]) -> Decimal {
    let earning: Vec<Decimal> = records
        .iter()
        .map(|r| r.income)
        .filter(|i| *i > Decimal::ZERO)
        .collect();
    if earning.is_empty() {
        return Decimal::ZERO;
    }
    earning.iter().copied().sum::<Decimal>() / Decimal::from(earning.len())
}

pub fn total_recurring_expenses(expenses: &[ExpenseRecord]) -> Decimal {
    expenses.iter().map(|e| e.amount).sum()
}

/// Latest recorded income minus the recurring-expense total; may be negative.
pub fn net_savings(records: &[Snapshot], expenses: &[ExpenseRecord]) -> Decimal {
    latest(records).income - total_recurring_expenses(expenses)
}

/// Extracts one scalar per snapshot in chronological order. The well-known
/// keys are top-level fields; any other key is treated as an account id into
/// the value map. Missing keys read as zero.
pub fn metric_series(records: &[Snapshot], key: &str) -> Vec<(String, Decimal)> {
    records
        .iter()
        .map(|r| {
            let v = match key {
                "totalAssets" => r.total_assets,
                "gain" => r.gain,
                "income" => r.income,
                "mpf" => r.mpf,
                account_id => r.value(account_id),
            };
            (r.date.clone(), v)
        })
        .collect()
}

/// Current-moment breakdown by account type for allocation views; zero-valued
/// types are dropped.
pub fn allocation(latest: &Snapshot, settings: &AppSettings) -> Vec<(AccountType, Decimal)> {
    [AccountType::Cash, AccountType::Investment, AccountType::Other]
        .into_iter()
        .map(|t| (t, crate::registry::total_by_type(latest, settings, t)))
        .filter(|(_, total)| !total.is_zero())
        .collect()
}
