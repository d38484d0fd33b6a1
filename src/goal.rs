// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{latest, total_recurring_expenses};
use crate::models::{ExpenseRecord, SavingGoal, Snapshot};
use chrono::{DateTime, Datelike, Months, Utc};
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct Projection {
    pub target_amount: Decimal,
    pub target_date: DateTime<Utc>,
    pub gap: Decimal,
    pub required_monthly: Decimal,
    pub progress_percent: Decimal,
    pub remaining_months: i64,
}

fn months_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to.year() as i64 - from.year() as i64) * 12 + (to.month() as i64 - from.month() as i64)
}

/// Pure projection of a goal against the current net worth at a given
/// moment. Remaining months are floored at one so a passed target date keeps
/// the required-monthly figure finite; progress is clamped to 0..=100.
pub fn project(goal: &SavingGoal, net_worth: Decimal, now: DateTime<Utc>) -> Projection {
    let target_date = goal
        .start_date
        .checked_add_months(Months::new(goal.months))
        .unwrap_or(goal.start_date);
    let remaining_months = months_between(now, target_date).max(1);
    let gap = (goal.amount - net_worth).max(Decimal::ZERO);
    let required_monthly = gap / Decimal::from(remaining_months);
    let progress_percent = if goal.amount.is_zero() {
        Decimal::ZERO
    } else {
        (net_worth / goal.amount * Decimal::ONE_HUNDRED)
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    };
    Projection {
        target_amount: goal.amount,
        target_date,
        gap,
        required_monthly,
        progress_percent,
        remaining_months,
    }
}

/// What the user currently puts aside each month: latest income minus the
/// recurring-expense catalog, floored at zero for projection purposes.
pub fn monthly_savings(records: &[Snapshot], expenses: &[ExpenseRecord]) -> Decimal {
    (latest(records).income - total_recurring_expenses(expenses)).max(Decimal::ZERO)
}

/// On track iff current monthly savings cover the required monthly amount.
pub fn on_track(projection: &Projection, monthly_savings: Decimal) -> bool {
    monthly_savings >= projection.required_monthly
}
