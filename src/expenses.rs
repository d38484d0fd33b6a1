// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{AppState, ExpenseRecord};
use crate::utils::new_id;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub id: Option<String>,
    pub category: String,
    pub item: String,
    pub amount: Decimal,
    pub note: Option<String>,
}

/// Identity-keyed replace or append; the catalog has no ordering or derived
/// fields. Category is free text; the configured list is a suggestion, not an
/// enum.
pub fn upsert_expense(state: &mut AppState, input: ExpenseInput) -> String {
    let id = match input.id {
        Some(id) if state.expenses.iter().any(|e| e.id == id) => id,
        _ => new_id("exp"),
    };
    let record = ExpenseRecord {
        id: id.clone(),
        category: input.category,
        item: input.item,
        amount: input.amount,
        note: input.note.filter(|n| !n.trim().is_empty()),
    };
    match state.expenses.iter_mut().find(|e| e.id == id) {
        Some(existing) => *existing = record,
        None => state.expenses.push(record),
    }
    id
}

pub fn delete_expense(state: &mut AppState, id: &str) -> bool {
    let before = state.expenses.len();
    state.expenses.retain(|e| e.id != id);
    state.expenses.len() != before
}

/// Case-insensitive substring match over item and note; exact category match
/// unless the category filter is absent or the "All" sentinel.
pub fn filter_expenses<'a>(
    expenses: &'a [ExpenseRecord],
    term: &str,
    category: Option<&str>,
) -> Vec<&'a ExpenseRecord> {
    let term = term.trim().to_lowercase();
    expenses
        .iter()
        .filter(|e| match category {
            None => true,
            Some(c) if c.eq_ignore_ascii_case("all") => true,
            Some(c) => e.category == c,
        })
        .filter(|e| {
            if term.is_empty() {
                return true;
            }
            e.item.to_lowercase().contains(&term)
                || e.note
                    .as_deref()
                    .map(|n| n.to_lowercase().contains(&term))
                    .unwrap_or(false)
        })
        .collect()
}

pub fn total<'a, I: IntoIterator<Item = &'a ExpenseRecord>>(expenses: I) -> Decimal {
    expenses.into_iter().map(|e| e.amount).sum()
}

/// Per-category totals for the summary view, in category name order.
pub fn category_totals(expenses: &[ExpenseRecord]) -> Vec<(String, Decimal)> {
    let mut map: BTreeMap<String, Decimal> = BTreeMap::new();
    for e in expenses {
        *map.entry(e.category.clone()).or_insert(Decimal::ZERO) += e.amount;
    }
    map.into_iter().collect()
}
