// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use wealthtrack::expenses::{
    category_totals, delete_expense, filter_expenses, total, upsert_expense, ExpenseInput,
};
use wealthtrack::models::AppState;

fn dec(v: i64) -> Decimal {
    Decimal::from(v)
}

fn catalog() -> AppState {
    let mut state = AppState::default();
    for (category, item, amount, note) in [
        ("Food", "Groceries", 1200, Some("weekly run")),
        ("Food", "Coffee beans", 150, None),
        ("Transport", "Metro pass", 500, Some("monthly")),
        ("Housing", "Rent", 8000, None),
    ] {
        upsert_expense(
            &mut state,
            ExpenseInput {
                id: None,
                category: category.into(),
                item: item.into(),
                amount: dec(amount),
                note: note.map(String::from),
            },
        );
    }
    state
}

#[test]
fn edit_replaces_in_place_and_keeps_the_id() {
    let mut state = AppState::default();
    let id = upsert_expense(
        &mut state,
        ExpenseInput {
            id: None,
            category: "Food".into(),
            item: "Groceries".into(),
            amount: dec(1200),
            note: Some("   ".into()),
        },
    );
    // Whitespace-only notes are dropped.
    assert_eq!(state.expenses[0].note, None);

    let same = upsert_expense(
        &mut state,
        ExpenseInput {
            id: Some(id.clone()),
            category: "Food".into(),
            item: "Groceries".into(),
            amount: dec(1350),
            note: None,
        },
    );
    assert_eq!(same, id);
    assert_eq!(state.expenses.len(), 1);
    assert_eq!(state.expenses[0].amount, dec(1350));

    assert!(delete_expense(&mut state, &id));
    assert!(!delete_expense(&mut state, &id));
    assert!(state.expenses.is_empty());
}

#[test]
fn upsert_with_a_stale_id_creates_a_fresh_record() {
    let mut state = AppState::default();
    let id = upsert_expense(
        &mut state,
        ExpenseInput {
            id: Some("exp-gone".into()),
            category: "Food".into(),
            item: "Groceries".into(),
            amount: dec(100),
            note: None,
        },
    );
    assert_ne!(id, "exp-gone");
    assert_eq!(state.expenses.len(), 1);
}

#[test]
fn filters_match_substrings_and_exact_categories() {
    let state = catalog();
    let hits = filter_expenses(&state.expenses, "metro", None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].item, "Metro pass");

    // Notes are searched too.
    let hits = filter_expenses(&state.expenses, "WEEKLY", None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].item, "Groceries");

    let hits = filter_expenses(&state.expenses, "", Some("Food"));
    assert_eq!(hits.len(), 2);
    assert_eq!(total(hits), dec(1350));

    // "All" is a pass-through, not a category.
    assert_eq!(filter_expenses(&state.expenses, "", Some("All")).len(), 4);
    assert_eq!(filter_expenses(&state.expenses, "", Some("food")).len(), 0);
}

#[test]
fn category_totals_aggregate_in_name_order() {
    let state = catalog();
    assert_eq!(
        category_totals(&state.expenses),
        vec![
            ("Food".to_string(), dec(1350)),
            ("Housing".to_string(), dec(8000)),
            ("Transport".to_string(), dec(500)),
        ]
    );
    assert_eq!(total(&state.expenses), dec(9850));
}
