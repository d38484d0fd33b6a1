// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::expenses::{delete_expense, filter_expenses, total, upsert_expense, ExpenseInput};
use crate::models::AppState;
use crate::store::Store;
use crate::utils::{format_amount, maybe_print_json, parse_amount, pretty_table};
use anyhow::{anyhow, Result};

pub fn handle(state: &mut AppState, store: &dyn Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let input = read_input(sub, None)?;
            let item = input.item.clone();
            let id = upsert_expense(state, input);
            println!("Added expense '{}' ({})", item, id);
            store.save(state)?;
        }
        Some(("edit", sub)) => {
            let id = sub.get_one::<String>("id").unwrap().clone();
            if !state.expenses.iter().any(|e| e.id == id) {
                return Err(anyhow!("No expense with id '{}'", id));
            }
            let input = read_input(sub, Some(id.clone()))?;
            upsert_expense(state, input);
            println!("Updated expense {}", id);
            store.save(state)?;
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            if !sub.get_flag("yes") {
                return Err(anyhow!(
                    "Deleting an expense is permanent; re-run with --yes to confirm"
                ));
            }
            if !delete_expense(state, id) {
                return Err(anyhow!("No expense with id '{}'", id));
            }
            println!("Deleted expense {}", id);
            store.save(state)?;
        }
        Some(("list", sub)) => list(state, sub)?,
        Some(("categories", _)) => {
            let rows = state
                .settings
                .expense_categories
                .iter()
                .map(|c| vec![c.clone()])
                .collect();
            println!("{}", pretty_table(&["Category"], rows));
        }
        Some(("add-category", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim().to_string();
            if name.is_empty() {
                return Err(anyhow!("Category name must not be empty"));
            }
            if state.settings.expense_categories.contains(&name) {
                return Err(anyhow!("Category '{}' already exists", name));
            }
            state.settings.expense_categories.push(name.clone());
            println!("Added category '{}'", name);
            store.save(state)?;
        }
        Some(("rm-category", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let before = state.settings.expense_categories.len();
            state.settings.expense_categories.retain(|c| c != name);
            if state.settings.expense_categories.len() == before {
                return Err(anyhow!("No category '{}'", name));
            }
            println!("Removed category '{}'", name);
            store.save(state)?;
        }
        _ => {}
    }
    Ok(())
}

fn read_input(sub: &clap::ArgMatches, id: Option<String>) -> Result<ExpenseInput> {
    let item = sub.get_one::<String>("item").unwrap().trim().to_string();
    if item.is_empty() {
        return Err(anyhow!("Expense item must not be empty"));
    }
    Ok(ExpenseInput {
        id,
        category: sub.get_one::<String>("category").unwrap().trim().to_string(),
        item,
        amount: parse_amount(sub.get_one::<String>("amount").unwrap()),
        note: sub.get_one::<String>("note").cloned(),
    })
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let term = sub.get_one::<String>("term").map(String::as_str).unwrap_or("");
    let category = sub.get_one::<String>("category").map(String::as_str);
    let filtered = filter_expenses(&state.expenses, term, category);
    if !maybe_print_json(json_flag, jsonl_flag, &filtered)? {
        let rows = filtered
            .iter()
            .map(|e| {
                vec![
                    e.id.clone(),
                    e.category.clone(),
                    e.item.clone(),
                    format_amount(e.amount),
                    e.note.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Category", "Item", "Amount", "Note"], rows)
        );
        println!(
            "Total: {} ({} items)",
            format_amount(total(filtered.iter().copied())),
            filtered.len()
        );
    }
    Ok(())
}
