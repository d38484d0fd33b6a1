// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Account, AccountType, AppSettings, Snapshot};
use crate::utils::new_id;
use rust_decimal::Decimal;

/// Appends a fresh account to the registry. Blank names are rejected as a
/// no-op. Ids are never reused, so snapshot history keyed by an old id stays
/// orphaned rather than silently rebinding.
pub fn add_account<'a>(settings: &'a mut AppSettings, name: &str, r#type: AccountType) -> Option<&'a Account> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let mut id = new_id("acc");
    while settings.accounts.iter().any(|a| a.id == id) {
        id = new_id("acc");
    }
    settings.accounts.push(Account {
        id,
        name: name.to_string(),
        r#type,
    });
    settings.accounts.last()
}

/// Display name only; id and type are immutable after creation.
pub fn rename_account(settings: &mut AppSettings, id: &str, new_name: &str) -> bool {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return false;
    }
    match settings.accounts.iter_mut().find(|a| a.id == id) {
        Some(a) => {
            a.name = new_name.to_string();
            true
        }
        None => false,
    }
}

/// Removes from the registry only. Historical `Snapshot.values` entries under
/// the id are retained; totals simply stop counting them because aggregation
/// iterates configured accounts, never all keys ever used.
pub fn remove_account(settings: &mut AppSettings, id: &str) -> bool {
    let before = settings.accounts.len();
    settings.accounts.retain(|a| a.id != id);
    settings.accounts.len() != before
}

/// Resolves an account by exact id first, then case-insensitive name.
pub fn find_account<'a>(settings: &'a AppSettings, key: &str) -> Option<&'a Account> {
    settings
        .accounts
        .iter()
        .find(|a| a.id == key)
        .or_else(|| {
            settings
                .accounts
                .iter()
                .find(|a| a.name.eq_ignore_ascii_case(key.trim()))
        })
}

pub fn total_by_type(snapshot: &Snapshot, settings: &AppSettings, r#type: AccountType) -> Decimal {
    settings
        .accounts
        .iter()
        .filter(|a| a.r#type == r#type)
        .map(|a| snapshot.value(&a.id))
        .sum()
}

/// Net worth of a snapshot against the current registry.
pub fn total_all(snapshot: &Snapshot, settings: &AppSettings) -> Decimal {
    settings
        .accounts
        .iter()
        .map(|a| snapshot.value(&a.id))
        .sum()
}
