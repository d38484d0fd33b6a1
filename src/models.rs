// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const BACKUP_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Cash,
    Investment,
    Other,
}

impl AccountType {
    pub fn parse(s: &str) -> Option<AccountType> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Some(AccountType::Cash),
            "investment" | "inv" => Some(AccountType::Investment),
            "other" => Some(AccountType::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Cash => "Cash",
            AccountType::Investment => "Investment",
            AccountType::Other => "Other",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub r#type: AccountType,
}

/// One dated record of all account balances. `values` is keyed by account id;
/// entries may outlive their account (orphans are retained on purpose).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub values: BTreeMap<String, Decimal>,
    #[serde(default)]
    pub income: Decimal,
    #[serde(default)]
    pub mpf: Decimal,
    #[serde(default)]
    pub total_assets: Decimal,
    #[serde(default)]
    pub gain: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Snapshot {
    /// Zero-valued stand-in for an empty ledger; dashboards render it as-is.
    pub fn sentinel() -> Snapshot {
        Snapshot {
            id: String::new(),
            date: "N/A".into(),
            values: BTreeMap::new(),
            income: Decimal::ZERO,
            mpf: Decimal::ZERO,
            total_assets: Decimal::ZERO,
            gain: Decimal::ZERO,
            note: None,
        }
    }

    pub fn value(&self, account_id: &str) -> Decimal {
        self.values.get(account_id).copied().unwrap_or(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: String,
    pub category: String,
    pub item: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingGoal {
    pub amount: Decimal,
    pub months: u32,
    pub start_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub accounts: Vec<Account>,
    pub expense_categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saving_goal: Option<SavingGoal>,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            accounts: Vec::new(),
            expense_categories: [
                "Food",
                "Transport",
                "Shopping",
                "Utilities",
                "Entertainment",
                "Housing",
                "Health",
                "Other",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            saving_goal: None,
        }
    }
}

/// Versioned envelope bundling the full application state for export/restore.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupData {
    pub version: u32,
    pub timestamp: DateTime<Utc>,
    pub assets: Vec<Snapshot>,
    pub expenses: Vec<ExpenseRecord>,
    pub settings: AppSettings,
}

/// The single in-process copy of everything the program tracks. Every core
/// operation takes this struct; persistence serializes it wholesale.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub records: Vec<Snapshot>,
    pub expenses: Vec<ExpenseRecord>,
    pub settings: AppSettings,
}
