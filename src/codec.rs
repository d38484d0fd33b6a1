// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::recompute;
use crate::models::{
    Account, AccountType, AppSettings, AppState, BackupData, ExpenseRecord, Snapshot,
    BACKUP_VERSION,
};
use crate::utils::{new_id, parse_amount};
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use chrono::Utc;
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("input has no data rows")]
    Empty,
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("transfer code is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("transfer code is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("payload is not a recognized backup envelope: {0}")]
    Envelope(#[from] serde_json::Error),
    #[error("backup version {0} is newer than supported version {1}")]
    Version(u32, u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetLayout {
    /// Fixed historical schema with named cash/investment sub-columns.
    Legacy,
    /// One column per configured account, in registry order.
    Dynamic,
}

/// The six fixed slots of the legacy layout and their historical default
/// labels. Importing a legacy file binds columns to these well-known ids.
const LEGACY_SLOTS: [(&str, &str, AccountType); 6] = [
    ("cash-1", "HSBC", AccountType::Cash),
    ("cash-2", "Citi", AccountType::Cash),
    ("cash-3", "Other", AccountType::Cash),
    ("inv-1", "Sofi", AccountType::Investment),
    ("inv-2", "Binance", AccountType::Investment),
    ("other-1", "Yen", AccountType::Other),
];

/// Tolerant of ragged rows and stray whitespace; both historical exporters
/// produced files a strict reader would reject.
fn read_rows(text: &str) -> Result<Vec<StringRecord>, CodecError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for rec in reader.records() {
        let rec = rec?;
        if rec.iter().all(str::is_empty) {
            continue;
        }
        rows.push(rec);
    }
    Ok(rows)
}

fn token<'a>(rec: &'a StringRecord, idx: usize) -> &'a str {
    rec.get(idx).unwrap_or("")
}

fn is_legacy_header(header: &StringRecord) -> bool {
    header
        .iter()
        .any(|t| t.eq_ignore_ascii_case("cash total") || t.eq_ignore_ascii_case("inv total"))
}

/// Both legacy revisions carry the fixed `Cash Total` column; the dynamic
/// layout never does.
pub fn detect_asset_layout(header_line: &str) -> AssetLayout {
    match read_rows(header_line).ok().and_then(|rows| rows.into_iter().next()) {
        Some(header) if is_legacy_header(&header) => AssetLayout::Legacy,
        _ => AssetLayout::Dynamic,
    }
}

/// Parses an asset CSV of either layout. The registry may gain accounts:
/// legacy slots that are missing are created with their historical names, and
/// unknown dynamic columns become fresh `other` accounts so no raw data is
/// dropped. Gains in the file are ignored; callers rederive them.
pub fn parse_assets_csv(
    text: &str,
    settings: &mut AppSettings,
) -> Result<Vec<Snapshot>, CodecError> {
    let mut rows = read_rows(text)?.into_iter();
    let header = rows.next().ok_or(CodecError::Empty)?;
    if is_legacy_header(&header) {
        Ok(parse_legacy_assets(rows, settings))
    } else {
        Ok(parse_dynamic_assets(&header, rows, settings))
    }
}

fn ensure_legacy_slots(settings: &mut AppSettings) {
    for (id, default_name, r#type) in LEGACY_SLOTS {
        if !settings.accounts.iter().any(|a| a.id == id) {
            settings.accounts.push(Account {
                id: id.to_string(),
                name: default_name.to_string(),
                r#type,
            });
        }
    }
}

// Fixed column positions: date, cash total, three cash slots, inv total, two
// inv slots, other holding, total assets, gain, income, mpf, note.
fn parse_legacy_assets<I: Iterator<Item = StringRecord>>(
    rows: I,
    settings: &mut AppSettings,
) -> Vec<Snapshot> {
    ensure_legacy_slots(settings);
    let slot_columns: [(usize, &str); 6] = [
        (2, "cash-1"),
        (3, "cash-2"),
        (4, "cash-3"),
        (6, "inv-1"),
        (7, "inv-2"),
        (8, "other-1"),
    ];
    let mut records = Vec::new();
    for rec in rows {
        let date = token(&rec, 0).to_string();
        let total_assets = parse_amount(token(&rec, 9));
        if date.is_empty() && total_assets.is_zero() {
            continue;
        }
        let mut values = BTreeMap::new();
        for (idx, id) in slot_columns {
            values.insert(id.to_string(), parse_amount(token(&rec, idx)));
        }
        let note = token(&rec, 13).to_string();
        records.push(Snapshot {
            id: new_id("rec"),
            date,
            values,
            income: parse_amount(token(&rec, 11)),
            mpf: parse_amount(token(&rec, 12)),
            total_assets,
            gain: Decimal::ZERO,
            note: (!note.is_empty()).then_some(note),
        });
    }
    records
}

// Header: Date, Total Assets, Gain, Income, MPF, <account name>..., [Note].
fn parse_dynamic_assets<I: Iterator<Item = StringRecord>>(
    header: &StringRecord,
    rows: I,
    settings: &mut AppSettings,
) -> Vec<Snapshot> {
    let mut columns: Vec<(usize, String)> = Vec::new();
    let mut note_column: Option<usize> = None;
    for (idx, name) in header.iter().enumerate().skip(5) {
        if name.eq_ignore_ascii_case("note") {
            note_column = Some(idx);
            continue;
        }
        if name.is_empty() {
            continue;
        }
        let existing = crate::registry::find_account(settings, name).map(|a| a.id.clone());
        let id = match existing {
            Some(id) => id,
            None => crate::registry::add_account(settings, name, AccountType::Other)
                .map(|a| a.id.clone())
                .unwrap_or_default(),
        };
        if !id.is_empty() {
            columns.push((idx, id));
        }
    }

    let mut records = Vec::new();
    for rec in rows {
        let date = token(&rec, 0).to_string();
        let total_assets = parse_amount(token(&rec, 1));
        if date.is_empty() && total_assets.is_zero() {
            continue;
        }
        let mut values = BTreeMap::new();
        for (idx, id) in &columns {
            values.insert(id.clone(), parse_amount(token(&rec, *idx)));
        }
        let note = note_column
            .map(|idx| token(&rec, idx).to_string())
            .filter(|n| !n.is_empty());
        records.push(Snapshot {
            id: new_id("rec"),
            date,
            values,
            income: parse_amount(token(&rec, 3)),
            mpf: parse_amount(token(&rec, 4)),
            total_assets,
            gain: Decimal::ZERO,
            note,
        });
    }
    records
}

/// Expense CSV of either historical layout. A first token that looks like a
/// date (contains `/` or `-`) selects the legacy `date,category,item,amount,
/// note` columns; otherwise `category,item,amount,note`.
pub fn parse_expenses_csv(text: &str) -> Result<Vec<ExpenseRecord>, CodecError> {
    let mut rows = read_rows(text)?.into_iter();
    rows.next().ok_or(CodecError::Empty)?;
    let mut records = Vec::new();
    for rec in rows {
        let first = token(&rec, 0);
        let offset = if first.contains('/') || first.contains('-') {
            1
        } else {
            0
        };
        let category = token(&rec, offset).to_string();
        let item = token(&rec, offset + 1).to_string();
        if category.is_empty() && item.is_empty() {
            continue;
        }
        let note = token(&rec, offset + 3).to_string();
        records.push(ExpenseRecord {
            id: new_id("exp"),
            category,
            item,
            amount: parse_amount(token(&rec, offset + 2)),
            note: (!note.is_empty()).then_some(note),
        });
    }
    Ok(records)
}

fn finish_writer(wtr: csv::Writer<Vec<u8>>) -> Result<String, CodecError> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| CodecError::Csv(csv::Error::from(e.into_error())))?;
    Ok(String::from_utf8(bytes)?)
}

/// Dynamic-layout CSV with one column per configured account in registry
/// order.
pub fn write_assets_csv(
    records: &[Snapshot],
    settings: &AppSettings,
) -> Result<String, CodecError> {
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());
    let mut header = vec![
        "Date".to_string(),
        "Total Assets".to_string(),
        "Gain".to_string(),
        "Income".to_string(),
        "MPF".to_string(),
    ];
    header.extend(settings.accounts.iter().map(|a| a.name.clone()));
    header.push("Note".to_string());
    wtr.write_record(&header)?;
    for rec in records {
        let mut row = vec![
            rec.date.clone(),
            rec.total_assets.to_string(),
            rec.gain.to_string(),
            rec.income.to_string(),
            rec.mpf.to_string(),
        ];
        row.extend(settings.accounts.iter().map(|a| rec.value(&a.id).to_string()));
        row.push(rec.note.clone().unwrap_or_default());
        wtr.write_record(&row)?;
    }
    finish_writer(wtr)
}

pub fn write_expenses_csv(expenses: &[ExpenseRecord]) -> Result<String, CodecError> {
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());
    wtr.write_record(["Category", "Item", "Amount", "Note"])?;
    for e in expenses {
        wtr.write_record([
            e.category.as_str(),
            e.item.as_str(),
            &e.amount.to_string(),
            e.note.as_deref().unwrap_or(""),
        ])?;
    }
    finish_writer(wtr)
}

pub fn make_backup(state: &AppState) -> BackupData {
    BackupData {
        version: BACKUP_VERSION,
        timestamp: Utc::now(),
        assets: state.records.clone(),
        expenses: state.expenses.clone(),
        settings: state.settings.clone(),
    }
}

pub fn backup_to_json(state: &AppState) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(&make_backup(state))?)
}

/// Strict envelope parse: the typed struct requires `assets` to be present,
/// and a version from a newer schema is refused outright.
pub fn parse_backup(json: &str) -> Result<BackupData, CodecError> {
    let backup: BackupData = serde_json::from_str(json)?;
    if backup.version > BACKUP_VERSION {
        return Err(CodecError::Version(backup.version, BACKUP_VERSION));
    }
    Ok(backup)
}

/// Wholesale replace. Gains are always rederived; the stored `gain` field of
/// a backup is never trusted.
pub fn apply_backup(state: &mut AppState, backup: BackupData) {
    state.records = backup.assets;
    state.expenses = backup.expenses;
    state.settings = backup.settings;
    recompute(&mut state.records);
}

/// Paste-friendly transfer code: standard base64 over the UTF-8 JSON
/// envelope.
pub fn encode_transfer(state: &AppState) -> Result<String, CodecError> {
    let json = serde_json::to_string(&make_backup(state))?;
    Ok(B64.encode(json.as_bytes()))
}

/// Validates base64, UTF-8 and envelope shape before anything is applied, so
/// a corrupt or foreign payload can never partially land.
pub fn decode_transfer(code: &str) -> Result<BackupData, CodecError> {
    let compact: String = code.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = B64.decode(compact.as_bytes())?;
    let json = String::from_utf8(bytes)?;
    parse_backup(&json)
}
