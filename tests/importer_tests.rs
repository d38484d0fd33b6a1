// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use wealthtrack::codec::{detect_asset_layout, parse_assets_csv, parse_expenses_csv, AssetLayout};
use wealthtrack::ledger::recompute;
use wealthtrack::models::{AccountType, AppSettings, AppState};
use wealthtrack::registry::add_account;
use wealthtrack::store::{JsonStore, Store};
use wealthtrack::{cli, commands};

fn dec(v: i64) -> Decimal {
    Decimal::from(v)
}

const LEGACY_CSV: &str = "\
Date,Cash Total,HSBC,Citi,Other,Inv Total,Sofi,Binance,Yen,Total Assets,Gain,Income,MPF,Note
2024-01-01,\"$3,000\",\"$1,000\",\"$1,500\",$500,2000,1200,800,100,\"$5,100\",0,4000,200,
2024-02-01,3100,1100,1500,500,2300,1400,900,100,5500,999,4000,200,\"moved cash, paid rent\"
";

#[test]
fn legacy_layout_is_detected_by_its_fixed_columns() {
    assert_eq!(
        detect_asset_layout("Date,Cash Total,HSBC,Citi,Other,Inv Total,Sofi,Binance,Yen,Total Assets,Gain,Income,MPF,Note"),
        AssetLayout::Legacy
    );
    assert_eq!(
        detect_asset_layout("Date,Total Assets,Gain,Income,MPF,Checking,Broker,Note"),
        AssetLayout::Dynamic
    );
}

#[test]
fn legacy_import_binds_slots_and_ignores_stored_gains() {
    let mut settings = AppSettings::default();
    let mut records = parse_assets_csv(LEGACY_CSV, &mut settings).unwrap();
    recompute(&mut records);

    // The six fixed slots now exist with their historical names.
    assert_eq!(settings.accounts.len(), 6);
    assert!(settings.accounts.iter().any(|a| a.id == "cash-1" && a.name == "HSBC"));
    assert!(settings.accounts.iter().any(|a| a.id == "other-1" && a.name == "Yen"));

    assert_eq!(records.len(), 2);
    let first = &records[0];
    assert_eq!(first.date, "2024-01-01");
    assert_eq!(first.value("cash-1"), dec(1000));
    assert_eq!(first.value("cash-3"), dec(500));
    assert_eq!(first.value("inv-2"), dec(800));
    assert_eq!(first.total_assets, dec(5100));
    assert_eq!(first.income, dec(4000));
    assert_eq!(first.mpf, dec(200));
    assert_eq!(first.note, None);

    // Gains come from the ledger, never from the file (the file said 999).
    assert_eq!(records[0].gain, Decimal::ZERO);
    assert_eq!(records[1].gain, dec(400));
    assert_eq!(
        records[1].note.as_deref(),
        Some("moved cash, paid rent")
    );
}

#[test]
fn unparseable_amounts_fall_back_to_zero() {
    let csv = "\
Date,Cash Total,HSBC,Citi,Other,Inv Total,Sofi,Binance,Yen,Total Assets,Gain,Income,MPF,Note
2024-03-01,abc,abc,0,0,0,0,0,0,750,0,abc,0,
";
    let mut settings = AppSettings::default();
    let records = parse_assets_csv(csv, &mut settings).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].value("cash-1"), Decimal::ZERO);
    assert_eq!(records[0].income, Decimal::ZERO);
    assert_eq!(records[0].total_assets, dec(750));
}

#[test]
fn blank_rows_are_skipped_and_empty_files_are_rejected() {
    let csv = "\
Date,Cash Total,HSBC,Citi,Other,Inv Total,Sofi,Binance,Yen,Total Assets,Gain,Income,MPF,Note

,,,,,,,,,,,,,
2024-04-01,100,100,0,0,0,0,0,0,100,0,0,0,
";
    let mut settings = AppSettings::default();
    let records = parse_assets_csv(csv, &mut settings).unwrap();
    assert_eq!(records.len(), 1);

    assert!(parse_assets_csv("", &mut settings).is_err());
}

#[test]
fn dynamic_import_matches_names_and_creates_unknown_columns() {
    let mut settings = AppSettings::default();
    let checking = add_account(&mut settings, "Checking", AccountType::Cash)
        .unwrap()
        .id
        .clone();
    let csv = "\
Date,Total Assets,Gain,Income,MPF,checking,Crypto,Note
2024-05-01,1500,0,3000,150,1000,500,first month
2024-06-01,1800,0,3000,150,1200,600,
";
    let mut records = parse_assets_csv(csv, &mut settings).unwrap();
    recompute(&mut records);

    // "checking" bound case-insensitively to the existing account; "Crypto"
    // was created as a fresh `other` account.
    assert_eq!(settings.accounts.len(), 2);
    let crypto = settings
        .accounts
        .iter()
        .find(|a| a.name == "Crypto")
        .unwrap();
    assert_eq!(crypto.r#type, AccountType::Other);

    assert_eq!(records[0].value(&checking), dec(1000));
    assert_eq!(records[0].value(&crypto.id), dec(500));
    assert_eq!(records[0].note.as_deref(), Some("first month"));
    assert_eq!(records[1].note, None);
    assert_eq!(records[1].gain, dec(300));
}

#[test]
fn expense_import_handles_both_historical_layouts() {
    let csv = "\
Category,Item,Amount,Note
Food,Groceries,\"$1,200\",weekly run
2024-01-05,Transport,Metro,150,
Housing,Rent,8000,\"deposit, first month\"
";
    let expenses = parse_expenses_csv(csv).unwrap();
    assert_eq!(expenses.len(), 3);
    assert_eq!(expenses[0].category, "Food");
    assert_eq!(expenses[0].amount, dec(1200));
    // A date-prefixed row shifts every column right by one.
    assert_eq!(expenses[1].category, "Transport");
    assert_eq!(expenses[1].item, "Metro");
    assert_eq!(expenses[1].amount, dec(150));
    assert_eq!(expenses[1].note, None);
    assert_eq!(expenses[2].note.as_deref(), Some("deposit, first month"));
}

#[test]
fn import_command_replaces_the_ledger_wholesale() {
    let tmp = tempfile::tempdir().unwrap();
    let store = JsonStore::at(tmp.path()).unwrap();
    let csv_path = tmp.path().join("assets.csv");
    std::fs::write(&csv_path, LEGACY_CSV).unwrap();

    let mut state = AppState::default();
    let m = cli::build_cli().get_matches_from([
        "wealthtrack",
        "import",
        "assets",
        "--path",
        csv_path.to_str().unwrap(),
    ]);
    let (_, sub) = m.subcommand().unwrap();
    commands::importer::handle(&mut state, &store, sub).unwrap();

    assert_eq!(state.records.len(), 2);
    assert_eq!(state.records[1].gain, dec(400));

    // The store was written; a fresh load sees the imported ledger.
    let loaded = store.load().unwrap();
    assert_eq!(loaded.records.len(), 2);
    assert_eq!(loaded.settings.accounts.len(), 6);
}

#[test]
fn import_command_fails_cleanly_on_a_missing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let store = JsonStore::at(tmp.path()).unwrap();
    let mut state = AppState::default();
    let m = cli::build_cli().get_matches_from([
        "wealthtrack",
        "import",
        "assets",
        "--path",
        "/nonexistent/assets.csv",
    ]);
    let (_, sub) = m.subcommand().unwrap();
    assert!(commands::importer::handle(&mut state, &store, sub).is_err());
    assert!(state.records.is_empty());
}
