// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use wealthtrack::models::{AccountType, AppSettings, Snapshot};
use wealthtrack::registry::{
    add_account, find_account, remove_account, rename_account, total_by_type,
};

#[test]
fn blank_names_are_rejected() {
    let mut settings = AppSettings::default();
    assert!(add_account(&mut settings, "   ", AccountType::Cash).is_none());
    assert!(settings.accounts.is_empty());
}

#[test]
fn ids_are_unique_and_stable() {
    let mut settings = AppSettings::default();
    let a = add_account(&mut settings, "Checking", AccountType::Cash)
        .unwrap()
        .id
        .clone();
    let b = add_account(&mut settings, "Savings", AccountType::Cash)
        .unwrap()
        .id
        .clone();
    assert_ne!(a, b);

    assert!(rename_account(&mut settings, &a, "Everyday"));
    assert_eq!(settings.accounts[0].id, a);
    assert_eq!(settings.accounts[0].name, "Everyday");
    assert_eq!(settings.accounts[0].r#type, AccountType::Cash);
}

#[test]
fn rename_unknown_or_blank_is_a_noop() {
    let mut settings = AppSettings::default();
    let a = add_account(&mut settings, "Checking", AccountType::Cash)
        .unwrap()
        .id
        .clone();
    assert!(!rename_account(&mut settings, "nope", "X"));
    assert!(!rename_account(&mut settings, &a, "  "));
    assert_eq!(settings.accounts[0].name, "Checking");
}

#[test]
fn find_account_matches_id_then_name_case_insensitively() {
    let mut settings = AppSettings::default();
    let id = add_account(&mut settings, "Broker", AccountType::Investment)
        .unwrap()
        .id
        .clone();
    assert_eq!(find_account(&settings, &id).unwrap().name, "Broker");
    assert_eq!(find_account(&settings, "broker").unwrap().id, id);
    assert!(find_account(&settings, "missing").is_none());
}

#[test]
fn totals_group_by_type_over_the_current_registry() {
    let mut settings = AppSettings::default();
    let checking = add_account(&mut settings, "Checking", AccountType::Cash)
        .unwrap()
        .id
        .clone();
    let broker = add_account(&mut settings, "Broker", AccountType::Investment)
        .unwrap()
        .id
        .clone();

    let mut snapshot = Snapshot::sentinel();
    snapshot.values.insert(checking, Decimal::from(1000));
    snapshot.values.insert(broker.clone(), Decimal::from(2500));
    snapshot.values.insert("ghost".into(), Decimal::from(400));

    assert_eq!(
        total_by_type(&snapshot, &settings, AccountType::Cash),
        Decimal::from(1000)
    );
    assert_eq!(
        total_by_type(&snapshot, &settings, AccountType::Investment),
        Decimal::from(2500)
    );

    remove_account(&mut settings, &broker);
    assert_eq!(
        total_by_type(&snapshot, &settings, AccountType::Investment),
        Decimal::ZERO
    );
    // The orphaned value is still recorded in the snapshot itself.
    assert_eq!(snapshot.values[&broker], Decimal::from(2500));
}
