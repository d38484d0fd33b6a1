// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::atomic::{AtomicU64, Ordering};

const UA: &str = concat!(
    "wealthtrack/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/wealthtrack)"
);

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

/// Tolerant amount parse: accepts `$`/comma decoration and surrounding quotes.
/// Empty or non-numeric input is zero, never an error.
pub fn parse_amount(raw: &str) -> Decimal {
    let clean: String = raw
        .trim()
        .trim_matches('"')
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    let clean = clean.trim();
    if clean.is_empty() {
        return Decimal::ZERO;
    }
    clean.parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// Currency display with zero fractional digits, e.g. `-$1,235`.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < Decimal::ZERO {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Chronological sort key for snapshot dates. `None` means the date never
/// parsed; such rows sort before all real dates.
pub fn date_key(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Human date rendering; unparseable input passes through unchanged.
pub fn format_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "N/A".into();
    }
    match date_key(raw) {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

static ID_SEQ: AtomicU64 = AtomicU64::new(0);

/// Fresh opaque id: millisecond timestamp plus a process-wide counter, so ids
/// never collide with anything generated before, including historical ones.
pub fn new_id(prefix: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let seq = ID_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}", prefix, millis, seq)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
