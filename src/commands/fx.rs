// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{http_client, parse_amount};
use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct Latest {
    rates: HashMap<String, f64>,
    #[serde(rename = "base")]
    _base: String,
}

// One-off lookup for the manual-entry calculator. Rates are printed, never
// stored; a failed fetch leaves all ledgers untouched.
pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("rate", sub)) = m.subcommand() {
        let from = sub.get_one::<String>("from").unwrap().to_uppercase();
        let to = sub.get_one::<String>("to").unwrap().to_uppercase();
        let amount = sub
            .get_one::<String>("amount")
            .map(|s| parse_amount(s))
            .unwrap_or(Decimal::ONE);

        let url = format!("https://api.frankfurter.dev/latest?from={from}&to={to}");
        let client = http_client()?;
        let resp = client.get(url).send()?.error_for_status()?;
        let latest: Latest = resp.json()?;
        let rate = latest
            .rates
            .get(&to)
            .copied()
            .ok_or_else(|| anyhow!("No rate returned for {}", to))?;
        let rate_dec =
            Decimal::try_from(rate).map_err(|_| anyhow!("Invalid rate '{}' for {}", rate, to))?;
        println!("{} {} -> {:.2} {} (rate {})", amount, from, amount * rate_dec, to, rate);
    }
    Ok(())
}
