// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::latest;
use crate::goal::{monthly_savings, on_track, project};
use crate::models::{AppState, SavingGoal};
use crate::store::Store;
use crate::utils::{format_amount, maybe_print_json, parse_amount, pretty_table};
use anyhow::{anyhow, Result};
use chrono::Utc;
use rust_decimal::Decimal;

pub fn handle(state: &mut AppState, store: &dyn Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let amount = parse_amount(sub.get_one::<String>("amount").unwrap());
            let months = *sub.get_one::<u32>("months").unwrap();
            if amount <= Decimal::ZERO {
                return Err(anyhow!("Goal amount must be positive"));
            }
            if months == 0 {
                return Err(anyhow!("Goal duration must be at least one month"));
            }
            // Editing always resets the baseline; there is no extend mode.
            state.settings.saving_goal = Some(SavingGoal {
                amount,
                months,
                start_date: Utc::now(),
            });
            println!(
                "Goal set: {} in {} months from now",
                format_amount(amount),
                months
            );
            store.save(state)?;
        }
        Some(("show", sub)) => show(state, sub)?,
        Some(("clear", sub)) => {
            if !sub.get_flag("yes") {
                return Err(anyhow!("Re-run with --yes to remove the goal"));
            }
            if state.settings.saving_goal.take().is_none() {
                return Err(anyhow!("No goal is set"));
            }
            println!("Goal removed");
            store.save(state)?;
        }
        _ => {}
    }
    Ok(())
}

fn show(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let goal = state
        .settings
        .saving_goal
        .as_ref()
        .ok_or_else(|| anyhow!("No goal is set; use 'goal set'"))?;
    let net_worth = latest(&state.records).total_assets;
    let projection = project(goal, net_worth, Utc::now());
    let savings = monthly_savings(&state.records, &state.expenses);
    let status = if on_track(&projection, savings) {
        "on track".to_string()
    } else {
        format!(
            "behind by {}/mo",
            format_amount(projection.required_monthly - savings)
        )
    };
    let data = vec![
        vec!["Target".into(), format_amount(projection.target_amount)],
        vec![
            "Target date".into(),
            projection.target_date.format("%b %Y").to_string(),
        ],
        vec![
            "Progress".into(),
            format!("{:.1}%", projection.progress_percent),
        ],
        vec!["Current net worth".into(), format_amount(net_worth)],
        vec!["Amount to go".into(), format_amount(projection.gap)],
        vec![
            "Months remaining".into(),
            projection.remaining_months.to_string(),
        ],
        vec![
            "Required monthly".into(),
            format_amount(projection.required_monthly),
        ],
        vec!["Current monthly savings".into(), format_amount(savings)],
        vec!["Status".into(), status],
    ];
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Metric", "Value"], data));
    }
    Ok(())
}
