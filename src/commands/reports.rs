// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{
    allocation, average_income, gain_since_last, latest, metric_series, net_savings,
    total_recurring_expenses,
};
use crate::models::AppState;
use crate::registry::find_account;
use crate::utils::{format_amount, format_date, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(state, sub)?,
        Some(("history", sub)) => history(state, sub)?,
        Some(("allocation", sub)) => allocation_view(state, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let last = latest(&state.records);
    let (delta, percent) = gain_since_last(&state.records);
    let mut data = vec![
        vec!["As of".into(), format_date(&last.date)],
        vec!["Total net worth".into(), format_amount(last.total_assets)],
        vec![
            "Gain since last".into(),
            format!("{} ({:.1}%)", format_amount(delta), percent),
        ],
        vec!["Latest income".into(), format_amount(last.income)],
        vec![
            "Average income".into(),
            format_amount(average_income(&state.records)),
        ],
        vec!["MPF balance".into(), format_amount(last.mpf)],
        vec![
            "Recurring expenses".into(),
            format_amount(total_recurring_expenses(&state.expenses)),
        ],
        vec![
            "Net savings".into(),
            format_amount(net_savings(&state.records, &state.expenses)),
        ],
    ];
    for (r#type, amount) in allocation(&last, &state.settings) {
        data.push(vec![format!("{} holdings", r#type), format_amount(amount)]);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Metric", "Value"], data));
    }
    Ok(())
}

fn history(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let raw_metric = sub.get_one::<String>("metric").unwrap();
    // Account names are accepted as a convenience and resolved to ids.
    let metric = match raw_metric.as_str() {
        "totalAssets" | "gain" | "income" | "mpf" => raw_metric.clone(),
        other => find_account(&state.settings, other)
            .map(|a| a.id.clone())
            .unwrap_or_else(|| other.to_string()),
    };
    let series = metric_series(&state.records, &metric);
    if !maybe_print_json(json_flag, jsonl_flag, &series)? {
        let rows = series
            .into_iter()
            .map(|(date, value)| vec![format_date(&date), format_amount(value)])
            .collect();
        println!("{}", pretty_table(&["Date", raw_metric], rows));
    }
    Ok(())
}

fn allocation_view(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let last = latest(&state.records);
    let data: Vec<Vec<String>> = allocation(&last, &state.settings)
        .into_iter()
        .map(|(t, amount)| vec![t.to_string(), format_amount(amount)])
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Type", "Amount"], data));
    }
    Ok(())
}
