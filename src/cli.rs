// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("wealthtrack")
        .about("Net-worth snapshots, recurring expenses, and savings-goal projection")
        .version(clap::crate_version!())
        .subcommand(
            Command::new("account")
                .about("Manage the account registry")
                .subcommand(
                    Command::new("add")
                        .about("Add a named, typed account")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("cash | investment | other"),
                        ),
                )
                .subcommand(
                    Command::new("rename")
                        .about("Rename an account (id and type are immutable)")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("name").long("name").required(true)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove an account from the registry; history is retained")
                        .arg(Arg::new("id").long("id").required(true)),
                )
                .subcommand(json_flags(Command::new("list").about("List accounts"))),
        )
        .subcommand(
            Command::new("snapshot")
                .about("Manage the asset snapshot ledger")
                .subcommand(snapshot_fields(
                    Command::new("add").about("Record a new snapshot"),
                ))
                .subcommand(
                    snapshot_fields(
                        Command::new("edit").about("Replace a snapshot's fields by id"),
                    )
                    .arg(Arg::new("id").long("id").required(true)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a snapshot")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .action(ArgAction::SetTrue)
                                .help("Confirm the deletion"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List snapshots in date order").arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_parser(value_parser!(usize)),
                    ),
                ))
                .subcommand(Command::new("recalc").about(
                    "Recompute every snapshot's total against the current registry",
                )),
        )
        .subcommand(
            Command::new("expense")
                .about("Manage the recurring expense catalog")
                .subcommand(expense_fields(
                    Command::new("add").about("Add a recurring expense"),
                ))
                .subcommand(
                    expense_fields(Command::new("edit").about("Replace an expense by id"))
                        .arg(Arg::new("id").long("id").required(true)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an expense")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .action(ArgAction::SetTrue)
                                .help("Confirm the deletion"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List expenses, optionally filtered, with a total")
                        .arg(Arg::new("term").long("term"))
                        .arg(Arg::new("category").long("category")),
                ))
                .subcommand(Command::new("categories").about("List configured categories"))
                .subcommand(
                    Command::new("add-category")
                        .about("Add a category suggestion")
                        .arg(Arg::new("name").long("name").required(true)),
                )
                .subcommand(
                    Command::new("rm-category")
                        .about("Remove a category suggestion")
                        .arg(Arg::new("name").long("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Derived metrics over the ledger")
                .subcommand(json_flags(
                    Command::new("summary").about("Net worth, gain, income and savings summary"),
                ))
                .subcommand(json_flags(
                    Command::new("history")
                        .about("Time series of one metric across snapshots")
                        .arg(Arg::new("metric").long("metric").required(true).help(
                            "totalAssets | gain | income | mpf | an account id or name",
                        )),
                ))
                .subcommand(json_flags(
                    Command::new("allocation").about("Current breakdown by account type"),
                )),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goal projection")
                .subcommand(
                    Command::new("set")
                        .about("Set or replace the goal; the baseline resets to now")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .required(true)
                                .value_parser(value_parser!(u32)),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("show").about("Projection and on-track status"),
                ))
                .subcommand(
                    Command::new("clear").about("Remove the goal").arg(
                        Arg::new("yes")
                            .long("yes")
                            .action(ArgAction::SetTrue)
                            .help("Confirm removal"),
                    ),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Replace a ledger from a CSV file (all-or-nothing)")
                .subcommand(
                    Command::new("assets")
                        .about("Import the asset ledger (legacy or dynamic layout)")
                        .arg(Arg::new("path").long("path").required(true)),
                )
                .subcommand(
                    Command::new("expenses")
                        .about("Import the expense catalog")
                        .arg(Arg::new("path").long("path").required(true)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write a ledger to a CSV file")
                .subcommand(
                    Command::new("assets")
                        .arg(Arg::new("out").long("out").required(true)),
                )
                .subcommand(
                    Command::new("expenses")
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("backup")
                .about("Full-state backup, restore and transfer codes")
                .subcommand(
                    Command::new("export")
                        .about("Write the JSON backup envelope")
                        .arg(Arg::new("out").long("out").required(true)),
                )
                .subcommand(
                    Command::new("restore")
                        .about("Replace all state from a JSON backup")
                        .arg(Arg::new("path").long("path").required(true)),
                )
                .subcommand(
                    Command::new("encode").about("Print a base64 transfer code for copy/paste"),
                )
                .subcommand(
                    Command::new("decode")
                        .about("Replace all state from a pasted transfer code")
                        .arg(Arg::new("code").long("code").required(true)),
                ),
        )
        .subcommand(
            Command::new("fx")
                .about("One-off exchange-rate lookup (never persisted)")
                .subcommand(
                    Command::new("rate")
                        .arg(Arg::new("from").long("from").required(true))
                        .arg(Arg::new("to").long("to").required(true))
                        .arg(Arg::new("amount").long("amount")),
                ),
        )
        .subcommand(Command::new("doctor").about("Check ledger invariants and orphaned data"))
}

fn snapshot_fields(cmd: Command) -> Command {
    cmd.arg(Arg::new("date").long("date").required(true))
        .arg(
            Arg::new("value")
                .long("value")
                .action(ArgAction::Append)
                .value_name("ACCOUNT=AMOUNT")
                .help("Repeatable; account by name or id"),
        )
        .arg(Arg::new("income").long("income"))
        .arg(Arg::new("mpf").long("mpf"))
        .arg(Arg::new("note").long("note"))
}

fn expense_fields(cmd: Command) -> Command {
    cmd.arg(Arg::new("category").long("category").required(true))
        .arg(Arg::new("item").long("item").required(true))
        .arg(Arg::new("amount").long("amount").required(true))
        .arg(Arg::new("note").long("note"))
}
