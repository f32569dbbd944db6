// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgAction, ArgMatches, arg, value_parser};
use todomvc_core::Id;

/// The output format for commands
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    #[default]
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or_default()
    }
}

pub fn arg_id() -> Arg {
    arg!(id: <ID> "The id of the todo").value_parser(value_parser!(Id))
}

pub fn get_id(matches: &ArgMatches) -> Id {
    match matches.get_one::<Id>("id") {
        Some(id) => *id,
        None => unreachable!("id is required"),
    }
}

pub fn arg_title(required: bool) -> Arg {
    arg!(title: [TITLE] "The title of the todo, words are joined with spaces")
        .required(required)
        .num_args(1..)
        .action(ArgAction::Append)
        .trailing_var_arg(true)
}

pub fn get_title(matches: &ArgMatches) -> String {
    matches
        .get_many::<String>("title")
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}
