// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of todomvc: a terminal view driven by the core controller.

mod app;
mod cli;
mod cmd_generate_completion;
mod cmd_shell;
mod cmd_todo;
mod config;
mod table;
mod terminal_view;
mod todo_formatter;
mod util;

pub use crate::app::App;
pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_todo::TodoCommand;
pub use crate::config::parse_config;
pub use crate::terminal_view::{Entry, Screen, TerminalView};
pub use crate::util::ArgOutputFormat;
