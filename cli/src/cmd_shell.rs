// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command};
use colored::Colorize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::app::App;
use crate::cmd_todo::TodoCommand;
use crate::util::ArgOutputFormat;

const EXIT: &str = "exit";

/// Reads todo commands line by line until `exit` or end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmdShell;

impl CmdShell {
    pub const NAME: &str = "shell";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Run todo commands interactively, one per line")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, app: &App) -> Result<(), Box<dyn Error>> {
        let reader = BufReader::new(tokio::io::stdin());
        self.run_lines(app, reader, &mut io::stdout()).await
    }

    pub async fn run_lines<R>(
        self,
        app: &App,
        reader: R,
        w: &mut impl io::Write,
    ) -> Result<(), Box<dyn Error>>
    where
        R: AsyncBufRead + Unpin,
    {
        app.start(None);
        app.view().draw(w, ArgOutputFormat::Table)?;

        let mut lines = reader.lines();
        loop {
            write!(w, "{} ", ">".green().bold())?;
            w.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(w)?;
                break;
            };
            let words = match shell_words::split(&line) {
                Ok(words) => words,
                Err(e) => {
                    writeln!(w, "{} {}", "Error:".red(), e)?;
                    continue;
                }
            };
            match words.first().map(String::as_str) {
                None => continue,
                Some(EXIT) => break,
                Some(_) => {}
            }

            match parse_line(&words) {
                Ok(command) => {
                    if let Err(e) = command.run(app, w) {
                        writeln!(w, "{} {}", "Error:".red(), e)?;
                    }
                }
                Err(e) => write!(w, "{}", e.render())?,
            }
        }

        tracing::debug!("shell exited");
        Ok(())
    }
}

fn parse_line<S: AsRef<str>>(words: &[S]) -> Result<TodoCommand, clap::Error> {
    let matches = Command::new(CmdShell::NAME)
        .no_binary_name(true)
        .subcommand_required(true)
        .subcommands(TodoCommand::subcommands())
        .subcommand(Command::new(EXIT).about("Leave the shell"))
        .try_get_matches_from(words.iter().map(|a| AsRef::<str>::as_ref(a)))?;

    match matches.subcommand() {
        Some((name, matches)) => TodoCommand::from(name, matches).ok_or_else(|| {
            clap::Error::raw(
                clap::error::ErrorKind::InvalidSubcommand,
                format!("unexpected command: {name}\n"),
            )
        }),
        None => unreachable!("subcommand is required"),
    }
}
