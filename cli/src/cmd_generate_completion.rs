// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    io,
    path::{Path, PathBuf},
};

use clap::{ArgMatches, Command, ValueEnum, ValueHint, arg, value_parser};
use clap_complete::{Generator, Shell as ClapShell};
use clap_complete_nushell::Nushell;

use crate::Cli;

/// Prints or installs the completion script of the todomvc command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,

    /// Directory to write the script into, instead of stdout.
    pub output_dir: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "The shell generator to use")
                    .value_parser(value_parser!(Shell)),
            )
            .arg(
                arg!(-o --"output-dir" <DIR> "Write the script into this directory")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::DirPath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: matches.get_one("shell").copied().unwrap_or(Shell::Bash),
            output_dir: matches.get_one("output-dir").cloned(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        match &self.output_dir {
            Some(dir) => {
                let path = self.install(dir)?;
                println!("Completion script written to {}", path.display());
            }
            None => self.print(&mut io::stdout()),
        }
        Ok(())
    }

    pub fn print(&self, buf: &mut impl io::Write) {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(self.shell, &mut cmd, name, buf);
    }

    /// Writes the script to `dir`, named the way the shell looks it up.
    pub fn install(&self, dir: &Path) -> io::Result<PathBuf> {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        let path = clap_complete::generate_to(self.shell, &mut cmd, name, dir)?;
        tracing::debug!(shell = ?self.shell, path = %path.display(), "completion script written");
        Ok(path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    fn clap_shell(self) -> Option<ClapShell> {
        match self {
            Shell::Bash => Some(ClapShell::Bash),
            Shell::Elvish => Some(ClapShell::Elvish),
            Shell::Fish => Some(ClapShell::Fish),
            Shell::PowerShell => Some(ClapShell::PowerShell),
            Shell::Zsh => Some(ClapShell::Zsh),
            Shell::Nushell => None,
        }
    }
}

impl Generator for Shell {
    fn file_name(&self, name: &str) -> String {
        match self.clap_shell() {
            Some(shell) => shell.file_name(name),
            None => Nushell {}.file_name(name),
        }
    }

    fn generate(&self, cmd: &Command, buf: &mut dyn io::Write) {
        match self.clap_shell() {
            Some(shell) => shell.generate(cmd, buf),
            None => Nushell {}.generate(cmd, buf),
        }
    }
}
