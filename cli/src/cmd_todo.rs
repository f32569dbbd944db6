// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, arg, value_parser};
use todomvc_core::{Filter, Id, ViewEvent};

use crate::app::App;
use crate::util::{ArgOutputFormat, arg_id, arg_title, get_id, get_title};

/// The commands operating on the todo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoCommand {
    List(CmdList),
    Add(CmdAdd),
    Toggle(CmdToggle),
    Done(CmdDone),
    Undo(CmdUndo),
    ToggleAll(CmdToggleAll),
    Edit(CmdEdit),
    Remove(CmdRemove),
    ClearCompleted(CmdClearCompleted),
}

impl TodoCommand {
    pub fn subcommands() -> [Command; 9] {
        [
            CmdList::command(),
            CmdAdd::command(),
            CmdToggle::command(),
            CmdDone::command(),
            CmdUndo::command(),
            CmdToggleAll::command(),
            CmdEdit::command(),
            CmdRemove::command(),
            CmdClearCompleted::command(),
        ]
    }

    /// Picks the todo command out of parsed subcommand matches.
    pub fn from(name: &str, matches: &ArgMatches) -> Option<Self> {
        use TodoCommand::*;
        let command = match name {
            CmdList::NAME => List(CmdList::from(matches)),
            CmdAdd::NAME => Add(CmdAdd::from(matches)),
            CmdToggle::NAME => Toggle(CmdToggle::from(matches)),
            CmdDone::NAME => Done(CmdDone::from(matches)),
            CmdUndo::NAME => Undo(CmdUndo::from(matches)),
            CmdToggleAll::NAME => ToggleAll(CmdToggleAll::from(matches)),
            CmdEdit::NAME => Edit(CmdEdit::from(matches)),
            CmdRemove::NAME => Remove(CmdRemove::from(matches)),
            CmdClearCompleted::NAME => ClearCompleted(CmdClearCompleted::from(matches)),
            _ => return None,
        };
        Some(command)
    }

    #[rustfmt::skip]
    pub fn run(self, app: &App, w: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        use TodoCommand::*;
        tracing::debug!(command = ?self, "running todo command");
        let format = match self {
            List(a)           => a.run(app)?,
            Add(a)            => a.run(app)?,
            Toggle(a)         => a.run(app)?,
            Done(a)           => a.run(app)?,
            Undo(a)           => a.run(app)?,
            ToggleAll(a)      => a.run(app)?,
            Edit(a)           => a.run(app)?,
            Remove(a)         => a.run(app)?,
            ClearCompleted(a) => a.run(app)?,
        };
        app.view().draw(w, format)?;
        Ok(())
    }
}

impl Default for TodoCommand {
    fn default() -> Self {
        TodoCommand::List(CmdList::default())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CmdList {
    pub filter: Option<Filter>,
    pub output_format: ArgOutputFormat,
}

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List todo items, optionally only the active or completed ones")
            .arg(arg!(filter: [FILTER] "The todo items to show").value_parser(value_parser!(Filter)))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            filter: matches.get_one("filter").copied(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, app: &App) -> Result<ArgOutputFormat, Box<dyn Error>> {
        match self.filter {
            Some(filter) => app.start(Some(&filter.route())),
            None => app.start(None),
        }
        Ok(self.output_format)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdAdd {
    pub title: String,
    pub output_format: ArgOutputFormat,
}

impl CmdAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Add a new todo item")
            .arg(ArgOutputFormat::arg())
            .arg(arg_title(true))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            title: get_title(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, app: &App) -> Result<ArgOutputFormat, Box<dyn Error>> {
        if self.title.trim().is_empty() {
            return Err("Title must not be empty".into());
        }

        app.start(None);
        app.trigger(ViewEvent::NewTodo(self.title));
        Ok(self.output_format)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmdToggle {
    pub id: Id,
    pub output_format: ArgOutputFormat,
}

impl CmdToggle {
    pub const NAME: &str = "toggle";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Flip a todo item between active and completed")
            .arg(arg_id())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, app: &App) -> Result<ArgOutputFormat, Box<dyn Error>> {
        let todo = app.get(self.id)?;
        toggle(app, self.id, !todo.completed);
        Ok(self.output_format)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmdDone {
    pub id: Id,
    pub output_format: ArgOutputFormat,
}

impl CmdDone {
    pub const NAME: &str = "done";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Mark a todo item as completed")
            .arg(arg_id())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, app: &App) -> Result<ArgOutputFormat, Box<dyn Error>> {
        app.get(self.id)?;
        toggle(app, self.id, true);
        Ok(self.output_format)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmdUndo {
    pub id: Id,
    pub output_format: ArgOutputFormat,
}

impl CmdUndo {
    pub const NAME: &str = "undo";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Mark a todo item as active again")
            .arg(arg_id())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, app: &App) -> Result<ArgOutputFormat, Box<dyn Error>> {
        app.get(self.id)?;
        toggle(app, self.id, false);
        Ok(self.output_format)
    }
}

fn toggle(app: &App, id: Id, completed: bool) {
    app.start(None);
    app.trigger(ViewEvent::ItemToggle { id, completed });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmdToggleAll {
    pub undo: bool,
    pub output_format: ArgOutputFormat,
}

impl CmdToggleAll {
    pub const NAME: &str = "toggle-all";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Mark every todo item as completed")
            .arg(arg!(--undo "Mark every todo item as active instead"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            undo: matches.get_flag("undo"),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, app: &App) -> Result<ArgOutputFormat, Box<dyn Error>> {
        app.start(None);
        app.trigger(ViewEvent::ToggleAll {
            completed: !self.undo,
        });
        Ok(self.output_format)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdEdit {
    pub id: Id,
    pub title: String,
    pub output_format: ArgOutputFormat,
}

impl CmdEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Change the title of a todo item, an empty title removes it")
            .arg(arg_id())
            .arg(ArgOutputFormat::arg())
            .arg(arg_title(true))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            title: get_title(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, app: &App) -> Result<ArgOutputFormat, Box<dyn Error>> {
        app.get(self.id)?;
        app.start(None);
        app.trigger(ViewEvent::ItemEdit { id: self.id });
        app.trigger(ViewEvent::ItemEditDone {
            id: self.id,
            title: self.title,
        });
        Ok(self.output_format)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmdRemove {
    pub id: Id,
    pub output_format: ArgOutputFormat,
}

impl CmdRemove {
    pub const NAME: &str = "remove";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Remove a todo item")
            .arg(arg_id())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, app: &App) -> Result<ArgOutputFormat, Box<dyn Error>> {
        app.get(self.id)?;
        app.start(None);
        app.trigger(ViewEvent::ItemRemove { id: self.id });
        Ok(self.output_format)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmdClearCompleted {
    pub output_format: ArgOutputFormat,
}

impl CmdClearCompleted {
    pub const NAME: &str = "clear-completed";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Remove every completed todo item")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, app: &App) -> Result<ArgOutputFormat, Box<dyn Error>> {
        app.start(None);
        app.trigger(ViewEvent::RemoveCompleted);
        Ok(self.output_format)
    }
}
