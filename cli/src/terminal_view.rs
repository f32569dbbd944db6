// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, io};

use colored::Colorize;
use serde::Serialize;
use todomvc_core::{
    Dispatcher, EventKind, Filter, Handler, Id, Todo, View, ViewCommand, ViewEvent,
};

use crate::todo_formatter::TodoFormatter;
use crate::util::ArgOutputFormat;

/// A view drawing the todo list to a terminal.
///
/// Render commands update an in-memory [`Screen`], the way a browser view
/// would update its DOM; [`TerminalView::draw`] prints the result.
#[derive(Debug, Default)]
pub struct TerminalView {
    dispatcher: RefCell<Dispatcher>,
    screen: RefCell<Screen>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits the event to the bound handler, as if the user interacted with the view.
    pub fn trigger(&self, event: ViewEvent) {
        // release the dispatcher before running the handler, it renders back into us
        let handler = self.dispatcher.borrow().handler(&event);
        match handler {
            Some(handler) => handler(&event),
            None => tracing::warn!(?event, "no handler bound for event"),
        }
    }

    /// A snapshot of what is currently displayed.
    pub fn screen(&self) -> Screen {
        self.screen.borrow().clone()
    }

    pub fn draw(&self, w: &mut impl io::Write, format: ArgOutputFormat) -> io::Result<()> {
        let screen = self.screen.borrow();
        match format {
            ArgOutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *w, &*screen)?;
                writeln!(w)
            }
            ArgOutputFormat::Table => screen.write_to(w),
        }
    }
}

impl View for TerminalView {
    fn render(&self, command: ViewCommand) {
        tracing::trace!(?command, "render");
        self.screen.borrow_mut().apply(command);
    }

    fn bind(&self, kind: EventKind, handler: Handler) {
        self.dispatcher.borrow_mut().register(kind, handler);
    }
}

/// The displayed state of the todo list.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub filter: Filter,
    pub entries: Vec<Entry>,
    pub items_left: usize,
    pub completed: usize,
    pub clear_completed_visible: bool,
    pub all_checked: bool,
    pub visible: bool,
}

impl Screen {
    /// Applies a render command.
    pub fn apply(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::ShowEntries(todos) => {
                self.entries = todos.into_iter().map(Entry::from).collect();
            }
            ViewCommand::RemoveItem(id) => self.entries.retain(|a| a.todo.id != id),
            ViewCommand::UpdateElementCount(count) => self.items_left = count,
            ViewCommand::ClearCompletedButton { completed, visible } => {
                self.completed = completed;
                self.clear_completed_visible = visible;
            }
            ViewCommand::ContentBlockVisibility { visible } => self.visible = visible,
            ViewCommand::ToggleAll { checked } => self.all_checked = checked,
            ViewCommand::SetFilter(filter) => self.filter = filter,
            ViewCommand::ClearNewTodo => {}
            ViewCommand::ElementComplete { id, completed } => {
                if let Some(entry) = self.entry_mut(id) {
                    entry.todo.completed = completed;
                }
            }
            ViewCommand::EditItem { id, title } => {
                if let Some(entry) = self.entry_mut(id) {
                    entry.todo.title = title;
                    entry.editing = true;
                }
            }
            ViewCommand::EditItemDone { id, title } => {
                if let Some(entry) = self.entry_mut(id) {
                    entry.todo.title = title;
                    entry.editing = false;
                }
            }
        }
    }

    fn entry_mut(&mut self, id: Id) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|a| a.todo.id == id)
    }

    fn write_to(&self, w: &mut impl io::Write) -> io::Result<()> {
        let filters = [Filter::All, Filter::Active, Filter::Completed]
            .iter()
            .map(|a| match *a == self.filter {
                true => a.to_string().green().bold().underline().to_string(),
                false => a.to_string(),
            })
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(w, "✅ {filters}")?;

        if !self.visible {
            return writeln!(w, "{}", "No todos".italic());
        }

        if self.entries.is_empty() {
            let empty = match self.filter {
                Filter::All => "No todos".to_string(),
                filter => format!("No {} todos", filter.name()),
            };
            writeln!(w, "{}", empty.italic())?;
        } else {
            TodoFormatter::new().write(w, &self.entries)?;
        }

        let unit = if self.items_left == 1 { "item" } else { "items" };
        write!(w, "{} {unit} left", self.items_left.to_string().bold())?;
        if self.clear_completed_visible {
            write!(
                w,
                ", {} completed (run `clear-completed` to remove)",
                self.completed
            )?;
        }
        writeln!(w)
    }
}

/// A displayed todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    #[serde(flatten)]
    pub todo: Todo,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub editing: bool,
}

impl From<Todo> for Entry {
    fn from(todo: Todo) -> Self {
        Self {
            todo,
            editing: false,
        }
    }
}
