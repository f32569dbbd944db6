// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::rc::Rc;

use serde::Serialize;

use crate::{Filter, Id, Todo};

/// Handler registered for a view event.
pub type Handler = Rc<dyn Fn(&ViewEvent)>;

/// Display layer: renders commands and emits user interaction events.
pub trait View {
    /// Applies a display update.
    fn render(&self, command: ViewCommand);

    /// Registers the handler invoked when the view emits an event of the given kind.
    fn bind(&self, kind: EventKind, handler: Handler);
}

/// A display update requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", content = "payload", rename_all = "camelCase")]
pub enum ViewCommand {
    /// Replace the listed entries.
    ShowEntries(Vec<Todo>),

    /// Drop a single entry.
    RemoveItem(Id),

    /// Show the number of active todo items.
    UpdateElementCount(usize),

    /// Configure the "clear completed" button.
    ClearCompletedButton { completed: usize, visible: bool },

    /// Show or hide the main content block.
    ContentBlockVisibility { visible: bool },

    /// Check or uncheck the "toggle all" checkbox.
    ToggleAll { checked: bool },

    /// Highlight the selected filter.
    SetFilter(Filter),

    /// Clear the new todo input.
    ClearNewTodo,

    /// Mark a single entry as completed or active.
    ElementComplete { id: Id, completed: bool },

    /// Enter edit mode for an entry.
    EditItem { id: Id, title: String },

    /// Leave edit mode for an entry, showing the given title.
    EditItemDone { id: Id, title: String },
}

/// A user interaction emitted by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// A new todo was entered.
    NewTodo(String),

    /// An entry was double clicked for editing.
    ItemEdit { id: Id },

    /// Editing an entry was committed.
    ItemEditDone { id: Id, title: String },

    /// Editing an entry was cancelled.
    ItemEditCancel { id: Id },

    /// The destroy button of an entry was clicked.
    ItemRemove { id: Id },

    /// The checkbox of an entry was toggled.
    ItemToggle { id: Id, completed: bool },

    /// The "clear completed" button was clicked.
    RemoveCompleted,

    /// The "toggle all" checkbox was toggled.
    ToggleAll { completed: bool },
}

impl ViewEvent {
    /// The kind of this event, used to look up its handler.
    pub fn kind(&self) -> EventKind {
        match self {
            ViewEvent::NewTodo(_) => EventKind::NewTodo,
            ViewEvent::ItemEdit { .. } => EventKind::ItemEdit,
            ViewEvent::ItemEditDone { .. } => EventKind::ItemEditDone,
            ViewEvent::ItemEditCancel { .. } => EventKind::ItemEditCancel,
            ViewEvent::ItemRemove { .. } => EventKind::ItemRemove,
            ViewEvent::ItemToggle { .. } => EventKind::ItemToggle,
            ViewEvent::RemoveCompleted => EventKind::RemoveCompleted,
            ViewEvent::ToggleAll { .. } => EventKind::ToggleAll,
        }
    }
}

/// The kinds of events a view can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    NewTodo,
    ItemEdit,
    ItemEditDone,
    ItemEditCancel,
    ItemRemove,
    ItemToggle,
    RemoveCompleted,
    ToggleAll,
}

impl EventKind {
    /// Every event kind, in binding order.
    pub const ALL: [EventKind; 8] = [
        EventKind::NewTodo,
        EventKind::ItemEdit,
        EventKind::ItemEditDone,
        EventKind::ItemEditCancel,
        EventKind::ItemRemove,
        EventKind::ItemToggle,
        EventKind::RemoveCompleted,
        EventKind::ToggleAll,
    ];
}
