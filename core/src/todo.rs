// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a todo item.
pub type Id = u64;

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// The unique identifier of the todo item.
    pub id: Id,

    /// The title of the todo item.
    pub title: String,

    /// Whether the todo item has been completed.
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Creates a new, not yet completed todo item.
    pub fn new(id: Id, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// Returns the same todo item with the given completed flag.
    #[must_use]
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "x" } else { " " };
        write!(f, "#{} [{}] {}", self.id, mark, self.title)
    }
}

/// Patch for a todo item, allowing partial updates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TodoPatch {
    /// The new title of the todo item, if any.
    pub title: Option<String>,

    /// The new completed flag of the todo item, if any.
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// A patch that only sets the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    /// A patch that only sets the completed flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }

    /// Is this patch empty, meaning no fields are set
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }

    /// Applies the patch to a mutable todo item, modifying it in place.
    pub fn apply_to<'a>(&self, t: &'a mut Todo) -> &'a mut Todo {
        if let Some(title) = &self.title {
            t.title.clone_from(title);
        }

        if let Some(completed) = self.completed {
            t.completed = completed;
        }

        t
    }
}

/// Conditions for reading todo items. An empty query matches every item.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TodoQuery {
    /// Only match the todo item with this identifier.
    pub id: Option<Id>,

    /// Only match todo items with this completed flag.
    pub completed: Option<bool>,
}

impl TodoQuery {
    /// Matches every todo item.
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches the todo item with the given identifier.
    pub fn by_id(id: Id) -> Self {
        Self {
            id: Some(id),
            completed: None,
        }
    }

    /// Matches todo items with the given completed flag.
    pub fn by_completed(completed: bool) -> Self {
        Self {
            id: None,
            completed: Some(completed),
        }
    }

    /// Whether the given todo item satisfies every condition of this query.
    pub fn matches(&self, todo: &Todo) -> bool {
        self.id.is_none_or(|id| id == todo.id)
            && self.completed.is_none_or(|c| c == todo.completed)
    }
}

/// Number of todo items by status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TodoCounts {
    /// Todo items not yet completed.
    pub active: usize,

    /// Completed todo items.
    pub completed: usize,

    /// All todo items.
    pub total: usize,
}

impl TodoCounts {
    /// Counts the given todo items.
    pub fn of<'a>(todos: impl IntoIterator<Item = &'a Todo>) -> Self {
        todos.into_iter().fold(Self::default(), |mut acc, todo| {
            match todo.completed {
                true => acc.completed += 1,
                false => acc.active += 1,
            }
            acc.total += 1;
            acc
        })
    }
}
