// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{Id, Todo, TodoCounts, TodoPatch, TodoQuery};

/// Completion callback receiving the todo items matched by a read.
pub type ReadCallback = Box<dyn FnOnce(Vec<Todo>)>;

/// Completion callback receiving the todo counts.
pub type CountCallback = Box<dyn FnOnce(TodoCounts)>;

/// Completion callback of a mutation.
pub type DoneCallback = Box<dyn FnOnce()>;

/// Persistence layer over the todo collection.
///
/// Every operation completes by invoking its callback exactly once. Callbacks
/// may call back into the model, so implementations must not hold any
/// internal borrow while invoking them.
pub trait Model {
    /// Reads the todo items matching the query.
    fn read(&self, query: TodoQuery, callback: ReadCallback);

    /// Counts the todo items by status.
    fn get_count(&self, callback: CountCallback);

    /// Creates a new todo item with the given title.
    fn create(&self, title: &str, callback: DoneCallback);

    /// Applies the patch to the todo item with the given identifier.
    fn update(&self, id: Id, patch: TodoPatch, callback: DoneCallback);

    /// Removes the todo item with the given identifier.
    fn remove(&self, id: Id, callback: DoneCallback);
}
