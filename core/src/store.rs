// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::model::{CountCallback, DoneCallback, ReadCallback};
use crate::{Id, Model, Todo, TodoCounts, TodoPatch, TodoQuery};

/// Errors raised while loading or saving a [`Store`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("failed to access todo file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file does not hold a JSON array of todo items.
    #[error("failed to parse todo file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The backing file holds more than one todo item with the same identifier.
    #[error("duplicate todo id {id} in {}", .path.display())]
    DuplicateId { path: PathBuf, id: Id },

    /// The todo items could not be encoded.
    #[error("failed to encode todos: {0}")]
    Encode(#[from] serde_json::Error),
}

/// In-memory todo collection, optionally backed by a JSON file.
///
/// Mutations only touch memory; call [`Store::flush`] to write them back.
#[derive(Debug, Default)]
pub struct Store {
    path: Option<PathBuf>,
    todos: RefCell<Vec<Todo>>,
    dirty: Cell<bool>,
}

impl Store {
    /// Creates an empty store without a backing file.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Creates a store holding the given todo items, without a backing file.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            path: None,
            todos: RefCell::new(todos),
            dirty: Cell::new(false),
        }
    }

    /// Opens the store backed by the file at `path`. A missing file yields an empty store.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let todos = match fs::read(&path).await {
            Ok(content) if content.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(content) => {
                serde_json::from_slice(&content).map_err(|source| StoreError::Parse {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "todo file not found, starting empty");
                Vec::new()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        if let Some(id) = first_duplicate_id(&todos) {
            return Err(StoreError::DuplicateId { path, id });
        }

        tracing::debug!(path = %path.display(), count = todos.len(), "todo store opened");
        Ok(Self {
            path: Some(path),
            todos: RefCell::new(todos),
            dirty: Cell::new(false),
        })
    }

    /// Writes pending changes to the backing file, if any.
    pub async fn flush(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if !self.dirty.get() {
            tracing::debug!("no pending changes to flush");
            return Ok(());
        }

        let content = serde_json::to_vec_pretty(&*self.todos.borrow())?;
        if let Some(parent) = path.parent().filter(|a| !a.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Io {
                    path: parent.to_owned(),
                    source,
                })?;
        }
        fs::write(path, content)
            .await
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        self.dirty.set(false);
        tracing::debug!(path = %path.display(), "todo store flushed");
        Ok(())
    }

    /// The backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether there are changes not yet flushed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Returns the todo item with the given identifier.
    pub fn get(&self, id: Id) -> Option<Todo> {
        self.todos.borrow().iter().find(|a| a.id == id).cloned()
    }

    /// Returns a snapshot of every todo item.
    pub fn todos(&self) -> Vec<Todo> {
        self.todos.borrow().clone()
    }

    fn find(&self, query: &TodoQuery) -> Vec<Todo> {
        self.todos
            .borrow()
            .iter()
            .filter(|a| query.matches(a))
            .cloned()
            .collect()
    }

    /// One past the highest identifier, or `None` once identifiers are exhausted.
    fn next_id(&self) -> Option<Id> {
        match self.todos.borrow().iter().map(|a| a.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }
}

fn first_duplicate_id(todos: &[Todo]) -> Option<Id> {
    let mut seen = HashSet::with_capacity(todos.len());
    todos.iter().map(|a| a.id).find(|id| !seen.insert(*id))
}

impl Model for Store {
    fn read(&self, query: TodoQuery, callback: ReadCallback) {
        let todos = self.find(&query);
        tracing::debug!(?query, count = todos.len(), "read todos");
        callback(todos);
    }

    fn get_count(&self, callback: CountCallback) {
        let counts = TodoCounts::of(self.todos.borrow().iter());
        callback(counts);
    }

    fn create(&self, title: &str, callback: DoneCallback) {
        let Some(id) = self.next_id() else {
            tracing::error!(title, "todo ids exhausted, refusing to create todo");
            callback();
            return;
        };

        let todo = Todo::new(id, title.trim());
        tracing::debug!(id = todo.id, title = %todo.title, "create todo");
        self.todos.borrow_mut().push(todo);
        self.dirty.set(true);
        callback();
    }

    fn update(&self, id: Id, patch: TodoPatch, callback: DoneCallback) {
        {
            let mut todos = self.todos.borrow_mut();
            match todos.iter_mut().find(|a| a.id == id) {
                Some(todo) if !patch.is_empty() => {
                    tracing::debug!(id, ?patch, "update todo");
                    patch.apply_to(todo);
                    self.dirty.set(true);
                }
                Some(_) => {}
                None => tracing::warn!(id, "cannot update unknown todo"),
            }
        }
        callback();
    }

    fn remove(&self, id: Id, callback: DoneCallback) {
        {
            let mut todos = self.todos.borrow_mut();
            let before = todos.len();
            todos.retain(|a| a.id != id);
            if todos.len() != before {
                tracing::debug!(id, "remove todo");
                self.dirty.set(true);
            }
        }
        callback();
    }
}
