// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the todomvc application: the todo data model, the [`Model`] and
//! [`View`] contracts, and the [`Controller`] mediating between them.

mod config;
mod controller;
mod dispatcher;
mod model;
mod route;
mod store;
mod todo;
mod view;

pub use crate::config::{APP_NAME, Config};
pub use crate::controller::Controller;
pub use crate::dispatcher::Dispatcher;
pub use crate::model::{CountCallback, DoneCallback, Model, ReadCallback};
pub use crate::route::Filter;
pub use crate::store::{Store, StoreError};
pub use crate::todo::{Id, Todo, TodoCounts, TodoPatch, TodoQuery};
pub use crate::view::{EventKind, Handler, View, ViewCommand, ViewEvent};
