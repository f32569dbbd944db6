// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::rc::Rc;

use todomvc_core::{Controller, Id, Todo};

use super::{FakeView, SpyModel};

/// A controller wired to a spy model and a fake view.
pub struct Harness {
    pub model: Rc<SpyModel>,
    pub view: Rc<FakeView>,
    pub controller: Rc<Controller<SpyModel, FakeView>>,
}

/// Creates a controller over a model holding the given todo items.
///
/// # Example
///
/// ```ignore
/// let h = setup(vec![todo(42, "my todo", true)]);
/// h.controller.set_view("");
/// ```
#[must_use]
pub fn setup(todos: Vec<Todo>) -> Harness {
    let model = Rc::new(SpyModel::new(todos));
    let view = Rc::new(FakeView::new());
    let controller = Controller::new(model.clone(), view.clone());
    Harness {
        model,
        view,
        controller,
    }
}

/// Creates a todo item.
#[must_use]
pub fn todo(id: Id, title: &str, completed: bool) -> Todo {
    Todo::new(id, title).with_completed(completed)
}

/// One active and one completed todo item, ids 42 and 43.
#[must_use]
pub fn two_todos() -> Vec<Todo> {
    vec![
        todo(42, "my first todo", false),
        todo(43, "my second todo", true),
    ]
}

/// Two active todo items (42, 43) followed by three completed ones (44 to 46).
#[must_use]
pub fn five_todos() -> Vec<Todo> {
    vec![
        todo(42, "my first todo", false),
        todo(43, "my second todo", false),
        todo(44, "my third todo", true),
        todo(45, "my fourth todo", true),
        todo(46, "my fifth todo", true),
    ]
}
