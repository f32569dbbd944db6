// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end todo lifecycle workflow tests.
//!
//! These tests drive a controller over a file backed store, from creating
//! todos through editing, completing and clearing them, and check that the
//! changes survive reopening the store.

use std::rc::Rc;

use todomvc_core::{Controller, Filter, Store, Todo, ViewCommand, ViewEvent};

use crate::common::{FakeView, assert_rendered, setup_temp_dir};

#[tokio::test]
async fn todo_lifecycle_persists_across_reopen() {
    // Arrange
    let temp_dir = setup_temp_dir().unwrap();
    let path = temp_dir.data_path();
    let store = Rc::new(Store::open(&path).await.unwrap());
    let view = Rc::new(FakeView::new());
    let controller = Controller::new(store.clone(), view.clone());
    controller.set_view("");

    // Act - create, rename, complete
    view.trigger(ViewEvent::NewTodo("write report".to_string()));
    view.trigger(ViewEvent::NewTodo("water plants".to_string()));
    view.trigger(ViewEvent::ItemEditDone {
        id: 1,
        title: "write the report".to_string(),
    });
    view.trigger(ViewEvent::ItemToggle {
        id: 2,
        completed: true,
    });
    store.flush().await.unwrap();

    // Assert
    let reopened = Store::open(&path).await.unwrap();
    assert_eq!(
        reopened.todos(),
        vec![
            Todo::new(1, "write the report"),
            Todo::new(2, "water plants").with_completed(true),
        ]
    );
}

#[tokio::test]
async fn todo_lifecycle_clear_completed() {
    // Arrange
    let temp_dir = setup_temp_dir().unwrap();
    let path = temp_dir.data_path();
    let store = Rc::new(Store::open(&path).await.unwrap());
    let view = Rc::new(FakeView::new());
    let controller = Controller::new(store.clone(), view.clone());
    controller.set_view("#/completed");
    for title in ["a", "b", "c"] {
        view.trigger(ViewEvent::NewTodo(title.to_string()));
    }

    // Act - complete everything, then reopen one and clear the rest
    view.trigger(ViewEvent::ToggleAll { completed: true });
    view.trigger(ViewEvent::ItemToggle {
        id: 2,
        completed: false,
    });
    view.reset_renders();
    view.trigger(ViewEvent::RemoveCompleted);
    store.flush().await.unwrap();

    // Assert
    assert_rendered(&view, &ViewCommand::RemoveItem(1));
    assert_rendered(&view, &ViewCommand::RemoveItem(3));
    assert_rendered(&view, &ViewCommand::ShowEntries(vec![]));
    assert_eq!(controller.active_route(), Filter::Completed);

    let reopened = Store::open(&path).await.unwrap();
    assert_eq!(reopened.todos(), vec![Todo::new(2, "b")]);
}

#[tokio::test]
async fn todo_lifecycle_untouched_store_is_not_written() {
    let temp_dir = setup_temp_dir().unwrap();
    let path = temp_dir.data_path();
    let store = Rc::new(Store::open(&path).await.unwrap());
    let view = Rc::new(FakeView::new());
    let controller = Controller::new(store.clone(), view.clone());

    controller.set_view("#/active");
    view.trigger(ViewEvent::ItemEdit { id: 1 });
    store.flush().await.unwrap();

    assert!(!path.exists());
}
