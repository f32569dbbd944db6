// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Removing single entries and clearing completed ones.

use todomvc_core::{TodoQuery, ViewCommand, ViewEvent};

use crate::common::{ModelCall, assert_not_rendered, assert_rendered, setup, todo, two_todos};

#[test]
fn removes_an_entry_from_the_model() {
    let h = setup(two_todos());
    h.controller.set_view("");

    h.view.trigger(ViewEvent::ItemRemove { id: 42 });

    assert!(h.model.was_called(&ModelCall::Remove(42)));
    assert_eq!(h.model.todos(), vec![todo(43, "my second todo", true)]);
}

#[test]
fn removes_an_entry_from_the_view() {
    let h = setup(vec![todo(42, "my todo", true)]);
    h.controller.set_view("");

    h.view.trigger(ViewEvent::ItemRemove { id: 42 });

    assert_rendered(&h.view, &ViewCommand::RemoveItem(42));
}

#[test]
fn updates_the_element_count() {
    let h = setup(vec![todo(42, "my todo", false), todo(43, "other", false)]);
    h.controller.set_view("");
    h.view.reset_renders();

    h.view.trigger(ViewEvent::ItemRemove { id: 42 });

    assert_rendered(&h.view, &ViewCommand::UpdateElementCount(1));
}

#[test]
fn hides_content_block_after_removing_the_last_entry() {
    let h = setup(vec![todo(42, "my todo", true)]);
    h.controller.set_view("");
    h.view.reset_renders();

    h.view.trigger(ViewEvent::ItemRemove { id: 42 });

    assert_rendered(&h.view, &ViewCommand::UpdateElementCount(0));
    assert_rendered(
        &h.view,
        &ViewCommand::ContentBlockVisibility { visible: false },
    );
}

#[test]
fn removes_a_completed_entry_from_the_model() {
    let h = setup(vec![todo(42, "my todo", true)]);
    h.controller.set_view("");

    h.view.trigger(ViewEvent::RemoveCompleted);

    assert!(h.model.reads().contains(&TodoQuery::by_completed(true)));
    assert!(h.model.was_called(&ModelCall::Remove(42)));
}

#[test]
fn removes_a_completed_entry_from_the_view() {
    let h = setup(vec![todo(42, "my todo", true)]);
    h.controller.set_view("");

    h.view.trigger(ViewEvent::RemoveCompleted);

    assert_rendered(&h.view, &ViewCommand::RemoveItem(42));
}

#[test]
fn keeps_active_entries_when_removing_completed() {
    let h = setup(two_todos());
    h.controller.set_view("");
    h.model.reset_calls();

    h.view.trigger(ViewEvent::RemoveCompleted);

    assert_eq!(h.model.mutations(), vec![ModelCall::Remove(43)]);
    assert_not_rendered(&h.view, &ViewCommand::RemoveItem(42));
    assert_eq!(h.model.todos(), vec![todo(42, "my first todo", false)]);
    assert_eq!(
        h.view.renders().last(),
        Some(&ViewCommand::ContentBlockVisibility { visible: true })
    );
}
