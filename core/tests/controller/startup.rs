// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Initial display state set up by `set_view`.

use std::rc::Rc;

use todomvc_core::{EventKind, Filter, ViewCommand, ViewEvent};

use crate::common::{assert_rendered, setup, todo, two_todos};

#[test]
fn shows_entries_on_start_up() {
    let h = setup(two_todos());

    h.controller.set_view("");

    assert_rendered(&h.view, &ViewCommand::ShowEntries(two_todos()));
}

#[test]
fn binds_every_event() {
    let h = setup(vec![]);

    for kind in EventKind::ALL {
        assert!(h.view.is_bound(kind), "{kind:?} is not bound");
    }
}

#[test]
fn shows_content_block_when_todos_exist() {
    let h = setup(vec![todo(1, "my todo", true)]);

    h.controller.set_view("");

    assert_rendered(
        &h.view,
        &ViewCommand::ContentBlockVisibility { visible: true },
    );
}

#[test]
fn hides_content_block_when_no_todos_exist() {
    let h = setup(vec![]);

    h.controller.set_view("");

    assert_rendered(
        &h.view,
        &ViewCommand::ContentBlockVisibility { visible: false },
    );
}

#[test]
fn checks_toggle_all_when_all_todos_are_completed() {
    let h = setup(vec![todo(1, "my todo", true)]);

    h.controller.set_view("");

    assert_rendered(&h.view, &ViewCommand::ToggleAll { checked: true });
}

#[test]
fn unchecks_toggle_all_when_some_todo_is_active() {
    let h = setup(two_todos());

    h.controller.set_view("");

    assert_rendered(&h.view, &ViewCommand::ToggleAll { checked: false });
}

#[test]
fn sets_clear_completed_button() {
    let h = setup(vec![todo(42, "my todo", true)]);

    h.controller.set_view("");

    assert_rendered(
        &h.view,
        &ViewCommand::ClearCompletedButton {
            completed: 1,
            visible: true,
        },
    );
}

#[test]
fn hides_clear_completed_button_without_completed_todos() {
    let h = setup(vec![todo(42, "my todo", false)]);

    h.controller.set_view("");

    assert_rendered(
        &h.view,
        &ViewCommand::ClearCompletedButton {
            completed: 0,
            visible: false,
        },
    );
    assert_rendered(&h.view, &ViewCommand::UpdateElementCount(1));
}

#[test]
fn highlights_all_filter_by_default() {
    let h = setup(two_todos());

    h.controller.set_view("");

    assert_rendered(&h.view, &ViewCommand::SetFilter(Filter::All));
    assert_eq!(h.controller.active_route(), Filter::All);
}

#[test]
fn ignores_events_after_controller_is_dropped() {
    let h = setup(two_todos());
    let view = h.view.clone();
    let model = h.model.clone();
    drop(h);

    view.trigger(ViewEvent::ItemRemove { id: 42 });

    assert!(view.renders().is_empty());
    assert!(model.calls().is_empty());
    assert_eq!(Rc::strong_count(&model), 1);
}
