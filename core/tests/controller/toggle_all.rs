// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The "toggle all" checkbox updates every todo item.

use todomvc_core::{Filter, TodoPatch, TodoQuery, ViewCommand, ViewEvent};

use crate::common::{ModelCall, assert_rendered, five_todos, setup, todo};

#[test]
fn toggles_all_todos_to_completed() {
    let h = setup(five_todos());
    h.controller.set_view("");
    h.model.reset_calls();

    h.view.trigger(ViewEvent::ToggleAll { completed: true });

    assert_rendered(&h.view, &ViewCommand::SetFilter(Filter::All));
    let expected: Vec<_> = five_todos()
        .iter()
        .map(|a| ModelCall::Update(a.id, TodoPatch::completed(true)))
        .collect();
    assert_eq!(h.model.mutations(), expected);
    assert!(h.model.todos().iter().all(|a| a.completed));
}

#[test]
fn toggles_all_todos_to_active() {
    let h = setup(five_todos());
    h.controller.set_view("");

    h.view.trigger(ViewEvent::ToggleAll { completed: false });

    for id in [44, 45, 46] {
        assert!(h.model.was_called(&ModelCall::Update(id, TodoPatch::completed(false))));
    }
    assert!(h.model.todos().iter().all(|a| !a.completed));
}

#[test]
fn preserves_ids_while_toggling() {
    let h = setup(five_todos());
    h.controller.set_view("");

    h.view.trigger(ViewEvent::ToggleAll { completed: true });

    let ids: Vec<_> = h.model.todos().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![42, 43, 44, 45, 46]);
}

#[test]
fn updates_the_view() {
    let h = setup(vec![
        todo(42, "my first todo", false),
        todo(43, "my second todo", false),
        todo(44, "my third todo", true),
    ]);
    h.controller.set_view("");

    h.view.trigger(ViewEvent::ToggleAll { completed: true });

    assert_rendered(
        &h.view,
        &ViewCommand::ElementComplete {
            id: 42,
            completed: true,
        },
    );
    assert_rendered(
        &h.view,
        &ViewCommand::ElementComplete {
            id: 43,
            completed: true,
        },
    );
    assert_rendered(&h.view, &ViewCommand::ToggleAll { checked: true });
}

#[test]
fn does_not_reread_entries_when_all_is_shown() {
    let h = setup(five_todos());
    h.controller.set_view("");
    h.model.reset_calls();

    h.view.trigger(ViewEvent::ToggleAll { completed: true });

    assert_eq!(h.model.reads(), vec![TodoQuery::all()]);
}

#[test]
fn rereads_filtered_entries() {
    let h = setup(five_todos());
    h.controller.set_view("#/active");
    h.view.reset_renders();

    h.view.trigger(ViewEvent::ToggleAll { completed: true });

    assert_rendered(&h.view, &ViewCommand::ShowEntries(vec![]));
    assert_rendered(&h.view, &ViewCommand::SetFilter(Filter::Active));
}
