// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Routes select the filtered read issued against the model.

use todomvc_core::{Filter, TodoQuery, ViewCommand};

use crate::common::{assert_rendered, five_todos, setup, todo, two_todos};

#[test]
fn shows_all_entries_without_a_route() {
    let item = todo(1, "my todo", false);
    let h = setup(vec![item.clone()]);

    h.controller.set_view("");

    assert_rendered(&h.view, &ViewCommand::ShowEntries(vec![item]));
    assert_eq!(h.model.reads(), vec![TodoQuery::all()]);
}

#[test]
fn shows_all_entries_with_all_route() {
    let item = todo(1, "my todo", false);
    let h = setup(vec![item.clone()]);

    h.controller.set_view("#/");

    assert_rendered(&h.view, &ViewCommand::ShowEntries(vec![item]));
}

#[test]
fn shows_active_entries() {
    let h = setup(five_todos());

    h.controller.set_view("#/active");

    let active = five_todos()[..2].to_vec();
    assert_rendered(&h.view, &ViewCommand::ShowEntries(active));
    assert_rendered(&h.view, &ViewCommand::SetFilter(Filter::Active));

    let reads = h.model.reads();
    assert!(reads.contains(&TodoQuery::by_completed(false)));
    assert!(!reads.contains(&TodoQuery::by_completed(true)));
}

#[test]
fn shows_completed_entries() {
    let h = setup(five_todos());

    h.controller.set_view("#/completed");

    let completed = five_todos()[2..].to_vec();
    assert_rendered(&h.view, &ViewCommand::ShowEntries(completed));
    assert_rendered(&h.view, &ViewCommand::SetFilter(Filter::Completed));

    let reads = h.model.reads();
    assert!(reads.contains(&TodoQuery::by_completed(true)));
    assert!(!reads.contains(&TodoQuery::by_completed(false)));
}

#[test]
fn highlights_active_filter_when_switching_to_active_view() {
    let h = setup(two_todos());

    h.controller.set_view("");
    h.controller.set_view("#/active");

    assert_eq!(
        h.view.renders().last(),
        Some(&ViewCommand::SetFilter(Filter::Active))
    );
    assert_eq!(h.controller.active_route(), Filter::Active);
}

#[test]
fn highlights_completed_filter_when_switching_to_completed_view() {
    let h = setup(two_todos());

    h.controller.set_view("#/completed");

    assert_rendered(&h.view, &ViewCommand::SetFilter(Filter::Completed));
}

#[test]
fn rereads_entries_when_switching_back_to_all() {
    let h = setup(two_todos());
    h.controller.set_view("#/active");
    h.model.reset_calls();
    h.view.reset_renders();

    h.controller.set_view("#/");

    assert_eq!(h.model.reads(), vec![TodoQuery::all()]);
    assert_rendered(&h.view, &ViewCommand::ShowEntries(two_todos()));
}

#[test]
fn unknown_route_falls_back_to_all() {
    let h = setup(two_todos());

    h.controller.set_view("#/archived");

    assert_rendered(&h.view, &ViewCommand::ShowEntries(two_todos()));
    assert_rendered(&h.view, &ViewCommand::SetFilter(Filter::All));
}
