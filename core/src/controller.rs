// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::Cell, rc::Rc};

use crate::{EventKind, Filter, Id, Model, TodoPatch, TodoQuery, View, ViewCommand, ViewEvent};

/// Mediates between a [`Model`] and a [`View`].
///
/// Routes select which todo items are read and shown, and the events emitted
/// by the view are turned into model mutations followed by re-renders.
pub struct Controller<M, V> {
    model: Rc<M>,
    view: Rc<V>,
    active_route: Cell<Filter>,
    last_active_route: Cell<Option<Filter>>,
}

impl<M: Model + 'static, V: View + 'static> Controller<M, V> {
    /// Creates the controller and binds its handlers to every view event.
    ///
    /// The view only keeps weak references to the controller, so events
    /// emitted after the controller is dropped are ignored.
    pub fn new(model: Rc<M>, view: Rc<V>) -> Rc<Self> {
        let that = Rc::new(Self {
            model,
            view,
            active_route: Cell::new(Filter::All),
            last_active_route: Cell::new(None),
        });

        for kind in EventKind::ALL {
            let weak = Rc::downgrade(&that);
            that.view.bind(
                kind,
                Rc::new(move |event: &ViewEvent| match weak.upgrade() {
                    Some(that) => that.handle(event),
                    None => tracing::debug!(?event, "controller dropped, ignoring event"),
                }),
            );
        }

        that
    }

    /// The filter selected by the last route.
    pub fn active_route(&self) -> Filter {
        self.active_route.get()
    }

    /// Loads and renders the todo items for the route, such as `#/active`.
    pub fn set_view(self: &Rc<Self>, route: &str) {
        let filter = Filter::from_route(route);
        tracing::debug!(route, %filter, "setting view");
        self.active_route.set(filter);
        self.filter(true);
        self.view.render(ViewCommand::SetFilter(filter));
    }

    /// Handles an event emitted by the view.
    pub fn handle(self: &Rc<Self>, event: &ViewEvent) {
        tracing::debug!(?event, "handling view event");
        match event {
            ViewEvent::NewTodo(title) => self.add_item(title),
            ViewEvent::ItemEdit { id } => self.edit_item(*id),
            ViewEvent::ItemEditDone { id, title } => self.edit_item_save(*id, title),
            ViewEvent::ItemEditCancel { id } => self.edit_item_cancel(*id),
            ViewEvent::ItemRemove { id } => self.remove_item(*id),
            ViewEvent::ItemToggle { id, completed } => self.toggle_complete(*id, *completed, false),
            ViewEvent::RemoveCompleted => self.remove_completed_items(),
            ViewEvent::ToggleAll { completed } => self.toggle_all(*completed),
        }
    }

    fn add_item(self: &Rc<Self>, title: &str) {
        if title.trim().is_empty() {
            tracing::debug!("ignoring todo with empty title");
            return;
        }

        let that = self.clone();
        self.model.create(
            title,
            Box::new(move || {
                that.filter(true);
                that.view.render(ViewCommand::ClearNewTodo);
            }),
        );
    }

    fn edit_item(&self, id: Id) {
        let view = self.view.clone();
        self.model.read(
            TodoQuery::by_id(id),
            Box::new(move |todos| match todos.into_iter().next() {
                Some(todo) => view.render(ViewCommand::EditItem {
                    id,
                    title: todo.title,
                }),
                None => tracing::warn!(id, "cannot edit unknown todo"),
            }),
        );
    }

    fn edit_item_save(self: &Rc<Self>, id: Id, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            self.remove_item(id);
            return;
        }

        let view = self.view.clone();
        let title = title.to_owned();
        self.model.update(
            id,
            TodoPatch::title(title.clone()),
            Box::new(move || view.render(ViewCommand::EditItemDone { id, title })),
        );
    }

    fn edit_item_cancel(&self, id: Id) {
        let view = self.view.clone();
        self.model.read(
            TodoQuery::by_id(id),
            Box::new(move |todos| match todos.into_iter().next() {
                Some(todo) => view.render(ViewCommand::EditItemDone {
                    id,
                    title: todo.title,
                }),
                None => tracing::warn!(id, "cannot cancel editing unknown todo"),
            }),
        );
    }

    fn remove_item(self: &Rc<Self>, id: Id) {
        let view = self.view.clone();
        self.model.remove(
            id,
            Box::new(move || view.render(ViewCommand::RemoveItem(id))),
        );
        self.filter(false);
    }

    fn remove_completed_items(self: &Rc<Self>) {
        let that = self.clone();
        self.model.read(
            TodoQuery::by_completed(true),
            Box::new(move |todos| {
                for todo in todos {
                    that.remove_item(todo.id);
                }
            }),
        );
        self.filter(false);
    }

    /// Updates the completed flag of one item. A silent toggle skips the
    /// refresh, leaving it to the caller.
    fn toggle_complete(self: &Rc<Self>, id: Id, completed: bool, silent: bool) {
        let view = self.view.clone();
        self.model.update(
            id,
            TodoPatch::completed(completed),
            Box::new(move || view.render(ViewCommand::ElementComplete { id, completed })),
        );

        if !silent {
            self.filter(false);
        }
    }

    fn toggle_all(self: &Rc<Self>, completed: bool) {
        let that = self.clone();
        self.model.read(
            TodoQuery::all(),
            Box::new(move |todos| {
                for todo in todos {
                    that.toggle_complete(todo.id, completed, true);
                }
            }),
        );
        self.filter(false);
        self.view.render(ViewCommand::SetFilter(self.active_route.get()));
    }

    fn update_count(&self) {
        let view = self.view.clone();
        self.model.get_count(Box::new(move |counts| {
            view.render(ViewCommand::UpdateElementCount(counts.active));
            view.render(ViewCommand::ClearCompletedButton {
                completed: counts.completed,
                visible: counts.completed > 0,
            });
            view.render(ViewCommand::ToggleAll {
                checked: counts.completed == counts.total,
            });
            view.render(ViewCommand::ContentBlockVisibility {
                visible: counts.total > 0,
            });
        }));
    }

    /// Refreshes the counters, then re-reads the entries of the active route.
    ///
    /// The entries are left alone when "all" stays selected and nothing forces
    /// a re-read: the view already dropped or updated the affected entry.
    fn filter(&self, force: bool) {
        let active = self.active_route.get();
        self.update_count();

        let all_again =
            active == Filter::All && self.last_active_route.get() == Some(Filter::All);
        if force || !all_again {
            self.show_entries(active);
        }

        self.last_active_route.set(Some(active));
    }

    fn show_entries(&self, filter: Filter) {
        let view = self.view.clone();
        self.model.read(
            filter.query(),
            Box::new(move |todos| view.render(ViewCommand::ShowEntries(todos))),
        );
    }
}

impl<M, V> std::fmt::Debug for Controller<M, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("active_route", &self.active_route.get())
            .field("last_active_route", &self.last_active_route.get())
            .finish_non_exhaustive()
    }
}
