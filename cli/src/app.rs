// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, rc::Rc};

use todomvc_core::{Config, Controller, Id, Store, Todo, ViewEvent};

use crate::terminal_view::TerminalView;

/// The todo store, the terminal view and the controller wiring them together.
#[derive(Debug)]
pub struct App {
    config: Config,
    store: Rc<Store>,
    view: Rc<TerminalView>,
    controller: Rc<Controller<Store, TerminalView>>,
}

impl App {
    /// Opens the todo store named by the configuration.
    pub async fn open(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;

        let store = match &config.data_path {
            Some(path) => Store::open(path).await?,
            None => {
                tracing::warn!("no data path available, changes will not be saved");
                Store::in_memory()
            }
        };
        Ok(Self::with_store(config, store))
    }

    /// Wires a controller around an already opened store.
    pub fn with_store(config: Config, store: Store) -> Self {
        let store = Rc::new(store);
        let view = Rc::new(TerminalView::new());
        let controller = Controller::new(store.clone(), view.clone());
        Self {
            config,
            store,
            view,
            controller,
        }
    }

    /// Shows the given route, or the configured default one.
    pub fn start(&self, route: Option<&str>) {
        let route = route.unwrap_or(&self.config.default_route);
        tracing::debug!(route, "showing route");
        self.controller.set_view(route);
    }

    /// Emits a user interaction to the controller.
    pub fn trigger(&self, event: ViewEvent) {
        self.view.trigger(event);
    }

    /// Returns the todo item with the given identifier, or fails.
    pub fn get(&self, id: Id) -> Result<Todo, Box<dyn Error>> {
        self.store
            .get(id)
            .ok_or_else(|| format!("Todo not found: #{id}").into())
    }

    pub fn view(&self) -> &TerminalView {
        &self.view
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Saves pending changes.
    pub async fn close(self) -> Result<(), Box<dyn Error>> {
        self.store.flush().await?;
        Ok(())
    }
}
