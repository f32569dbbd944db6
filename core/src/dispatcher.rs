// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use crate::{EventKind, Handler, ViewEvent};

/// Registry of view event handlers, one per event kind.
///
/// Views keep one of these to implement [`crate::View::bind`] and route the
/// events they emit to the bound handler.
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<EventKind, Handler>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the handler for the event kind, replacing any previous one.
    pub fn register(&mut self, kind: EventKind, handler: Handler) {
        if self.handlers.insert(kind, handler).is_some() {
            tracing::debug!(?kind, "replacing bound handler");
        }
    }

    /// Whether a handler is bound for the event kind.
    pub fn is_bound(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Looks up the handler for the event.
    ///
    /// The handler is handed out rather than invoked here, so callers can
    /// release any borrow of the dispatcher before running it.
    pub fn handler(&self, event: &ViewEvent) -> Option<Handler> {
        self.handlers.get(&event.kind()).cloned()
    }

    /// Invokes the handler bound for the event, returning whether one was bound.
    pub fn dispatch(&self, event: &ViewEvent) -> bool {
        match self.handler(event) {
            Some(handler) => {
                handler(event);
                true
            }
            None => {
                tracing::warn!(?event, "no handler bound for event");
                false
            }
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("bound", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
