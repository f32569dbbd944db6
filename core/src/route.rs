// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use serde::Serialize;

use crate::TodoQuery;

const NAME_ALL: &str = "";
const NAME_ACTIVE: &str = "active";
const NAME_COMPLETED: &str = "completed";

/// The filter selected by a route, such as `#/active`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Filter {
    /// Every todo item.
    #[default]
    All,

    /// Todo items not yet completed.
    Active,

    /// Completed todo items.
    #[cfg_attr(feature = "clap", clap(alias = "done"))]
    Completed,
}

impl Filter {
    /// Parses a location fragment like `""`, `"#/"`, `"#/active"` or `"#/completed"`.
    ///
    /// The page is the second `/`-separated segment. A missing page selects
    /// [`Filter::All`], and so does an unknown one.
    pub fn from_route(route: &str) -> Self {
        let page = route.split('/').nth(1).unwrap_or_default();
        page.parse().unwrap_or_else(|()| {
            tracing::warn!(route, "unknown route, showing all todos");
            Filter::All
        })
    }

    /// The name rendered to highlight the filter: empty for [`Filter::All`].
    pub fn name(&self) -> &'static str {
        match self {
            Filter::All => NAME_ALL,
            Filter::Active => NAME_ACTIVE,
            Filter::Completed => NAME_COMPLETED,
        }
    }

    /// The route that selects this filter.
    pub fn route(&self) -> String {
        format!("#/{}", self.name())
    }

    /// The read query that yields the todo items of this filter.
    pub fn query(&self) -> TodoQuery {
        match self {
            Filter::All => TodoQuery::all(),
            Filter::Active => TodoQuery::by_completed(false),
            Filter::Completed => TodoQuery::by_completed(true),
        }
    }
}

impl AsRef<str> for Filter {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl From<Filter> for &'static str {
    fn from(filter: Filter) -> Self {
        filter.name()
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::All => write!(f, "All"),
            Filter::Active => write!(f, "Active"),
            Filter::Completed => write!(f, "Completed"),
        }
    }
}

impl FromStr for Filter {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            NAME_ALL => Ok(Filter::All),
            NAME_ACTIVE => Ok(Filter::Active),
            NAME_COMPLETED => Ok(Filter::Completed),
            _ => Err(()),
        }
    }
}
