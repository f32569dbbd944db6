// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use colored::Color;

use crate::table::{Column, PaddingDirection, Table};
use crate::terminal_view::Entry;

#[derive(Debug)]
pub struct TodoFormatter {
    pub columns: Vec<TodoColumn>,
}

impl TodoFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                TodoColumn::Status(TodoColumnStatus),
                TodoColumn::Id(TodoColumnId),
                TodoColumn::Title(TodoColumnTitle),
            ],
        }
    }

    pub fn write(&self, w: &mut impl io::Write, entries: &[Entry]) -> io::Result<()> {
        Table::new(self.columns.as_slice(), entries).write_to(w)
    }
}

#[derive(Debug, Clone)]
pub enum TodoColumn {
    Id(TodoColumnId),
    Status(TodoColumnStatus),
    Title(TodoColumnTitle),
}

impl Column<Entry> for TodoColumn {
    fn format(&self, data: &Entry) -> String {
        match self {
            TodoColumn::Id(a) => a.format(data),
            TodoColumn::Status(a) => a.format(data),
            TodoColumn::Title(a) => a.format(data),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            TodoColumn::Id(_) => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &Entry) -> Option<Color> {
        match self {
            TodoColumn::Status(a) => a.get_color(data),
            TodoColumn::Title(a) => a.get_color(data),
            TodoColumn::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TodoColumnId;

impl TodoColumnId {
    fn format(&self, entry: &Entry) -> String {
        format!("#{}", entry.todo.id)
    }
}

#[derive(Debug, Clone)]
pub struct TodoColumnStatus;

impl TodoColumnStatus {
    fn format(&self, entry: &Entry) -> String {
        match entry.todo.completed {
            true => "[x]".to_string(),
            false => "[ ]".to_string(),
        }
    }

    fn get_color(&self, entry: &Entry) -> Option<Color> {
        entry.todo.completed.then_some(Color::Green)
    }
}

#[derive(Debug, Clone)]
pub struct TodoColumnTitle;

impl TodoColumnTitle {
    fn format(&self, entry: &Entry) -> String {
        match entry.editing {
            true => format!("{} (editing)", entry.todo.title),
            false => entry.todo.title.clone(),
        }
    }

    fn get_color(&self, entry: &Entry) -> Option<Color> {
        if entry.editing {
            Some(Color::Yellow)
        } else if entry.todo.completed {
            Some(Color::BrightBlack)
        } else {
            None
        }
    }
}
