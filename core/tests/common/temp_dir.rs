// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary directory management for integration tests.

use std::path::PathBuf;

/// Temporary directory holding the todo file of a test.
///
/// Automatically cleans up when dropped.
#[derive(Debug)]
pub struct TempDir {
    inner: tempfile::TempDir,
}

impl TempDir {
    /// Path of the todo file inside the directory. It does not exist yet.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.inner.path().join("state").join("todos.json")
    }
}

/// Sets up a temporary directory for integration tests.
///
/// # Errors
///
/// Returns an error if directory creation fails.
pub fn setup_temp_dir() -> Result<TempDir, Box<dyn std::error::Error>> {
    Ok(TempDir {
        inner: tempfile::tempdir()?,
    })
}
