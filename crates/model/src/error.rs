// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for script model construction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a [`crate::ScriptModel`].
#[derive(Debug, Error)]
pub enum ModelError {
    /// The script file could not be read.
    #[error("failed to read script '{}': {source}", path.display())]
    Io {
        /// Path of the script under test.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
