// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Child process execution and output capture.

use serde::Serialize;
use std::process::{Command, Stdio};

use crate::error::HarnessError;
use crate::trace::TRACE_MARKER;

/// Captured outcome of one function invocation.
///
/// Owned by the harness and superseded, not merged, by the next invocation
/// of the same function. The merged output doubles as the raw trace: the
/// interpreter writes trace records to stderr, so they appear here among
/// the script's own output lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    /// Merged output: stdout lines first, then stderr lines. Each stream's
    /// internal order is preserved; true cross-stream interleaving is not.
    pub output: Vec<String>,
    /// Child exit status (`-1` when the platform reports none, e.g. on
    /// signal death). Non-zero is normal data, not a harness failure.
    pub status: i32,
    /// Whether the child failed to launch at all. The one fatal condition:
    /// output is empty and status is `-1`.
    pub failed: bool,
}

impl ExecutionResult {
    /// Result recorded when the interpreter could not be launched.
    pub(crate) fn launch_failed() -> Self {
        Self { output: Vec::new(), status: -1, failed: true }
    }

    /// Interpreter-emitted trace records within the merged output.
    pub fn trace_lines(&self) -> impl Iterator<Item = &str> {
        self.output.iter().map(String::as_str).filter(|l| l.starts_with(TRACE_MARKER))
    }

    /// Exit status was zero.
    pub fn success(&self) -> bool {
        !self.failed && self.status == 0
    }
}

/// Run one invocation synchronously to completion.
///
/// Blocks until the child exits; there is no timeout and no cancellation,
/// so a hung script hangs the caller. Stdin is closed: line input, when
/// configured, travels inside the invocation as a here-document.
pub(crate) fn run(interpreter: &str, invocation: &str) -> Result<ExecutionResult, HarnessError> {
    tracing::debug!(interpreter, bytes = invocation.len(), "spawning child");
    let output = Command::new(interpreter)
        .arg("-c")
        .arg(invocation)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| HarnessError::Launch { interpreter: interpreter.to_string(), source })?;

    let mut lines: Vec<String> =
        String::from_utf8_lossy(&output.stdout).lines().map(str::to_string).collect();
    lines.extend(String::from_utf8_lossy(&output.stderr).lines().map(str::to_string));
    let status = output.status.code().unwrap_or(-1);
    tracing::debug!(status, lines = lines.len(), "child exited");

    Ok(ExecutionResult { output: lines, status, failed: false })
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
