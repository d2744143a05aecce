// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation string construction.
//!
//! Builds the single opaque command text a fresh child interpreter will
//! execute. Pure string assembly; no process is started here.

use std::fmt::Write as _;
use std::path::Path;

use crate::config::MockConfiguration;
use crate::trace::{SENTINEL_PREFIX, TRACE_PROMPT};

/// Here-document end marker for injected stdin. Private enough that test
/// input lines will not terminate the document early.
pub(crate) const HEREDOC_MARKER: &str = "SHUNT_STDIN_EOF";

/// Assemble the invocation for `function` against the script at `path`.
///
/// Construction order: trace prologue, `source`, command overrides,
/// variable exports, the call itself with verbatim arguments, optional
/// here-document stdin, then one sentinel echo per inspected variable.
/// The sentinel echoes run after the call returns; they are the only
/// channel for observing interpreter-local state, since the child is an
/// isolated process with no shared memory.
pub(crate) fn build(path: &Path, function: &str, config: &MockConfiguration) -> String {
    let mut command = String::new();
    let _ = write!(command, "PS4='{TRACE_PROMPT}'; set -x; ");
    let _ = write!(command, "source {}; ", path.display());

    for (name, mock) in &config.commands {
        if mock.payload.is_empty() {
            let _ = write!(command, "{name}() {{ {}; }}; ", mock.replacement);
        } else {
            let _ = write!(command, "{name}() {{ {} '{}'; }}; ", mock.replacement, mock.payload);
        }
    }
    for (name, value) in &config.variables {
        let _ = write!(command, "export {name}={value}; ");
    }

    command.push_str(function);
    for arg in &config.args {
        command.push(' ');
        command.push_str(arg);
    }

    if config.stdin_lines.is_empty() {
        command.push_str("; ");
    } else {
        let _ = write!(command, " <<{HEREDOC_MARKER}\n");
        for line in &config.stdin_lines {
            command.push_str(line);
            command.push('\n');
        }
        command.push_str(HEREDOC_MARKER);
        command.push('\n');
    }

    for name in &config.inspect {
        let _ = write!(command, "echo {SENTINEL_PREFIX}{name}=${name}; ");
    }
    command
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
