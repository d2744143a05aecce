// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trace interpretation: reconciling the interpreter's execution trace
//! against the static source model.
//!
//! The wire format between the child interpreter and this module is the
//! trace prompt installed by the invocation builder: every executed
//! statement is echoed as `+ line <N>: <command>`. The trace carries no
//! structural context, so reconciliation is a best-effort fingerprint
//! match: precise about which source line ran, deliberately coarse about
//! the command text (runtime expansion makes every iteration's trace line
//! textually unique).

use regex::Regex;
use std::sync::LazyLock;

use shunt_model::is_control;

/// Prefix identifying an interpreter-emitted trace record at depth one.
pub const TRACE_MARKER: &str = "+ ";

/// Prompt format installed in the child so each trace record carries its
/// originating line number. `${LINENO}` is expanded by the child, per
/// statement.
pub const TRACE_PROMPT: &str = "+ line ${LINENO}: ";

/// Reserved prefix for variable read-back lines. Must not collide with real
/// script output; collisions corrupt captured values (documented risk, not
/// defended against).
pub const SENTINEL_PREFIX: &str = "var_";

/// Trace lines numbered at or below this originate from the invocation
/// string itself rather than the sourced script.
const PREAMBLE_MAX_LINE: u64 = 2;

// `line <N>: <command>` payload tag.
#[allow(clippy::expect_used)]
static LINE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^line (\d+): (.*)$").expect("constant regex pattern is valid")
});

// Traced sentinel echo: `echo var_<name>=<value>` after expansion.
#[allow(clippy::expect_used)]
static SENTINEL_ECHO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^echo var_(\w+)=(.*)$").expect("constant regex pattern is valid")
});

/// What one invocation's trace contributed.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct TraceOutcome {
    /// `(function, signature)` pairs destined for the executed-line set.
    pub(crate) executed: Vec<(String, String)>,
    /// Variables recovered from sentinel echoes, in emission order.
    pub(crate) variables: Vec<(String, String)>,
}

/// Interpret the merged output of one invocation of `function`.
///
/// Preamble trace lines (numbered 0..=2, i.e. emitted by the invocation
/// string itself) are only eligible as the function-entry marker; the entry
/// contributes the pair `(function, function)` so the opener line in the
/// static model stays coverable. Sentinel echoes are captured wherever they
/// appear and never count as executed lines. Every other trace line seen
/// after entry contributes a `(function, signature)` pair unless its
/// command text classifies as control structure.
pub(crate) fn interpret(output: &[String], function: &str) -> TraceOutcome {
    let mut outcome = TraceOutcome::default();
    let mut in_function = false;

    for line in output {
        let Some(payload) = line.strip_prefix(TRACE_MARKER) else {
            continue;
        };
        let Some(tag) = LINE_TAG.captures(payload) else {
            continue;
        };
        let number: u64 = tag[1].parse().unwrap_or(u64::MAX);
        let command = &tag[2];

        if let Some(sentinel) = SENTINEL_ECHO.captures(command) {
            let name = sentinel[1].to_string();
            let value = sentinel[2].trim_matches('\'').trim_matches('"').to_string();
            tracing::debug!(name = %name, "captured variable from sentinel echo");
            outcome.variables.push((name, value));
            continue;
        }

        if number <= PREAMBLE_MAX_LINE {
            if !in_function && is_entry(command, function) {
                tracing::debug!(function, "trace entered function");
                in_function = true;
                outcome.executed.push((function.to_string(), function.to_string()));
            }
            continue;
        }

        if in_function && !is_control(command) {
            outcome.executed.push((function.to_string(), signature(payload)));
        }
    }
    outcome
}

/// Whether a preamble command is the invocation of `function` (optionally
/// followed by arguments).
fn is_entry(command: &str, function: &str) -> bool {
    command == function
        || command
            .strip_prefix(function)
            .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

/// Coarse executed-line fingerprint: the first two whitespace-delimited
/// tokens of the trace payload, i.e. `line <N>:`. Sufficient to deduplicate
/// repeated executions of one statement without full-line equality.
pub(crate) fn signature(payload: &str) -> String {
    payload.split_whitespace().take(2).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "trace_tests.rs"]
mod tests;
