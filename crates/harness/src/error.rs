// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Harness error types.
//!
//! Execution failures ([`HarnessError`]) and assertion failures
//! ([`AssertionError`]) are deliberately distinct: the former describe the
//! machinery (unknown function, interpreter unavailable), the latter are
//! test-contract violations surfaced to abort the current test case.
//! Neither mutates harness state.

use thiserror::Error;

/// Errors from harness construction and function execution.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The requested function is absent from the source model. Non-fatal:
    /// the invocation is skipped and no result is recorded.
    #[error("no function named '{name}' found")]
    UnknownFunction {
        /// The requested function name.
        name: String,
    },

    /// The interpreter process could not be launched. The stored result
    /// for the function is marked failed; there is no retry.
    #[error("failed to launch interpreter '{interpreter}': {source}")]
    Launch {
        /// Interpreter program name.
        interpreter: String,
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The script could not be modeled.
    #[error(transparent)]
    Model(#[from] shunt_model::ModelError),

    /// Variable absent from both the global map and the most recent
    /// captured set.
    #[error("no variable '{name}' found")]
    VariableNotFound {
        /// The requested variable name.
        name: String,
    },
}

/// Assertion failures: expected-vs-actual mismatches over captured state.
#[derive(Debug, Error)]
pub enum AssertionError {
    /// A command ran a different number of times than expected.
    #[error("expected '{command}' to run exactly {expected} time(s), but found {actual}")]
    CallCount {
        /// Asserted command text.
        command: String,
        /// Expected run count.
        expected: usize,
        /// Observed run count.
        actual: usize,
    },

    /// A command expected at least once never ran.
    #[error("expected '{command}' to run at least once, but it never ran")]
    NeverRan {
        /// Asserted command text.
        command: String,
    },

    /// No output line matched the pattern.
    #[error("no line in output matches pattern: {pattern}")]
    OutputMismatch {
        /// The pattern that failed to match.
        pattern: String,
    },

    /// The aggregated output matched a pattern it should not have.
    #[error("output matches pattern: {pattern}")]
    OutputMatched {
        /// The pattern that unexpectedly matched.
        pattern: String,
    },

    /// Exit status was non-zero where zero was expected.
    #[error("expected exit status 0, but status is {status}")]
    StatusNotOk {
        /// Observed status.
        status: i32,
    },

    /// Exit status was zero where non-zero was expected.
    #[error("expected a non-zero exit status, but status is 0")]
    StatusOk,

    /// A variable resolved to an unexpected value.
    #[error("variable '{name}': expected '{expected}', found '{actual}'")]
    VariableMismatch {
        /// Variable name.
        name: String,
        /// Expected value.
        expected: String,
        /// Observed value.
        actual: String,
    },

    /// Variable absent from both the global map and the captured set.
    #[error("no variable '{name}' found")]
    VariableNotFound {
        /// Variable name.
        name: String,
    },

    /// A user-supplied pattern failed to compile.
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// An assertion ran before any function was executed.
    #[error("no function has been executed yet")]
    NothingExecuted,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
