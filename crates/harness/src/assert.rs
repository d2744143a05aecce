// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion predicates over captured execution state.
//!
//! Thin read-only layer: every predicate inspects the most recent
//! [`ExecutionResult`](crate::ExecutionResult) for the last executed
//! function (or an explicitly named one via [`Harness::call_count`]) and
//! reports mismatches as [`AssertionError`] values for the test case to
//! propagate. Nothing here mutates harness state.

use regex::Regex;

use crate::error::AssertionError;
use crate::harness::Harness;

impl Harness {
    /// Count trace records whose command starts with the literal `command`
    /// text, in the stored output of `function` (or of the last executed
    /// function when `None`).
    pub fn call_count(
        &self,
        function: Option<&str>,
        command: &str,
    ) -> Result<usize, AssertionError> {
        let output = self.assertion_output(function)?;
        let pattern = format!(r"^\+ line \d+: {}", regex::escape(command));
        let matcher = compile(&pattern)?;
        Ok(output.iter().filter(|line| matcher.is_match(line.as_str())).count())
    }

    /// Assert `command` ran exactly once.
    pub fn assert_run_once(&self, command: &str) -> Result<(), AssertionError> {
        self.assert_call_count(command, 1)
    }

    /// Assert `command` ran at least once.
    pub fn assert_run(&self, command: &str) -> Result<(), AssertionError> {
        let actual = self.call_count(None, command)?;
        if actual == 0 {
            return Err(AssertionError::NeverRan { command: command.to_string() });
        }
        Ok(())
    }

    /// Assert `command` ran exactly `expected` times.
    pub fn assert_call_count(&self, command: &str, expected: usize) -> Result<(), AssertionError> {
        let actual = self.call_count(None, command)?;
        if actual != expected {
            return Err(AssertionError::CallCount {
                command: command.to_string(),
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Assert some line of the captured output matches `pattern`.
    pub fn assert_output_matches(&self, pattern: &str) -> Result<(), AssertionError> {
        let matcher = compile(pattern)?;
        let output = self.assertion_output(None)?;
        if output.iter().any(|line| matcher.is_match(line.as_str())) {
            return Ok(());
        }
        Err(AssertionError::OutputMismatch { pattern: pattern.to_string() })
    }

    /// Assert the aggregated (newline-joined) output does not match
    /// `pattern`.
    pub fn assert_output_not_matches(&self, pattern: &str) -> Result<(), AssertionError> {
        let matcher = compile(pattern)?;
        let aggregated = self.assertion_output(None)?.join("\n");
        if matcher.is_match(&aggregated) {
            return Err(AssertionError::OutputMatched { pattern: pattern.to_string() });
        }
        Ok(())
    }

    /// Assert the last invocation exited with status zero.
    pub fn assert_status_ok(&self) -> Result<(), AssertionError> {
        let result = self.last_result().ok_or(AssertionError::NothingExecuted)?;
        if result.status != 0 {
            return Err(AssertionError::StatusNotOk { status: result.status });
        }
        Ok(())
    }

    /// Assert the last invocation exited with a non-zero status.
    pub fn assert_status_not_ok(&self) -> Result<(), AssertionError> {
        let result = self.last_result().ok_or(AssertionError::NothingExecuted)?;
        if result.status == 0 {
            return Err(AssertionError::StatusOk);
        }
        Ok(())
    }

    /// Assert a variable resolves to `expected`, consulting the static
    /// global map first and then the most recent captured set.
    pub fn assert_variable_equals(
        &self,
        name: &str,
        expected: &str,
    ) -> Result<(), AssertionError> {
        let actual = self
            .variable(name)
            .map_err(|_| AssertionError::VariableNotFound { name: name.to_string() })?;
        if actual != expected {
            return Err(AssertionError::VariableMismatch {
                name: name.to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
        Ok(())
    }

    fn assertion_output(&self, function: Option<&str>) -> Result<&[String], AssertionError> {
        let target = function
            .or(self.last_function.as_deref())
            .ok_or(AssertionError::NothingExecuted)?;
        self.results
            .get(target)
            .map(|result| result.output.as_slice())
            .ok_or(AssertionError::NothingExecuted)
    }
}

fn compile(pattern: &str) -> Result<Regex, AssertionError> {
    Regex::new(pattern)
        .map_err(|source| AssertionError::Pattern { pattern: pattern.to_string(), source })
}

#[cfg(test)]
#[path = "assert_tests.rs"]
mod tests;
