// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mock configuration for one function invocation.

use indexmap::IndexMap;

/// Replacement for one external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMock {
    /// Implementation text invoked by the override (e.g. `echo`).
    pub replacement: String,
    /// Literal payload passed to the replacement as its sole quoted
    /// argument; omitted from the override when empty.
    pub payload: String,
}

/// Everything injected into one function invocation: command overrides,
/// exported variables, call arguments, stdin lines, and the variables to
/// read back afterwards.
///
/// Transient by design: it only shapes the invocation string and is not
/// retained by the harness.
#[derive(Debug, Clone, Default)]
pub struct MockConfiguration {
    pub(crate) commands: IndexMap<String, CommandMock>,
    pub(crate) variables: IndexMap<String, String>,
    pub(crate) args: Vec<String>,
    pub(crate) stdin_lines: Vec<String>,
    pub(crate) inspect: Vec<String>,
}

impl MockConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override command `name` with `replacement`, invoked with `payload`
    /// as its single quoted argument (pass an empty payload for none).
    ///
    /// The override is defined in the child's scope before the function
    /// runs, so the function cannot tell it apart from the real command.
    pub fn mock_command(
        mut self,
        name: impl Into<String>,
        replacement: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        self.commands.insert(
            name.into(),
            CommandMock { replacement: replacement.into(), payload: payload.into() },
        );
        self
    }

    /// Export `name=value` into the child before the function runs.
    pub fn mock_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Append one literal call argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several literal call arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append one line of line-oriented standard input (consumed by `read`
    /// inside the function).
    pub fn stdin_line(mut self, line: impl Into<String>) -> Self {
        self.stdin_lines.push(line.into());
        self
    }

    /// Request the post-execution value of variable `name` to be surfaced
    /// through the sentinel read-back channel.
    pub fn inspect(mut self, name: impl Into<String>) -> Self {
        self.inspect.push(name.into());
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
