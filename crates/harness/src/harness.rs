// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The harness: isolated function execution, accumulated coverage.

use std::collections::{hash_map::Entry, HashMap, HashSet};
use std::path::Path;

use shunt_model::ScriptModel;

use crate::config::MockConfiguration;
use crate::error::HarnessError;
use crate::exec::ExecutionResult;
use crate::{exec, invocation, trace};

/// Default interpreter program.
const DEFAULT_INTERPRETER: &str = "bash";

/// Test harness over one script.
///
/// Each [`run_function`](Self::run_function) call spawns one child
/// interpreter, blocks until it exits, and supersedes that function's
/// previous result. The executed-line set is the exception: it accumulates
/// across every invocation made through this instance and is reset only by
/// constructing a new harness, so aggregate coverage reflects everything
/// exercised over a whole test session.
#[derive(Debug)]
pub struct Harness {
    pub(crate) model: ScriptModel,
    interpreter: String,
    /// Most recent result per function, last-write-wins.
    pub(crate) results: HashMap<String, ExecutionResult>,
    /// Default target for assertions and status checks.
    pub(crate) last_function: Option<String>,
    /// Monotonic accumulator of `(function, signature)` pairs.
    executed: HashSet<(String, String)>,
    /// Variables recovered from the most recent invocation's sentinel
    /// echoes; superseded each run.
    captured: HashMap<String, String>,
}

impl Harness {
    /// Build a harness by reading and modeling the script at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        Ok(Self::from_model(ScriptModel::load(path)?))
    }

    /// Build a harness over an already-constructed source model.
    pub fn from_model(model: ScriptModel) -> Self {
        Self {
            model,
            interpreter: DEFAULT_INTERPRETER.to_string(),
            results: HashMap::new(),
            last_function: None,
            executed: HashSet::new(),
            captured: HashMap::new(),
        }
    }

    /// Use a different interpreter program (must support `-c` and an
    /// equivalent execution-trace facility).
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// The static source model.
    pub fn model(&self) -> &ScriptModel {
        &self.model
    }

    /// Run `function` in a fresh child interpreter with the given mocks.
    ///
    /// Blocks until the child exits. A non-zero exit status is captured as
    /// normal data; assert on it explicitly for negative-path tests. An
    /// unknown function name is reported without spawning anything, and a
    /// launch failure records a failed result for the function.
    pub fn run_function(
        &mut self,
        function: &str,
        config: &MockConfiguration,
    ) -> Result<&ExecutionResult, HarnessError> {
        if !self.model.has_function(function) {
            return Err(HarnessError::UnknownFunction { name: function.to_string() });
        }

        let invocation = invocation::build(self.model.path(), function, config);
        tracing::debug!(function, "running function under trace");
        let result = match exec::run(&self.interpreter, &invocation) {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(function, error = %err, "interpreter launch failed");
                self.results.insert(function.to_string(), ExecutionResult::launch_failed());
                self.last_function = Some(function.to_string());
                return Err(err);
            }
        };

        let outcome = trace::interpret(&result.output, function);
        self.executed.extend(outcome.executed);
        self.captured.clear();
        self.captured.extend(outcome.variables);
        self.last_function = Some(function.to_string());

        match self.results.entry(function.to_string()) {
            Entry::Occupied(mut slot) => {
                slot.insert(result);
                Ok(slot.into_mut())
            }
            Entry::Vacant(slot) => Ok(slot.insert(result)),
        }
    }

    /// Most recent result for `function`, if it has been run.
    pub fn result(&self, function: &str) -> Option<&ExecutionResult> {
        self.results.get(function)
    }

    /// Result of the most recent invocation.
    pub fn last_result(&self) -> Option<&ExecutionResult> {
        self.last_function.as_deref().and_then(|f| self.results.get(f))
    }

    /// Name of the most recently executed function.
    pub fn last_function(&self) -> Option<&str> {
        self.last_function.as_deref()
    }

    /// Coverage percentage in `[0, 100]`: for one function, or aggregate
    /// over the whole script when `function` is `None`.
    ///
    /// The denominator is the static model's executable-line count
    /// (authoritative); the numerator counts distinct trace-derived
    /// signatures (best-effort). Zero denominators yield `0.0`.
    pub fn coverage(&self, function: Option<&str>) -> f64 {
        let (covered, total) = match function {
            Some(name) => {
                let total = self.model.function(name).map_or(0, |f| f.line_count());
                let covered = self.executed.iter().filter(|(f, _)| f == name).count();
                (covered, total)
            }
            None => (self.executed.len(), self.model.total_line_count()),
        };
        if total == 0 {
            return 0.0;
        }
        let percentage = (covered as f64 / total as f64) * 100.0;
        percentage.min(100.0)
    }

    /// Executed-line signatures accumulated for `function`, in no
    /// particular order.
    pub fn executed_lines(&self, function: &str) -> Vec<&str> {
        self.executed
            .iter()
            .filter(|(f, _)| f == function)
            .map(|(_, sig)| sig.as_str())
            .collect()
    }

    /// Resolve a variable: the static global map first, then the most
    /// recent invocation's captured set.
    pub fn variable(&self, name: &str) -> Result<&str, HarnessError> {
        self.model
            .global(name)
            .or_else(|| self.captured.get(name).map(String::as_str))
            .ok_or_else(|| HarnessError::VariableNotFound { name: name.to_string() })
    }

    /// Value captured for `name` during the most recent invocation, if any.
    pub fn captured_variable(&self, name: &str) -> Option<&str> {
        self.captured.get(name).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
