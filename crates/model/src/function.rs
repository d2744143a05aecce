// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-function source records.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

// Positional-parameter references: `$1`, `$name`, ...
#[allow(clippy::expect_used)]
static PARAM_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\w+)").expect("constant regex pattern is valid"));

/// One executable content line inside a function body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentLine {
    /// Physical 1-based line number in the script.
    pub number: usize,
    /// Normalized command text (comments and control fragments removed,
    /// compound segments rejoined).
    pub text: String,
}

/// Static record of one shell function.
///
/// Immutable once extraction commits it: the content-line count is the
/// coverage denominator for the function and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRecord {
    /// Function name, unique within a script.
    pub name: String,
    /// Declared parameter names, best-effort (may be empty).
    pub params: Vec<String>,
    /// Executable content lines in source order.
    pub lines: Vec<ContentLine>,
}

impl FunctionRecord {
    pub(crate) fn new(name: String, lines: Vec<ContentLine>) -> Self {
        let params = infer_params(&lines);
        Self { name, params, lines }
    }

    /// Number of executable content lines (the coverage denominator).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Infer the parameter list from the first content line containing a
/// parenthesis: every `$word` reference on that line, in order.
fn infer_params(lines: &[ContentLine]) -> Vec<String> {
    let Some(line) = lines.iter().find(|l| l.text.contains('(')) else {
        return Vec::new();
    };
    PARAM_REF
        .captures_iter(&line.text)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
#[path = "function_tests.rs"]
mod tests;
