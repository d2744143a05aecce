// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script scanning: functions, globals, and the executable-line totals.
//!
//! A sequential line scan with an "inside function" flag. No AST is built;
//! recognition is purely line-oriented (see [`crate::line`]).

use indexmap::IndexMap;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::error::ModelError;
use crate::function::{ContentLine, FunctionRecord};
use crate::line::{is_control, split_compound, strip_comment};

// Function header: optional `function` keyword, a name, `()`. The opening
// brace may trail the header or sit alone on the next line.
#[allow(clippy::expect_used)]
static FUNCTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:function\s+)?(\w+)\s*\(\s*\)").expect("constant regex pattern is valid")
});

// Top-level `name=value` assignment.
#[allow(clippy::expect_used)]
static GLOBAL_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(.*)$")
        .expect("constant regex pattern is valid")
});

/// Static model of one script: function records keyed by name plus the
/// top-level variable assignments, all fixed at load time.
#[derive(Debug, Clone)]
pub struct ScriptModel {
    path: PathBuf,
    functions: IndexMap<String, FunctionRecord>,
    globals: IndexMap<String, String>,
}

impl ScriptModel {
    /// Read and model a script file. The file is read fully once; observing
    /// later edits requires building a new model.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(path, &text))
    }

    /// Model script text directly. `path` is retained for invocation
    /// building and error messages only; the text is not re-read.
    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Self {
        let path = path.into();
        let mut scan = Scan::default();
        let lines: Vec<&str> = text.lines().collect();

        for (idx, raw) in lines.iter().enumerate() {
            let header = FUNCTION_HEADER.captures(raw);
            if let Some(caps) = header {
                scan.open(caps[1].to_string());
                // Brace on the next line: skip the header itself, the bare
                // `{` line will be captured as the opener's content line.
                if !raw.trim_end().ends_with('{')
                    && lines.get(idx + 1).map(|l| l.trim()) == Some("{")
                {
                    continue;
                }
            }

            if scan.in_function {
                scan.capture(idx + 1, raw);
                if raw.trim() == "}" {
                    scan.close();
                }
            } else if let Some(caps) = GLOBAL_ASSIGNMENT.captures(raw) {
                let value = caps[2].trim().trim_matches('"').trim_matches('\'').to_string();
                scan.globals.insert(caps[1].to_string(), value);
            }
        }
        // Tolerate an unterminated function: commit it at end of input.
        scan.close();

        tracing::debug!(
            path = %path.display(),
            functions = scan.functions.len(),
            globals = scan.globals.len(),
            "script model built"
        );
        Self { path, functions: scan.functions, globals: scan.globals }
    }

    /// Path the model was built from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up one function record.
    pub fn function(&self, name: &str) -> Option<&FunctionRecord> {
        self.functions.get(name)
    }

    /// Whether the script defines `name`.
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// All function records in definition order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionRecord> {
        self.functions.values()
    }

    /// Last top-level assignment for `name`, quotes stripped.
    pub fn global(&self, name: &str) -> Option<&str> {
        self.globals.get(name).map(String::as_str)
    }

    /// Top-level assignments in file order (later assignments already
    /// overwrote earlier ones).
    pub fn globals(&self) -> impl Iterator<Item = (&str, &str)> {
        self.globals.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Sum of executable content lines over all functions: the aggregate
    /// coverage denominator.
    pub fn total_line_count(&self) -> usize {
        self.functions.values().map(FunctionRecord::line_count).sum()
    }
}

/// Scan state for one pass over the script text.
#[derive(Default)]
struct Scan {
    functions: IndexMap<String, FunctionRecord>,
    globals: IndexMap<String, String>,
    in_function: bool,
    name: String,
    lines: Vec<ContentLine>,
}

impl Scan {
    /// Start a new function, implicitly committing a still-open one (a
    /// malformed script never aborts the whole parse).
    fn open(&mut self, name: String) {
        if self.in_function {
            self.close();
        }
        self.in_function = true;
        self.name = name;
        self.lines = Vec::new();
    }

    /// Capture one body line into the executable model if anything remains
    /// after normalization and control filtering.
    fn capture(&mut self, number: usize, raw: &str) {
        let cleaned = strip_comment(raw).trim_end().replace(";;", "");
        let stripped = cleaned.trim();
        if stripped.is_empty() || stripped.starts_with('#') || stripped == "}" {
            return;
        }
        let kept: Vec<String> = split_compound(stripped)
            .into_iter()
            .filter(|segment| !segment.is_empty() && !is_control(segment))
            .collect();
        if !kept.is_empty() {
            self.lines.push(ContentLine { number, text: kept.join(" ") });
        }
    }

    /// Commit the current function record. The record is immutable from
    /// here on; its line count is the coverage denominator.
    fn close(&mut self) {
        if !self.in_function {
            return;
        }
        let name = std::mem::take(&mut self.name);
        let lines = std::mem::take(&mut self.lines);
        tracing::debug!(function = %name, lines = lines.len(), "function committed");
        self.functions.insert(name.clone(), FunctionRecord::new(name, lines));
        self.in_function = false;
    }
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
