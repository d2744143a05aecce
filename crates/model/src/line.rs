// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line classification for shell source text.
//!
//! Decides, for one normalized line (or compound-operator segment), whether
//! it is a coverable statement or structural skeleton. Every pattern used to
//! make that call lives in this module so the whole heuristic can be audited
//! in one place. This is line-oriented recognition, not shell parsing: no
//! quoting or expansion rules are applied.

use regex::Regex;
use std::sync::LazyLock;

/// Classification of one line of shell source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// A statement that counts toward coverage.
    Content,
    /// Block keyword: `then`, `else`, `elif`, `fi`, `for`, `do`, `done`,
    /// `case`, `esac`.
    ControlKeyword,
    /// A bare case label such as `"start")` or `a | b)`.
    CaseLabel,
    /// A comparison test: `[[ … ]]`, `(( … ))`, or `( … )` around a
    /// comparison operator.
    ConditionalTest,
    /// Empty or whitespace-only.
    Blank,
    /// Comment-only line.
    Comment,
}

impl LineClass {
    /// Whether the line is structural skeleton rather than a statement.
    ///
    /// Loop and conditional scaffolding is excluded from the coverage
    /// denominator: a `done` or a `[[ … ]]` header is never itself a
    /// statement to cover.
    pub fn is_control(self) -> bool {
        matches!(self, Self::ControlKeyword | Self::CaseLabel | Self::ConditionalTest)
    }
}

// Block keywords that open or close shell control structures. `if` and
// `while` headers are deliberately absent: the test expression they carry is
// filtered by the conditional patterns below, and a bare `if`/`while` never
// appears alone on a traced line.
#[allow(clippy::expect_used)]
static CONTROL_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:then|else|elif|fi|for|do|done|case|esac)\b")
        .expect("constant regex pattern is valid")
});

// A case label alone on a line: `a | b)` with identifier alternatives.
#[allow(clippy::expect_used)]
static CASE_LABEL_ALTERNATIVES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[a-zA-Z_][a-zA-Z0-9_]*\s*\|\s*[a-zA-Z_][a-zA-Z0-9_]*\)\s*$")
        .expect("constant regex pattern is valid")
});

// A single, possibly quoted, possibly glob case label: `"start")`, `*)`.
#[allow(clippy::expect_used)]
static CASE_LABEL_SINGLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"?[a-zA-Z0-9_*]*"?\)$"#).expect("constant regex pattern is valid")
});

// Comparison operators recognized inside test expressions. Multi-character
// operators come first so alternation prefers them.
const COMPARISON_OPS: &str = "<=|>=|<>|==|!=|-eq|-ne|-lt|-le|-gt|-ge|<|>";

// `[[ … op … ]]` double-bracket test.
#[allow(clippy::expect_used)]
static COND_DOUBLE_BRACKET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\[\[\s.*\s(?:{COMPARISON_OPS})\s.*\]\]"))
        .expect("constant regex pattern is valid")
});

// `(( … op … ))` arithmetic test.
#[allow(clippy::expect_used)]
static COND_ARITHMETIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\(\(\s.*\s(?:{COMPARISON_OPS})\s.*\)\)"))
        .expect("constant regex pattern is valid")
});

// `( … op … )` single-parenthesis comparison.
#[allow(clippy::expect_used)]
static COND_PARENTHESIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\(\s.*\s(?:{COMPARISON_OPS})\s.*\)"))
        .expect("constant regex pattern is valid")
});

/// Classify one line (or compound segment) of shell source.
pub fn classify(text: &str) -> LineClass {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return LineClass::Blank;
    }
    if trimmed.starts_with('#') {
        return LineClass::Comment;
    }
    if CONTROL_KEYWORD.is_match(trimmed) {
        return LineClass::ControlKeyword;
    }
    if CASE_LABEL_ALTERNATIVES.is_match(trimmed) || CASE_LABEL_SINGLE.is_match(trimmed) {
        return LineClass::CaseLabel;
    }
    if COND_DOUBLE_BRACKET.is_match(trimmed)
        || COND_ARITHMETIC.is_match(trimmed)
        || COND_PARENTHESIS.is_match(trimmed)
    {
        return LineClass::ConditionalTest;
    }
    LineClass::Content
}

/// Whether a line is structural skeleton (see [`LineClass::is_control`]).
pub fn is_control(text: &str) -> bool {
    classify(text).is_control()
}

/// Strip a trailing comment: everything from the first `#` onward.
///
/// Quote-blind on purpose; a `#` inside a quoted string is mis-stripped.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Split a line at compound operators: ` && ` and single `|` (never `||`).
///
/// Pipeline and AND-list chains stay one coverable unit (the caller rejoins
/// the surviving segments), but each segment is classified on its own so an
/// embedded control fragment can be dropped per-segment.
pub fn split_compound(line: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = line.char_indices();

    while let Some((idx, ch)) = chars.next() {
        let rest = &line[idx..];
        if rest.starts_with(" && ") {
            segments.push(std::mem::take(&mut current));
            // consume "&& " after the space already consumed as `ch`
            for _ in 0..3 {
                chars.next();
            }
            continue;
        }
        if rest.starts_with(" |") && !rest.starts_with(" ||") {
            segments.push(std::mem::take(&mut current));
            chars.next(); // the pipe
            continue;
        }
        current.push(ch);
    }
    segments.push(current);
    segments.into_iter().map(|s| s.trim().to_string()).collect()
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
