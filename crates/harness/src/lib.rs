// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unit-test harness for shell-script functions.
//!
//! Runs individual functions from a script in isolated child interpreter
//! processes, with injected command mocks, exported variables, call
//! arguments, and line-oriented stdin. The interpreter's own execution
//! trace is reconciled against the static source model
//! ([`shunt_model`]) to accumulate an executed-line set, from which
//! per-function and aggregate coverage are computed. A thin assertion
//! layer provides run-count, output, status, and variable predicates over
//! the same captured state.
//!
//! Fully synchronous and single-threaded: one child process per
//! invocation, created and reaped before the call returns. Only the
//! executed-line set survives across invocations; all other per-run state
//! is last-write-wins.
//!
//! ```no_run
//! use shunt_harness::{Harness, MockConfiguration};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut harness = Harness::load("deploy.sh")?;
//! let config = MockConfiguration::new()
//!     .mock_command("curl", "echo", r#"{"status": "ok"}"#)
//!     .mock_variable("API_TOKEN", "test-token")
//!     .arg("1");
//! harness.run_function("make_api_request", &config)?;
//! harness.assert_run_once("curl")?;
//! harness.assert_status_ok()?;
//! assert!(harness.coverage(Some("make_api_request")) > 0.0);
//! # Ok(())
//! # }
//! ```

mod assert;
mod config;
mod error;
mod exec;
mod harness;
mod invocation;
pub mod trace;

pub use config::{CommandMock, MockConfiguration};
pub use error::{AssertionError, HarnessError};
pub use exec::ExecutionResult;
pub use harness::Harness;

pub use shunt_model as model;
