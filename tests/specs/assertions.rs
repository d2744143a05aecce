// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion-layer specs over real executions.

use super::prelude::*;
use shunt_harness::{AssertionError, MockConfiguration};

#[test]
fn unconditional_print_runs_exactly_once() {
    let mut fx = fixture();
    fx.harness.run_function("announce", &MockConfiguration::new()).unwrap();
    fx.harness.assert_run_once("echo").unwrap();
    fx.harness.assert_status_ok().unwrap();
}

#[test]
fn untaken_branch_statement_never_ran() {
    let mut fx = fixture();
    let config = MockConfiguration::new().mock_command("curl", "echo", "ok").arg("deep");
    fx.harness.run_function("health_check", &config).unwrap();
    // The shallow branch did not execute.
    let err = fx.harness.assert_run("echo shallow").unwrap_err();
    assert!(matches!(err, AssertionError::NeverRan { .. }));
    fx.harness.assert_run_once("curl").unwrap();
}

#[test]
fn loop_body_call_count_is_per_iteration() {
    let mut fx = fixture();
    let config = MockConfiguration::new().mock_command("ping_service", "echo", "pong");
    fx.harness.run_function("retry_ping", &config).unwrap();
    fx.harness.assert_call_count("ping_service", 3).unwrap();
    assert!(matches!(
        fx.harness.assert_run_once("ping_service").unwrap_err(),
        AssertionError::CallCount { expected: 1, actual: 3, .. }
    ));
}

#[test]
fn status_assertions_cover_both_paths() {
    let mut fx = fixture();
    fx.harness.run_function("fail_fast", &MockConfiguration::new()).unwrap();
    fx.harness.assert_status_not_ok().unwrap();
    assert_eq!(fx.harness.result("fail_fast").unwrap().status, 9);

    fx.harness.run_function("announce", &MockConfiguration::new()).unwrap();
    fx.harness.assert_status_ok().unwrap();
}

#[test]
fn output_not_matches_guards_the_aggregate() {
    let mut fx = fixture();
    fx.harness.run_function("announce", &MockConfiguration::new()).unwrap();
    fx.harness.assert_output_not_matches("service down").unwrap();
    assert!(fx.harness.assert_output_not_matches("starting webapp").is_err());
}

#[test]
fn assertions_target_the_last_executed_function() {
    let mut fx = fixture();
    fx.harness.run_function("announce", &MockConfiguration::new()).unwrap();
    fx.harness.run_function("dispatch", &MockConfiguration::new().arg("start")).unwrap();
    // `announce`'s print is not in dispatch's captured output.
    assert!(fx.harness.assert_run("echo starting").is_err());
    fx.harness.assert_run_once("echo 'service up'").unwrap();
}

#[test]
fn named_function_output_remains_addressable() {
    let mut fx = fixture();
    fx.harness.run_function("announce", &MockConfiguration::new()).unwrap();
    fx.harness.run_function("fail_fast", &MockConfiguration::new()).unwrap();
    assert_eq!(fx.harness.call_count(Some("announce"), "echo").unwrap(), 1);
}
