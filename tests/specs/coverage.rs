// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage specs: trace-derived, accumulated across invocations.

use super::prelude::*;
use shunt_harness::MockConfiguration;

#[test]
fn unconditional_function_reaches_exactly_full_coverage() {
    let mut fx = fixture();
    fx.harness.run_function("announce", &MockConfiguration::new()).unwrap();
    assert_eq!(fx.harness.coverage(Some("announce")), 100.0);
}

#[test]
fn single_branch_execution_leaves_coverage_below_full() {
    let mut fx = fixture();
    let config = MockConfiguration::new().mock_command("curl", "echo", "healthy").arg("deep");
    fx.harness.run_function("health_check", &config).unwrap();
    let coverage = fx.harness.coverage(Some("health_check"));
    assert!(coverage < 100.0, "coverage was {coverage}");
    assert!(coverage > 0.0, "coverage was {coverage}");
}

#[test]
fn exercising_both_branches_completes_the_function() {
    let mut fx = fixture();
    let deep = MockConfiguration::new().mock_command("curl", "echo", "healthy").arg("deep");
    fx.harness.run_function("health_check", &deep).unwrap();
    fx.harness
        .run_function("health_check", &MockConfiguration::new().arg("shallow"))
        .unwrap();
    assert_eq!(fx.harness.coverage(Some("health_check")), 100.0);
}

#[test]
fn identical_rerun_is_idempotent_but_replaces_output() {
    let mut fx = fixture();
    let config = MockConfiguration::new().arg("start");
    fx.harness.run_function("dispatch", &config).unwrap();
    let aggregate = fx.harness.coverage(None);
    let first_output = fx.harness.result("dispatch").unwrap().output.clone();

    fx.harness.run_function("dispatch", &config).unwrap();
    assert_eq!(fx.harness.coverage(None), aggregate);
    // Output is fully replaced, not appended.
    assert_eq!(fx.harness.result("dispatch").unwrap().output, first_output);
}

#[test]
fn coverage_is_monotone_and_bounded_across_a_session() {
    let mut fx = fixture();
    let mut previous = fx.harness.coverage(None);
    assert_eq!(previous, 0.0);

    let runs: Vec<(&str, MockConfiguration)> = vec![
        ("announce", MockConfiguration::new()),
        ("dispatch", MockConfiguration::new().arg("start")),
        ("dispatch", MockConfiguration::new().arg("stop")),
        ("dispatch", MockConfiguration::new().arg("status")),
        ("health_check", MockConfiguration::new().arg("shallow")),
        ("fail_fast", MockConfiguration::new()),
    ];
    for (function, config) in runs {
        fx.harness.run_function(function, &config).unwrap();
        let current = fx.harness.coverage(None);
        assert!(current >= previous, "coverage dropped from {previous} to {current}");
        assert!((0.0..=100.0).contains(&current), "coverage out of range: {current}");
        previous = current;
    }
}

#[test]
fn loop_iterations_count_the_statement_once() {
    let mut fx = fixture();
    let config = MockConfiguration::new().mock_command("ping_service", "echo", "pong");
    fx.harness.run_function("retry_ping", &config).unwrap();
    // Three iterations, one coverable statement.
    assert_eq!(fx.harness.coverage(Some("retry_ping")), 100.0);
    assert_eq!(fx.harness.executed_lines("retry_ping").len(), 2);
}

#[test]
fn aggregate_coverage_reflects_the_whole_script() {
    let mut fx = fixture();
    fx.harness.run_function("announce", &MockConfiguration::new()).unwrap();
    let aggregate = fx.harness.coverage(None);
    let announce_share =
        2.0 / fx.harness.model().total_line_count() as f64 * 100.0;
    assert!((aggregate - announce_share).abs() < 0.01, "aggregate was {aggregate}");
}

#[test]
fn unknown_function_coverage_is_zero_not_an_error() {
    let fx = fixture();
    assert_eq!(fx.harness.coverage(Some("missing")), 0.0);
}
