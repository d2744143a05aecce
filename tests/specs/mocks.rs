// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mock injection specs: commands, variables, stdin, and read-back.

use super::prelude::*;
use shunt_harness::{HarnessError, MockConfiguration};

#[test]
fn mocked_command_payload_is_observable_in_output() {
    let mut fx = fixture();
    let payload = r#"{"status": "healthy"}"#;
    let config = MockConfiguration::new().mock_command("curl", "echo", payload).arg("deep");
    fx.harness.run_function("health_check", &config).unwrap();
    fx.harness.assert_output_matches(r#"\{"status": "healthy"\}"#).unwrap();
}

#[test]
fn changing_the_payload_breaks_a_stale_pattern() {
    let mut fx = fixture();
    let config =
        MockConfiguration::new().mock_command("curl", "echo", r#"{"status": "degraded"}"#).arg("deep");
    fx.harness.run_function("health_check", &config).unwrap();
    // Pattern written for the old payload no longer matches any line.
    assert!(fx.harness.assert_output_matches(r#"\{"status": "healthy"\}"#).is_err());
}

#[test]
fn mock_intercepts_the_real_command_transparently() {
    let mut fx = fixture();
    // Unmocked, curl would hit the network (or be missing entirely);
    // the override makes the run hermetic and deterministic.
    let config = MockConfiguration::new().mock_command("curl", "echo", "ok").arg("deep");
    let result = fx.harness.run_function("health_check", &config).unwrap();
    assert_eq!(result.status, 0);
    fx.harness.assert_run_once("curl").unwrap();
}

#[test]
fn exported_variable_overrides_the_script_global() {
    let mut fx = fixture();
    let config = MockConfiguration::new().mock_variable("SERVICE_NAME", "testsvc");
    fx.harness.run_function("announce", &config).unwrap();
    fx.harness.assert_output_matches("starting testsvc").unwrap();
}

#[test]
fn stdin_lines_reach_the_read_builtin() {
    let mut fx = fixture();
    let config = MockConfiguration::new().stdin_line("alice");
    fx.harness.run_function("collect_report", &config).unwrap();
    fx.harness.assert_output_matches("report filed by alice").unwrap();
}

#[test]
fn inspected_variable_surfaces_interpreter_local_state() {
    let mut fx = fixture();
    let config = MockConfiguration::new().stdin_line("alice").inspect("REPORT_OWNER");
    fx.harness.run_function("collect_report", &config).unwrap();
    assert_eq!(fx.harness.captured_variable("REPORT_OWNER"), Some("alice"));
    fx.harness.assert_variable_equals("REPORT_OWNER", "alice").unwrap();
}

#[test]
fn variable_resolution_prefers_the_global_map() {
    let fx = fixture();
    assert_eq!(fx.harness.variable("SERVICE_NAME").unwrap(), "webapp");
}

#[test]
fn unresolved_variable_is_an_explicit_not_found() {
    let mut fx = fixture();
    fx.harness.run_function("announce", &MockConfiguration::new()).unwrap();
    let err = fx.harness.variable("NEVER_ASSIGNED").unwrap_err();
    assert!(matches!(err, HarnessError::VariableNotFound { .. }));
}

#[test]
fn unknown_function_is_skipped_without_a_result() {
    let mut fx = fixture();
    let err = fx.harness.run_function("not_there", &MockConfiguration::new()).unwrap_err();
    assert!(matches!(err, HarnessError::UnknownFunction { .. }));
    assert!(fx.harness.result("not_there").is_none());
    assert_eq!(fx.harness.coverage(None), 0.0);
}
