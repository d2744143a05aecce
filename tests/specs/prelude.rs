// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for the end-to-end specs.

use shunt_harness::Harness;
use std::path::PathBuf;

/// A deploy-style script exercising globals, branching, loops, case
/// dispatch, external commands, and stdin reads.
pub const SERVICE_SCRIPT: &str = r#"#!/bin/bash
SERVICE_NAME="webapp"
RETRIES=3

announce() {
    echo "starting $SERVICE_NAME"
}

dispatch() {
    case $1 in
        start)
            echo "service up"
            ;;
        stop)
            echo "service down"
            ;;
        *)
            echo "usage: dispatch start|stop"
            ;;
    esac
}

health_check() {
    if [[ $1 == deep ]]
    then
        curl -s http://localhost/health
        echo "deep check done"
    else
        echo "shallow check done"
    fi
}

collect_report() {
    read reporter
    REPORT_OWNER=$reporter
    echo "report filed by $reporter"
}

retry_ping() {
    for attempt in 1 2 3
    do
        ping_service $attempt
    done
}

fail_fast() {
    echo "about to fail"
    return 9
}
"#;

/// On-disk fixture owning the temp directory for the script's lifetime.
pub struct Fixture {
    pub harness: Harness,
    pub path: PathBuf,
    _dir: tempfile::TempDir,
}

/// Write `content` to a temp script and load a harness over it.
pub fn fixture_with(content: &str) -> Fixture {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("service.sh");
    std::fs::write(&path, content).expect("write fixture script");
    let harness = Harness::load(&path).expect("load fixture script");
    Fixture { harness, path, _dir: dir }
}

/// The default service-script fixture.
pub fn fixture() -> Fixture {
    fixture_with(SERVICE_SCRIPT)
}
