// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shunt run`: execute one function with mocks and report the outcome.

use anyhow::{anyhow, Result};
use clap::Args;
use serde::Serialize;
use shunt_harness::{Harness, MockConfiguration};
use std::path::PathBuf;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct RunArgs {
    /// Script to analyze
    pub script: PathBuf,

    /// Function to run
    pub function: String,

    /// Literal call arguments, in order (use `--` before leading-dash args)
    pub args: Vec<String>,

    /// Export NAME=VALUE into the child before the call (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_pair)]
    pub vars: Vec<(String, String)>,

    /// Mock a command to print a fixed payload: CMD=PAYLOAD (repeatable)
    #[arg(long = "mock", value_name = "CMD=PAYLOAD", value_parser = parse_pair)]
    pub mocks: Vec<(String, String)>,

    /// Supply one line of standard input (repeatable, in order)
    #[arg(long = "stdin", value_name = "LINE")]
    pub stdin: Vec<String>,

    /// Read back a variable's post-execution value (repeatable)
    #[arg(long = "show", value_name = "NAME")]
    pub show: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))
}

#[derive(Serialize)]
struct RunReport<'a> {
    function: &'a str,
    status: i32,
    output: &'a [String],
    executed_lines: Vec<&'a str>,
    variables: Vec<(String, String)>,
    function_coverage: f64,
    total_coverage: f64,
}

pub fn execute(args: RunArgs) -> Result<()> {
    let mut harness = Harness::load(&args.script)?;

    let mut config = MockConfiguration::new().args(args.args.clone());
    for (name, value) in &args.vars {
        config = config.mock_variable(name.clone(), value.clone());
    }
    for (command, payload) in &args.mocks {
        config = config.mock_command(command.clone(), "echo", payload.clone());
    }
    for line in &args.stdin {
        config = config.stdin_line(line.clone());
    }
    for name in &args.show {
        config = config.inspect(name.clone());
    }

    harness.run_function(&args.function, &config)?;

    let result = harness
        .last_result()
        .ok_or_else(|| anyhow!("no result recorded for '{}'", args.function))?;
    let variables: Vec<(String, String)> = args
        .show
        .iter()
        .map(|name| {
            let value = harness.captured_variable(name).unwrap_or("<not captured>");
            (name.clone(), value.to_string())
        })
        .collect();
    let report = RunReport {
        function: &args.function,
        status: result.status,
        output: &result.output,
        executed_lines: harness.executed_lines(&args.function),
        variables,
        function_coverage: harness.coverage(Some(&args.function)),
        total_coverage: harness.coverage(None),
    };

    match args.format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            for line in report.output {
                println!("{line}");
            }
            println!();
            println!("status: {}", report.status);
            for (name, value) in &report.variables {
                println!("variable {name}={value}");
            }
            println!("coverage[{}]: {:.1}%", report.function, report.function_coverage);
            println!("coverage[total]: {:.1}%", report.total_coverage);
            Ok(())
        }
    }
}
