// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shunt`: unit-test harness for shell-script functions.

use anyhow::Result;
use clap::Parser;

mod commands;
mod output;

#[derive(Parser)]
#[command(
    name = "shunt",
    version,
    about = "Unit-test harness for shell-script functions: isolation, mocks, coverage"
)]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    Cli::parse().command.run()
}
