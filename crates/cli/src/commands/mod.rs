// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod info;
pub mod lines;
pub mod run;

use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Command {
    /// Show functions discovered in a script
    Info(info::InfoArgs),
    /// Print the executable content lines the coverage model counts
    Lines(lines::LinesArgs),
    /// Run one function with mocks and report output, status, and coverage
    Run(run::RunArgs),
}

impl Command {
    pub fn run(self) -> Result<()> {
        match self {
            Self::Info(args) => info::execute(args),
            Self::Lines(args) => lines::execute(args),
            Self::Run(args) => run::execute(args),
        }
    }
}
