// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shunt lines`: the static executable content lines per function.

use anyhow::{bail, Result};
use clap::Args;
use shunt_model::{FunctionRecord, ScriptModel};
use std::path::PathBuf;

#[derive(Args)]
pub struct LinesArgs {
    /// Script to analyze
    pub script: PathBuf,

    /// Show one function only
    #[arg(long)]
    pub function: Option<String>,
}

pub fn execute(args: LinesArgs) -> Result<()> {
    let model = ScriptModel::load(&args.script)?;

    let records: Vec<&FunctionRecord> = match &args.function {
        Some(name) => match model.function(name) {
            Some(record) => vec![record],
            None => bail!("no function named '{name}' found"),
        },
        None => model.functions().collect(),
    };

    for record in records {
        println!("Code lines for function '{}':", record.name);
        for line in &record.lines {
            println!(" - Line {}: {}", line.number, line.text);
        }
    }
    Ok(())
}
