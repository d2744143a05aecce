// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shunt info`: function summaries for a script.

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;
use shunt_model::{FunctionRecord, ScriptModel};
use std::path::PathBuf;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct InfoArgs {
    /// Script to analyze
    pub script: PathBuf,

    /// Show one function only
    #[arg(long)]
    pub function: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct FunctionInfo<'a> {
    name: &'a str,
    params: &'a [String],
    lines: usize,
}

impl<'a> From<&'a FunctionRecord> for FunctionInfo<'a> {
    fn from(record: &'a FunctionRecord) -> Self {
        Self { name: &record.name, params: &record.params, lines: record.line_count() }
    }
}

pub fn execute(args: InfoArgs) -> Result<()> {
    let model = ScriptModel::load(&args.script)?;

    let records: Vec<&FunctionRecord> = match &args.function {
        Some(name) => match model.function(name) {
            Some(record) => vec![record],
            None => bail!("no function named '{name}' found"),
        },
        None => model.functions().collect(),
    };

    match args.format {
        OutputFormat::Json => {
            let infos: Vec<FunctionInfo> = records.iter().copied().map(Into::into).collect();
            print_json(&infos)
        }
        OutputFormat::Text => {
            for record in records {
                println!("Function: {}", record.name);
                println!("Parameters: {:?}", record.params);
                println!("Lines of Code: {}\n", record.line_count());
            }
            println!("Total executable lines: {}", model.total_line_count());
            Ok(())
        }
    }
}
