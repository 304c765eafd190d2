/*
Copyright 2025 Connor Nolan

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use anyhow::{Context, Result};
use clap::Parser as clap_parser;
use rvasm::assemble_to_hex;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(clap_parser)]
#[clap(version = "0.1.0", author = "Connor Nolan")]
struct Opts {
    /// Assembly source file
    input: PathBuf,
    /// Memory file to write; defaults to the input path with a .hex extension
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let opts: Opts = Opts::parse();
    let output = match &opts.output {
        Some(path) => path.clone(),
        None => default_output_path(&opts.input),
    };

    match run(&opts.input, &output) {
        Ok(()) => {
            println!(
                "Successfully assembled {} to {}",
                opts.input.display(),
                output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            // A failed run must not leave a stale or partial memory file.
            let _ = fs::remove_file(&output);
            ExitCode::FAILURE
        }
    }
}

fn run(input: &Path, output: &Path) -> Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let hex = assemble_to_hex(&source)?;

    fs::write(output, hex)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    Ok(())
}

fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("hex")
}
