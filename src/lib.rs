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

pub mod assembler;
pub mod ast;
pub mod emitter;
pub mod errors;
pub mod parser;

use anyhow::{Context, Result};

extern crate pest;
extern crate pest_derive;

/// Assembles RV32IM source text into 32-bit machine words: parse, record
/// `.equ` constants, lay out label addresses, then encode against them.
pub fn assemble(source: &str) -> Result<Vec<u32>> {
    let lines = parser::parse_source(source).context("Failed during parsing stage")?;

    let constant_table =
        assembler::build_constant_table(&lines).context("Failed during assembler phase 0")?;

    let symbol_table = assembler::build_symbol_table(&lines, &constant_table)
        .context("Failed during assembler phase 1")?;

    let words = assembler::generate_words(&lines, &symbol_table, &constant_table)
        .context("Failed during assembler phase 2")?;

    Ok(words)
}

/// Assembles source text straight to the memory-file format: one
/// 8-hex-digit line per word.
pub fn assemble_to_hex(source: &str) -> Result<String> {
    Ok(emitter::format_words(&assemble(source)?))
}
