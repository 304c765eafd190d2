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

pub mod constant_table;
mod encoder;
pub mod symbol_table;

use crate::ast::{AssemblyLine, Directive};
use crate::errors::AssemblyError;
use constant_table::ConstantTable;
use symbol_table::SymbolTable;

/// Pass 0: record `.equ` bindings.
pub fn build_constant_table(lines: &[AssemblyLine]) -> Result<ConstantTable, AssemblyError> {
    let mut constant_table = ConstantTable::new();

    for line in lines {
        if let Some(Directive::Equ(name, value)) = &line.directive {
            if constant_table.contains_key(name) {
                return Err(AssemblyError::DuplicateDefinition {
                    line: line.line_number,
                    name: name.clone(),
                });
            }
            constant_table.insert(name.clone(), *value);
        }
    }

    Ok(constant_table)
}

/// Pass 1: build the symbol table. The PC starts at 0 and advances by the
/// byte size of each instruction; a label binds to the PC that the next
/// real instruction will occupy.
pub fn build_symbol_table(
    lines: &[AssemblyLine],
    constant_table: &ConstantTable,
) -> Result<SymbolTable, AssemblyError> {
    let mut symbol_table = SymbolTable::new();
    let mut pc: u32 = 0;

    for line in lines {
        if let Some(label) = &line.label {
            if symbol_table.contains_key(label) || constant_table.contains_key(label) {
                return Err(AssemblyError::DuplicateDefinition {
                    line: line.line_number,
                    name: label.clone(),
                });
            }
            symbol_table.insert(label.clone(), pc);
        }

        if let Some(instruction) = &line.instruction {
            pc += encoder::instruction_size(instruction);
        }
    }

    Ok(symbol_table)
}

/// Pass 2: encode every instruction. The same line list is walked in the
/// same order as pass 1, so the running PC reaches each instruction at
/// exactly the address pass 1 assigned to it.
pub fn generate_words(
    lines: &[AssemblyLine],
    symbol_table: &SymbolTable,
    constant_table: &ConstantTable,
) -> Result<Vec<u32>, AssemblyError> {
    let mut words = Vec::new();
    let mut pc: u32 = 0;

    for line in lines {
        if let Some(instruction) = &line.instruction {
            let encoded = encoder::encode_instruction(
                instruction,
                symbol_table,
                constant_table,
                pc,
                line.line_number,
            )?;
            pc += 4 * encoded.len() as u32;
            words.extend(encoded);
        }
    }

    Ok(words)
}
