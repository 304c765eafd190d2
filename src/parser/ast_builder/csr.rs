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

use crate::ast::Instruction;
use crate::errors::AssemblyError;
use crate::parser::Rule;
use crate::parser::ast_builder::operand_builders::*;
use pest::iterators::Pair;

// csrrw rd, csr, rs1
pub fn build_csrrw(ops: &[Pair<Rule>], line: usize) -> Result<Instruction, AssemblyError> {
    expect_operands(ops, 3, line)?;
    let rd = build_register(&ops[0], line)?;
    let csr = build_csr(&ops[1], line)?;
    let rs1 = build_register(&ops[2], line)?;
    Ok(Instruction::Csrrw(rd, csr, rs1))
}

// csrw csr, rs1
pub fn build_csrw(ops: &[Pair<Rule>], line: usize) -> Result<Instruction, AssemblyError> {
    expect_operands(ops, 2, line)?;
    let csr = build_csr(&ops[0], line)?;
    let rs1 = build_register(&ops[1], line)?;
    Ok(Instruction::Csrw(csr, rs1))
}
