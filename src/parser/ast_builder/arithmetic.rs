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

use crate::ast::{Instruction, Register};
use crate::errors::AssemblyError;
use crate::parser::Rule;
use crate::parser::ast_builder::operand_builders::*;
use crate::parser::ast_builder::validators::*;
use pest::iterators::Pair;

// rd, rs1, imm12 (addi, slti, sltiu, xori, ori, andi)
pub fn build_op_imm(
    variant: fn(Register, Register, i32) -> Instruction,
    ops: &[Pair<Rule>],
    line: usize,
) -> Result<Instruction, AssemblyError> {
    expect_operands(ops, 3, line)?;
    let rd = build_register(&ops[0], line)?;
    let rs1 = build_register(&ops[1], line)?;
    let imm = check_imm12(build_literal(&ops[2], line)?, line)?;
    Ok(variant(rd, rs1, imm))
}

// rd, rs1, shamt (slli, srli, srai)
pub fn build_shift(
    variant: fn(Register, Register, u32) -> Instruction,
    ops: &[Pair<Rule>],
    line: usize,
) -> Result<Instruction, AssemblyError> {
    expect_operands(ops, 3, line)?;
    let rd = build_register(&ops[0], line)?;
    let rs1 = build_register(&ops[1], line)?;
    let shamt = check_shamt(build_literal(&ops[2], line)?, line)?;
    Ok(variant(rd, rs1, shamt))
}

// rd, rs1, rs2 (add through and, mul, div)
pub fn build_op(
    variant: fn(Register, Register, Register) -> Instruction,
    ops: &[Pair<Rule>],
    line: usize,
) -> Result<Instruction, AssemblyError> {
    expect_operands(ops, 3, line)?;
    let rd = build_register(&ops[0], line)?;
    let rs1 = build_register(&ops[1], line)?;
    let rs2 = build_register(&ops[2], line)?;
    Ok(variant(rd, rs1, rs2))
}

// mv rd, rs
pub fn build_mv(ops: &[Pair<Rule>], line: usize) -> Result<Instruction, AssemblyError> {
    expect_operands(ops, 2, line)?;
    let rd = build_register(&ops[0], line)?;
    let rs = build_register(&ops[1], line)?;
    Ok(Instruction::Mv(rd, rs))
}
