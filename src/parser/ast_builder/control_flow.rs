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
use crate::parser::ast_builder::validators::check_imm12;
use pest::iterators::Pair;

// jal rd, label-or-hex-offset
pub fn build_jal(ops: &[Pair<Rule>], line: usize) -> Result<Instruction, AssemblyError> {
    expect_operands(ops, 2, line)?;
    let rd = build_register(&ops[0], line)?;
    let target = build_target(&ops[1], line)?;
    Ok(Instruction::Jal(rd, target))
}

// jalr rd, rs1, imm12
pub fn build_jalr(ops: &[Pair<Rule>], line: usize) -> Result<Instruction, AssemblyError> {
    expect_operands(ops, 3, line)?;
    let rd = build_register(&ops[0], line)?;
    let rs1 = build_register(&ops[1], line)?;
    let imm = check_imm12(build_literal(&ops[2], line)?, line)?;
    Ok(Instruction::Jalr(rd, rs1, imm))
}

// j/call label
pub fn build_jump(
    variant: fn(String) -> Instruction,
    ops: &[Pair<Rule>],
    line: usize,
) -> Result<Instruction, AssemblyError> {
    expect_operands(ops, 1, line)?;
    let label = build_label_name(&ops[0], line)?;
    Ok(variant(label))
}

// beq/bne/blt/bge/bltu/bgeu rs1, rs2, label
pub fn build_branch(
    variant: fn(Register, Register, String) -> Instruction,
    ops: &[Pair<Rule>],
    line: usize,
) -> Result<Instruction, AssemblyError> {
    expect_operands(ops, 3, line)?;
    let rs1 = build_register(&ops[0], line)?;
    let rs2 = build_register(&ops[1], line)?;
    let label = build_label_name(&ops[2], line)?;
    Ok(variant(rs1, rs2, label))
}

// beqz/bnez/bltz/bgez/blez/bgtz rs, label
pub fn build_branch_zero(
    variant: fn(Register, String) -> Instruction,
    ops: &[Pair<Rule>],
    line: usize,
) -> Result<Instruction, AssemblyError> {
    expect_operands(ops, 2, line)?;
    let rs = build_register(&ops[0], line)?;
    let label = build_label_name(&ops[1], line)?;
    Ok(variant(rs, label))
}
