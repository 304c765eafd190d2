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

use crate::ast::{Instruction, Register, Value};
use crate::errors::AssemblyError;
use crate::parser::Rule;
use crate::parser::ast_builder::operand_builders::*;
use crate::parser::ast_builder::validators::*;
use pest::iterators::Pair;

// lui/auipc rd, imm20
pub fn build_upper(
    variant: fn(Register, u32) -> Instruction,
    ops: &[Pair<Rule>],
    line: usize,
) -> Result<Instruction, AssemblyError> {
    expect_operands(ops, 2, line)?;
    let rd = build_register(&ops[0], line)?;
    let imm = check_imm20(build_literal(&ops[1], line)?, line)?;
    Ok(variant(rd, imm))
}

// lw/lb/lbu/lh/lhu rd, imm(rs1)
pub fn build_load(
    variant: fn(Register, i32, Register) -> Instruction,
    ops: &[Pair<Rule>],
    line: usize,
) -> Result<Instruction, AssemblyError> {
    expect_operands(ops, 2, line)?;
    let rd = build_register(&ops[0], line)?;
    let (offset, base) = build_memory(&ops[1], line)?;
    Ok(variant(rd, offset, base))
}

// sw/sb/sh rs2, imm(rs1)
pub fn build_store(
    variant: fn(Register, i32, Register) -> Instruction,
    ops: &[Pair<Rule>],
    line: usize,
) -> Result<Instruction, AssemblyError> {
    expect_operands(ops, 2, line)?;
    let rs2 = build_register(&ops[0], line)?;
    let (offset, base) = build_memory(&ops[1], line)?;
    Ok(variant(rs2, offset, base))
}

// li rd, imm32-or-constant
pub fn build_li(ops: &[Pair<Rule>], line: usize) -> Result<Instruction, AssemblyError> {
    expect_operands(ops, 2, line)?;
    let rd = build_register(&ops[0], line)?;
    let value = match build_value(&ops[1], line)? {
        Value::Literal(v) => Value::Literal(check_imm32(v, line)?),
        constant => constant,
    };
    Ok(Instruction::Li(rd, value))
}

// la rd, label
pub fn build_la(ops: &[Pair<Rule>], line: usize) -> Result<Instruction, AssemblyError> {
    expect_operands(ops, 2, line)?;
    let rd = build_register(&ops[0], line)?;
    let label = build_label_name(&ops[1], line)?;
    Ok(Instruction::La(rd, label))
}
