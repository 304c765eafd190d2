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

mod arithmetic;
mod control_flow;
mod csr;
mod directive;
mod load_store;
mod operand_builders;
mod validators;

use crate::ast::{Directive, Instruction};
use crate::errors::AssemblyError;
use crate::parser::Rule;
use operand_builders::expect_operands;
use pest::iterators::{Pair, Pairs};

pub struct AstBuilder<'a> {
    line_number: usize,
    rule: Rule,
    pairs: Pairs<'a, Rule>,
}

impl<'a> AstBuilder<'a> {
    pub fn new(pair: Pair<'a, Rule>) -> Self {
        Self {
            line_number: pair.as_span().start_pos().line_col().0,
            rule: pair.as_rule(),
            pairs: pair.into_inner(),
        }
    }

    // Builds an Instruction from an instruction Pair. The grammar leaves the
    // mnemonic as free text, so dispatch (and the UnknownMnemonic error)
    // lives here rather than in the grammar.
    pub fn build_instruction(mut self) -> Result<Instruction, AssemblyError> {
        let line = self.line_number;
        let mnemonic = self.pairs.next().unwrap().as_str().to_ascii_lowercase();
        let ops: Vec<Pair<Rule>> = self.pairs.collect();

        match mnemonic.as_str() {
            // upper-immediate
            "lui" => load_store::build_upper(Instruction::Lui, &ops, line),
            "auipc" => load_store::build_upper(Instruction::Auipc, &ops, line),

            // jumps
            "jal" => control_flow::build_jal(&ops, line),
            "jalr" => control_flow::build_jalr(&ops, line),
            "j" => control_flow::build_jump(Instruction::J, &ops, line),
            "call" => control_flow::build_jump(Instruction::Call, &ops, line),
            "ret" => {
                expect_operands(&ops, 0, line)?;
                Ok(Instruction::Ret)
            }

            // conditional branches
            "beq" => control_flow::build_branch(Instruction::Beq, &ops, line),
            "bne" => control_flow::build_branch(Instruction::Bne, &ops, line),
            "blt" => control_flow::build_branch(Instruction::Blt, &ops, line),
            "bge" => control_flow::build_branch(Instruction::Bge, &ops, line),
            "bltu" => control_flow::build_branch(Instruction::Bltu, &ops, line),
            "bgeu" => control_flow::build_branch(Instruction::Bgeu, &ops, line),
            "beqz" => control_flow::build_branch_zero(Instruction::Beqz, &ops, line),
            "bnez" => control_flow::build_branch_zero(Instruction::Bnez, &ops, line),
            "bltz" => control_flow::build_branch_zero(Instruction::Bltz, &ops, line),
            "bgez" => control_flow::build_branch_zero(Instruction::Bgez, &ops, line),
            "blez" => control_flow::build_branch_zero(Instruction::Blez, &ops, line),
            "bgtz" => control_flow::build_branch_zero(Instruction::Bgtz, &ops, line),

            // loads and stores
            "lw" => load_store::build_load(Instruction::Lw, &ops, line),
            "lb" => load_store::build_load(Instruction::Lb, &ops, line),
            "lbu" => load_store::build_load(Instruction::Lbu, &ops, line),
            "lh" => load_store::build_load(Instruction::Lh, &ops, line),
            "lhu" => load_store::build_load(Instruction::Lhu, &ops, line),
            "sw" => load_store::build_store(Instruction::Sw, &ops, line),
            "sb" => load_store::build_store(Instruction::Sb, &ops, line),
            "sh" => load_store::build_store(Instruction::Sh, &ops, line),
            "li" => load_store::build_li(&ops, line),
            "la" => load_store::build_la(&ops, line),

            // register-immediate arithmetic
            "addi" => arithmetic::build_op_imm(Instruction::Addi, &ops, line),
            "slti" => arithmetic::build_op_imm(Instruction::Slti, &ops, line),
            "sltiu" => arithmetic::build_op_imm(Instruction::Sltiu, &ops, line),
            "xori" => arithmetic::build_op_imm(Instruction::Xori, &ops, line),
            "ori" => arithmetic::build_op_imm(Instruction::Ori, &ops, line),
            "andi" => arithmetic::build_op_imm(Instruction::Andi, &ops, line),
            "slli" => arithmetic::build_shift(Instruction::Slli, &ops, line),
            "srli" => arithmetic::build_shift(Instruction::Srli, &ops, line),
            "srai" => arithmetic::build_shift(Instruction::Srai, &ops, line),
            "mv" => arithmetic::build_mv(&ops, line),

            // register-register arithmetic
            "add" => arithmetic::build_op(Instruction::Add, &ops, line),
            "sub" => arithmetic::build_op(Instruction::Sub, &ops, line),
            "sll" => arithmetic::build_op(Instruction::Sll, &ops, line),
            "slt" => arithmetic::build_op(Instruction::Slt, &ops, line),
            "sltu" => arithmetic::build_op(Instruction::Sltu, &ops, line),
            "xor" => arithmetic::build_op(Instruction::Xor, &ops, line),
            "srl" => arithmetic::build_op(Instruction::Srl, &ops, line),
            "sra" => arithmetic::build_op(Instruction::Sra, &ops, line),
            "or" => arithmetic::build_op(Instruction::Or, &ops, line),
            "and" => arithmetic::build_op(Instruction::And, &ops, line),
            "mul" => arithmetic::build_op(Instruction::Mul, &ops, line),
            "div" => arithmetic::build_op(Instruction::Div, &ops, line),

            // CSR and machine-mode
            "csrrw" => csr::build_csrrw(&ops, line),
            "csrw" => csr::build_csrw(&ops, line),
            "mret" => {
                expect_operands(&ops, 0, line)?;
                Ok(Instruction::Mret)
            }

            _ => Err(AssemblyError::UnknownMnemonic { line, mnemonic }),
        }
    }

    // Builds a Directive from the inner directive Pair.
    pub fn build_directive(mut self) -> Result<Directive, AssemblyError> {
        match self.rule {
            Rule::equ => directive::build_equ(&mut self.pairs, self.line_number),
            _ => unreachable!("Unknown directive rule: {:?}", self.rule),
        }
    }
}
