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

mod components;
mod constants;
mod utility_functions;

use crate::assembler::constant_table::ConstantTable;
use crate::assembler::symbol_table::{SymbolTable, get_symbol};
use crate::ast::{Instruction, Register, Target};
use crate::errors::AssemblyError;
use components::*;
use constants::*;
use utility_functions::*;

/// Byte size of an instruction during pass 1. `li` and `la` expand to two
/// words; everything else is one.
pub fn instruction_size(instruction: &Instruction) -> u32 {
    match instruction {
        Instruction::Li(_, _) | Instruction::La(_, _) => 8,
        _ => 4,
    }
}

/// Translates a single instruction into one or two words during pass 2.
/// `current_address` is the byte address the first word will occupy.
pub fn encode_instruction(
    instruction: &Instruction,
    symbol_table: &SymbolTable,
    constant_table: &ConstantTable,
    current_address: u32,
    line_num: usize,
) -> Result<Vec<u32>, AssemblyError> {
    match instruction {
        // --------- upper-immediate ---------
        Instruction::Lui(rd, imm) => Ok(vec![u_word(*imm, *rd, OPCODE_LUI)]),
        Instruction::Auipc(rd, imm) => Ok(vec![u_word(*imm, *rd, OPCODE_AUIPC)]),

        // --------- jumps ---------
        Instruction::Jal(rd, Target::Label(label)) => {
            let offset = jump_offset(label, symbol_table, current_address, line_num)?;
            Ok(vec![j_word(offset, *rd)])
        }
        // A raw hex target skips the PC subtraction and is encoded as given.
        Instruction::Jal(rd, Target::Absolute(value)) => {
            let offset = absolute_jump_offset(*value, line_num)?;
            Ok(vec![j_word(offset, *rd)])
        }
        Instruction::J(label) => {
            let offset = jump_offset(label, symbol_table, current_address, line_num)?;
            Ok(vec![j_word(offset, Register::X0)])
        }
        Instruction::Call(label) => {
            let offset = jump_offset(label, symbol_table, current_address, line_num)?;
            Ok(vec![j_word(offset, Register::X1)])
        }
        Instruction::Jalr(rd, rs1, imm) => {
            Ok(vec![i_word(*imm, *rs1, FUNCT3_JALR, *rd, OPCODE_JALR)])
        }
        Instruction::Ret => Ok(vec![i_word(
            0,
            Register::X1,
            FUNCT3_JALR,
            Register::X0,
            OPCODE_JALR,
        )]),

        // --------- conditional branches ---------
        Instruction::Beq(rs1, rs2, label) => {
            branch(FUNCT3_BEQ, rs1, rs2, label, symbol_table, current_address, line_num)
        }
        Instruction::Bne(rs1, rs2, label) => {
            branch(FUNCT3_BNE, rs1, rs2, label, symbol_table, current_address, line_num)
        }
        Instruction::Blt(rs1, rs2, label) => {
            branch(FUNCT3_BLT, rs1, rs2, label, symbol_table, current_address, line_num)
        }
        Instruction::Bge(rs1, rs2, label) => {
            branch(FUNCT3_BGE, rs1, rs2, label, symbol_table, current_address, line_num)
        }
        Instruction::Bltu(rs1, rs2, label) => {
            branch(FUNCT3_BLTU, rs1, rs2, label, symbol_table, current_address, line_num)
        }
        Instruction::Bgeu(rs1, rs2, label) => {
            branch(FUNCT3_BGEU, rs1, rs2, label, symbol_table, current_address, line_num)
        }

        // Branch-against-zero pseudos reuse the base encodings.
        Instruction::Beqz(rs, label) => {
            branch(FUNCT3_BEQ, rs, &Register::X0, label, symbol_table, current_address, line_num)
        }
        Instruction::Bnez(rs, label) => {
            branch(FUNCT3_BNE, rs, &Register::X0, label, symbol_table, current_address, line_num)
        }
        Instruction::Bltz(rs, label) => {
            branch(FUNCT3_BLT, rs, &Register::X0, label, symbol_table, current_address, line_num)
        }
        Instruction::Bgez(rs, label) => {
            branch(FUNCT3_BGE, rs, &Register::X0, label, symbol_table, current_address, line_num)
        }
        Instruction::Blez(rs, label) => {
            branch(FUNCT3_BGE, &Register::X0, rs, label, symbol_table, current_address, line_num)
        }
        Instruction::Bgtz(rs, label) => {
            branch(FUNCT3_BLT, &Register::X0, rs, label, symbol_table, current_address, line_num)
        }

        // --------- loads ---------
        Instruction::Lw(rd, imm, rs1) => Ok(vec![i_word(*imm, *rs1, FUNCT3_LW, *rd, OPCODE_LOAD)]),
        Instruction::Lb(rd, imm, rs1) => Ok(vec![i_word(*imm, *rs1, FUNCT3_LB, *rd, OPCODE_LOAD)]),
        Instruction::Lbu(rd, imm, rs1) => {
            Ok(vec![i_word(*imm, *rs1, FUNCT3_LBU, *rd, OPCODE_LOAD)])
        }
        Instruction::Lh(rd, imm, rs1) => Ok(vec![i_word(*imm, *rs1, FUNCT3_LH, *rd, OPCODE_LOAD)]),
        Instruction::Lhu(rd, imm, rs1) => {
            Ok(vec![i_word(*imm, *rs1, FUNCT3_LHU, *rd, OPCODE_LOAD)])
        }

        // --------- stores ---------
        Instruction::Sw(rs2, imm, rs1) => Ok(vec![s_word(*imm, *rs2, *rs1, FUNCT3_SW)]),
        Instruction::Sb(rs2, imm, rs1) => Ok(vec![s_word(*imm, *rs2, *rs1, FUNCT3_SB)]),
        Instruction::Sh(rs2, imm, rs1) => Ok(vec![s_word(*imm, *rs2, *rs1, FUNCT3_SH)]),

        // --------- register-immediate arithmetic ---------
        Instruction::Addi(rd, rs1, imm) => {
            Ok(vec![i_word(*imm, *rs1, FUNCT3_ADD, *rd, OPCODE_OP_IMM)])
        }
        Instruction::Slti(rd, rs1, imm) => {
            Ok(vec![i_word(*imm, *rs1, FUNCT3_SLT, *rd, OPCODE_OP_IMM)])
        }
        Instruction::Sltiu(rd, rs1, imm) => {
            Ok(vec![i_word(*imm, *rs1, FUNCT3_SLTU, *rd, OPCODE_OP_IMM)])
        }
        Instruction::Xori(rd, rs1, imm) => {
            Ok(vec![i_word(*imm, *rs1, FUNCT3_XOR, *rd, OPCODE_OP_IMM)])
        }
        Instruction::Ori(rd, rs1, imm) => {
            Ok(vec![i_word(*imm, *rs1, FUNCT3_OR, *rd, OPCODE_OP_IMM)])
        }
        Instruction::Andi(rd, rs1, imm) => {
            Ok(vec![i_word(*imm, *rs1, FUNCT3_AND, *rd, OPCODE_OP_IMM)])
        }
        Instruction::Slli(rd, rs1, shamt) => {
            Ok(vec![shift_word(FUNCT7_BASE, *shamt, *rs1, FUNCT3_SLL, *rd)])
        }
        Instruction::Srli(rd, rs1, shamt) => {
            Ok(vec![shift_word(FUNCT7_BASE, *shamt, *rs1, FUNCT3_SRL, *rd)])
        }
        Instruction::Srai(rd, rs1, shamt) => {
            Ok(vec![shift_word(FUNCT7_ALT, *shamt, *rs1, FUNCT3_SRL, *rd)])
        }
        Instruction::Mv(rd, rs) => Ok(vec![i_word(0, *rs, FUNCT3_ADD, *rd, OPCODE_OP_IMM)]),

        // --------- register-register arithmetic ---------
        Instruction::Add(rd, rs1, rs2) => {
            Ok(vec![r_word(FUNCT7_BASE, *rs2, *rs1, FUNCT3_ADD, *rd, OPCODE_OP)])
        }
        Instruction::Sub(rd, rs1, rs2) => {
            Ok(vec![r_word(FUNCT7_ALT, *rs2, *rs1, FUNCT3_ADD, *rd, OPCODE_OP)])
        }
        Instruction::Sll(rd, rs1, rs2) => {
            Ok(vec![r_word(FUNCT7_BASE, *rs2, *rs1, FUNCT3_SLL, *rd, OPCODE_OP)])
        }
        Instruction::Slt(rd, rs1, rs2) => {
            Ok(vec![r_word(FUNCT7_BASE, *rs2, *rs1, FUNCT3_SLT, *rd, OPCODE_OP)])
        }
        Instruction::Sltu(rd, rs1, rs2) => {
            Ok(vec![r_word(FUNCT7_BASE, *rs2, *rs1, FUNCT3_SLTU, *rd, OPCODE_OP)])
        }
        Instruction::Xor(rd, rs1, rs2) => {
            Ok(vec![r_word(FUNCT7_BASE, *rs2, *rs1, FUNCT3_XOR, *rd, OPCODE_OP)])
        }
        Instruction::Srl(rd, rs1, rs2) => {
            Ok(vec![r_word(FUNCT7_BASE, *rs2, *rs1, FUNCT3_SRL, *rd, OPCODE_OP)])
        }
        Instruction::Sra(rd, rs1, rs2) => {
            Ok(vec![r_word(FUNCT7_ALT, *rs2, *rs1, FUNCT3_SRL, *rd, OPCODE_OP)])
        }
        Instruction::Or(rd, rs1, rs2) => {
            Ok(vec![r_word(FUNCT7_BASE, *rs2, *rs1, FUNCT3_OR, *rd, OPCODE_OP)])
        }
        Instruction::And(rd, rs1, rs2) => {
            Ok(vec![r_word(FUNCT7_BASE, *rs2, *rs1, FUNCT3_AND, *rd, OPCODE_OP)])
        }
        Instruction::Mul(rd, rs1, rs2) => {
            Ok(vec![r_word(FUNCT7_MULDIV, *rs2, *rs1, FUNCT3_ADD, *rd, OPCODE_OP)])
        }
        Instruction::Div(rd, rs1, rs2) => {
            Ok(vec![r_word(FUNCT7_MULDIV, *rs2, *rs1, FUNCT3_DIV, *rd, OPCODE_OP)])
        }

        // --------- CSR and machine-mode ---------
        Instruction::Csrrw(rd, csr, rs1) => Ok(vec![csr_word(*csr, *rs1, *rd)]),
        Instruction::Csrw(csr, rs1) => Ok(vec![csr_word(*csr, *rs1, Register::X0)]),
        Instruction::Mret => Ok(vec![MRET_WORD]),

        // --------- two-word pseudos ---------
        Instruction::Li(rd, value) => {
            let pattern = resolve_value(value, constant_table, line_num)?;
            Ok(expand_load_immediate(*rd, pattern))
        }
        Instruction::La(rd, label) => {
            let address = get_symbol(symbol_table, label, line_num)?;
            Ok(expand_load_immediate(*rd, address))
        }
    }
}

fn branch(
    funct3: u32,
    rs1: &Register,
    rs2: &Register,
    label: &str,
    symbol_table: &SymbolTable,
    current_address: u32,
    line_num: usize,
) -> Result<Vec<u32>, AssemblyError> {
    let offset = branch_offset(label, symbol_table, current_address, line_num)?;
    Ok(vec![b_word(offset, *rs2, *rs1, funct3)])
}

// lui rd, upper20 followed by addi rd, rd, lower12.
fn expand_load_immediate(rd: Register, value: u32) -> Vec<u32> {
    let (upper, lower) = split_upper_lower(value);
    vec![
        u_word(upper, rd, OPCODE_LUI),
        i_word(lower, rd, FUNCT3_ADD, rd, OPCODE_OP_IMM),
    ]
}
