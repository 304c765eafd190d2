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

use crate::assembler::encoder::constants::*;
use crate::ast::{Csr, Register};

// The six RV32 format shapes. Each function lays its fields at the standard
// positions and composes the word by bitwise OR. Immediates arrive already
// range-checked; the casts below only truncate to the field width.

pub fn r_word(
    funct7: u32,
    rs2: Register,
    rs1: Register,
    funct3: u32,
    rd: Register,
    opcode: u32,
) -> u32 {
    funct7 << 25
        | rs2.index() << 20
        | rs1.index() << 15
        | funct3 << 12
        | rd.index() << 7
        | opcode
}

pub fn i_word(imm: i32, rs1: Register, funct3: u32, rd: Register, opcode: u32) -> u32 {
    ((imm as u32) & 0xFFF) << 20 | rs1.index() << 15 | funct3 << 12 | rd.index() << 7 | opcode
}

// Shift-immediate form: funct7 over shamt in the rs2 position.
pub fn shift_word(funct7: u32, shamt: u32, rs1: Register, funct3: u32, rd: Register) -> u32 {
    funct7 << 25
        | shamt << 20
        | rs1.index() << 15
        | funct3 << 12
        | rd.index() << 7
        | OPCODE_OP_IMM
}

// S-type: imm[11:5] and imm[4:0] straddle the register fields.
pub fn s_word(imm: i32, rs2: Register, rs1: Register, funct3: u32) -> u32 {
    let imm = imm as u32;
    ((imm >> 5) & 0x7F) << 25
        | rs2.index() << 20
        | rs1.index() << 15
        | funct3 << 12
        | (imm & 0x1F) << 7
        | OPCODE_STORE
}

// B-type: the 13-bit even byte offset scattered as
// imm[12] | imm[10:5] | ... | imm[4:1] | imm[11].
pub fn b_word(offset: i32, rs2: Register, rs1: Register, funct3: u32) -> u32 {
    let imm = offset as u32;
    ((imm >> 12) & 0x1) << 31
        | ((imm >> 5) & 0x3F) << 25
        | rs2.index() << 20
        | rs1.index() << 15
        | funct3 << 12
        | ((imm >> 1) & 0xF) << 8
        | ((imm >> 11) & 0x1) << 7
        | OPCODE_BRANCH
}

pub fn u_word(imm: u32, rd: Register, opcode: u32) -> u32 {
    imm << 12 | rd.index() << 7 | opcode
}

// J-type: the 21-bit even byte offset scattered as
// imm[20] | imm[10:1] | imm[11] | imm[19:12].
pub fn j_word(offset: i32, rd: Register) -> u32 {
    let imm = offset as u32;
    ((imm >> 20) & 0x1) << 31
        | ((imm >> 1) & 0x3FF) << 21
        | ((imm >> 11) & 0x1) << 20
        | ((imm >> 12) & 0xFF) << 12
        | rd.index() << 7
        | OPCODE_JAL
}

pub fn csr_word(csr: Csr, rs1: Register, rd: Register) -> u32 {
    csr.address() << 20
        | rs1.index() << 15
        | FUNCT3_CSRRW << 12
        | rd.index() << 7
        | OPCODE_SYSTEM
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Register::*;

    #[test]
    fn test_i_word_truncates_to_twelve_bits() {
        // addi x1, x0, -1
        assert_eq!(i_word(-1, X0, FUNCT3_ADD, X1, OPCODE_OP_IMM), 0xfff00093);
    }

    #[test]
    fn test_s_word_field_split() {
        // sw x5, 8(x2)
        assert_eq!(s_word(8, X5, X2, FUNCT3_SW), 0x00512423);
    }

    #[test]
    fn test_b_word_forward_offset() {
        // beq x0, x0, +4
        assert_eq!(b_word(4, X0, X0, FUNCT3_BEQ), 0x00000263);
    }

    #[test]
    fn test_b_word_backward_offset() {
        // beq x1, x2, -4
        assert_eq!(b_word(-4, X2, X1, FUNCT3_BEQ), 0xfe208ee3);
    }

    #[test]
    fn test_j_word_forward_offset_decodes_back() {
        // jal x0, +4
        let word = j_word(4, X0);
        assert_eq!(word, 0x0040006f);
        let imm20 = (word >> 31) & 0x1;
        let imm10_1 = (word >> 21) & 0x3FF;
        let imm11 = (word >> 20) & 0x1;
        let imm19_12 = (word >> 12) & 0xFF;
        let offset = imm20 << 20 | imm19_12 << 12 | imm11 << 11 | imm10_1 << 1;
        assert_eq!(offset, 4);
    }

    #[test]
    fn test_j_word_backward_offset() {
        // jal x0, -4
        assert_eq!(j_word(-4, X0), 0xffdff06f);
    }

    #[test]
    fn test_u_word() {
        // lui x5, 0x12345
        assert_eq!(u_word(0x12345, X5, OPCODE_LUI), 0x123452b7);
    }

    #[test]
    fn test_r_word() {
        // add x1, x2, x3 / sub x1, x2, x3
        assert_eq!(r_word(FUNCT7_BASE, X3, X2, FUNCT3_ADD, X1, OPCODE_OP), 0x003100b3);
        assert_eq!(r_word(FUNCT7_ALT, X3, X2, FUNCT3_ADD, X1, OPCODE_OP), 0x403100b3);
    }

    #[test]
    fn test_csr_word() {
        use crate::ast::Csr;
        // csrrw x5, mtvec, x6
        assert_eq!(csr_word(Csr::Mtvec, X6, X5), 0x305312f3);
    }
}
