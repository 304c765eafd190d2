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

mod ast_builder;

use crate::ast::AssemblyLine;
use crate::errors::AssemblyError;
use ast_builder::AstBuilder;
use pest::Parser;
use pest_derive::Parser;

// Derive the parser from our grammar file.
#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct RvParser;

// Main parsing function that takes the entire source code string.
pub fn parse_source(source: &str) -> Result<Vec<AssemblyLine>, AssemblyError> {
    let pairs = RvParser::parse(Rule::program, source)?;
    let mut lines = Vec::new();

    for line_pair in pairs
        .flatten()
        .filter(|p| p.as_rule() == Rule::line_content)
    {
        let mut assembly_line = AssemblyLine {
            line_number: line_pair.as_span().start_pos().line_col().0,
            ..AssemblyLine::default()
        };

        // A line holds a label, an instruction or directive, or a label
        // followed by either on the same line.
        for part in line_pair.into_inner() {
            match part.as_rule() {
                Rule::label => {
                    assembly_line.label =
                        Some(part.into_inner().next().unwrap().as_str().to_string());
                }
                Rule::instruction => {
                    let builder = AstBuilder::new(part);
                    assembly_line.instruction = Some(builder.build_instruction()?);
                }
                Rule::directive => {
                    let builder = AstBuilder::new(part.into_inner().next().unwrap());
                    assembly_line.directive = Some(builder.build_directive()?);
                }
                _ => {}
            }
        }

        lines.push(assembly_line);
    }

    Ok(lines)
}

// ------------- unit tests -------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Directive, Instruction, Register, Target, Value};

    #[test]
    fn test_parse_addi() {
        let source = "addi x1, x0, 1\n";
        let lines = parse_source(source).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0].instruction,
            Some(Instruction::Addi(Register::X1, Register::X0, 1))
        );
        assert_eq!(lines[0].label, None);
    }

    #[test]
    fn test_parse_addi_negative_decimal() {
        let lines = parse_source("addi x1, x0, -1\n").unwrap();
        assert_eq!(
            lines[0].instruction,
            Some(Instruction::Addi(Register::X1, Register::X0, -1))
        );
    }

    #[test]
    fn test_parse_addi_negative_hex() {
        let lines = parse_source("addi x1, x0, -0x10\n").unwrap();
        assert_eq!(
            lines[0].instruction,
            Some(Instruction::Addi(Register::X1, Register::X0, -16))
        );
    }

    #[test]
    fn test_parse_lui() {
        let lines = parse_source("lui x5, 0x12345\n").unwrap();
        assert_eq!(
            lines[0].instruction,
            Some(Instruction::Lui(Register::X5, 0x12345))
        );
    }

    #[test]
    fn test_parse_label_alone() {
        let lines = parse_source("loop:\naddi x0, x0, 0\n").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].label, Some("loop".to_string()));
        assert_eq!(lines[0].instruction, None);
        assert_eq!(lines[1].line_number, 2);
    }

    #[test]
    fn test_parse_label_with_instruction() {
        let lines = parse_source("L: beq x0, x0, L\n").unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].label, Some("L".to_string()));
        assert_eq!(
            lines[0].instruction,
            Some(Instruction::Beq(
                Register::X0,
                Register::X0,
                "L".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_load_operand() {
        let lines = parse_source("lw x6, -4(x5)\n").unwrap();
        assert_eq!(
            lines[0].instruction,
            Some(Instruction::Lw(Register::X6, -4, Register::X5))
        );
    }

    #[test]
    fn test_parse_store_operand() {
        let lines = parse_source("sw t0, 8(sp)\n").unwrap();
        assert_eq!(
            lines[0].instruction,
            Some(Instruction::Sw(Register::X5, 8, Register::X2))
        );
    }

    #[test]
    fn test_parse_equ_directive() {
        let lines = parse_source(".equ UART_BASE, 0x10000000\n").unwrap();
        assert_eq!(
            lines[0].directive,
            Some(Directive::Equ("UART_BASE".to_string(), 0x1000_0000))
        );
    }

    #[test]
    fn test_parse_li_constant_reference() {
        let lines = parse_source("li a0, UART_BASE\n").unwrap();
        assert_eq!(
            lines[0].instruction,
            Some(Instruction::Li(
                Register::X10,
                Value::Constant("UART_BASE".to_string())
            ))
        );
    }

    #[test]
    fn test_parse_jal_label_and_hex() {
        let lines = parse_source("jal ra, entry\njal x0, 0x100\n").unwrap();
        assert_eq!(
            lines[0].instruction,
            Some(Instruction::Jal(
                Register::X1,
                Target::Label("entry".to_string())
            ))
        );
        assert_eq!(
            lines[1].instruction,
            Some(Instruction::Jal(Register::X0, Target::Absolute(0x100)))
        );
    }

    #[test]
    fn test_parse_comment_only_line_dropped() {
        let lines = parse_source("# whole line comment\naddi x0, x0, 0\n").unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].line_number, 2);
    }

    #[test]
    fn test_parse_trailing_comment_stripped() {
        let lines = parse_source("addi x1, x0, 1 # set x1\n").unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0].instruction,
            Some(Instruction::Addi(Register::X1, Register::X0, 1))
        );
    }

    #[test]
    fn test_parse_blank_lines_dropped() {
        let lines = parse_source("\n\naddi x0, x0, 0\n\n").unwrap();
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_parse_commas_optional() {
        let lines = parse_source("add x1 x2 x3\n").unwrap();
        assert_eq!(
            lines[0].instruction,
            Some(Instruction::Add(Register::X1, Register::X2, Register::X3))
        );
    }

    #[test]
    fn test_parse_mnemonics_case_insensitive() {
        let lines = parse_source("ADDI x1, x0, 1\n").unwrap();
        assert_eq!(
            lines[0].instruction,
            Some(Instruction::Addi(Register::X1, Register::X0, 1))
        );
    }

    #[test]
    fn test_parse_unknown_mnemonic() {
        let err = parse_source("frobnicate x1, x2\n").unwrap_err();
        assert_eq!(
            err,
            AssemblyError::UnknownMnemonic {
                line: 1,
                mnemonic: "frobnicate".to_string()
            }
        );
    }

    #[test]
    fn test_parse_unknown_register() {
        let err = parse_source("addi q1, x0, 0\n").unwrap_err();
        assert_eq!(
            err,
            AssemblyError::UnknownRegister {
                line: 1,
                name: "q1".to_string()
            }
        );
    }

    #[test]
    fn test_parse_operand_count_mismatch() {
        let err = parse_source("addi x1, x0\n").unwrap_err();
        assert!(matches!(err, AssemblyError::BadOperandForm { line: 1, .. }));
    }

    #[test]
    fn test_parse_load_without_memory_operand() {
        let err = parse_source("lw x1, 4\n").unwrap_err();
        assert!(matches!(err, AssemblyError::BadOperandForm { line: 1, .. }));
    }

    #[test]
    fn test_parse_immediate_overflow() {
        let err = parse_source("addi x1, x0, 5000\n").unwrap_err();
        assert!(matches!(
            err,
            AssemblyError::ImmediateOverflow { line: 1, .. }
        ));
    }

    #[test]
    fn test_parse_shamt_overflow() {
        let err = parse_source("slli x1, x2, 32\n").unwrap_err();
        assert!(matches!(
            err,
            AssemblyError::ImmediateOverflow { line: 1, .. }
        ));
    }

    #[test]
    fn test_parse_garbage_line_is_malformed() {
        let err = parse_source("12monkeys\n").unwrap_err();
        assert!(matches!(err, AssemblyError::MalformedLine(_)));
    }
}
