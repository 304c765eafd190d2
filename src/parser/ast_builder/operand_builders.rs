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

use crate::ast::{Csr, Register, Target, Value};
use crate::errors::AssemblyError;
use crate::parser::Rule;
use crate::parser::ast_builder::validators::check_imm12;
use pest::iterators::Pair;

// Checks the operand count before any operand is interpreted.
pub fn expect_operands(
    ops: &[Pair<Rule>],
    count: usize,
    line: usize,
) -> Result<(), AssemblyError> {
    if ops.len() != count {
        return Err(AssemblyError::BadOperandForm {
            line,
            reason: format!("expected {} operands, found {}", count, ops.len()),
        });
    }
    Ok(())
}

// Builds a register from a symbol operand.
pub fn build_register(pair: &Pair<Rule>, line: usize) -> Result<Register, AssemblyError> {
    if pair.as_rule() != Rule::symbol {
        return Err(AssemblyError::BadOperandForm {
            line,
            reason: format!("expected a register, found {}", pair.as_str()),
        });
    }
    Register::from_name(pair.as_str()).ok_or_else(|| AssemblyError::UnknownRegister {
        line,
        name: pair.as_str().to_string(),
    })
}

// Builds a branch/jump/la label reference.
pub fn build_label_name(pair: &Pair<Rule>, line: usize) -> Result<String, AssemblyError> {
    if pair.as_rule() != Rule::symbol {
        return Err(AssemblyError::BadOperandForm {
            line,
            reason: format!("expected a label, found {}", pair.as_str()),
        });
    }
    Ok(pair.as_str().to_string())
}

// Parses a hex or decimal literal, either optionally preceded by '-'.
// Field-width checks happen afterwards in the validators.
pub fn build_literal(pair: &Pair<Rule>, line: usize) -> Result<i64, AssemblyError> {
    if pair.as_rule() != Rule::number {
        return Err(AssemblyError::BadOperandForm {
            line,
            reason: format!("expected an immediate value, found {}", pair.as_str()),
        });
    }
    parse_literal(pair.as_str(), line)
}

pub fn parse_literal(text: &str, line: usize) -> Result<i64, AssemblyError> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let magnitude = match body.strip_prefix("0x") {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => body.parse::<i64>(),
    }
    .map_err(|_| AssemblyError::ImmediateOverflow {
        line,
        reason: format!("literal {} does not fit in 64 bits", text),
    })?;
    Ok(if negative { -magnitude } else { magnitude })
}

// Builds the imm(rs1) address operand of a load or store.
pub fn build_memory(pair: &Pair<Rule>, line: usize) -> Result<(i32, Register), AssemblyError> {
    if pair.as_rule() != Rule::memory {
        return Err(AssemblyError::BadOperandForm {
            line,
            reason: format!("expected an address of the form imm(rs1), found {}", pair.as_str()),
        });
    }
    let mut inner = pair.clone().into_inner();
    let offset = parse_literal(inner.next().unwrap().as_str(), line)?;
    let offset = check_imm12(offset, line)?;
    let base = build_register(&inner.next().unwrap(), line)?;
    Ok((offset, base))
}

// Builds a jal target: a label, or a raw hex offset encoded as given.
pub fn build_target(pair: &Pair<Rule>, line: usize) -> Result<Target, AssemblyError> {
    match pair.as_rule() {
        Rule::symbol => Ok(Target::Label(pair.as_str().to_string())),
        Rule::number => Ok(Target::Absolute(parse_literal(pair.as_str(), line)?)),
        _ => Err(AssemblyError::BadOperandForm {
            line,
            reason: format!("expected a label or immediate target, found {}", pair.as_str()),
        }),
    }
}

// Builds an li immediate: a literal, or an `.equ` constant name.
pub fn build_value(pair: &Pair<Rule>, line: usize) -> Result<Value, AssemblyError> {
    match pair.as_rule() {
        Rule::symbol => Ok(Value::Constant(pair.as_str().to_string())),
        Rule::number => Ok(Value::Literal(parse_literal(pair.as_str(), line)?)),
        _ => Err(AssemblyError::BadOperandForm {
            line,
            reason: format!("expected an immediate or constant name, found {}", pair.as_str()),
        }),
    }
}

// Builds a CSR name operand.
pub fn build_csr(pair: &Pair<Rule>, line: usize) -> Result<Csr, AssemblyError> {
    if pair.as_rule() != Rule::symbol {
        return Err(AssemblyError::BadOperandForm {
            line,
            reason: format!("expected a CSR name, found {}", pair.as_str()),
        });
    }
    Csr::from_name(pair.as_str()).ok_or_else(|| AssemblyError::BadOperandForm {
        line,
        reason: format!("unknown CSR: {}", pair.as_str()),
    })
}
