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

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AssemblyError {
    #[error("Malformed line: {0}")]
    MalformedLine(#[from] pest::error::Error<crate::parser::Rule>),

    #[error("Unknown mnemonic on line {line}: {mnemonic}")]
    UnknownMnemonic { line: usize, mnemonic: String },

    #[error("Unknown register on line {line}: {name}")]
    UnknownRegister { line: usize, name: String },

    #[error("Undefined label on line {line}: {name}")]
    UnknownLabel { line: usize, name: String },

    #[error("Undefined constant on line {line}: {name}")]
    UnknownSymbol { line: usize, name: String },

    #[error("Immediate out of range on line {line}: {reason}")]
    ImmediateOverflow { line: usize, reason: String },

    #[error("Bad operand on line {line}: {reason}")]
    BadOperandForm { line: usize, reason: String },

    #[error("Duplicate definition on line {line}: {name}")]
    DuplicateDefinition { line: usize, name: String },
}
