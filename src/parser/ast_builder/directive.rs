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

use crate::ast::Directive;
use crate::errors::AssemblyError;
use crate::parser::Rule;
use crate::parser::ast_builder::operand_builders::parse_literal;
use pest::iterators::Pairs;

// .equ NAME, 0x1234 — the literal is stored as a 32-bit bit pattern.
pub fn build_equ(pairs: &mut Pairs<Rule>, line: usize) -> Result<Directive, AssemblyError> {
    let name = pairs.next().unwrap().as_str().to_string();
    let value = parse_literal(pairs.next().unwrap().as_str(), line)?;
    Ok(Directive::Equ(name, value as u32))
}
