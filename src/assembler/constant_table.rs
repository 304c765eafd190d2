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

use crate::errors::AssemblyError;
use std::collections::HashMap;

// The constant table stores `.equ` names and their 32-bit bit patterns.
// Constants are only ever read back as the immediate operand of `li`.
pub type ConstantTable = HashMap<String, u32>;

pub fn get_constant(
    constant_table: &ConstantTable,
    name: &str,
    line_num: usize,
) -> Result<u32, AssemblyError> {
    constant_table
        .get(name)
        .copied()
        .ok_or_else(|| AssemblyError::UnknownSymbol {
            line: line_num,
            name: name.to_string(),
        })
}
