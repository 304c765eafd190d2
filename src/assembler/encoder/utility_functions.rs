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

use crate::assembler::constant_table::{ConstantTable, get_constant};
use crate::assembler::symbol_table::{SymbolTable, get_symbol};
use crate::ast::Value;
use crate::errors::AssemblyError;

/// PC-relative displacement to a label, checked against the 13-bit branch
/// range (±4 KiB, even).
pub fn branch_offset(
    label: &str,
    symbol_table: &SymbolTable,
    current_address: u32,
    line_num: usize,
) -> Result<i32, AssemblyError> {
    let target = get_symbol(symbol_table, label, line_num)?;
    let offset = target as i64 - current_address as i64;
    check_offset(offset, 13, line_num)?;
    Ok(offset as i32)
}

/// PC-relative displacement to a label, checked against the 21-bit jump
/// range (±1 MiB, even).
pub fn jump_offset(
    label: &str,
    symbol_table: &SymbolTable,
    current_address: u32,
    line_num: usize,
) -> Result<i32, AssemblyError> {
    let target = get_symbol(symbol_table, label, line_num)?;
    let offset = target as i64 - current_address as i64;
    check_offset(offset, 21, line_num)?;
    Ok(offset as i32)
}

/// A raw hex jal operand is encoded as given, with the same range rules.
pub fn absolute_jump_offset(value: i64, line_num: usize) -> Result<i32, AssemblyError> {
    check_offset(value, 21, line_num)?;
    Ok(value as i32)
}

fn check_offset(offset: i64, bits: u32, line_num: usize) -> Result<(), AssemblyError> {
    if offset % 2 != 0 {
        return Err(AssemblyError::ImmediateOverflow {
            line: line_num,
            reason: format!("offset {} is odd", offset),
        });
    }
    let bound = 1i64 << (bits - 1);
    if offset < -bound || offset >= bound {
        return Err(AssemblyError::ImmediateOverflow {
            line: line_num,
            reason: format!("offset {} does not fit in {} bits", offset, bits),
        });
    }
    Ok(())
}

/// Resolves an `li` operand to its 32-bit pattern, through the `.equ` table
/// when it is a name.
pub fn resolve_value(
    value: &Value,
    constant_table: &ConstantTable,
    line_num: usize,
) -> Result<u32, AssemblyError> {
    match value {
        Value::Literal(v) => Ok(*v as u32),
        Value::Constant(name) => get_constant(constant_table, name, line_num),
    }
}

/// Splits a 32-bit value into the `lui`/`addi` pair used by `li` and `la`.
/// The upper half absorbs a +0x800 carry so that adding the sign-extended
/// low 12 bits reconstructs the value exactly.
pub fn split_upper_lower(value: u32) -> (u32, i32) {
    let upper = (value.wrapping_add(0x800) >> 12) & 0xFFFFF;
    let lower = ((value & 0xFFF) as i32) << 20 >> 20;
    (upper, lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_without_carry() {
        assert_eq!(split_upper_lower(0x12345678), (0x12345, 0x678));
    }

    #[test]
    fn test_split_with_carry() {
        // Low half 0x800 sign-extends to -2048, so the upper half rounds up.
        let (upper, lower) = split_upper_lower(0x00001800);
        assert_eq!((upper, lower), (0x2, -2048));
        assert_eq!((upper << 12).wrapping_add(lower as u32), 0x00001800);
    }

    #[test]
    fn test_split_reconstructs_for_all_boundary_patterns() {
        for value in [0u32, 1, 0x7FF, 0x800, 0x801, 0xFFF, 0x1000, 0xFFFF_FFFF, 0x8000_0000] {
            let (upper, lower) = split_upper_lower(value);
            assert_eq!(
                (upper << 12).wrapping_add(lower as u32),
                value,
                "value {:#x}",
                value
            );
        }
    }

    #[test]
    fn test_check_offset_rejects_odd() {
        let err = absolute_jump_offset(0x101, 7).unwrap_err();
        assert!(matches!(err, AssemblyError::ImmediateOverflow { line: 7, .. }));
    }

    #[test]
    fn test_check_offset_rejects_out_of_range() {
        assert!(absolute_jump_offset(1 << 20, 1).is_err());
        assert!(absolute_jump_offset(-(1 << 20), 1).is_ok());
        assert!(absolute_jump_offset((1 << 20) - 2, 1).is_ok());
    }

    #[test]
    fn test_branch_offset_range() {
        let mut symbols = SymbolTable::new();
        symbols.insert("near".to_string(), 4092);
        symbols.insert("far".to_string(), 4096);
        assert_eq!(branch_offset("near", &symbols, 0, 1).unwrap(), 4092);
        assert!(branch_offset("far", &symbols, 0, 1).is_err());
        // The most negative encodable displacement is -4096.
        assert_eq!(branch_offset("near", &symbols, 8188, 1).unwrap(), -4096);
    }
}
