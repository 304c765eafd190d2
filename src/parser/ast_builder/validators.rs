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

// Signed 12-bit immediate of the I- and S-type formats.
pub fn check_imm12(value: i64, line: usize) -> Result<i32, AssemblyError> {
    if !(-2048..=2047).contains(&value) {
        return Err(AssemblyError::ImmediateOverflow {
            line,
            reason: format!("{} does not fit in a signed 12-bit immediate", value),
        });
    }
    Ok(value as i32)
}

// 5-bit shift amount of slli/srli/srai.
pub fn check_shamt(value: i64, line: usize) -> Result<u32, AssemblyError> {
    if !(0..=31).contains(&value) {
        return Err(AssemblyError::ImmediateOverflow {
            line,
            reason: format!("shift amount {} must be between 0 and 31", value),
        });
    }
    Ok(value as u32)
}

// Unsigned 20-bit immediate of lui/auipc.
pub fn check_imm20(value: i64, line: usize) -> Result<u32, AssemblyError> {
    if !(0..=0xFFFFF).contains(&value) {
        return Err(AssemblyError::ImmediateOverflow {
            line,
            reason: format!("{} does not fit in an unsigned 20-bit immediate", value),
        });
    }
    Ok(value as u32)
}

// An li immediate must denote a 32-bit pattern: any signed 32-bit value, or
// an unsigned value up to 2^32-1.
pub fn check_imm32(value: i64, line: usize) -> Result<i64, AssemblyError> {
    if !(i32::MIN as i64..=u32::MAX as i64).contains(&value) {
        return Err(AssemblyError::ImmediateOverflow {
            line,
            reason: format!("{} does not fit in 32 bits", value),
        });
    }
    Ok(value)
}
