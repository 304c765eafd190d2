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

/// Renders each word as exactly 8 zero-padded lowercase hex digits followed
/// by a newline. No header, no address column, no trailing blank line.
pub fn format_words(words: &[u32]) -> String {
    let mut text = String::with_capacity(words.len() * 9);
    for word in words {
        text.push_str(&format!("{word:08x}\n"));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero_padded_lowercase() {
        assert_eq!(format_words(&[0x93, 0xFFF00093]), "00000093\nfff00093\n");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_words(&[]), "");
    }

    #[test]
    fn test_format_record_size() {
        let words = vec![0u32; 17];
        let text = format_words(&words);
        assert_eq!(text.len(), words.len() * 9);
        assert!(text.lines().all(|l| l.len() == 8));
    }
}
