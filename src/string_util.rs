// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Splits `s` after its first `mid` chars.
///
/// Unlike `str::split_at` the position is counted in chars, so multi-byte
/// digits are never cut in half. If `s` is shorter than `mid` chars the
/// whole string ends up on the left.
pub fn split_at_char(s: &str, mid: usize) -> (&str, &str) {
    match s.char_indices().nth(mid) {
        Some((byte_index, _)) => s.split_at(byte_index),
        None => (s, ""),
    }
}

#[cfg(test)]
mod tests {
    use crate::string_util::split_at_char;

    #[test]
    fn test_usage() {
        assert_eq!(split_at_char("2065551234", 3), ("206", "5551234"));
        assert_eq!(split_at_char("٢٠٦٥", 3), ("٢٠٦", "٥"));
        assert_eq!(split_at_char("12", 3), ("12", ""));
        assert_eq!(split_at_char("123", 0), ("", "123"));
        assert_eq!(split_at_char("", 2), ("", ""));
    }
}
