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

/// Calling code of the United States (and the rest of NANPA).
pub const US_COUNTRY_CODE: &'static str = "1";
pub const GERMANY_COUNTRY_CODE: &'static str = "49";

/// Country code used by the converter when a binding passes no parameter.
pub const DEFAULT_COUNTRY_CODE: &'static str = US_COUNTRY_CODE;

// (###) ###-####
pub const US_NATIONAL_NUMBER_LENGTH: usize = 10;
pub const US_AREA_CODE_LENGTH: usize = 3;
pub const US_EXCHANGE_LENGTH: usize = 3;

// (##) ###-#####
// Real German national numbers vary in length; only the 10 digit layout
// is masked.
pub const GERMANY_NATIONAL_NUMBER_LENGTH: usize = 10;
pub const GERMANY_AREA_CODE_LENGTH: usize = 2;
pub const GERMANY_EXCHANGE_LENGTH: usize = 3;

// Runs of anything that is not a Unicode number (Nd, Nl or No).
pub const NON_NUMERIC_CHARS: &'static str = r"\P{N}+";
