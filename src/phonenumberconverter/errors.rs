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

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown country code: {0:?}")]
pub struct UnknownCountryCodeError(pub String);

/// Reasons a raw number could not be masked.
///
/// The lenient conversions never surface these; they fall back to the raw
/// input instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormattingError {
    #[error("{0}")]
    UnknownCountryCode(#[from] UnknownCountryCodeError),
    /// The number does not have the single length the country's mask accepts.
    #[error("Expected a national number of {expected} digits, got {actual}")]
    UnexpectedLength { expected: usize, actual: usize },
}
