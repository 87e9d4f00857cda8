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

use std::borrow::Cow;

use strum::IntoEnumIterator;

use super::{
    Country, errors::FormattingError, helper_constants::DEFAULT_COUNTRY_CODE, helper_functions,
};
use crate::interfaces::ValueConverter;

// Helper type for Result
pub type Result<T> = std::result::Result<T, FormattingError>;

/// Converts between the formatted national number kept on a
/// [`PhoneNumber`](crate::PhoneNumber) and the raw digits a masked edit
/// control works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedPhoneNumberConverter {
    /// Used by `convert_back` when the binding gives no country code.
    default_country_code: String,
}

impl MaskedPhoneNumberConverter {
    /// Creates a converter defaulting to the United States mask.
    pub fn new() -> Self {
        Self::with_default_country_code(DEFAULT_COUNTRY_CODE)
    }

    /// Creates a converter that falls back to `country_code` when
    /// `convert_back` gets no parameter. The code is not validated; an
    /// unsupported one simply makes every conversion a passthrough.
    pub fn with_default_country_code(country_code: impl Into<String>) -> Self {
        Self {
            default_country_code: country_code.into(),
        }
    }

    pub fn default_country_code(&self) -> &str {
        &self.default_country_code
    }

    /// Calling codes that have a mask.
    pub fn get_supported_country_codes(&self) -> impl Iterator<Item = &'static str> {
        Country::iter().map(Country::calling_code)
    }

    pub fn is_supported_country_code(&self, country_code: &str) -> bool {
        self.get_supported_country_codes()
            .any(|supported| supported == country_code)
    }

    /// Strips the formatting from a phone number, e.g. `(206) 555-1234`
    /// becomes `2065551234`.
    pub fn strip_formatting<'a>(&self, formatted: &'a str) -> Cow<'a, str> {
        helper_functions::strip_formatting(formatted)
    }

    /// Applies the mask for `country_code` to a raw number. Numbers that
    /// can't be masked are returned as is.
    pub fn add_formatting<'a>(&self, raw: &'a str, country_code: &str) -> Cow<'a, str> {
        helper_functions::add_formatting(raw, country_code)
    }

    /// Like [`add_formatting`](Self::add_formatting), but reports why a
    /// number could not be masked.
    pub fn try_add_formatting(&self, raw: &str, country_code: &str) -> Result<String> {
        helper_functions::try_add_formatting(raw, country_code)
    }
}

impl Default for MaskedPhoneNumberConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueConverter for MaskedPhoneNumberConverter {
    fn convert<'a>(&self, value: Option<&'a str>) -> Option<Cow<'a, str>> {
        value.map(|formatted| self.strip_formatting(formatted))
    }

    fn convert_back<'a>(
        &self,
        value: Option<&'a str>,
        parameter: Option<&str>,
    ) -> Option<Cow<'a, str>> {
        let country_code = parameter.unwrap_or(self.default_country_code.as_str());
        value.map(|raw| self.add_formatting(raw, country_code))
    }
}
