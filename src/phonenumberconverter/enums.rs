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

use std::str::FromStr;

use strum::{EnumIter, IntoEnumIterator};

use super::{
    errors::UnknownCountryCodeError,
    helper_constants::{
        GERMANY_COUNTRY_CODE, GERMANY_NATIONAL_NUMBER_LENGTH, US_COUNTRY_CODE,
        US_NATIONAL_NUMBER_LENGTH,
    },
};

/// Countries whose national numbers can be masked.
///
/// Adding a country means adding a variant here and a formatting branch in
/// `helper_functions`; there is no table driven registration.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    /// **United States**, calling code `1`.
    /// Example: `2065551234` is displayed as `(206) 555-1234`.
    UnitedStates,
    /// **Germany**, calling code `49`.
    /// Example: `0301234567` is displayed as `(03) 012-34567`.
    Germany,
}

impl Country {
    /// Returns the calling code selecting this country's mask.
    pub fn calling_code(self) -> &'static str {
        match self {
            Country::UnitedStates => US_COUNTRY_CODE,
            Country::Germany => GERMANY_COUNTRY_CODE,
        }
    }

    /// The only national number length the mask is applied to.
    pub fn national_number_length(self) -> usize {
        match self {
            Country::UnitedStates => US_NATIONAL_NUMBER_LENGTH,
            Country::Germany => GERMANY_NATIONAL_NUMBER_LENGTH,
        }
    }
}

impl FromStr for Country {
    type Err = UnknownCountryCodeError;

    fn from_str(country_code: &str) -> Result<Self, Self::Err> {
        Country::iter()
            .find(|country| country.calling_code() == country_code)
            .ok_or_else(|| UnknownCountryCodeError(country_code.to_owned()))
    }
}
