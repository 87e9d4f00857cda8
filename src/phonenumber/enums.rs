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

use strum::{Display, IntoStaticStr};

/// The observable properties of a [`PhoneNumber`](super::PhoneNumber).
///
/// The string form is the property name carried by change notifications.
#[derive(Debug, Display, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberField {
    CountryCode,
    NationalNumber,
}

impl PhoneNumberField {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::PhoneNumberField;

    #[test]
    fn names_match_property_names() {
        assert_eq!(PhoneNumberField::CountryCode.name(), "CountryCode");
        assert_eq!(PhoneNumberField::NationalNumber.to_string(), "NationalNumber");
    }
}
