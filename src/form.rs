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

use log::trace;

use crate::{
    interfaces::ValueConverter,
    phonenumber::PhoneNumber,
    phonenumberconverter::{DEFAULT_COUNTRY_CODE, phonenumberconverter::MaskedPhoneNumberConverter},
};

/// Headless counterpart of the phone number entry form: one
/// [`PhoneNumber`] whose national number is bound to the text of a masked
/// edit control through a [`ValueConverter`].
///
/// The record keeps the formatted number, the control sees raw digits.
#[derive(Debug)]
pub struct PhoneNumberForm<C: ValueConverter = MaskedPhoneNumberConverter> {
    phone_number: PhoneNumber,
    converter: C,
    /// Country code handed to `convert_back`; `None` lets the converter
    /// use its default.
    converter_parameter: Option<String>,
}

impl PhoneNumberForm {
    /// Starts a session for a US number with the masked phone number
    /// converter.
    pub fn new() -> Self {
        Self::with_converter(MaskedPhoneNumberConverter::new())
    }
}

impl Default for PhoneNumberForm {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ValueConverter> PhoneNumberForm<C> {
    pub fn with_converter(converter: C) -> Self {
        Self {
            phone_number: PhoneNumber::with_country_code(DEFAULT_COUNTRY_CODE),
            converter,
            converter_parameter: None,
        }
    }

    pub fn with_converter_parameter(mut self, country_code: impl Into<String>) -> Self {
        self.converter_parameter = Some(country_code.into());
        self
    }

    pub fn converter_parameter(&self) -> Option<&str> {
        self.converter_parameter.as_deref()
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    pub fn phone_number_mut(&mut self) -> &mut PhoneNumber {
        &mut self.phone_number
    }

    /// Text shown by the masked edit control.
    pub fn text(&self) -> Cow<'_, str> {
        self.converter
            .convert(Some(self.phone_number.national_number()))
            .unwrap_or_default()
    }

    /// Pushes text typed into the control to the record. Returns `true` if
    /// the stored national number changed.
    pub fn set_text(&mut self, raw: String) -> bool {
        let converted = match self
            .converter
            .convert_back(Some(raw.as_str()), self.converter_parameter.as_deref())
        {
            Some(Cow::Owned(formatted)) => Some(formatted),
            _ => None,
        };
        // Borrowed or missing means the converter left the text untouched.
        let national_number = converted.unwrap_or(raw);
        trace!("Form text stored as national number '{national_number}'");
        self.phone_number.set_national_number(national_number)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::PhoneNumberForm;
    use crate::interfaces::ValueConverter;

    struct Upper;

    impl ValueConverter for Upper {
        fn convert<'a>(&self, value: Option<&'a str>) -> Option<Cow<'a, str>> {
            value.map(Cow::Borrowed)
        }

        fn convert_back<'a>(&self, value: Option<&'a str>, _: Option<&str>) -> Option<Cow<'a, str>> {
            value.map(|v| Cow::Owned(v.to_uppercase()))
        }
    }

    #[test]
    fn works_with_any_converter() {
        let mut form = PhoneNumberForm::with_converter(Upper);
        assert!(form.set_text("abc".to_owned()));
        assert_eq!(form.phone_number().national_number(), "ABC");
        assert_eq!(form.text(), "ABC");
    }
}
