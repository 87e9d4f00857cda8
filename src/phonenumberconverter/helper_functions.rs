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

use std::{borrow::Cow, str::FromStr, sync::LazyLock};

use log::{trace, warn};
use regex::Regex;

use crate::string_util::split_at_char;

use super::{
    Country,
    errors::FormattingError,
    helper_constants::{
        GERMANY_AREA_CODE_LENGTH, GERMANY_EXCHANGE_LENGTH, NON_NUMERIC_CHARS,
        US_AREA_CODE_LENGTH, US_EXCHANGE_LENGTH,
    },
};

static NON_NUMERIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(NON_NUMERIC_CHARS).expect("non-numeric pattern is a valid regex")
});

/// Strips all the non-numeric characters from a formatted phone number,
/// keeping the numeric ones in their original order.
///
/// Returns `Cow::Borrowed` when there was nothing to strip.
pub fn strip_formatting(formatted: &str) -> Cow<'_, str> {
    NON_NUMERIC_PATTERN.replace_all(formatted, "")
}

/// Adds the mask of the country selected by `country_code` to a raw number.
///
/// Unknown country codes and numbers of the wrong length are returned
/// unchanged as `Cow::Borrowed`.
pub fn add_formatting<'a>(raw: &'a str, country_code: &str) -> Cow<'a, str> {
    match try_add_formatting(raw, country_code) {
        Ok(formatted) => Cow::Owned(formatted),
        Err(FormattingError::UnknownCountryCode(err)) => {
            warn!("{err}, leaving '{raw}' unformatted");
            Cow::Borrowed(raw)
        }
        Err(err @ FormattingError::UnexpectedLength { .. }) => {
            trace!("Number '{raw}' for country code {country_code} left unformatted: {err}");
            Cow::Borrowed(raw)
        }
    }
}

/// Strict version of [`add_formatting`].
pub fn try_add_formatting(raw: &str, country_code: &str) -> Result<String, FormattingError> {
    let country = Country::from_str(country_code)?;

    let expected = country.national_number_length();
    let actual = raw.chars().count();
    if actual != expected {
        return Err(FormattingError::UnexpectedLength { expected, actual });
    }

    let formatted = match country {
        Country::UnitedStates => format_number_for_us(raw),
        Country::Germany => format_number_for_germany(raw),
    };
    Ok(formatted)
}

/// (###) ###-####
fn format_number_for_us(raw: &str) -> String {
    format_groups(raw, US_AREA_CODE_LENGTH, US_EXCHANGE_LENGTH)
}

/// (##) ###-#####
fn format_number_for_germany(raw: &str) -> String {
    format_groups(raw, GERMANY_AREA_CODE_LENGTH, GERMANY_EXCHANGE_LENGTH)
}

/// Puts the first `area_len` chars in parentheses and separates the next
/// `exchange_len` chars from the rest with a dash.
fn format_groups(raw: &str, area_len: usize, exchange_len: usize) -> String {
    let (area, rest) = split_at_char(raw, area_len);
    let (exchange, line) = split_at_char(rest, exchange_len);
    fast_cat::concat_str!("(", area, ") ", exchange, "-", line)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{add_formatting, format_groups, strip_formatting, try_add_formatting};
    use crate::phonenumberconverter::errors::{FormattingError, UnknownCountryCodeError};

    #[test]
    fn strip_borrows_when_nothing_to_strip() {
        assert!(matches!(strip_formatting("2065551234"), Cow::Borrowed("2065551234")));
        assert!(matches!(strip_formatting(""), Cow::Borrowed("")));
    }

    #[test]
    fn strip_keeps_non_ascii_numbers() {
        // Arabic-Indic digits and a superscript two are all category N.
        assert_eq!(strip_formatting("(٢٠٦) ٥٥٥-1234²"), "٢٠٦٥٥٥1234²");
    }

    #[test]
    fn passthrough_borrows_raw() {
        assert!(matches!(add_formatting("123", "1"), Cow::Borrowed("123")));
        assert!(matches!(add_formatting("2065551234", "44"), Cow::Borrowed("2065551234")));
    }

    #[test]
    fn strict_reports_reason() {
        assert_eq!(
            try_add_formatting("2065551234", "44"),
            Err(FormattingError::UnknownCountryCode(UnknownCountryCodeError(
                "44".to_owned()
            )))
        );
        assert_eq!(
            try_add_formatting("20655512345", "1"),
            Err(FormattingError::UnexpectedLength { expected: 10, actual: 11 })
        );
        assert_eq!(
            try_add_formatting("030123456", "49"),
            Err(FormattingError::UnexpectedLength { expected: 10, actual: 9 })
        );
    }

    #[test]
    fn groups_are_split_by_chars() {
        assert_eq!(format_groups("٢٠٦٥٥٥١٢٣٤", 3, 3), "(٢٠٦) ٥٥٥-١٢٣٤");
        assert_eq!(format_groups("0301234567", 2, 3), "(03) 012-34567");
    }
}
