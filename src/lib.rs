//! Masks phone numbers for display and unmasks them for editing.
//!
//! A [`PhoneNumber`] keeps the formatted national number and notifies
//! listeners when it changes. [`MaskedPhoneNumberConverter`] turns it into
//! raw digits for a masked edit control and back, using the US
//! (`(###) ###-####`) or German (`(##) ###-#####`) mask.

pub mod interfaces;
mod phonenumber;
mod phonenumberconverter;
mod form;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use form::PhoneNumberForm;
pub use interfaces::{PropertyChangedListener, ValueConverter};
pub use phonenumber::{PhoneNumber, PhoneNumberField, PropertyChanged, SubscriptionId};
pub use phonenumberconverter::{
    Country, DEFAULT_COUNTRY_CODE, GERMANY_COUNTRY_CODE, MASKED_PHONE_NUMBER_CONVERTER,
    US_COUNTRY_CODE, add_formatting, strip_formatting, try_add_formatting,
    errors::{FormattingError, UnknownCountryCodeError},
    phonenumberconverter::MaskedPhoneNumberConverter,
};
