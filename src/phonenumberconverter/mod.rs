mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phonenumberconverter;

use std::sync::LazyLock;

pub use enums::Country;
pub use helper_constants::{DEFAULT_COUNTRY_CODE, GERMANY_COUNTRY_CODE, US_COUNTRY_CODE};
pub use helper_functions::{add_formatting, strip_formatting, try_add_formatting};
use crate::phonenumberconverter::phonenumberconverter::MaskedPhoneNumberConverter;

pub static MASKED_PHONE_NUMBER_CONVERTER: LazyLock<MaskedPhoneNumberConverter> = LazyLock::new(|| {
    MaskedPhoneNumberConverter::new()
});
