pub mod enums;
pub mod phonenumber;

pub use enums::PhoneNumberField;
pub use phonenumber::{PhoneNumber, PropertyChanged, SubscriptionId};
