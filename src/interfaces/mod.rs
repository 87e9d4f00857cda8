use std::borrow::Cow;

use crate::phonenumber::PropertyChanged;

/// Value conversion used by a binding between a record and the control
/// displaying it. `None` stands for a missing value and is passed through.
pub trait ValueConverter {
  /// Converts a value coming from the record into what the control shows.
  fn convert<'a>(&self, value: Option<&'a str>) -> Option<Cow<'a, str>>;

  /// Converts a value typed into the control back into what the record
  /// stores. `parameter` is the binding's converter parameter, if any.
  fn convert_back<'a>(&self, value: Option<&'a str>, parameter: Option<&str>) -> Option<Cow<'a, str>>;
}

/// Receives change notifications from a [`PhoneNumber`](crate::PhoneNumber).
pub trait PropertyChangedListener {
  fn property_changed(&mut self, event: &PropertyChanged<'_>);
}

impl<F> PropertyChangedListener for F
where
  F: FnMut(&PropertyChanged<'_>),
{
  fn property_changed(&mut self, event: &PropertyChanged<'_>) {
    self(event)
  }
}
