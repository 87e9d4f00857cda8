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

use std::fmt;

use log::debug;

use super::PhoneNumberField;
use crate::{interfaces::PropertyChangedListener, phonenumberconverter::DEFAULT_COUNTRY_CODE};

/// Notification sent after a property of a [`PhoneNumber`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyChanged<'a> {
    pub field: PhoneNumberField,
    /// The value the property was just set to.
    pub value: &'a str,
}

/// Handle returned by [`PhoneNumber::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listeners = Vec<(SubscriptionId, Box<dyn PropertyChangedListener>)>;

/// A phone number as edited by a form: a country code and the national
/// number, both free form strings.
///
/// Every setter that actually changes a value notifies the subscribed
/// listeners, in subscription order, before returning.
pub struct PhoneNumber {
    /// Expected, but not enforced, to be numeric.
    country_code: String,
    /// Either formatted or raw, depending on who set it.
    national_number: String,

    listeners: Listeners,
    next_subscription_id: u64,
}

impl PhoneNumber {
    /// Creates an empty number with the default (US) country code.
    pub fn new() -> Self {
        Self::with_country_code(DEFAULT_COUNTRY_CODE)
    }

    pub fn with_country_code(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            national_number: String::new(),
            listeners: Vec::new(),
            next_subscription_id: 0,
        }
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    pub fn get(&self, field: PhoneNumberField) -> &str {
        match field {
            PhoneNumberField::CountryCode => &self.country_code,
            PhoneNumberField::NationalNumber => &self.national_number,
        }
    }

    /// Returns `true` if the value changed and listeners were notified.
    pub fn set_country_code(&mut self, value: impl Into<String>) -> bool {
        self.set(PhoneNumberField::CountryCode, value)
    }

    /// Returns `true` if the value changed and listeners were notified.
    pub fn set_national_number(&mut self, value: impl Into<String>) -> bool {
        self.set(PhoneNumberField::NationalNumber, value)
    }

    pub fn set(&mut self, field: PhoneNumberField, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = match field {
            PhoneNumberField::CountryCode => &mut self.country_code,
            PhoneNumberField::NationalNumber => &mut self.national_number,
        };
        if *slot == value {
            return false;
        }
        *slot = value;

        let event = PropertyChanged { field, value: slot.as_str() };
        for (_, listener) in self.listeners.iter_mut() {
            listener.property_changed(&event);
        }
        true
    }

    /// Registers a closure called after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&PropertyChanged<'_>) + 'static,
    {
        self.subscribe_listener(listener)
    }

    pub fn subscribe_listener<L>(&mut self, listener: L) -> SubscriptionId
    where
        L: PropertyChangedListener + 'static,
    {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!("Listener {:?} subscribed, {} in total", id, self.listeners.len());
        id
    }

    /// Returns `false` if `id` was not subscribed (or already removed).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(subscribed, _)| *subscribed != id);
        let removed = self.listeners.len() != before;
        if removed {
            debug!("Listener {:?} unsubscribed", id);
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for PhoneNumber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneNumber")
            .field("country_code", &self.country_code)
            .field("national_number", &self.national_number)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
