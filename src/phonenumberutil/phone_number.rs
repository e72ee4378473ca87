// Copyright (C) 2009 The Libphonenumber Authors
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

use std::hash::{Hash, Hasher};

use super::enums::CountryCodeSource;

/// A validated phone number.
///
/// Values are only created by [`PhoneNumberUtil::parse`](crate::PhoneNumberUtil::parse)
/// and [`PhoneNumberUtil::build_number`](crate::PhoneNumberUtil::build_number),
/// which check the country calling code and the national number length
/// against the numbering plan, and cannot be modified afterwards.
///
/// Two numbers are equal when their country calling code, national
/// significant number (leading zeros included) and extension are equal. The
/// raw input and the country code source are kept for diagnostics only.
#[derive(Debug, Clone)]
pub struct PhoneNumber {
    country_code: i32,
    national_number: u64,
    italian_leading_zero: bool,
    number_of_leading_zeros: u32,
    extension: Option<String>,
    raw_input: Option<String>,
    country_code_source: CountryCodeSource,
}

impl PhoneNumber {
    pub(super) fn new(
        country_code: i32,
        number_of_leading_zeros: u32,
        national_number: u64,
        extension: Option<String>,
    ) -> Self {
        Self {
            country_code,
            national_number,
            italian_leading_zero: number_of_leading_zeros > 0,
            number_of_leading_zeros,
            extension,
            raw_input: None,
            country_code_source: CountryCodeSource::Unspecified,
        }
    }

    pub(super) fn with_raw_input(
        mut self,
        raw_input: &str,
        country_code_source: CountryCodeSource,
    ) -> Self {
        self.raw_input = Some(raw_input.to_owned());
        self.country_code_source = country_code_source;
        self
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    /// The national number without its leading zeros.
    pub fn national_number(&self) -> u64 {
        self.national_number
    }

    /// Whether the national significant number starts with zeros that are
    /// part of the number, as in Italian fixed-line numbers.
    pub fn italian_leading_zero(&self) -> bool {
        self.italian_leading_zero
    }

    pub fn number_of_leading_zeros(&self) -> u32 {
        self.number_of_leading_zeros
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    pub fn raw_input(&self) -> Option<&str> {
        self.raw_input.as_deref()
    }

    pub fn country_code_source(&self) -> CountryCodeSource {
        self.country_code_source
    }

    /// Returns the national significant number: leading zeros followed by
    /// the national number, without any national prefix.
    pub fn national_significant_number(&self) -> String {
        let zeros_start = if self.italian_leading_zero {
            "0".repeat(self.number_of_leading_zeros as usize)
        } else {
            "".to_string()
        };

        let mut buf = itoa::Buffer::new();
        let national_number = buf.format(self.national_number);

        fast_cat::concat_str!(&zeros_start, national_number)
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.country_code == other.country_code
            && self.national_number == other.national_number
            && self.number_of_leading_zeros == other.number_of_leading_zeros
            && self.extension == other.extension
    }
}

impl Eq for PhoneNumber {}

impl Hash for PhoneNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.country_code.hash(state);
        self.national_number.hash(state);
        self.number_of_leading_zeros.hash(state);
        self.extension.hash(state);
    }
}

/// A value handed over by a form layer: either a number that was already
/// parsed or the string a user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumberInput {
    Structured(PhoneNumber),
    Raw(String),
}

impl From<PhoneNumber> for PhoneNumberInput {
    fn from(value: PhoneNumber) -> Self {
        Self::Structured(value)
    }
}

impl From<String> for PhoneNumberInput {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

impl From<&str> for PhoneNumberInput {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::PhoneNumber;
    use crate::CountryCodeSource;

    #[test]
    fn national_significant_number() {
        let number = PhoneNumber::new(1, 0, 6502530000, None);
        assert_eq!("6502530000", number.national_significant_number());
        assert!(!number.italian_leading_zero());

        let number = PhoneNumber::new(39, 1, 236618300, None);
        assert_eq!("0236618300", number.national_significant_number());
        assert!(number.italian_leading_zero());

        let number = PhoneNumber::new(61, 2, 0, None);
        assert_eq!("000", number.national_significant_number());
    }

    #[test]
    fn equality_ignores_diagnostics() {
        let built = PhoneNumber::new(1, 0, 4155552671, None);
        let parsed = PhoneNumber::new(1, 0, 4155552671, None)
            .with_raw_input("(415) 555-2671", CountryCodeSource::FromDefaultCountry);
        assert_eq!(built, parsed);

        let mut set = HashSet::new();
        set.insert(built);
        assert!(set.contains(&parsed));

        let with_extension = PhoneNumber::new(1, 0, 4155552671, Some("12".to_owned()));
        assert_ne!(parsed, with_extension);

        // "0123" and "123" differ only by their leading zero
        assert_ne!(
            PhoneNumber::new(39, 1, 123, None),
            PhoneNumber::new(39, 0, 123, None),
        );
    }
}
