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

use log::trace;

use crate::{
    PHONE_NUMBER_UTIL, PhoneNumberFormat, PhoneNumberInput, PhoneNumberUtil,
    errors::TransformationFailedError, i18n::RegionCode,
};

/// Two-way conversion between a form field's text and a phone number.
///
/// `transform` renders a value for display, `reverse_transform` turns what
/// the user typed back into a canonical E164 string. Neither knows anything
/// about the form layer; failures are returned as
/// [`TransformationFailedError`] for the caller to present.
pub struct PhoneNumberToStringTransformer<'a> {
    util: &'a PhoneNumberUtil,
    default_region: String,
    format: PhoneNumberFormat,
}

impl PhoneNumberToStringTransformer<'static> {
    /// Uses the process-wide [`PHONE_NUMBER_UTIL`].
    pub fn new(default_region: &str, format: PhoneNumberFormat) -> Self {
        Self::with_util(&PHONE_NUMBER_UTIL, default_region, format)
    }
}

impl Default for PhoneNumberToStringTransformer<'static> {
    /// Unknown default region, INTERNATIONAL display.
    fn default() -> Self {
        Self::new(RegionCode::get_unknown(), PhoneNumberFormat::International)
    }
}

impl<'a> PhoneNumberToStringTransformer<'a> {
    pub fn with_util(util: &'a PhoneNumberUtil, default_region: &str, format: PhoneNumberFormat) -> Self {
        Self {
            util,
            default_region: default_region.to_owned(),
            format,
        }
    }

    pub fn default_region(&self) -> &str {
        &self.default_region
    }

    pub fn format(&self) -> PhoneNumberFormat {
        self.format
    }

    /// Renders a value for display. Nothing renders as an empty string. Raw
    /// strings are parsed without a default region, so they need a leading
    /// plus sign. NATIONAL display is relative to the default region: numbers
    /// from elsewhere are shown as dialed from it.
    pub fn transform(
        &self,
        value: Option<&PhoneNumberInput>,
    ) -> Result<String, TransformationFailedError> {
        let Some(value) = value else {
            return Ok(String::new());
        };
        let parsed;
        let phone_number = match value {
            PhoneNumberInput::Structured(phone_number) => phone_number,
            PhoneNumberInput::Raw(raw_input) => {
                parsed = self.util.parse(raw_input, None)?;
                &parsed
            }
        };

        if self.format == PhoneNumberFormat::National {
            return Ok(self
                .util
                .format_out_of_country_calling_number(phone_number, &self.default_region));
        }
        Ok(self.util.format(phone_number, self.format))
    }

    /// Turns user input into an E164 string, reading it as dialed from the
    /// default region. Empty input yields `None`.
    pub fn reverse_transform(
        &self,
        value: &str,
    ) -> Result<Option<String>, TransformationFailedError> {
        if value.is_empty() {
            return Ok(None);
        }
        let phone_number = self.util.parse(value, Some(&self.default_region))?;
        let formatted = self.util.format(&phone_number, PhoneNumberFormat::E164);
        trace!("Reverse transformed {:?} into {}", value, formatted);
        Ok(Some(formatted))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        PHONE_NUMBER_UTIL, PhoneNumberFormat, PhoneNumberInput,
        errors::{ParseErrorKind, TransformationFailedError},
    };

    use super::PhoneNumberToStringTransformer;

    #[test]
    fn transform_nothing_is_empty() {
        let transformer = PhoneNumberToStringTransformer::default();
        assert_eq!(Ok(String::new()), transformer.transform(None));
    }

    #[test]
    fn transform_structured_number() {
        let number = PHONE_NUMBER_UTIL.parse("+14155552671", None).unwrap();
        let input = PhoneNumberInput::from(number);

        let transformer = PhoneNumberToStringTransformer::default();
        assert_eq!(Ok("+1 415-555-2671".to_owned()), transformer.transform(Some(&input)));

        let transformer = PhoneNumberToStringTransformer::new("US", PhoneNumberFormat::E164);
        assert_eq!(Ok("+14155552671".to_owned()), transformer.transform(Some(&input)));
    }

    #[test]
    fn transform_raw_string_needs_plus_sign() {
        let transformer = PhoneNumberToStringTransformer::new("US", PhoneNumberFormat::International);
        assert_eq!(
            Ok("+44 20 7031 3000".to_owned()),
            transformer.transform(Some(&PhoneNumberInput::from("+44 (0)20 7031 3000")))
        );

        let err = transformer
            .transform(Some(&PhoneNumberInput::from("415 555 2671")))
            .unwrap_err();
        assert_eq!(ParseErrorKind::MissingRegion, err.0.kind());
        assert_eq!("415 555 2671", err.0.raw_input);
    }

    #[test]
    fn transform_national_is_relative_to_default_region() {
        let gb_number = PhoneNumberInput::from("+442070313000");
        let us_number = PhoneNumberInput::from("+14155552671");

        let transformer = PhoneNumberToStringTransformer::new("GB", PhoneNumberFormat::National);
        assert_eq!(Ok("020 7031 3000".to_owned()), transformer.transform(Some(&gb_number)));
        assert_eq!(Ok("00 1 415-555-2671".to_owned()), transformer.transform(Some(&us_number)));

        let transformer = PhoneNumberToStringTransformer::new("US", PhoneNumberFormat::National);
        assert_eq!(Ok("1 (415) 555-2671".to_owned()), transformer.transform(Some(&us_number)));
        assert_eq!(Ok("011 44 20 7031 3000".to_owned()), transformer.transform(Some(&gb_number)));
    }

    #[test]
    fn reverse_transform_returns_e164() {
        let transformer = PhoneNumberToStringTransformer::new("GB", PhoneNumberFormat::International);
        assert_eq!(Ok(None), transformer.reverse_transform(""));
        assert_eq!(
            Ok(Some("+442070313000".to_owned())),
            transformer.reverse_transform("020 7031 3000")
        );
        assert_eq!(
            Ok(Some("+14155552671".to_owned())),
            transformer.reverse_transform("+1 (415) 555-2671")
        );
    }

    #[test]
    fn reverse_transform_reports_parse_error() {
        let transformer = PhoneNumberToStringTransformer::new("US", PhoneNumberFormat::International);
        let Err(TransformationFailedError(err)) = transformer.reverse_transform("123") else {
            panic!("expected failure");
        };
        assert_eq!(ParseErrorKind::InvalidLength, err.kind());

        let transformer = PhoneNumberToStringTransformer::default();
        let Err(TransformationFailedError(err)) = transformer.reverse_transform("4155552671") else {
            panic!("expected failure");
        };
        assert_eq!(ParseErrorKind::MissingRegion, err.kind());
    }
}
