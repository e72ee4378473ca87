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

use std::borrow::Cow;

use log::{trace, warn};

use super::{
    CountryCodeSource, PhoneNumberFormat,
    errors::{ParseError, ParseErrorKind, PlanLoadError},
    helper_constants::{
        DEFAULT_EXTN_PREFIX, MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_EXTENSION, NANPA_COUNTRY_CODE,
        NUMBERING_PLAN_DATA, RFC3966_EXTN_PREFIX,
    },
    helper_functions::{prefix_number_with_country_calling_code, split_leading_zeros},
    helper_types::PhoneNumberWithCountryCodeSource,
    numbering_plan_table::{CompiledNumberFormat, NumberingPlanTable, PlanEntry},
    phone_number::{PhoneNumber, PhoneNumberInput},
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
};
use crate::{interfaces::NumberingPlanLookup, proto_gen::numbering_plan::NumberingPlanCollection};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parses and formats phone numbers against one immutable numbering plan
/// table. All methods take `&self`, so one instance can serve any number of
/// threads; see [`PHONE_NUMBER_UTIL`](crate::PHONE_NUMBER_UTIL) for the
/// process-wide instance built from the compiled-in plans.
pub struct PhoneNumberUtil {
    /// Helper class holding useful regular expressions.
    reg_exps: PhoneNumberRegExpsAndMappings,

    plans: NumberingPlanTable,
}

impl PhoneNumberUtil {
    pub(super) fn new() -> Self {
        match Self::from_text(NUMBERING_PLAN_DATA) {
            Err(err) => {
                let err_message = format!("Could not load compiled-in numbering plans: {}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
            Ok(instance) => instance,
        }
    }

    /// Builds an instance for a plan collection other than the compiled-in one.
    pub fn new_for_metadata(collection: NumberingPlanCollection) -> std::result::Result<Self, PlanLoadError> {
        Ok(Self::with_plans(NumberingPlanTable::new(collection)?))
    }

    /// Builds an instance from plans written in protobuf text format.
    pub fn from_text(text: &str) -> std::result::Result<Self, PlanLoadError> {
        Ok(Self::with_plans(NumberingPlanTable::from_text(text)?))
    }

    fn with_plans(plans: NumberingPlanTable) -> Self {
        Self {
            reg_exps: PhoneNumberRegExpsAndMappings::new(),
            plans,
        }
    }

    pub fn plans(&self) -> &NumberingPlanTable {
        &self.plans
    }

    pub fn get_supported_regions(&self) -> impl Iterator<Item = &str> {
        self.plans.supported_regions()
    }

    pub fn get_supported_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.plans.supported_calling_codes()
    }

    pub fn get_supported_global_network_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.plans.supported_global_network_calling_codes()
    }

    /// Returns the region code that matches the specific country calling code. In
    /// the case of no region code being found, the unknown region code will be
    /// returned.
    pub fn get_region_code_for_country_code(&self, country_calling_code: i32) -> &str {
        self.plans.region_code_for_country_code(country_calling_code)
    }

    pub fn get_country_code_for_region(&self, region_code: &str) -> Option<i32> {
        self.plans.lookup_by_region(region_code)
    }

    /// Parses a string into a phone number.
    ///
    /// Formatting characters are ignored and a leading `+` marks the country
    /// calling code. Without it the number is read as dialed from
    /// `default_region`: either starting with that region's international
    /// dialing prefix, or as a national number, with the national prefix if
    /// any. An extension may follow the number (`;ext=12`, `ext. 12`, `x12`).
    ///
    /// ```
    /// use phonenorm::{PHONE_NUMBER_UTIL, PhoneNumberFormat};
    ///
    /// let number = PHONE_NUMBER_UTIL.parse("(415) 555-2671", Some("US")).unwrap();
    /// assert_eq!("+14155552671", PHONE_NUMBER_UTIL.format(&number, PhoneNumberFormat::E164));
    /// ```
    pub fn parse(&self, raw_input: &str, default_region: Option<&str>) -> Result<PhoneNumber> {
        let fail = |kind| ParseError::new(kind, raw_input);

        let normalized = dec_from_char::normalize_decimals(raw_input.trim());
        let mut number: &str = &normalized;
        if let Some(scheme) = self.reg_exps.rfc3966_prefix_pattern.find(number) {
            number = &number[scheme.end()..];
        }
        let (number, extension) = self.maybe_strip_extension(number);
        let number = self.reg_exps.separator_pattern.replace_all(number, "");

        let (digits, has_plus) = match self.reg_exps.plus_chars_pattern.find(&number) {
            Some(plus) => (&number[plus.end()..], true),
            None => (&number[..], false),
        };

        let region_plan = if has_plus {
            None
        } else {
            let plan = default_region.and_then(|region| self.plans.plan_for_region(region));
            if plan.is_none() {
                trace!("No plus sign in {:?} and no known default region {:?}", raw_input, default_region);
                return Err(fail(ParseErrorKind::MissingRegion));
            }
            plan
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            trace!("Non-digit characters left in {:?} after removing punctuation", raw_input);
            return Err(fail(ParseErrorKind::MalformedInput));
        }

        let extracted = match region_plan {
            None => self.extract_country_code(digits, CountryCodeSource::FromNumberWithPlusSign),
            Some(plan) => self.extract_for_region(digits, plan),
        }
        .map_err(fail)?;

        let (number_of_leading_zeros, national_number) =
            split_leading_zeros(extracted.national_number)
                .ok_or_else(|| fail(ParseErrorKind::MalformedInput))?;

        trace!(
            "Parsed {:?} as country code {} ({:?}), national number {}",
            raw_input, extracted.country_code, extracted.country_code_source, extracted.national_number
        );

        Ok(PhoneNumber::new(
            extracted.country_code,
            number_of_leading_zeros,
            national_number,
            extension.map(str::to_owned),
        )
        .with_raw_input(raw_input, extracted.country_code_source))
    }

    /// Builds a phone number from its parts, validating them like
    /// [`parse`](Self::parse) does.
    pub fn build_number(
        &self,
        country_code: i32,
        national_significant_number: &str,
        extension: Option<&str>,
    ) -> Result<PhoneNumber> {
        let mut buf = itoa::Buffer::new();
        let diagnostic = fast_cat::concat_str!("+", buf.format(country_code), national_significant_number);
        let fail = |kind| ParseError::new(kind, diagnostic.as_str());

        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(national_significant_number)
            || extension.is_some_and(|ext| !is_digits(ext) || ext.len() > MAX_LENGTH_EXTENSION)
        {
            return Err(fail(ParseErrorKind::MalformedInput));
        }
        if !self.plans.has_country_code(country_code) {
            return Err(fail(ParseErrorKind::UnknownCountryCode));
        }
        if !self
            .plans
            .plans_for_country_code(country_code)
            .any(|plan| plan.is_possible_length(national_significant_number.len()))
        {
            return Err(fail(ParseErrorKind::InvalidLength));
        }
        let (number_of_leading_zeros, national_number) =
            split_leading_zeros(national_significant_number)
                .ok_or_else(|| fail(ParseErrorKind::MalformedInput))?;

        Ok(PhoneNumber::new(
            country_code,
            number_of_leading_zeros,
            national_number,
            extension.map(str::to_owned),
        ))
    }

    /// Formats a phone number in the specified format using default rules. Never
    /// fails: every [`PhoneNumber`] was validated against the same plans.
    pub fn format(&self, phone_number: &PhoneNumber, number_format: PhoneNumberFormat) -> String {
        let country_calling_code = phone_number.country_code();
        let national_significant_number = phone_number.national_significant_number();

        match number_format {
            PhoneNumberFormat::E164 => {
                // Early exit for E164 case since no formatting of the national
                // number needs to be applied. Extensions are not formatted.
                let mut formatted_number = national_significant_number;
                prefix_number_with_country_calling_code(
                    country_calling_code,
                    number_format,
                    &mut formatted_number,
                );
                formatted_number
            }
            PhoneNumberFormat::RFC3966 => {
                let mut formatted_number = national_significant_number;
                if let Some(extension) = phone_number.extension() {
                    formatted_number.push_str(RFC3966_EXTN_PREFIX);
                    formatted_number.push_str(extension);
                }
                prefix_number_with_country_calling_code(
                    country_calling_code,
                    number_format,
                    &mut formatted_number,
                );
                formatted_number
            }
            PhoneNumberFormat::International | PhoneNumberFormat::National => {
                // Note here that all NANPA formatting rules are contained by US, so we use
                // that to format NANPA numbers. The same applies to Russian Fed regions -
                // rules are contained by Russia.
                let Some(plan) = self.plans.lookup(country_calling_code) else {
                    let mut formatted_number = national_significant_number;
                    prefix_number_with_country_calling_code(
                        country_calling_code,
                        number_format,
                        &mut formatted_number,
                    );
                    return formatted_number;
                };
                let mut formatted_number = self
                    .format_nsn(&national_significant_number, plan, number_format)
                    .into_owned();
                Self::append_formatted_extension(phone_number, plan, &mut formatted_number);
                prefix_number_with_country_calling_code(
                    country_calling_code,
                    number_format,
                    &mut formatted_number,
                );
                formatted_number
            }
        }
    }

    /// Formats a phone number for out-of-country dialing purposes.
    ///
    /// Numbers of the calling region's own country calling code come out in
    /// NATIONAL format (NANPA numbers called from NANPA regions are prefixed
    /// with "1 "). Other numbers start with the calling region's international
    /// dialing prefix, or with "+" when the region has no single prefix or is
    /// unknown.
    pub fn format_out_of_country_calling_number(
        &self,
        phone_number: &PhoneNumber,
        calling_from: &str,
    ) -> String {
        let Some(calling_from_plan) = self.plans.plan_for_region(calling_from) else {
            warn!(
                "Trying to format number from invalid region {}. International formatting applied.",
                calling_from
            );
            return self.format(phone_number, PhoneNumberFormat::International);
        };
        let country_calling_code = phone_number.country_code();
        let country_code_for_calling_from = calling_from_plan.country_code();

        if country_calling_code == NANPA_COUNTRY_CODE
            && country_code_for_calling_from == NANPA_COUNTRY_CODE
        {
            // For NANPA regions, return the national format for these regions but
            // prefix it with the country calling code.
            let mut buf = itoa::Buffer::new();
            return fast_cat::concat_str!(
                buf.format(country_calling_code),
                " ",
                &self.format(phone_number, PhoneNumberFormat::National)
            );
        } else if country_calling_code == country_code_for_calling_from {
            // If regions share a country calling code, the country calling code need
            // not be dialled. This also applies when dialling within a region, so this
            // if clause covers both these cases.
            return self.format(phone_number, PhoneNumberFormat::National);
        }

        let Some(plan) = self.plans.lookup(country_calling_code) else {
            return self.format(phone_number, PhoneNumberFormat::International);
        };

        // For regions that have multiple international prefixes, the international
        // format of the number is returned, unless there is a preferred international
        // prefix.
        let international_prefix = calling_from_plan.plan().international_prefix();
        let international_prefix_for_formatting =
            if self.reg_exps.single_international_prefix.is_match(international_prefix) {
                international_prefix
            } else {
                calling_from_plan.plan().preferred_international_prefix()
            };

        let national_significant_number = phone_number.national_significant_number();
        let mut formatted_number = self
            .format_nsn(
                &national_significant_number,
                plan,
                PhoneNumberFormat::International,
            )
            .into_owned();
        Self::append_formatted_extension(phone_number, plan, &mut formatted_number);

        if international_prefix_for_formatting.is_empty() {
            prefix_number_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::International,
                &mut formatted_number,
            );
            formatted_number
        } else {
            let mut buf = itoa::Buffer::new();
            fast_cat::concat_str!(
                international_prefix_for_formatting,
                " ",
                buf.format(country_calling_code),
                " ",
                &formatted_number
            )
        }
    }

    /// Formats either an already parsed number or a raw string, which is
    /// parsed with `default_region` first.
    pub fn format_input(
        &self,
        input: &PhoneNumberInput,
        default_region: Option<&str>,
        number_format: PhoneNumberFormat,
    ) -> Result<String> {
        match input {
            PhoneNumberInput::Structured(phone_number) => Ok(self.format(phone_number, number_format)),
            PhoneNumberInput::Raw(raw_input) => {
                let phone_number = self.parse(raw_input, default_region)?;
                Ok(self.format(&phone_number, number_format))
            }
        }
    }

    /// Strips any extension (as in, the part of the number dialled after the
    /// call is connected, usually indicated with extn, ext, x or similar) from
    /// the end of the number, and returns it. The remaining number must still
    /// contain a digit, otherwise nothing is stripped.
    fn maybe_strip_extension<'a>(&self, number: &'a str) -> (&'a str, Option<&'a str>) {
        let Some(captures) = self.reg_exps.extn_pattern.captures(number) else {
            return (number, None);
        };
        let (Some(whole), Some(extension)) =
            (captures.get(0), captures.iter().skip(1).flatten().next())
        else {
            return (number, None);
        };
        let rest = &number[..whole.start()];
        if !rest.bytes().any(|b| b.is_ascii_digit()) {
            return (number, None);
        }
        (rest, Some(extension.as_str()))
    }

    /// Splits `digits` (which follow a plus sign or an international dialing
    /// prefix) into a country calling code and a national number.
    ///
    /// The longest known code wins; shorter codes are never tried once one
    /// is found. Among the plans sharing that code the remaining digits only
    /// need to fit one, the main region's plan first. A national prefix
    /// dialed after the code is dropped when that is the only way to reach a
    /// valid length.
    fn extract_country_code<'a>(
        &self,
        digits: &'a str,
        country_code_source: CountryCodeSource,
    ) -> std::result::Result<PhoneNumberWithCountryCodeSource<'a>, ParseErrorKind> {
        // Country calling codes never start with 0.
        if digits.starts_with('0') {
            return Err(ParseErrorKind::UnknownCountryCode);
        }
        for length in (1..=MAX_LENGTH_COUNTRY_CODE.min(digits.len())).rev() {
            let Ok(country_code) = digits[..length].parse::<i32>() else {
                continue;
            };
            if !self.plans.has_country_code(country_code) {
                continue;
            }
            let national_number = &digits[length..];

            if self
                .plans
                .plans_for_country_code(country_code)
                .any(|plan| plan.is_possible_length(national_number.len()))
            {
                return Ok(PhoneNumberWithCountryCodeSource::new(
                    country_code,
                    national_number,
                    country_code_source,
                ));
            }
            if let Some(stripped) = self
                .plans
                .plans_for_country_code(country_code)
                .find_map(|plan| Self::strip_national_prefix(national_number, plan))
            {
                return Ok(PhoneNumberWithCountryCodeSource::new(
                    country_code,
                    stripped,
                    country_code_source,
                ));
            }
            trace!(
                "Country code {} matched but {} remaining digits fit none of its plans",
                country_code,
                national_number.len()
            );
            return Err(ParseErrorKind::InvalidLength);
        }
        Err(ParseErrorKind::UnknownCountryCode)
    }

    /// Reads `digits` as dialed from the region of `plan`.
    fn extract_for_region<'a>(
        &self,
        digits: &'a str,
        plan: &PlanEntry,
    ) -> std::result::Result<PhoneNumberWithCountryCodeSource<'a>, ParseErrorKind> {
        if let Some(prefix_length) = plan.match_international_prefix(digits) {
            let rest = &digits[prefix_length..];
            // If the international prefix is followed by a 0, it is not treated
            // as one: country calling codes never start with 0.
            if !rest.is_empty() && !rest.starts_with('0') {
                return self.extract_country_code(rest, CountryCodeSource::FromNumberWithIdd);
            }
        }

        let national_number = Self::strip_national_prefix(digits, plan).unwrap_or(digits);
        if !plan.is_possible_length(national_number.len()) {
            trace!(
                "National number {} has invalid length for region {}",
                national_number,
                plan.region_code()
            );
            return Err(ParseErrorKind::InvalidLength);
        }
        Ok(PhoneNumberWithCountryCodeSource::new(
            plan.country_code(),
            national_number,
            CountryCodeSource::FromDefaultCountry,
        ))
    }

    /// Returns the number without the plan's national prefix, if it starts
    /// with one and what is left has a valid length.
    fn strip_national_prefix<'a>(number: &'a str, plan: &PlanEntry) -> Option<&'a str> {
        let stripped = number.strip_prefix(plan.national_prefix()?)?;
        plan.is_possible_length(stripped.len()).then_some(stripped)
    }

    /// Groups a national significant number with the first matching format of
    /// the plan. Returns the digits unchanged when no format matches.
    fn format_nsn<'b>(
        &self,
        national_number: &'b str,
        plan: &PlanEntry,
        number_format: PhoneNumberFormat,
    ) -> Cow<'b, str> {
        // When the intl_number_formats exists, we use that to format national number
        // for the INTERNATIONAL format instead of using the number_formats.
        let available_formats = if number_format == PhoneNumberFormat::National {
            plan.number_formats()
        } else {
            plan.intl_number_formats()
        };
        available_formats
            .iter()
            .find(|format| format.applies_to(national_number))
            .map(|formatting_pattern| {
                self.format_nsn_using_pattern(national_number, formatting_pattern, number_format)
            })
            .unwrap_or(Cow::Borrowed(national_number))
    }

    fn format_nsn_using_pattern<'b>(
        &self,
        national_number: &'b str,
        formatting_pattern: &CompiledNumberFormat,
        number_format: PhoneNumberFormat,
    ) -> Cow<'b, str> {
        let mut number_format_rule = Cow::Borrowed(formatting_pattern.format.as_str());
        if let (PhoneNumberFormat::National, Some(national_prefix_formatting_rule)) = (
            number_format,
            &formatting_pattern.national_prefix_formatting_rule,
        ) {
            // Apply the national_prefix_formatting_rule as the formatting_pattern
            // contains only information on how the national significant number
            // should be formatted at this point.
            number_format_rule = self
                .reg_exps
                .first_group_capturing_pattern
                .replace(&formatting_pattern.format, national_prefix_formatting_rule.as_str());
        }
        formatting_pattern
            .pattern
            .replace_all(national_number, &*number_format_rule)
    }

    /// Appends the extension, if any, with the plan's preferred prefix or
    /// " ext. ".
    fn append_formatted_extension(
        phone_number: &PhoneNumber,
        plan: &PlanEntry,
        formatted_number: &mut String,
    ) {
        let Some(extension) = phone_number.extension() else {
            return;
        };
        let preferred_extn_prefix = plan.plan().preferred_extn_prefix();
        let prefix = if preferred_extn_prefix.is_empty() {
            DEFAULT_EXTN_PREFIX
        } else {
            preferred_extn_prefix
        };
        formatted_number.push_str(prefix);
        formatted_number.push_str(extension);
    }
}
