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

use crate::proto_gen::numbering_plan::NumberingPlan;

use super::{
    PhoneNumberFormat,
    helper_constants::{
        MAX_LENGTH_EXTENSION, PLUS_SIGN, POSSIBLE_CHARS_AFTER_EXT_LABEL,
        POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL, RFC3966_EXTN_PREFIX, RFC3966_PREFIX,
    },
};

/// A helper function that is used by Format and FormatOutOfCountryCallingNumber.
pub(super) fn prefix_number_with_country_calling_code(
    country_calling_code: i32,
    number_format: PhoneNumberFormat,
    formatted_number: &mut String,
) {
    if let PhoneNumberFormat::National = number_format {
        return;
    }
    let mut buf = itoa::Buffer::new();
    let country_calling_code_str = buf.format(country_calling_code);

    // we anyway allocate a new string in concatenation, so we'l do it once
    // with capacity of resulting string
    match number_format {
        PhoneNumberFormat::E164 => {
            let new_str =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, &formatted_number);
            *formatted_number = new_str;
        }
        PhoneNumberFormat::International => {
            let new_str =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, " ", &formatted_number);

            *formatted_number = new_str;
        }
        PhoneNumberFormat::RFC3966 => {
            let new_str = fast_cat::concat_str!(
                RFC3966_PREFIX,
                PLUS_SIGN,
                country_calling_code_str,
                &formatted_number
            );

            *formatted_number = new_str;
        }
        // here code is already returned
        PhoneNumberFormat::National => {}
    }
}

/// Helper method for constructing regular expressions for parsing. Creates an
/// expression that captures up to max_length digits.
pub(super) fn extn_digits(max_length: usize) -> String {
    let mut buf = itoa::Buffer::new();
    let max_length_str = buf.format(max_length);
    fast_cat::concat_str!("([0-9]{1,", max_length_str, "})")
}

// Creates the regular-expression pattern to match extensions. Note that the
// only capturing groups should be around the digits that you want to capture
// as part of the extension. The number of groups is not fixed, callers take
// the first group that participated in the match.
pub(super) fn create_extn_pattern() -> String {
    // We cap the maximum length of an extension based on the ambiguity of the
    // way the extension is prefixed. As per ITU, the officially allowed
    // length for extensions is actually 40, but we don't support this since we
    // haven't seen real examples and this introduces many false interpretations
    // as the extension labels are not standardized.
    let ext_limit_after_explicit_label = MAX_LENGTH_EXTENSION;
    let ext_limit_after_likely_label = 15;
    let ext_limit_after_ambiguous_char = 9;

    // Two options for representing any non-ASCII character like ó - the
    // character itself, and one in the unicode decomposed form with the
    // combining acute accent.
    let explicit_ext_labels = "(?:e?xt(?:ensi(?:o\u{0301}?|\u{00F3}))?n?|(?:\u{FF45})?\u{FF58}\u{FF54}(?:\u{FF4E})?|anexo)";
    // One-character symbols that can be used to indicate an extension, and less
    // commonly used or more ambiguous extension labels. Tildes are left out as
    // they are valid punctuation inside a number.
    let ambiguous_ext_labels = "(?:[x\u{FF58}#\u{FF03}]|int|\u{FF49}\u{FF4E}\u{FF54})";
    // ",," is commonly used for auto dialling the extension when connected.
    // Semi-colon works in Iphone and also in Android to pop up a button with
    // the extension number following.
    let auto_dialling_and_ext_labels_found = "(?:,{2}|;)";
    let possible_separators_number_ext_label_no_comma = "[ \u{00A0}\\t]*";

    let rfc_extn = fast_cat::concat_str!(
        RFC3966_EXTN_PREFIX,
        &extn_digits(ext_limit_after_explicit_label)
    );
    let explicit_extn = fast_cat::concat_str!(
        POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
        explicit_ext_labels,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        &extn_digits(ext_limit_after_explicit_label),
        "#?"
    );
    let ambiguous_extn = fast_cat::concat_str!(
        POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
        ambiguous_ext_labels,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        &extn_digits(ext_limit_after_ambiguous_char),
        "#?"
    );
    let auto_dialling_extn = fast_cat::concat_str!(
        possible_separators_number_ext_label_no_comma,
        auto_dialling_and_ext_labels_found,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        &extn_digits(ext_limit_after_likely_label),
        "#?"
    );

    fast_cat::concat_str!(
        &rfc_extn,
        "|",
        &explicit_extn,
        "|",
        &ambiguous_extn,
        "|",
        &auto_dialling_extn
    )
}

/// Checks a national significant number length against the inclusive range
/// of a numbering plan.
pub(super) fn is_possible_length(national_number_length: usize, plan: &NumberingPlan) -> bool {
    let length = national_number_length as i32;
    plan.min_length() <= length && length <= plan.max_length()
}

/// Splits a national significant number into its leading zeros and the
/// numeric value of the rest. A number made of zeros only keeps its last zero
/// as the value, so "000" is two leading zeros followed by 0.
pub(super) fn split_leading_zeros(national_significant_number: &str) -> Option<(u32, u64)> {
    let zeros = national_significant_number
        .bytes()
        .take_while(|b| *b == b'0')
        .count()
        .min(national_significant_number.len().saturating_sub(1));
    let value = national_significant_number[zeros..].parse::<u64>().ok()?;
    Some((zeros as u32, value))
}

#[cfg(test)]
mod tests {
    use super::{split_leading_zeros, prefix_number_with_country_calling_code};
    use crate::PhoneNumberFormat;

    #[test]
    fn splits_leading_zeros() {
        assert_eq!(Some((0, 4155552671)), split_leading_zeros("4155552671"));
        assert_eq!(Some((1, 236618300)), split_leading_zeros("0236618300"));
        assert_eq!(Some((2, 0)), split_leading_zeros("000"));
        assert_eq!(Some((0, 0)), split_leading_zeros("0"));
        assert_eq!(None, split_leading_zeros(""));
    }

    #[test]
    fn prefixes_country_calling_code() {
        let mut number = "415-555-2671".to_owned();
        prefix_number_with_country_calling_code(1, PhoneNumberFormat::International, &mut number);
        assert_eq!("+1 415-555-2671", number);

        let mut number = "4155552671".to_owned();
        prefix_number_with_country_calling_code(1, PhoneNumberFormat::RFC3966, &mut number);
        assert_eq!("tel:+14155552671", number);

        let mut number = "(415) 555-2671".to_owned();
        prefix_number_with_country_calling_code(1, PhoneNumberFormat::National, &mut number);
        assert_eq!("(415) 555-2671", number);
    }
}
