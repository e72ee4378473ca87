// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
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


use regex::Regex;

use crate::phonenumberutil::{
    helper_constants::{PLUS_CHARS, RFC3966_PREFIX, VALID_PUNCTUATION},
    helper_functions::create_extn_pattern,
};

pub(super) struct PhoneNumberRegExpsAndMappings {
    /// Regexp of all possible ways to write extensions at the end of a number,
    /// for use when parsing. Run as a case-insensitive match. Wide character
    /// versions are also provided after each ASCII version.
    pub extn_pattern: Regex,

    /// Regular expression of groups of valid punctuation characters.
    pub separator_pattern: Regex,

    /// A single plus sign (ASCII or full-width) at the start of a number.
    pub plus_chars_pattern: Regex,

    /// The "tel:" scheme of an RFC3966 URI, any case.
    pub rfc3966_prefix_pattern: Regex,

    /// The first digit group reference of a format, e.g. "$1" in "$1 $2".
    /// A plain `\d` is used because some formats do not start with $1.
    pub first_group_capturing_pattern: Regex,

    /// Pattern that makes it easy to distinguish whether a region has a single
    /// international dialing prefix or not. If a region has a single international
    /// prefix (e.g. 011 in USA), it will be represented as a string that contains
    /// a sequence of ASCII digits, and possibly a tilde, which signals waiting for
    /// the tone. If there are multiple available international prefixes in a
    /// region, they will be represented as a regex string that always contains one
    /// or more characters that are not ASCII digits or a tilde.
    pub single_international_prefix: Regex,

    /// Tokens a national prefix formatting rule may contain.
    pub national_prefix_formatting_tokens: Regex,
}

impl PhoneNumberRegExpsAndMappings {
    pub fn new() -> Self {
        // every pattern here is a constant, so a failure is a bug in this file
        Self {
            extn_pattern: Regex::new(
                &format!("(?i)(?:{})$", create_extn_pattern())
            ).unwrap(),
            separator_pattern: Regex::new(&format!("[{}]+", VALID_PUNCTUATION)).unwrap(),
            plus_chars_pattern: Regex::new(&format!("^[{}]", PLUS_CHARS)).unwrap(),
            rfc3966_prefix_pattern: Regex::new(&format!("(?i)^{}", RFC3966_PREFIX)).unwrap(),
            first_group_capturing_pattern: Regex::new("(\\$\\d)").unwrap(),
            single_international_prefix: Regex::new(
                "^[\\d]+(?:[~\u{2053}\u{223C}\u{FF5E}][\\d]+)?$"
            ).unwrap(),
            national_prefix_formatting_tokens: Regex::new("\\$(?:NP|FG)").unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PhoneNumberRegExpsAndMappings;

    #[test]
    fn check_regexps_are_compiling() {
        PhoneNumberRegExpsAndMappings::new();
    }

    #[test]
    fn extension_pattern_requires_label() {
        let reg_exps = PhoneNumberRegExpsAndMappings::new();
        assert!(reg_exps.extn_pattern.is_match("650 253 0000 ext. 1234"));
        assert!(reg_exps.extn_pattern.is_match("650 253 0000;ext=1234"));
        assert!(reg_exps.extn_pattern.is_match("650 253 0000 X 12"));
        assert!(!reg_exps.extn_pattern.is_match("650 253 0000"));
        assert!(!reg_exps.extn_pattern.is_match("650-253-0000"));
    }

    #[test]
    fn single_international_prefix() {
        let reg_exps = PhoneNumberRegExpsAndMappings::new();
        assert!(reg_exps.single_international_prefix.is_match("011"));
        assert!(reg_exps.single_international_prefix.is_match("8~10"));
        assert!(!reg_exps.single_international_prefix.is_match("0[0-3]\\d"));
        assert!(!reg_exps.single_international_prefix.is_match("00(?:1[245]|31)"));
    }
}
