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

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Reason a string could not be turned into a [`PhoneNumber`](crate::PhoneNumber).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseErrorKind {
    /// The number has no leading `+` and no known default region was given.
    #[error("No leading plus sign and no known default region")]
    MissingRegion,
    /// The digits after `+` (or after an international dialing prefix) do not
    /// start with a known country calling code.
    #[error("Unknown country calling code")]
    UnknownCountryCode,
    /// The national significant number is outside the length range of the
    /// numbering plan.
    #[error("Invalid national number length")]
    InvalidLength,
    /// Something other than digits and formatting characters was found.
    #[error("Malformed input")]
    MalformedInput,
}

/// Typed parse failure. Carries the offending input for diagnostics only; it
/// is up to the caller to turn it into something a user can read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {raw_input:?}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub raw_input: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, raw_input: impl Into<String>) -> Self {
        Self { kind, raw_input: raw_input.into() }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

/// Numbering plan data could not be loaded. There is no degraded mode: a
/// table is either fully loaded or not created at all.
#[derive(Debug, PartialEq, Error)]
pub enum PlanLoadError {
    #[error("Could not decode numbering plan data: {0}")]
    Decode(String),

    #[error("Numbering plan #{index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("Region {region} has invalid country calling code {country_code}")]
    InvalidCountryCode { region: String, country_code: i32 },

    #[error("Region {region} has invalid national number length range {min}..={max}")]
    InvalidLengthRange { region: String, min: i32, max: i32 },

    #[error("Region {0} is defined more than once")]
    DuplicateRegion(String),

    #[error("Country calling code {0} is defined more than once for non-geographical entities")]
    DuplicateNonGeoCode(i32),

    #[error("Region {region}: {source}")]
    InvalidRegex {
        region: String,
        #[source]
        source: InvalidRegexError,
    },

    #[error("Region {region} has unsupported national prefix formatting rule {rule:?}")]
    InvalidFormattingRule { region: String, rule: String },
}

/// Failure surfaced by [`PhoneNumberToStringTransformer`](crate::PhoneNumberToStringTransformer).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Transformation failed: {0}")]
pub struct TransformationFailedError(#[from] pub ParseError);
