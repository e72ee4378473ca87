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

use strum::{Display, EnumIter, EnumString};

/// Defines the various standardized formats for representing phone numbers.
///
/// `INTERNATIONAL` and `NATIONAL` formats align with the ITU-T E.123 recommendation,
/// but the digit grouping and separators come from the numbering plan of the
/// number's country.
///
/// For example, a San Francisco number would be:
/// - **INTERNATIONAL**: `+1 415-555-2671`
/// - **NATIONAL**: `(415) 555-2671`
/// - **E164**: `+14155552671` (international format without formatting)
/// - **RFC3966**: `tel:+14155552671` (E164 with a "tel:" prefix)
///
/// Parses from and prints as its upper-case name, e.g. `"INTERNATIONAL"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum PhoneNumberFormat {
    /// **E.164 format.**
    /// This is a standardized international format with no spaces or symbols,
    /// always starting with a `+` followed by the country code.
    /// Extensions are dropped.
    /// Example: `+41446681800`.
    #[strum(serialize = "E164")]
    E164,
    /// **International format.**
    /// This format includes the country code and is formatted with spaces
    /// for readability, as recommended for international display.
    /// Example: `+41 44 668 18 00`.
    #[strum(serialize = "INTERNATIONAL")]
    International,
    /// **National format.**
    /// This format is used for dialing within the number's own country.
    /// It may include a national prefix (like '0') and uses local formatting conventions.
    /// Example: `044 668 18 00`.
    #[strum(serialize = "NATIONAL")]
    National,
    /// **RFC3966 format.**
    /// A URI for use in contexts like web links: "tel:" followed by the E164
    /// digits, with ";ext=" and the extension when there is one.
    /// Example: `tel:+41446681800;ext=123`.
    #[strum(serialize = "RFC3966")]
    RFC3966,
}

/// Records how the country calling code of a parsed number was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCodeSource {
    /// The input started with a plus sign.
    FromNumberWithPlusSign,
    /// The input started with the international dialing prefix of the
    /// default region, e.g. "011" for the US.
    FromNumberWithIdd,
    /// No country calling code was present; the default region's was used.
    FromDefaultCountry,
    /// The number was built from its parts rather than parsed.
    Unspecified,
}
