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


use super::enums::CountryCodeSource;

/// A national number split off the digits of a parsed input, with the
/// country calling code it belongs to and where that code came from.
#[derive(Debug)]
pub struct PhoneNumberWithCountryCodeSource<'a> {
    pub country_code: i32,
    pub national_number: &'a str,
    pub country_code_source: CountryCodeSource
}

impl<'a> PhoneNumberWithCountryCodeSource<'a> {
    pub fn new(
        country_code: i32,
        national_number: &'a str,
        country_code_source: CountryCodeSource
    ) -> Self {
        Self { country_code, national_number, country_code_source }
    }
}
