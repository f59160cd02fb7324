// Copyright (C) 2026 The Phoneplan Authors
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

/// Records how the country calling code of a parsed number was derived.
///
/// Only set by [`crate::PhoneNumberEngine::parse_and_keep_raw_input`];
/// plain parsing leaves it at [`CountryCodeSource::Unspecified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CountryCodeSource {
    /// The number began with a plus sign (or its full-width variant).
    FromNumberWithPlusSign,
    /// The number began with the default region's international dialing
    /// prefix, e.g. "00" in most of Europe or "011" in NANPA regions.
    FromNumberWithIdd,
    /// No international prefix was present, so the calling code was taken
    /// from the default region supplied by the caller.
    FromDefaultCountry,
    #[default]
    Unspecified,
}

/// A parsed phone number.
///
/// Values are produced by the parser and never mutated afterwards. The
/// national significant number is stored as an integer together with an
/// explicit count of leading zeros, so Italian-style numbers such as
/// `02 3661 8300` survive the round trip; use
/// [`PhoneNumber::national_significant_number`] to recover the digit
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PhoneNumber {
    pub(crate) country_code: u16,
    pub(crate) national_number: u64,
    pub(crate) extension: Option<String>,
    pub(crate) italian_leading_zero: bool,
    pub(crate) number_of_leading_zeros: u8,
    pub(crate) raw_input: Option<String>,
    pub(crate) country_code_source: CountryCodeSource,
}

impl PhoneNumber {
    pub fn new(country_code: u16, national_number: u64) -> Self {
        Self {
            country_code,
            national_number,
            ..Default::default()
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Marks the national number as carrying `count` significant leading
    /// zeros, as found in Italian numbering.
    pub fn with_leading_zeros(mut self, count: u8) -> Self {
        self.italian_leading_zero = true;
        self.number_of_leading_zeros = count;
        self
    }

    pub fn country_code(&self) -> u16 {
        self.country_code
    }

    pub fn national_number(&self) -> u64 {
        self.national_number
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn italian_leading_zero(&self) -> bool {
        self.italian_leading_zero
    }

    pub fn raw_input(&self) -> Option<&str> {
        self.raw_input.as_deref()
    }

    pub fn country_code_source(&self) -> CountryCodeSource {
        self.country_code_source
    }

    /// The national significant number as a digit string, leading zeros
    /// included.
    pub fn national_significant_number(&self) -> String {
        let mut buf = itoa::Buffer::new();
        let digits = buf.format(self.national_number);
        if !self.italian_leading_zero {
            return digits.to_string();
        }
        // At least one zero is implied by the flag even if the count was
        // never set.
        let zeros = "0".repeat(self.number_of_leading_zeros.max(1) as usize);
        fast_cat::concat_str!(&zeros, digits)
    }
}
