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

use log::{error, trace};

use crate::consts::{MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN};
use crate::engine::PhoneNumberEngine;
use crate::errors::ParseError;
use crate::matcher::{test_number_length, LengthVerdict};
use crate::metadata::RegionMetadata;
use crate::normalizer;
use crate::phonenumber::{CountryCodeSource, PhoneNumber};
use crate::regex_util::RegexExt;

impl PhoneNumberEngine {
    /// Parses `input` into a [`PhoneNumber`].
    ///
    /// `default_region` supplies the numbering plan assumed when the
    /// input carries no country calling code of its own; it is ignored
    /// when the input starts with a plus sign. Pass an unknown region
    /// such as "ZZ" to accept international-format input only.
    pub fn parse(&self, input: &str, default_region: &str) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(input, default_region, false)
    }

    /// Like [`PhoneNumberEngine::parse`], but records the verbatim input
    /// and how the country calling code was derived on the result.
    pub fn parse_and_keep_raw_input(
        &self,
        input: &str,
        default_region: &str,
    ) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(input, default_region, true)
    }

    fn parse_helper(
        &self,
        input: &str,
        default_region: &str,
        keep_raw_input: bool,
    ) -> Result<PhoneNumber, ParseError> {
        let candidate = normalizer::extract_viable_number(&self.patterns, input);
        if candidate.is_empty() {
            trace!("no viable number found in input");
            return Err(ParseError::NotANumber);
        }
        if !normalizer::is_viable_number(&self.patterns, candidate) {
            return Err(ParseError::NotANumber);
        }

        let default_metadata = self.database.metadata_for_region(default_region);

        let mut rest_of_number = candidate.to_string();
        let extension = normalizer::strip_extension(&self.patterns, &mut rest_of_number);

        let after_plus = self
            .patterns
            .plus_chars
            .strip_prefix_match(&rest_of_number)
            .map(str::to_string);
        if default_metadata.is_none() && after_plus.is_none() {
            trace!("region {default_region} is unknown and input has no plus sign");
            return Err(ParseError::InvalidCountryCode);
        }

        let (country_code, national_number, source) = if let Some(after_plus) = after_plus {
            let normalized = normalizer::normalize(&self.patterns, &after_plus);
            match self.extract_calling_code(&normalized) {
                Some((code, national)) => (
                    code,
                    national.to_string(),
                    CountryCodeSource::FromNumberWithPlusSign,
                ),
                None => return Err(ParseError::InvalidCountryCode),
            }
        } else {
            // Guarded above.
            let metadata = default_metadata.ok_or(ParseError::InvalidCountryCode)?;
            let normalized = normalizer::normalize(&self.patterns, &rest_of_number);
            if let Some(after_idd) = self.maybe_strip_idd_prefix(&normalized, metadata) {
                if after_idd.is_empty() {
                    return Err(ParseError::TooShort);
                }
                match self.extract_calling_code(after_idd) {
                    Some((code, national)) => (
                        code,
                        national.to_string(),
                        CountryCodeSource::FromNumberWithIdd,
                    ),
                    None => return Err(ParseError::InvalidCountryCode),
                }
            } else {
                let mut national = normalized;
                self.maybe_strip_national_prefix(&mut national, metadata);
                (
                    metadata.country_code,
                    national,
                    CountryCodeSource::FromDefaultCountry,
                )
            }
        };

        if national_number.len() < MIN_LENGTH_FOR_NSN {
            return Err(ParseError::TooShort);
        }
        if national_number.len() > MAX_LENGTH_FOR_NSN {
            return Err(ParseError::TooLong);
        }

        let region = if source == CountryCodeSource::FromDefaultCountry {
            default_region
        } else {
            self.region_code_for_country_code(country_code)
        };
        let metadata = self
            .database
            .metadata_for_region_or_calling_code(country_code, region)
            .ok_or(ParseError::InvalidCountryCode)?;
        match test_number_length(&national_number, metadata) {
            LengthVerdict::TooShort => return Err(ParseError::TooShort),
            LengthVerdict::TooLong => return Err(ParseError::TooLong),
            // An unlisted in-range length still parses; validity is a
            // separate question answered by is_valid_number.
            LengthVerdict::Possible
            | LengthVerdict::PossibleLocalOnly
            | LengthVerdict::Unlisted => {}
        }

        // MIN_LENGTH_FOR_NSN keeps at least one digit after the zeros.
        let leading_zeros = national_number
            .chars()
            .take_while(|&c| c == '0')
            .count()
            .min(national_number.len() - 1);
        let parsed_national = national_number
            .parse::<u64>()
            .map_err(|_| ParseError::NotANumber)?;

        let mut number = PhoneNumber::new(country_code, parsed_national);
        if leading_zeros > 0 {
            number = number.with_leading_zeros(leading_zeros as u8);
        }
        if let Some(extension) = extension {
            number = number.with_extension(extension);
        }
        if keep_raw_input {
            number.raw_input = Some(input.to_string());
            number.country_code_source = source;
        }
        Ok(number)
    }

    /// Splits a country calling code off the front of a digit string,
    /// longest candidate first. Calling codes never begin with a zero.
    fn extract_calling_code<'a>(&self, number: &'a str) -> Option<(u16, &'a str)> {
        if number.starts_with('0') {
            return None;
        }
        for length in (1..=MAX_LENGTH_COUNTRY_CODE).rev() {
            if number.len() < length {
                continue;
            }
            let Ok(code) = number[..length].parse::<u16>() else {
                continue;
            };
            if self.database.has_calling_code(code) {
                return Some((code, &number[length..]));
            }
        }
        None
    }

    /// Strips the region's international dialing prefix, returning what
    /// follows it. A prefix followed by a zero is left alone: that zero
    /// would otherwise be mistaken for the start of a calling code.
    fn maybe_strip_idd_prefix<'a>(
        &self,
        number: &'a str,
        metadata: &RegionMetadata,
    ) -> Option<&'a str> {
        let prefix_pattern = metadata.international_prefix?;
        let regex = match self.patterns.cache.get(prefix_pattern) {
            Ok(regex) => regex,
            Err(err) => {
                error!(
                    "unusable international prefix pattern for {}: {err}",
                    metadata.id
                );
                return None;
            }
        };
        let rest = regex.strip_prefix_match(number)?;
        if rest.starts_with('0') {
            return None;
        }
        Some(rest)
    }

    /// Strips the region's national prefix in place, unless doing so
    /// would turn a number matching the region's general pattern into
    /// one that does not.
    fn maybe_strip_national_prefix(&self, number: &mut String, metadata: &RegionMetadata) {
        let Some(prefix) = metadata.national_prefix else {
            return;
        };
        if prefix.is_empty() || !number.starts_with(prefix) || number.len() == prefix.len() {
            return;
        }
        let stripped = number[prefix.len()..].to_string();
        let general = &metadata.general;
        if self.matcher.matches_national_number(number, general, false)
            && !self.matcher.matches_national_number(&stripped, general, false)
        {
            trace!("keeping national prefix: stripping it would break the general pattern");
            return;
        }
        *number = stripped;
    }
}
