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

use log::{error, warn};

use crate::consts::{
    DEFAULT_EXTN_PREFIX, NANPA_COUNTRY_CODE, PLUS_SIGN, RFC3966_EXTN_PREFIX, RFC3966_PREFIX,
};
use crate::engine::PhoneNumberEngine;
use crate::enums::FormatStyle;
use crate::metadata::{NumberFormat, RegionMetadata};
use crate::phonenumber::PhoneNumber;
use crate::regex_util::RegexExt;

impl PhoneNumberEngine {
    /// Renders a parsed number in the requested style.
    ///
    /// Numbers with a zero national number and a recorded raw input are
    /// returned verbatim: there is nothing meaningful to format.
    pub fn format(&self, number: &PhoneNumber, style: FormatStyle) -> String {
        if number.national_number() == 0 {
            if let Some(raw_input) = number.raw_input() {
                return raw_input.to_string();
            }
        }

        let country_code = number.country_code();
        let national_significant_number = number.national_significant_number();

        if style == FormatStyle::E164 {
            // Extensions are never part of E.164.
            let mut formatted = national_significant_number;
            prefix_with_calling_code(country_code, style, &mut formatted);
            return formatted;
        }

        let region = self.region_code_for_country_code(country_code);
        let Some(metadata) = self
            .database
            .metadata_for_region_or_calling_code(country_code, region)
        else {
            warn!("no numbering plan for calling code {country_code}; falling back to E.164");
            let mut formatted = national_significant_number;
            prefix_with_calling_code(country_code, FormatStyle::E164, &mut formatted);
            return formatted;
        };

        let mut formatted = self.format_nsn(&national_significant_number, metadata, style);
        formatted.push_str(&formatted_extension(number, metadata, style));
        prefix_with_calling_code(country_code, style, &mut formatted);
        formatted
    }

    /// Formats `number` the way it would be dialed from `calling_from`:
    /// international prefix, calling code, then the internationally
    /// formatted national number.
    pub fn format_out_of_country(&self, number: &PhoneNumber, calling_from: &str) -> String {
        let Some(from_metadata) = self.database.metadata_for_region(calling_from) else {
            warn!("unknown region {calling_from}; formatting internationally instead");
            return self.format(number, FormatStyle::International);
        };

        let country_code = number.country_code();
        if country_code == from_metadata.country_code {
            // Within one calling code the national format is dialable;
            // NANPA regions additionally spell out the shared code.
            let national = self.format(number, FormatStyle::National);
            if country_code == NANPA_COUNTRY_CODE {
                let mut buf = itoa::Buffer::new();
                let code_digits = buf.format(country_code);
                return fast_cat::concat_str!(code_digits, " ", &national);
            }
            return national;
        }

        let idd = from_metadata.international_prefix.filter(|prefix| {
            self.patterns.single_international_prefix.full_match(prefix)
        });
        let Some(idd) = idd else {
            // The prefix is not a single dialable string, so leave the
            // caller to pick the right one; show the plus form.
            return self.format(number, FormatStyle::International);
        };

        let region = self.region_code_for_country_code(country_code);
        let Some(metadata) = self
            .database
            .metadata_for_region_or_calling_code(country_code, region)
        else {
            return self.format(number, FormatStyle::International);
        };

        let national_significant_number = number.national_significant_number();
        let mut formatted_nsn =
            self.format_nsn(&national_significant_number, metadata, FormatStyle::International);
        formatted_nsn.push_str(&formatted_extension(
            number,
            metadata,
            FormatStyle::International,
        ));

        let mut buf = itoa::Buffer::new();
        let code_digits = buf.format(country_code);
        fast_cat::concat_str!(idd, " ", code_digits, " ", &formatted_nsn)
    }

    /// Formats a national significant number by the region's rules,
    /// without any calling-code prefix. Falls back to the plain digit
    /// string when no formatting rule covers the number.
    fn format_nsn(
        &self,
        national_significant_number: &str,
        metadata: &RegionMetadata,
        style: FormatStyle,
    ) -> String {
        debug_assert!(national_significant_number
            .chars()
            .all(|c| c.is_ascii_digit()));
        match self.choose_formatting_pattern(national_significant_number, metadata) {
            Some(format) => self.apply_format(national_significant_number, format, style),
            None => national_significant_number.to_string(),
        }
    }

    /// The first formatting rule whose leading-digits pattern (if any)
    /// and full pattern both match, in metadata order.
    fn choose_formatting_pattern(
        &self,
        national_significant_number: &str,
        metadata: &RegionMetadata,
    ) -> Option<&'static NumberFormat> {
        for format in metadata.formats {
            if let Some(leading_digits) = format.leading_digits {
                match self.patterns.cache.get(leading_digits) {
                    Ok(regex) => {
                        if regex.match_prefix(national_significant_number).is_none() {
                            continue;
                        }
                    }
                    Err(err) => {
                        error!("unusable leading-digits pattern in a format rule: {err}");
                        continue;
                    }
                }
            }
            match self.patterns.cache.get(format.pattern) {
                Ok(regex) => {
                    if regex.full_match(national_significant_number) {
                        return Some(format);
                    }
                }
                Err(err) => error!("unusable format pattern: {err}"),
            }
        }
        None
    }

    fn apply_format(
        &self,
        national_significant_number: &str,
        format: &NumberFormat,
        style: FormatStyle,
    ) -> String {
        let mut template = match style {
            FormatStyle::National | FormatStyle::E164 => format.format.to_string(),
            FormatStyle::International | FormatStyle::Rfc3966 => {
                format.intl_format.unwrap_or(format.format).to_string()
            }
        };

        if style == FormatStyle::National {
            if let Some(rule) = format.national_prefix_formatting_rule {
                // The rule's own $1 re-captures the group reference it
                // replaces, e.g. "0$1" turns "$1 $2" into "0$1 $2".
                template = self
                    .patterns
                    .first_group
                    .replace(&template, rule)
                    .into_owned();
            }
        }

        let formatted = match self.patterns.cache.get(format.pattern) {
            Ok(regex) => regex
                .replace(national_significant_number, template.as_str())
                .into_owned(),
            Err(err) => {
                error!("unusable format pattern: {err}");
                national_significant_number.to_string()
            }
        };

        if style == FormatStyle::Rfc3966 {
            // RFC 3966 allows hyphens as the only visual separator.
            let trimmed = self
                .patterns
                .separators
                .strip_prefix_match(&formatted)
                .unwrap_or(&formatted);
            return self.patterns.separators.replace_all(trimmed, "-").into_owned();
        }
        formatted
    }
}

fn prefix_with_calling_code(country_code: u16, style: FormatStyle, formatted: &mut String) {
    let mut buf = itoa::Buffer::new();
    let code_digits = buf.format(country_code);
    let prefixed = match style {
        FormatStyle::National => return,
        FormatStyle::E164 => fast_cat::concat_str!(PLUS_SIGN, code_digits, formatted.as_str()),
        FormatStyle::International => {
            fast_cat::concat_str!(PLUS_SIGN, code_digits, " ", formatted.as_str())
        }
        FormatStyle::Rfc3966 => fast_cat::concat_str!(
            RFC3966_PREFIX,
            PLUS_SIGN,
            code_digits,
            "-",
            formatted.as_str()
        ),
    };
    *formatted = prefixed;
}

fn formatted_extension(
    number: &PhoneNumber,
    metadata: &RegionMetadata,
    style: FormatStyle,
) -> String {
    let Some(extension) = number.extension() else {
        return String::new();
    };
    if style == FormatStyle::Rfc3966 {
        return fast_cat::concat_str!(RFC3966_EXTN_PREFIX, extension);
    }
    let prefix = metadata.preferred_extn_prefix.unwrap_or(DEFAULT_EXTN_PREFIX);
    fast_cat::concat_str!(prefix, extension)
}
