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

//! Turns raw user input into a digit string the matcher can work with:
//! trims decoration, folds Unicode digits to ASCII and resolves keypad
//! letters in vanity numbers.

use crate::patterns::PatternSet;
use crate::regex_util::RegexExt;

/// Cuts the plausible phone-number part out of `input`: everything from
/// the first digit or plus sign up to, but not including, any trailing
/// decoration. Returns an empty string when no viable start is found.
pub(crate) fn extract_viable_number<'a>(patterns: &PatternSet, input: &'a str) -> &'a str {
    let Some(start) = patterns.valid_start_char.find(input) else {
        return "";
    };
    let candidate = &input[start.start()..];
    match patterns.unwanted_end.find(candidate) {
        Some(end) => &candidate[..end.start()],
        None => candidate,
    }
}

/// Whether `candidate` has the rough shape of a phone number. This is a
/// precondition for parsing, not a validity check.
pub(crate) fn is_viable_number(patterns: &PatternSet, candidate: &str) -> bool {
    patterns.valid_phone_number.full_match(candidate)
}

/// Removes a recognized extension suffix from `number` and returns the
/// extension digits, if any.
pub(crate) fn strip_extension(patterns: &PatternSet, number: &mut String) -> Option<String> {
    let (extension, match_start) = {
        let captures = patterns.extn.captures(number)?;
        let whole = captures.get(0)?;
        (captures.get(1)?.as_str().to_string(), whole.start())
    };
    number.truncate(match_start);
    Some(extension)
}

/// Normalizes a number candidate down to the digits it dials.
///
/// Unicode decimal digits are folded to ASCII first. If the candidate then
/// still reads as a vanity number (three letters or more), keypad letters
/// are converted to the digits they stand for; otherwise everything that
/// is not a digit is dropped.
pub(crate) fn normalize(patterns: &PatternSet, number: &str) -> String {
    let number = dec_from_char::normalize_decimals(number);
    if patterns.valid_alpha_phone.full_match(&number) {
        number
            .chars()
            .filter_map(|c| {
                patterns
                    .alpha_phone_mappings
                    .get(&c.to_ascii_uppercase())
                    .copied()
            })
            .collect()
    } else {
        normalize_digits_only(&number)
    }
}

/// Drops every character that is not a decimal digit, folding Unicode
/// digits to their ASCII value.
pub(crate) fn normalize_digits_only(number: &str) -> String {
    dec_from_char::normalize_decimals(number)
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::patterns::PatternSet;

    use super::*;

    #[test]
    fn viable_number_extraction_trims_decoration() {
        let patterns = PatternSet::new();
        assert_eq!(
            "650 253 0000",
            extract_viable_number(&patterns, "Tel: 650 253 0000..")
        );
        assert_eq!("+44 1234", extract_viable_number(&patterns, "+44 1234!"));
        assert_eq!("", extract_viable_number(&patterns, "no number at all"));
    }

    #[test]
    fn vanity_numbers_resolve_to_keypad_digits() {
        let patterns = PatternSet::new();
        assert_eq!("18003569377", normalize(&patterns, "1-800-FLOWERS"));
        // Two letters is not enough to treat the input as vanity.
        assert_eq!("180012", normalize(&patterns, "1800-1x2"));
    }

    #[test]
    fn normalization_folds_unicode_digits() {
        assert_eq!("6502530000", normalize_digits_only("\u{FF16}502-530 000０"));
    }

    #[test]
    fn extension_is_split_off() {
        let patterns = PatternSet::new();

        let mut number = String::from("03 331 6005 ext 3456");
        assert_eq!(Some("3456".into()), strip_extension(&patterns, &mut number));
        assert_eq!("03 331 6005", number);

        let mut number = String::from("6502530000x2303");
        assert_eq!(Some("2303".into()), strip_extension(&patterns, &mut number));
        assert_eq!("6502530000", number);

        let mut number = String::from("6502530000");
        assert_eq!(None, strip_extension(&patterns, &mut number));
    }
}
