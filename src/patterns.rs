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

use std::collections::HashMap;

use regex::Regex;

use crate::consts::{
    DIGITS, PLUS_CHARS, RFC3966_EXTN_PREFIX, STAR_SIGN, VALID_ALPHA, VALID_PUNCTUATION,
};
use crate::regex_cache::RegexCache;

/// The fixed regular expressions and character maps the engine needs,
/// compiled once at engine construction, plus the cache that holds the
/// per-region metadata patterns compiled on demand.
pub(crate) struct PatternSet {
    pub cache: RegexCache,
    /// Keypad letters (vanity numbers) and ASCII digits, mapped to the
    /// digit they dial as.
    pub alpha_phone_mappings: HashMap<char, char>,
    /// First character a number candidate may begin with.
    pub valid_start_char: Regex,
    /// Trailing characters to trim off a number candidate.
    pub unwanted_end: Regex,
    pub plus_chars: Regex,
    pub separators: Regex,
    /// Loose shape check for anything that could plausibly be a phone
    /// number, extension included.
    pub valid_phone_number: Regex,
    /// Extension suffix in any of its spellings; group 1 holds the
    /// extension digits.
    pub extn: Regex,
    /// At least three letters, the threshold for treating input as a
    /// vanity number.
    pub valid_alpha_phone: Regex,
    /// A `$n` group reference inside a format template.
    pub first_group: Regex,
    /// International prefixes simple enough to print back literally, e.g.
    /// "00" or "011", possibly with a wait-tone tilde.
    pub single_international_prefix: Regex,
}

impl PatternSet {
    pub fn new() -> Self {
        // Covers ";ext=", the written-out forms in English and Spanish,
        // single-letter markers (with full-width variants) and "int".
        let extn_body = format!(
            "[ \u{00A0}\\t,]*\
             (?:{RFC3966_EXTN_PREFIX}|e?xt(?:ensi[o\u{00F3}]n)?\\.?|\
             [x\u{FF58}#\u{FF03}~]|int)\
             [ \u{00A0}\\t,:\\.]*({DIGITS}{{1,7}})#?"
        );

        Self {
            cache: RegexCache::with_capacity(128),
            alpha_phone_mappings: alpha_phone_mappings(),
            valid_start_char: compile(&format!("[{PLUS_CHARS}{DIGITS}]")),
            unwanted_end: compile(r"[^\p{N}\p{L}#]+$"),
            plus_chars: compile(&format!("^[{PLUS_CHARS}]+")),
            separators: compile(&format!("[{VALID_PUNCTUATION}]+")),
            valid_phone_number: compile(&format!(
                "(?i)^(?:\
                 [{PLUS_CHARS}]*(?:[{VALID_PUNCTUATION}{star}]*{DIGITS}){{3,}}\
                 [{VALID_PUNCTUATION}{star}{DIGITS}{VALID_ALPHA}]*\
                 |{DIGITS}{{2}}\
                 )(?:{extn_body})?$",
                star = regex::escape(STAR_SIGN),
            )),
            extn: compile(&format!("(?i)(?:{extn_body})$")),
            valid_alpha_phone: compile(&format!("(?:.*?[{VALID_ALPHA}]){{3}}.*")),
            first_group: compile(r"(\$\d)"),
            single_international_prefix: compile(
                "^\\d+(?:[~\u{2053}\u{223C}\u{FF5E}]\\d+)?$",
            ),
        }
    }
}

// The fixed patterns are string literals assembled above; a failure here
// is a programming error, not an input error.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("fixed pattern must compile")
}

fn alpha_phone_mappings() -> HashMap<char, char> {
    let mut map = HashMap::with_capacity(36);
    for (letters, digit) in [
        ("ABC", '2'),
        ("DEF", '3'),
        ("GHI", '4'),
        ("JKL", '5'),
        ("MNO", '6'),
        ("PQRS", '7'),
        ("TUV", '8'),
        ("WXYZ", '9'),
    ] {
        for letter in letters.chars() {
            map.insert(letter, digit);
        }
    }
    for digit in '0'..='9' {
        map.insert(digit, digit);
    }
    map
}
