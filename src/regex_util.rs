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

use regex::{Match, Regex};

/// Anchored matching helpers in the style of RE2's `FullMatch` and
/// `Consume`, which the numbering-plan patterns assume.
pub(crate) trait RegexExt {
    /// Whether the whole of `s` matches the pattern.
    fn full_match(&self, s: &str) -> bool;

    /// The match starting at the first byte of `s`, if any.
    fn match_prefix<'t>(&self, s: &'t str) -> Option<Match<'t>>;

    /// Strips a match anchored at the start of `s`, returning the rest.
    fn strip_prefix_match<'t>(&self, s: &'t str) -> Option<&'t str> {
        self.match_prefix(s).map(|m| &s[m.end()..])
    }
}

impl RegexExt for Regex {
    fn full_match(&self, s: &str) -> bool {
        self.find(s)
            .is_some_and(|m| m.start() == 0 && m.end() == s.len())
    }

    fn match_prefix<'t>(&self, s: &'t str) -> Option<Match<'t>> {
        self.find(s).filter(|m| m.start() == 0)
    }
}
