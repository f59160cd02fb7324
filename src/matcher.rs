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

use crate::engine::PhoneNumberEngine;
use crate::metadata::{NumberDesc, RegionMetadata};
use crate::phonenumber::PhoneNumber;
use crate::regex_cache::RegexCache;
use crate::regex_util::RegexExt;
use crate::region_code::RegionCode;

/// Decides whether a national significant number belongs to a number
/// class. A trait so that tests and embedders can substitute a cheaper
/// or stricter implementation for the regex-backed default.
pub(crate) trait NationalNumberMatcher: Send + Sync {
    /// Whether `number` matches `desc`'s pattern. With
    /// `allow_prefix_match` a match anchored at the start is enough;
    /// otherwise the whole number must match.
    fn matches_national_number(
        &self,
        number: &str,
        desc: &NumberDesc,
        allow_prefix_match: bool,
    ) -> bool;
}

/// The default matcher: compiles metadata patterns on demand and keeps
/// them in a shared cache.
pub(crate) struct RegexMatcher {
    cache: RegexCache,
}

impl RegexMatcher {
    pub fn new() -> Self {
        Self {
            cache: RegexCache::with_capacity(64),
        }
    }
}

impl NationalNumberMatcher for RegexMatcher {
    fn matches_national_number(
        &self,
        number: &str,
        desc: &NumberDesc,
        allow_prefix_match: bool,
    ) -> bool {
        let Some(pattern) = desc.national_number_pattern.filter(|p| !p.is_empty()) else {
            return false;
        };
        let regex = match self.cache.get(pattern) {
            Ok(regex) => regex,
            Err(err) => {
                error!("unusable national number pattern: {err}");
                return false;
            }
        };
        regex.full_match(number) || (allow_prefix_match && regex.match_prefix(number).is_some())
    }
}

/// Outcome of checking a national significant number purely by its digit
/// count against a region's general description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LengthVerdict {
    Possible,
    /// The length only occurs in local dialing, without an area code.
    PossibleLocalOnly,
    /// Between the region's minimum and maximum but not a listed length.
    /// Treated as possible: plans list lengths coarsely.
    Unlisted,
    TooShort,
    TooLong,
}

pub(crate) fn test_number_length(national_number: &str, metadata: &RegionMetadata) -> LengthVerdict {
    let length = national_number.len();
    let desc = &metadata.general;

    if desc
        .possible_lengths_local_only
        .iter()
        .any(|&l| l as usize == length)
    {
        return LengthVerdict::PossibleLocalOnly;
    }
    if desc.possible_lengths.iter().any(|&l| l as usize == length) {
        return LengthVerdict::Possible;
    }

    let known = desc
        .possible_lengths
        .iter()
        .chain(desc.possible_lengths_local_only.iter());
    let Some(max) = known.clone().max() else {
        return LengthVerdict::Unlisted;
    };
    // known is non-empty here.
    let min = known.min().copied().unwrap_or(0);

    if length < min as usize {
        LengthVerdict::TooShort
    } else if length > *max as usize {
        LengthVerdict::TooLong
    } else {
        LengthVerdict::Unlisted
    }
}

impl PhoneNumberEngine {
    /// The region a parsed number belongs to, judged by its calling code
    /// and, where several regions share one, the leading digits of its
    /// national number. Returns "ZZ" when the calling code is unknown.
    pub fn region_for_number(&self, number: &PhoneNumber) -> &'static str {
        let Some(regions) = self.database.regions_for_calling_code(number.country_code()) else {
            trace!(
                "no regions share calling code {}; region unknown",
                number.country_code()
            );
            return RegionCode::unknown();
        };
        if regions.len() == 1 {
            return regions[0];
        }
        self.region_within_group(&number.national_significant_number(), regions)
    }

    /// Picks one region out of a shared-calling-code group by matching
    /// leading-digits patterns in group order. Regions without such a
    /// pattern are skipped; when nothing matches, the group's first
    /// region (its main country) is the answer.
    fn region_within_group(&self, national_number: &str, regions: &[&'static str]) -> &'static str {
        for region in regions {
            let Some(metadata) = self.database.metadata_for_region(region) else {
                continue;
            };
            let Some(leading_digits) = metadata.leading_digits else {
                continue;
            };
            match self.patterns.cache.get(leading_digits) {
                Ok(regex) => {
                    if regex.match_prefix(national_number).is_some() {
                        return region;
                    }
                }
                Err(err) => error!("unusable leading-digits pattern for {region}: {err}"),
            }
        }
        regions[0]
    }
}
