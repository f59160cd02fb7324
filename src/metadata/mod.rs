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

mod plans;

use std::collections::{HashMap, VecDeque};

use log::warn;

use crate::consts::REGION_CODE_FOR_NON_GEO_ENTITY;
use crate::enums::PhoneNumberType;

/// Describes one class of numbers within a region: the pattern a national
/// significant number of that class must match, and the digit counts it
/// may have.
///
/// An empty `possible_lengths` slice means the class inherits the lengths
/// of the region's general description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberDesc {
    pub national_number_pattern: Option<&'static str>,
    pub possible_lengths: &'static [u8],
    pub possible_lengths_local_only: &'static [u8],
    pub example_number: Option<&'static str>,
}

impl NumberDesc {
    pub(crate) const EMPTY: NumberDesc = NumberDesc {
        national_number_pattern: None,
        possible_lengths: &[],
        possible_lengths_local_only: &[],
        example_number: None,
    };

    /// Whether any number data is set for this description at all.
    pub fn has_data(&self) -> bool {
        self.national_number_pattern.is_some()
            || !self.possible_lengths.is_empty()
            || self.example_number.is_some()
    }
}

/// A single formatting rule: numbers fully matching `pattern` (and, when
/// present, starting with `leading_digits`) are rewritten with the
/// `format` template. `$1`, `$2`, ... refer to the capture groups of
/// `pattern`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub pattern: &'static str,
    pub format: &'static str,
    /// Template used for the international and RFC 3966 styles when it
    /// differs from `format`.
    pub intl_format: Option<&'static str>,
    pub leading_digits: Option<&'static str>,
    /// How to splice the national prefix in front of the first group when
    /// formatting nationally, e.g. `"0$1"` for the UK or `"8 ($1)"` for
    /// Russia. Absent for plans with no national prefix.
    pub national_prefix_formatting_rule: Option<&'static str>,
}

/// Immutable per-region record of the numbering plan: calling code,
/// prefixes, formatting rules and per-type number descriptions.
#[derive(Debug, PartialEq, Eq)]
pub struct RegionMetadata {
    /// ISO-3166-1 alpha-2 code, or "001" for non-geographical entities.
    pub id: &'static str,
    pub country_code: u16,
    /// The region owning the formatting rules when several regions share
    /// one calling code (e.g. US within NANPA).
    pub main_country_for_code: bool,
    pub national_prefix: Option<&'static str>,
    /// The international dialing prefix, as a regex over digit strings.
    pub international_prefix: Option<&'static str>,
    pub preferred_extn_prefix: Option<&'static str>,
    /// Pattern over the first digits of a national number, used to pick
    /// this region out of a shared-calling-code group.
    pub leading_digits: Option<&'static str>,
    pub general: NumberDesc,
    pub fixed_line: NumberDesc,
    pub mobile: NumberDesc,
    pub toll_free: NumberDesc,
    pub premium_rate: NumberDesc,
    pub formats: &'static [NumberFormat],
}

impl RegionMetadata {
    pub(crate) fn desc_for_type(&self, number_type: PhoneNumberType) -> &NumberDesc {
        match number_type {
            PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile => &self.fixed_line,
            PhoneNumberType::Mobile => &self.mobile,
            PhoneNumberType::TollFree => &self.toll_free,
            PhoneNumberType::PremiumRate => &self.premium_rate,
            PhoneNumberType::Unknown => &self.general,
        }
    }

    /// A plausible number for this region, preferring fixed-line examples.
    pub fn example_number(&self) -> Option<&'static str> {
        self.fixed_line
            .example_number
            .or(self.mobile.example_number)
            .or(self.toll_free.example_number)
            .or(self.general.example_number)
    }
}

/// The numbering-plan database: every [`RegionMetadata`] record this
/// engine knows about, indexed by region code and by calling code.
///
/// Built once, read-only afterwards. The calling-code index preserves a
/// fixed region order — the `main_country_for_code` region first, the
/// rest in declared order — which shared-calling-code classification
/// depends on; reordering it changes observable results.
pub struct NumberingPlanDatabase {
    region_to_metadata: HashMap<&'static str, &'static RegionMetadata>,
    calling_code_to_regions: Vec<(u16, Vec<&'static str>)>,
    non_geo_by_calling_code: HashMap<u16, &'static RegionMetadata>,
}

impl NumberingPlanDatabase {
    /// The database over the numbering plans shipped with the crate.
    pub fn shipped() -> Self {
        Self::from_regions(plans::REGIONS)
    }

    /// Builds a database from caller-supplied plans. Tests use this to
    /// substitute a small fixture set for the shipped one.
    pub fn from_regions(regions: &'static [RegionMetadata]) -> Self {
        let mut region_to_metadata = HashMap::new();
        let mut non_geo_by_calling_code = HashMap::new();
        // A temporary map makes it easy to find the other regions sharing
        // a calling code while inserting.
        let mut groups = HashMap::<u16, VecDeque<&'static str>>::new();

        for metadata in regions {
            if metadata.id == REGION_CODE_FOR_NON_GEO_ENTITY {
                non_geo_by_calling_code.insert(metadata.country_code, metadata);
            } else if region_to_metadata.insert(metadata.id, metadata).is_some() {
                warn!("duplicate numbering plan for region {}", metadata.id);
            }

            let group = groups.entry(metadata.country_code).or_default();
            if metadata.main_country_for_code {
                group.push_front(metadata.id);
            } else {
                group.push_back(metadata.id);
            }
        }

        let mut calling_code_to_regions: Vec<(u16, Vec<&'static str>)> = groups
            .into_iter()
            .map(|(code, group)| (code, Vec::from(group)))
            .collect();
        calling_code_to_regions.sort_by_key(|(code, _)| *code);

        Self {
            region_to_metadata,
            calling_code_to_regions,
            non_geo_by_calling_code,
        }
    }

    pub fn metadata_for_region(&self, region_code: &str) -> Option<&'static RegionMetadata> {
        self.region_to_metadata.get(region_code).copied()
    }

    pub fn non_geo_metadata(&self, country_code: u16) -> Option<&'static RegionMetadata> {
        self.non_geo_by_calling_code.get(&country_code).copied()
    }

    pub(crate) fn metadata_for_region_or_calling_code(
        &self,
        country_code: u16,
        region_code: &str,
    ) -> Option<&'static RegionMetadata> {
        if region_code == REGION_CODE_FOR_NON_GEO_ENTITY {
            self.non_geo_metadata(country_code)
        } else {
            self.metadata_for_region(region_code)
        }
    }

    /// Region codes sharing `country_code`, main region first, otherwise
    /// in declared order.
    pub fn regions_for_calling_code(&self, country_code: u16) -> Option<&[&'static str]> {
        self.calling_code_to_regions
            .binary_search_by_key(&country_code, |(code, _)| *code)
            .ok()
            .map(|index| self.calling_code_to_regions[index].1.as_slice())
    }

    pub fn has_calling_code(&self, country_code: u16) -> bool {
        self.calling_code_to_regions
            .binary_search_by_key(&country_code, |(code, _)| *code)
            .is_ok()
    }

    /// Geographical regions known to this database, in no particular
    /// order. Non-geographical entities are not included.
    pub fn supported_regions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.region_to_metadata.keys().copied()
    }

    pub fn supported_calling_codes(&self) -> impl Iterator<Item = u16> + '_ {
        self.calling_code_to_regions.iter().map(|(code, _)| *code)
    }
}

#[cfg(test)]
mod tests {
    use super::NumberingPlanDatabase;

    #[test]
    fn shared_calling_code_order_is_main_first_then_declared() {
        let database = NumberingPlanDatabase::shipped();
        assert_eq!(
            Some(["US", "CA", "BS"].as_slice()),
            database.regions_for_calling_code(1)
        );
        assert_eq!(
            Some(["RU", "KZ"].as_slice()),
            database.regions_for_calling_code(7)
        );
    }

    #[test]
    fn non_geo_entities_are_kept_out_of_the_region_map() {
        let database = NumberingPlanDatabase::shipped();
        assert!(database.metadata_for_region("001").is_none());
        assert!(database.non_geo_metadata(800).is_some());
        assert_eq!(
            Some(["001"].as_slice()),
            database.regions_for_calling_code(800)
        );
    }

    #[test]
    fn shipped_plans_are_internally_consistent() {
        let database = NumberingPlanDatabase::shipped();
        for region in database.supported_regions() {
            let metadata = database.metadata_for_region(region).unwrap();
            assert_eq!(region, metadata.id);
            assert!(metadata.country_code > 0);
            assert!(!metadata.general.possible_lengths.is_empty());
            assert!(metadata.general.national_number_pattern.is_some());
            assert!(
                database
                    .regions_for_calling_code(metadata.country_code)
                    .is_some_and(|group| group.contains(&region))
            );
        }
    }
}
