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

use log::{trace, warn};
use strum::IntoEnumIterator;

use crate::enums::PhoneNumberType;
use crate::matcher::{NationalNumberMatcher, RegexMatcher};
use crate::metadata::{NumberDesc, NumberingPlanDatabase, RegionMetadata};
use crate::patterns::PatternSet;
use crate::phonenumber::PhoneNumber;
use crate::region_code::RegionCode;

/// Parses, validates, classifies and formats phone numbers against an
/// immutable numbering-plan database.
///
/// Construction compiles the fixed patterns once; metadata patterns are
/// compiled lazily and cached, so a shared instance gets cheaper as it
/// warms up. All methods take `&self` and the engine is `Send + Sync`.
pub struct PhoneNumberEngine {
    pub(crate) database: NumberingPlanDatabase,
    pub(crate) patterns: PatternSet,
    pub(crate) matcher: Box<dyn NationalNumberMatcher>,
}

impl PhoneNumberEngine {
    /// An engine over the numbering plans shipped with the crate.
    pub fn new() -> Self {
        Self::with_database(NumberingPlanDatabase::shipped())
    }

    /// An engine over a caller-supplied database.
    pub fn with_database(database: NumberingPlanDatabase) -> Self {
        Self {
            database,
            patterns: PatternSet::new(),
            matcher: Box::new(RegexMatcher::new()),
        }
    }

    pub fn supported_regions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.database.supported_regions()
    }

    pub fn supported_calling_codes(&self) -> impl Iterator<Item = u16> + '_ {
        self.database.supported_calling_codes()
    }

    pub fn metadata_for_region(&self, region_code: &str) -> Option<&'static RegionMetadata> {
        let metadata = self.database.metadata_for_region(region_code);
        if metadata.is_none() {
            warn!("no numbering plan for region {region_code}");
        }
        metadata
    }

    pub fn country_code_for_region(&self, region_code: &str) -> Option<u16> {
        self.metadata_for_region(region_code)
            .map(|metadata| metadata.country_code)
    }

    /// The region owning `country_code`'s formatting rules: its main
    /// country when several regions share the code, or "ZZ" when the
    /// code is unknown.
    pub fn region_code_for_country_code(&self, country_code: u16) -> &'static str {
        self.database
            .regions_for_calling_code(country_code)
            .and_then(|regions| regions.first().copied())
            .unwrap_or_else(RegionCode::unknown)
    }

    /// A valid example number for the region, parsed and ready to
    /// format. None when the region is unknown or its plan carries no
    /// example.
    pub fn example_number(&self, region_code: &str) -> Option<PhoneNumber> {
        let metadata = self.metadata_for_region(region_code)?;
        let example = metadata.example_number()?;
        self.parse(example, region_code).ok()
    }

    /// The number types the region's plan has data for. The compound
    /// [`PhoneNumberType::FixedLineOrMobile`] and
    /// [`PhoneNumberType::Unknown`] are never listed.
    pub fn supported_types_for_region(&self, region_code: &str) -> Vec<PhoneNumberType> {
        let Some(metadata) = self.metadata_for_region(region_code) else {
            return Vec::new();
        };
        PhoneNumberType::iter()
            .filter(|&number_type| {
                !matches!(
                    number_type,
                    PhoneNumberType::FixedLineOrMobile | PhoneNumberType::Unknown
                )
            })
            .filter(|&number_type| metadata.desc_for_type(number_type).has_data())
            .collect()
    }

    /// Whether the number is actually diallable under its region's plan:
    /// it belongs to some known number class there.
    pub fn is_valid_number(&self, number: &PhoneNumber) -> bool {
        self.number_type(number) != PhoneNumberType::Unknown
    }

    /// Classifies the number within the plan of the region it belongs
    /// to. [`PhoneNumberType::Unknown`] doubles as "not valid there".
    pub fn number_type(&self, number: &PhoneNumber) -> PhoneNumberType {
        let region = self.region_for_number(number);
        let Some(metadata) = self
            .database
            .metadata_for_region_or_calling_code(number.country_code(), region)
        else {
            return PhoneNumberType::Unknown;
        };
        self.number_type_for_nsn(&number.national_significant_number(), metadata)
    }

    fn number_type_for_nsn(
        &self,
        national_number: &str,
        metadata: &RegionMetadata,
    ) -> PhoneNumberType {
        if !self.matches_desc(national_number, &metadata.general) {
            trace!("number fails the general description for {}", metadata.id);
            return PhoneNumberType::Unknown;
        }
        if self.matches_desc(national_number, &metadata.premium_rate) {
            return PhoneNumberType::PremiumRate;
        }
        if self.matches_desc(national_number, &metadata.toll_free) {
            return PhoneNumberType::TollFree;
        }
        if self.matches_desc(national_number, &metadata.fixed_line) {
            if metadata.fixed_line.national_number_pattern
                == metadata.mobile.national_number_pattern
            {
                return PhoneNumberType::FixedLineOrMobile;
            }
            if self.matches_desc(national_number, &metadata.mobile) {
                return PhoneNumberType::FixedLineOrMobile;
            }
            return PhoneNumberType::FixedLine;
        }
        if self.matches_desc(national_number, &metadata.mobile) {
            return PhoneNumberType::Mobile;
        }
        trace!("number matches no class in {}", metadata.id);
        PhoneNumberType::Unknown
    }

    fn matches_desc(&self, national_number: &str, desc: &NumberDesc) -> bool {
        if !desc.possible_lengths.is_empty()
            && !desc
                .possible_lengths
                .iter()
                .any(|&l| l as usize == national_number.len())
        {
            return false;
        }
        self.matcher
            .matches_national_number(national_number, desc, false)
    }
}

impl Default for PhoneNumberEngine {
    fn default() -> Self {
        Self::new()
    }
}
