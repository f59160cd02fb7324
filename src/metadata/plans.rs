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

//! The numbering plans shipped with the crate.
//!
//! Declaration order matters within a shared calling code: after the main
//! country, regions are tried for classification in the order they appear
//! here.

use super::{NumberDesc, NumberFormat, RegionMetadata};

pub(super) static REGIONS: &[RegionMetadata] = &[
    RegionMetadata {
        id: "US",
        country_code: 1,
        main_country_for_code: true,
        national_prefix: Some("1"),
        international_prefix: Some("011"),
        preferred_extn_prefix: None,
        leading_digits: None,
        general: NumberDesc {
            national_number_pattern: Some(r"[2-9]\d{9}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[7],
            example_number: None,
        },
        fixed_line: NumberDesc {
            national_number_pattern: Some(r"[2-9]\d{9}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[7],
            example_number: Some("6502530000"),
        },
        mobile: NumberDesc {
            national_number_pattern: Some(r"[2-9]\d{9}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[7],
            example_number: Some("6502530000"),
        },
        toll_free: NumberDesc {
            national_number_pattern: Some(r"8(?:00|33|44|55|66|77|88)[2-9]\d{6}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[],
            example_number: Some("8002345678"),
        },
        premium_rate: NumberDesc {
            national_number_pattern: Some(r"900[2-9]\d{6}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[],
            example_number: Some("9002345678"),
        },
        formats: &[NumberFormat {
            pattern: r"(\d{3})(\d{3})(\d{4})",
            format: "($1) $2-$3",
            intl_format: Some("$1-$2-$3"),
            leading_digits: None,
            national_prefix_formatting_rule: None,
        }],
    },
    RegionMetadata {
        id: "CA",
        country_code: 1,
        main_country_for_code: false,
        national_prefix: Some("1"),
        international_prefix: Some("011"),
        preferred_extn_prefix: None,
        leading_digits: Some(
            r"(?:2(?:04|26|36|49|50|89)|3(?:06|43|65)|4(?:03|16|18|31|37|38|50)|5(?:06|14|19|48|79|81|87)|6(?:04|13|39|47)|7(?:05|09|78|80|82)|8(?:07|19|25|67|73)|90[25])",
        ),
        general: NumberDesc {
            national_number_pattern: Some(r"[2-9]\d{9}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[7],
            example_number: None,
        },
        fixed_line: NumberDesc {
            national_number_pattern: Some(r"[2-9]\d{9}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[7],
            example_number: Some("6042345678"),
        },
        mobile: NumberDesc {
            national_number_pattern: Some(r"[2-9]\d{9}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[7],
            example_number: Some("6042345678"),
        },
        toll_free: NumberDesc::EMPTY,
        premium_rate: NumberDesc::EMPTY,
        formats: &[],
    },
    RegionMetadata {
        id: "BS",
        country_code: 1,
        main_country_for_code: false,
        national_prefix: Some("1"),
        international_prefix: Some("011"),
        preferred_extn_prefix: None,
        leading_digits: Some("242"),
        general: NumberDesc {
            national_number_pattern: Some(r"242[2-9]\d{6}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[7],
            example_number: None,
        },
        fixed_line: NumberDesc {
            national_number_pattern: Some(r"242[2-9]\d{6}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[7],
            example_number: Some("2423456789"),
        },
        mobile: NumberDesc {
            national_number_pattern: Some(r"242[2-9]\d{6}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[7],
            example_number: Some("2423456789"),
        },
        toll_free: NumberDesc::EMPTY,
        premium_rate: NumberDesc::EMPTY,
        formats: &[],
    },
    RegionMetadata {
        id: "GB",
        country_code: 44,
        main_country_for_code: false,
        national_prefix: Some("0"),
        international_prefix: Some("00"),
        preferred_extn_prefix: None,
        leading_digits: None,
        general: NumberDesc {
            national_number_pattern: Some(r"[1-9]\d{8,9}"),
            possible_lengths: &[9, 10],
            possible_lengths_local_only: &[],
            example_number: None,
        },
        fixed_line: NumberDesc {
            national_number_pattern: Some(r"[12]\d{8,9}"),
            possible_lengths: &[9, 10],
            possible_lengths_local_only: &[],
            example_number: Some("1212345678"),
        },
        mobile: NumberDesc {
            national_number_pattern: Some(r"7[1-57-9]\d{8}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[],
            example_number: Some("7400123456"),
        },
        toll_free: NumberDesc {
            national_number_pattern: Some(r"80[08]\d{7}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[],
            example_number: Some("8001234567"),
        },
        premium_rate: NumberDesc {
            national_number_pattern: Some(r"9[018]\d{8}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[],
            example_number: Some("9012345678"),
        },
        formats: &[
            NumberFormat {
                pattern: r"(\d{2})(\d{4})(\d{4})",
                format: "$1 $2 $3",
                intl_format: None,
                leading_digits: Some("2|5[56]"),
                national_prefix_formatting_rule: Some("0$1"),
            },
            NumberFormat {
                pattern: r"(\d{4})(\d{6})",
                format: "$1 $2",
                intl_format: None,
                leading_digits: Some("1"),
                national_prefix_formatting_rule: Some("0$1"),
            },
            NumberFormat {
                pattern: r"(\d{4})(\d{3})(\d{3})",
                format: "$1 $2 $3",
                intl_format: None,
                leading_digits: Some("7"),
                national_prefix_formatting_rule: Some("0$1"),
            },
            NumberFormat {
                pattern: r"(\d{3})(\d{3})(\d{4})",
                format: "$1 $2 $3",
                intl_format: None,
                leading_digits: Some("[389]"),
                national_prefix_formatting_rule: Some("0$1"),
            },
        ],
    },
    RegionMetadata {
        id: "DE",
        country_code: 49,
        main_country_for_code: false,
        national_prefix: Some("0"),
        international_prefix: Some("00"),
        preferred_extn_prefix: None,
        leading_digits: None,
        general: NumberDesc {
            national_number_pattern: Some(r"[1-9]\d{5,10}"),
            possible_lengths: &[6, 7, 8, 9, 10, 11],
            possible_lengths_local_only: &[],
            example_number: None,
        },
        fixed_line: NumberDesc {
            national_number_pattern: Some(r"(?:[24-6]\d{2}|3[03-9]\d|[789](?:0[2-9]|[1-9]\d))\d{1,8}"),
            possible_lengths: &[6, 7, 8, 9, 10, 11],
            possible_lengths_local_only: &[],
            example_number: Some("30123456"),
        },
        mobile: NumberDesc {
            national_number_pattern: Some(r"1(?:5[0-25-9]\d{8}|6[023]\d{7,8}|7\d{8})"),
            possible_lengths: &[10, 11],
            possible_lengths_local_only: &[],
            example_number: Some("15123456789"),
        },
        toll_free: NumberDesc {
            national_number_pattern: Some(r"800\d{7}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[],
            example_number: Some("8001234567"),
        },
        premium_rate: NumberDesc {
            national_number_pattern: Some(r"900[135]\d{6}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[],
            example_number: Some("9001234567"),
        },
        formats: &[
            NumberFormat {
                pattern: r"(\d{3})(\d{7,8})",
                format: "$1 $2",
                intl_format: None,
                leading_digits: Some("1[5-7]"),
                national_prefix_formatting_rule: Some("0$1"),
            },
            NumberFormat {
                pattern: r"(\d{2})(\d{3,9})",
                format: "$1 $2",
                intl_format: None,
                leading_digits: Some("3[02]|40|[68]9"),
                national_prefix_formatting_rule: Some("0$1"),
            },
            NumberFormat {
                pattern: r"(\d{3})(\d{3,8})",
                format: "$1 $2",
                intl_format: None,
                leading_digits: Some("2|3[3-9]|[4-9]"),
                national_prefix_formatting_rule: Some("0$1"),
            },
        ],
    },
    RegionMetadata {
        id: "FR",
        country_code: 33,
        main_country_for_code: false,
        national_prefix: Some("0"),
        international_prefix: Some("00"),
        preferred_extn_prefix: None,
        leading_digits: None,
        general: NumberDesc {
            national_number_pattern: Some(r"[1-9]\d{8}"),
            possible_lengths: &[9],
            possible_lengths_local_only: &[],
            example_number: None,
        },
        fixed_line: NumberDesc {
            national_number_pattern: Some(r"[1-5]\d{8}"),
            possible_lengths: &[9],
            possible_lengths_local_only: &[],
            example_number: Some("123456789"),
        },
        mobile: NumberDesc {
            national_number_pattern: Some(r"[67]\d{8}"),
            possible_lengths: &[9],
            possible_lengths_local_only: &[],
            example_number: Some("612345678"),
        },
        toll_free: NumberDesc {
            national_number_pattern: Some(r"80[0-5]\d{6}"),
            possible_lengths: &[9],
            possible_lengths_local_only: &[],
            example_number: Some("801234567"),
        },
        premium_rate: NumberDesc {
            national_number_pattern: Some(r"89[1-37-9]\d{6}"),
            possible_lengths: &[9],
            possible_lengths_local_only: &[],
            example_number: Some("891123456"),
        },
        formats: &[NumberFormat {
            pattern: r"(\d)(\d{2})(\d{2})(\d{2})(\d{2})",
            format: "$1 $2 $3 $4 $5",
            intl_format: None,
            leading_digits: None,
            national_prefix_formatting_rule: Some("0$1"),
        }],
    },
    RegionMetadata {
        id: "IT",
        country_code: 39,
        main_country_for_code: false,
        national_prefix: None,
        international_prefix: Some("00"),
        preferred_extn_prefix: None,
        leading_digits: None,
        general: NumberDesc {
            national_number_pattern: Some(r"0\d{5,10}|[1389]\d{5,10}"),
            possible_lengths: &[6, 7, 8, 9, 10, 11],
            possible_lengths_local_only: &[],
            example_number: None,
        },
        fixed_line: NumberDesc {
            national_number_pattern: Some(r"0\d{5,10}"),
            possible_lengths: &[6, 7, 8, 9, 10, 11],
            possible_lengths_local_only: &[],
            example_number: Some("0236618300"),
        },
        mobile: NumberDesc {
            national_number_pattern: Some(r"3[1-9]\d{8}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[],
            example_number: Some("3123456789"),
        },
        toll_free: NumberDesc {
            national_number_pattern: Some(r"80(?:0\d{3}|3)\d{3}"),
            possible_lengths: &[7, 10],
            possible_lengths_local_only: &[],
            example_number: Some("800123456"),
        },
        premium_rate: NumberDesc {
            national_number_pattern: Some(r"89(?:4\d{5}|9\d{6})"),
            possible_lengths: &[8, 9],
            possible_lengths_local_only: &[],
            example_number: Some("899123456"),
        },
        formats: &[
            NumberFormat {
                pattern: r"(\d{2})(\d{4})(\d{4})",
                format: "$1 $2 $3",
                intl_format: None,
                leading_digits: Some("0[26]"),
                national_prefix_formatting_rule: None,
            },
            NumberFormat {
                pattern: r"(\d{3})(\d{3})(\d{4})",
                format: "$1 $2 $3",
                intl_format: None,
                leading_digits: Some("3"),
                national_prefix_formatting_rule: None,
            },
            NumberFormat {
                pattern: r"(\d{4})(\d{2,6})",
                format: "$1 $2",
                intl_format: None,
                leading_digits: Some("0[13-9]|8"),
                national_prefix_formatting_rule: None,
            },
        ],
    },
    RegionMetadata {
        id: "NZ",
        country_code: 64,
        main_country_for_code: false,
        national_prefix: Some("0"),
        international_prefix: Some("00"),
        preferred_extn_prefix: None,
        leading_digits: None,
        general: NumberDesc {
            national_number_pattern: Some(r"[2-9]\d{7,9}"),
            possible_lengths: &[8, 9, 10],
            possible_lengths_local_only: &[],
            example_number: None,
        },
        fixed_line: NumberDesc {
            national_number_pattern: Some(r"[34679]\d{7}"),
            possible_lengths: &[8],
            possible_lengths_local_only: &[],
            example_number: Some("33316005"),
        },
        mobile: NumberDesc {
            national_number_pattern: Some(r"2[0-27-9]\d{7,8}"),
            possible_lengths: &[9, 10],
            possible_lengths_local_only: &[],
            example_number: Some("211234567"),
        },
        toll_free: NumberDesc {
            national_number_pattern: Some(r"800\d{6,7}"),
            possible_lengths: &[9, 10],
            possible_lengths_local_only: &[],
            example_number: Some("800123456"),
        },
        premium_rate: NumberDesc {
            national_number_pattern: Some(r"90\d{6,7}"),
            possible_lengths: &[8, 9],
            possible_lengths_local_only: &[],
            example_number: Some("900123456"),
        },
        formats: &[
            NumberFormat {
                pattern: r"(\d)(\d{3})(\d{4})",
                format: "$1-$2 $3",
                intl_format: None,
                leading_digits: Some("24|[346]|7[2-57-9]|9[2-9]"),
                national_prefix_formatting_rule: Some("0$1"),
            },
            NumberFormat {
                pattern: r"(\d{2})(\d{3})(\d{3,5})",
                format: "$1 $2 $3",
                intl_format: None,
                leading_digits: Some("2[179]|[78]0|86"),
                national_prefix_formatting_rule: Some("0$1"),
            },
        ],
    },
    RegionMetadata {
        id: "RU",
        country_code: 7,
        main_country_for_code: true,
        national_prefix: Some("8"),
        international_prefix: Some("810"),
        preferred_extn_prefix: None,
        leading_digits: None,
        general: NumberDesc {
            national_number_pattern: Some(r"[347-9]\d{9}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[],
            example_number: None,
        },
        fixed_line: NumberDesc {
            national_number_pattern: Some(r"[34]\d{9}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[],
            example_number: Some("4951234567"),
        },
        mobile: NumberDesc {
            national_number_pattern: Some(r"9\d{9}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[],
            example_number: Some("9123456789"),
        },
        toll_free: NumberDesc {
            national_number_pattern: Some(r"80[04]\d{7}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[],
            example_number: Some("8001234567"),
        },
        premium_rate: NumberDesc {
            national_number_pattern: Some(r"80[39]\d{7}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[],
            example_number: Some("8091234567"),
        },
        formats: &[NumberFormat {
            pattern: r"(\d{3})(\d{3})(\d{2})(\d{2})",
            format: "$1 $2-$3-$4",
            intl_format: None,
            leading_digits: None,
            national_prefix_formatting_rule: Some("8 ($1)"),
        }],
    },
    RegionMetadata {
        id: "KZ",
        country_code: 7,
        main_country_for_code: false,
        national_prefix: Some("8"),
        international_prefix: Some("810"),
        preferred_extn_prefix: None,
        leading_digits: Some("33|7"),
        general: NumberDesc {
            national_number_pattern: Some(r"(?:33\d|7\d{2})\d{7}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[],
            example_number: None,
        },
        fixed_line: NumberDesc {
            national_number_pattern: Some(r"7[12]\d{8}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[],
            example_number: Some("7123456789"),
        },
        mobile: NumberDesc {
            national_number_pattern: Some(r"70[0-25-8]\d{7}"),
            possible_lengths: &[10],
            possible_lengths_local_only: &[],
            example_number: Some("7010123456"),
        },
        toll_free: NumberDesc::EMPTY,
        premium_rate: NumberDesc::EMPTY,
        formats: &[],
    },
    RegionMetadata {
        id: "001",
        country_code: 800,
        main_country_for_code: true,
        national_prefix: None,
        international_prefix: None,
        preferred_extn_prefix: None,
        leading_digits: None,
        general: NumberDesc {
            national_number_pattern: Some(r"\d{8}"),
            possible_lengths: &[8],
            possible_lengths_local_only: &[],
            example_number: None,
        },
        fixed_line: NumberDesc::EMPTY,
        mobile: NumberDesc::EMPTY,
        toll_free: NumberDesc {
            national_number_pattern: Some(r"\d{8}"),
            possible_lengths: &[8],
            possible_lengths_local_only: &[],
            example_number: Some("12345678"),
        },
        premium_rate: NumberDesc::EMPTY,
        formats: &[NumberFormat {
            pattern: r"(\d{4})(\d{4})",
            format: "$1 $2",
            intl_format: None,
            leading_digits: None,
            national_prefix_formatting_rule: None,
        }],
    },
];
