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

use strum::EnumIter;

/// Defines the standardized output formats for phone numbers.
///
/// `International` and `National` align with the ITU-T E.123
/// recommendation. For example, the Google Switzerland office number would
/// be:
/// - **International**: `+41 44 668 1800`
/// - **National**: `044 668 1800`
/// - **E164**: `+41446681800` (international format without separators)
/// - **Rfc3966**: `tel:+41-44-668-1800` (hyphen-separated, "tel:" prefix)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatStyle {
    /// E.164: a `+`, the country calling code, the national number, and
    /// nothing else. Extensions are never emitted in this style.
    E164,
    /// Country calling code plus the nationally formatted number, spaced
    /// for readability.
    International,
    /// The format used for dialing within the number's own region. May
    /// include a national prefix (like '0').
    National,
    /// The "tel:" URI form defined by RFC 3966, with hyphens as
    /// separators and an `;ext=` suffix for extensions.
    Rfc3966,
}

/// Categorizes phone numbers based on their primary use.
///
/// Only the categories carried by the embedded numbering plans are listed;
/// a number matching none of them reports [`PhoneNumberType::Unknown`].
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberType {
    /// Traditional landline numbers tied to a geographic location.
    FixedLine,
    /// Numbers assigned to wireless devices.
    Mobile,
    /// Used in regions (e.g. the USA) where fixed-line and mobile numbers
    /// cannot be told apart by looking at the number itself.
    FixedLineOrMobile,
    /// Calls are free for the caller and paid by the recipient.
    TollFree,
    /// Numbers charging a higher rate than normal calls.
    PremiumRate,
    /// The number does not match any known pattern for its region.
    Unknown,
}
