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

use thiserror::Error;

/// Failure modes of [`crate::PhoneNumberEngine::parse`].
///
/// Malformed user input is a routine occurrence, so every parse failure is
/// reported through this type rather than a panic. `TooShort` and `TooLong`
/// are measured against the possible-length ranges of the region the number
/// resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// The input was empty or did not look like a phone number at all.
    #[error("the supplied text is not a phone number")]
    NotANumber,
    /// No known country calling code matched the number, or the default
    /// region was required but unknown.
    #[error("invalid country calling code")]
    InvalidCountryCode,
    /// The national number is shorter than all valid numbers for the
    /// resolved region.
    #[error("the national number is too short")]
    TooShort,
    /// The national number is longer than all valid numbers for the
    /// resolved region.
    #[error("the national number is too long")]
    TooLong,
}
