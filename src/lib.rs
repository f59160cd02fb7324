mod consts;
mod engine;
mod enums;
mod formatter;
mod matcher;
mod metadata;
mod normalizer;
mod parser;
mod patterns;
mod phonenumber;
mod regex_cache;
pub mod region_code;
pub(crate) mod regex_util;

pub mod errors;

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

pub use engine::PhoneNumberEngine;
pub use enums::{FormatStyle, PhoneNumberType};
pub use metadata::{NumberDesc, NumberFormat, NumberingPlanDatabase, RegionMetadata};
pub use phonenumber::{CountryCodeSource, PhoneNumber};

/// Process-wide engine built over the numbering plans shipped with the
/// crate. The underlying database is immutable after the first access, so
/// the instance is safe to share between any number of threads.
///
/// Callers that need a smaller fixture database (tests, embedded targets)
/// should construct their own engine with
/// [`PhoneNumberEngine::with_database`] instead.
pub static ENGINE: LazyLock<PhoneNumberEngine> = LazyLock::new(PhoneNumberEngine::new);
