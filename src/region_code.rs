/// Helpers for the ISO-3166-1 alpha-2 region code strings used throughout
/// the crate.
pub struct RegionCode {}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn unknown() -> &'static str {
        Self::zz()
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }

    /// The pseudo region code assigned to non-geographical entities such
    /// as international toll-free numbers (+800).
    pub fn non_geo_entity() -> &'static str {
        crate::consts::REGION_CODE_FOR_NON_GEO_ENTITY
    }
}
