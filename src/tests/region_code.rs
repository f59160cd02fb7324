pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn bs() -> &'static str {
        "BS"
    }

    pub fn ca() -> &'static str {
        "CA"
    }

    pub fn de() -> &'static str {
        "DE"
    }

    pub fn fr() -> &'static str {
        "FR"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn it() -> &'static str {
        "IT"
    }

    pub fn kz() -> &'static str {
        "KZ"
    }

    pub fn nz() -> &'static str {
        "NZ"
    }

    pub fn ru() -> &'static str {
        "RU"
    }

    pub fn un001() -> &'static str {
        "001"
    }

    pub fn us() -> &'static str {
        "US"
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }

    pub fn get_unknown() -> &'static str {
        Self::zz()
    }
}
