pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn ae() -> &'static str {
        "AE"
    }

    pub fn au() -> &'static str {
        "AU"
    }

    pub fn br() -> &'static str {
        "BR"
    }

    pub fn bs() -> &'static str {
        "BS"
    }

    pub fn ca() -> &'static str {
        "CA"
    }

    pub fn ch() -> &'static str {
        "CH"
    }

    pub fn cn() -> &'static str {
        "CN"
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

    pub fn ie() -> &'static str {
        "IE"
    }

    pub fn r#in() -> &'static str {
        "IN"
    }

    pub fn it() -> &'static str {
        "IT"
    }

    pub fn je() -> &'static str {
        "JE"
    }

    pub fn jp() -> &'static str {
        "JP"
    }

    pub fn kz() -> &'static str {
        "KZ"
    }

    pub fn ru() -> &'static str {
        "RU"
    }

    pub fn sg() -> &'static str {
        "SG"
    }

    pub fn ua() -> &'static str {
        "UA"
    }

    pub fn us() -> &'static str {
        "US"
    }

    pub fn un001() -> &'static str {
        "001"
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }
}
