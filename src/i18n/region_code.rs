/// Region codes with a special meaning for numbering plans.
pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region. No
    /// plan is ever registered under it, so it can be used as a default
    /// region that only accepts numbers written with a leading plus sign.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";    
    }

    /// Region code of non-geographical entities, such as +800 numbers.
    pub fn un001() -> &'static str {
        return "001";
    }
}
