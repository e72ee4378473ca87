use crate::phonenumberutil::numbering_plan_table::PlanEntry;

/// Read-only numbering plan lookup shared by the parser and the formatter.
/// Implementations are immutable once built, so they can be shared between
/// threads by reference.
pub trait NumberingPlanLookup {
    /// Returns the plan holding the rules for a country calling code. For
    /// codes shared by several regions this is the main region's plan.
    fn lookup(&self, country_code: i32) -> Option<&PlanEntry>;

    /// Returns the country calling code of a region, e.g. 44 for "GB".
    fn lookup_by_region(&self, region_code: &str) -> Option<i32>;
}
