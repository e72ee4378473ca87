//! Phone number normalization: parses free-form user input into a validated
//! [`PhoneNumber`] and formats it back as E164, international, national or
//! RFC3966 text, following per-country numbering plans.
//!
//! ```
//! use phonenorm::{PHONE_NUMBER_UTIL, PhoneNumberFormat};
//!
//! let number = PHONE_NUMBER_UTIL.parse("+14155552671", None).unwrap();
//! assert_eq!("+1 415-555-2671", PHONE_NUMBER_UTIL.format(&number, PhoneNumberFormat::International));
//! ```

mod interfaces;
/// This module is automatically generated from /resources/*.proto
mod proto_gen;
mod phonenumberutil;
mod regexp_cache;
mod transformer;
pub mod i18n;

pub use interfaces::NumberingPlanLookup;
pub use phonenumberutil::{
    CountryCodeSource, PHONE_NUMBER_UTIL, PhoneNumberFormat,
    errors,
    numbering_plan_table::{NumberingPlanTable, PlanEntry},
    phone_number::{PhoneNumber, PhoneNumberInput},
    phonenumberutil::PhoneNumberUtil,
};
pub use proto_gen::numbering_plan::{NumberFormat, NumberingPlan, NumberingPlanCollection};
pub use transformer::PhoneNumberToStringTransformer;

#[cfg(test)]
mod tests;
