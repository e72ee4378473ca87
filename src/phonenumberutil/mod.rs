mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
pub mod numbering_plan_table;
pub mod phone_number;
pub mod phonenumberutil;
mod phone_number_regexps_and_mappings;
pub(self) mod helper_types;

use std::sync::LazyLock;

pub use enums::{CountryCodeSource, PhoneNumberFormat};
use crate::phonenumberutil::phonenumberutil::PhoneNumberUtil;

/// Process-wide instance built from the compiled-in numbering plans on first
/// use. Panics on first use if those plans cannot be loaded.
pub static PHONE_NUMBER_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(|| {
    PhoneNumberUtil::new()
});
