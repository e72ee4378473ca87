// The minimum and maximum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: i32 = 1;
// The ITU says the maximum length should be 15, but we have found longer
// numbers in Germany.
pub const MAX_LENGTH_FOR_NSN: i32 = 17;
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;
/// The maximum length of an extension, as allowed after an explicit label.
pub const MAX_LENGTH_EXTENSION: usize = 20;

pub const PLUS_CHARS: &'static str = "+\u{FF0B}";
// Acceptable punctuation found in phone numbers, stripped before the digits
// are read. This consists of dash characters, white space characters, full
// stops, slashes, square brackets, parentheses and tildes. Full-width
// variants are also present.
pub const VALID_PUNCTUATION: &'static str = "\\-\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \t\u{00A0}\
\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}";

pub const REGION_CODE_FOR_NON_GEO_ENTITY: &'static str = "001";

pub const PLUS_SIGN: &'static str = "+";
pub const RFC3966_EXTN_PREFIX: &'static str = ";ext=";
pub const RFC3966_PREFIX: &'static str = "tel:";

// Default extension prefix to use when formatting. This will be put in front of
// any extension component of the number, after the main national number is
// formatted. This can be overridden by region-specific preferences.
pub const DEFAULT_EXTN_PREFIX: &'static str = " ext. ";

// Separators allowed between the number and an extension label.
pub const POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL: &'static str = "[ \u{00A0}\\t,]*";
// Optional full stop (.) or colon, followed by zero or more
// spaces/tabs/commas.
pub const POSSIBLE_CHARS_AFTER_EXT_LABEL: &'static str = "[:\\.\u{FF0E}]?[ \u{00A0}\\t,-]*";

pub const NANPA_COUNTRY_CODE: i32 = 1;

/// Numbering plans compiled into the library, in protobuf text format.
pub const NUMBERING_PLAN_DATA: &'static str = include_str!("../../resources/numbering_plan.txtpb");
