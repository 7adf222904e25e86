//! Positional layout of the map-search payload.
//!
//! The upstream payload has no schema and no versioning; these indices are
//! the de-facto wire contract, recovered from live responses. Change them
//! only after confirming against current payloads.
//!
//! Unless noted otherwise, paths are relative to a business sub-array.

/// Index of the business container inside `payload[0]`.
pub const BUSINESS_CONTAINER: usize = 1;
/// First record in the business container; index 0 is a header.
pub const FIRST_RECORD: usize = 1;
/// Index of the business sub-array inside each container element.
pub const BUSINESS: usize = 14;

pub const ID: &[usize] = &[0];
/// Raw address parts, joined into the unstructured address text.
pub const ADDRESS_PARTS: &[usize] = &[2];
pub const REVIEW_LINK: &[usize] = &[4, 3, 0];
pub const REVIEW_RATING: &[usize] = &[4, 7];
pub const REVIEW_COUNT: &[usize] = &[4, 8];
pub const WEB_SITE: &[usize] = &[7, 0];
pub const LATITUDE: &[usize] = &[9, 2];
pub const LONGITUDE: &[usize] = &[9, 3];
pub const DATA_ID: &[usize] = &[10];
pub const TITLE: &[usize] = &[11];
pub const CATEGORIES: &[usize] = &[13];
pub const TIMEZONE: &[usize] = &[30];
/// Weekly schedule: `[[day, [range, ...]], ...]`.
pub const HOURS: &[usize] = &[34, 1];
pub const STATUS: &[usize] = &[34, 4, 4];
pub const ABOUT: &[usize] = &[100, 1];
pub const PHONE: &[usize] = &[178, 0, 0];

// Structured address. Position [183][1][2] exists in live payloads but is
// not mapped; it is unknown whether it holds a neighborhood or is noise.
pub const ADDRESS_BOROUGH: &[usize] = &[183, 1, 0];
pub const ADDRESS_STREET: &[usize] = &[183, 1, 1];
pub const ADDRESS_CITY: &[usize] = &[183, 1, 3];
pub const ADDRESS_POSTAL_CODE: &[usize] = &[183, 1, 4];
pub const ADDRESS_STATE: &[usize] = &[183, 1, 5];
pub const ADDRESS_COUNTRY: &[usize] = &[183, 1, 6];

// Relative to one element of `ABOUT`.
pub const ABOUT_ID: &[usize] = &[0];
pub const ABOUT_NAME: &[usize] = &[1];
pub const ABOUT_OPTIONS: &[usize] = &[2];

// Relative to one element of `ABOUT_OPTIONS`.
pub const OPTION_NAME: &[usize] = &[1];
/// Numeric flag; the option is enabled iff this equals exactly `1`.
pub const OPTION_ENABLED: &[usize] = &[2, 1, 0, 0];

// Relative to one element of `HOURS`.
pub const HOURS_DAY: &[usize] = &[0];
pub const HOURS_RANGES: &[usize] = &[1];

/// Plus Code length requested for every listing.
pub const PLUS_CODE_LENGTH: usize = 10;
