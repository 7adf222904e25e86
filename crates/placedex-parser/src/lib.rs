//! Extraction of business listings from undocumented map-search payloads.
//!
//! The payload is a deeply nested JSON array whose meaning is carried purely
//! by position. [`raw`] provides the total, never-failing accessor used to
//! pull values out of it; [`listing`] maps one listing per business using the
//! index table in [`layout`].

pub mod cid;
pub mod error;
pub mod hours;
pub mod layout;
pub mod listing;
pub mod payload;
pub mod plus_code;
pub mod raw;

pub use error::{ErrorKind, ParseError};
pub use hours::{HoursParser, ScheduleHoursParser};
pub use listing::{parse_search_results, ListingExtractor};
pub use payload::strip_guard_prefix;
pub use plus_code::{OpenLocationCode, PlusCodeEncoder};
