//! Mapping of map-search payloads into [`Entry`] records.
//!
//! Only two conditions abort extraction: a payload that is not JSON and a
//! payload whose top-level shape lacks the business container. Every
//! per-listing and per-field problem is absorbed as a zero value.

use placedex_core::{About, AboutOption, Address, Entry};
use serde_json::Value;

use crate::cid::decode_cid;
use crate::error::ParseError;
use crate::hours::{HoursParser, ScheduleHoursParser};
use crate::layout;
use crate::plus_code::{OpenLocationCode, PlusCodeEncoder};
use crate::raw::{get, node, render};

/// Extract every listing in `raw` using the default hours parser and
/// Plus Code encoder.
///
/// # Errors
///
/// Returns [`ParseError::MalformedPayload`] if `raw` is not valid JSON, or
/// [`ParseError::UnexpectedShape`] if it lacks a business container with at
/// least one record slot.
pub fn parse_search_results(raw: &[u8]) -> Result<Vec<Entry>, ParseError> {
    let extractor: ListingExtractor = ListingExtractor::default();
    extractor.extract(raw)
}

/// Builds [`Entry`] records from a payload, delegating opening hours and
/// geocoding to pluggable collaborators.
#[derive(Debug, Clone, Default)]
pub struct ListingExtractor<H = ScheduleHoursParser, P = OpenLocationCode> {
    hours: H,
    plus_codes: P,
}

impl<H, P> ListingExtractor<H, P>
where
    H: HoursParser,
    P: PlusCodeEncoder,
{
    #[must_use]
    pub fn new(hours: H, plus_codes: P) -> Self {
        Self { hours, plus_codes }
    }

    /// Decode `raw` and extract one entry per business record, in source order.
    ///
    /// # Errors
    ///
    /// See [`parse_search_results`].
    pub fn extract(&self, raw: &[u8]) -> Result<Vec<Entry>, ParseError> {
        let data: Value = serde_json::from_slice(raw)?;
        self.extract_value(&data)
    }

    /// Extract entries from an already-decoded payload.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedShape`] if `data` lacks a business
    /// container with at least one record slot.
    pub fn extract_value(&self, data: &Value) -> Result<Vec<Entry>, ParseError> {
        let items = business_container(data)?;

        let entries: Vec<Entry> = items
            .iter()
            .enumerate()
            .skip(layout::FIRST_RECORD)
            .filter_map(|(idx, item)| {
                if item.is_array() {
                    Some(self.extract_entry(node(item, &[layout::BUSINESS])))
                } else {
                    tracing::trace!(idx, "skipping non-array business element");
                    None
                }
            })
            .collect();

        tracing::debug!(
            entries = entries.len(),
            skipped = items.len() - layout::FIRST_RECORD - entries.len(),
            "extracted search results"
        );
        Ok(entries)
    }

    /// Map a single business sub-array into an [`Entry`].
    ///
    /// `business` may be any value; a non-array yields an entry whose
    /// extracted fields are all zero values.
    #[must_use]
    pub fn extract_entry(&self, business: &Value) -> Entry {
        let mut entry = Entry {
            id: get(business, layout::ID),
            title: get(business, layout::TITLE),
            web_site: get(business, layout::WEB_SITE),
            review_rating: get(business, layout::REVIEW_RATING),
            review_count: get(business, layout::REVIEW_COUNT),
            reviews_link: get(business, layout::REVIEW_LINK),
            address: join_address(get(business, layout::ADDRESS_PARTS)),
            complete_address: parse_address(business),
            latitude: get(business, layout::LATITUDE),
            longitude: get(business, layout::LONGITUDE),
            phone: get::<&str>(business, layout::PHONE).replace(' ', ""),
            open_hours: self.hours.parse_hours(business),
            status: get(business, layout::STATUS),
            timezone: get(business, layout::TIMEZONE),
            data_id: get(business, layout::DATA_ID),
            about: parse_about(get(business, layout::ABOUT)),
            ..Entry::default()
        };

        entry.set_categories(
            get::<&[Value]>(business, layout::CATEGORIES)
                .iter()
                .map(render)
                .collect(),
        );
        entry.cid = decode_cid(&entry.data_id);
        entry.plus_code = self
            .plus_codes
            .encode(entry.latitude, entry.longitude, layout::PLUS_CODE_LENGTH);

        entry
    }
}

/// Locate the list of business container elements, header included.
fn business_container(data: &Value) -> Result<&[Value], ParseError> {
    let outer = data
        .as_array()
        .ok_or_else(|| ParseError::shape("payload is not a JSON array"))?;
    if outer.is_empty() {
        return Err(ParseError::shape("empty payload array"));
    }

    let container: &[Value] = get(data, &[0]);
    if container.is_empty() {
        return Err(ParseError::shape("invalid business list structure"));
    }

    let items: &[Value] = get(data, &[0, layout::BUSINESS_CONTAINER]);
    if items.len() <= layout::FIRST_RECORD {
        return Err(ParseError::shape("empty business list"));
    }

    Ok(items)
}

/// Join raw address parts with `", "`, rendering non-string parts as text.
fn join_address(parts: &[Value]) -> String {
    parts.iter().map(render).collect::<Vec<_>>().join(", ")
}

fn parse_address(business: &Value) -> Address {
    Address {
        borough: get(business, layout::ADDRESS_BOROUGH),
        street: get(business, layout::ADDRESS_STREET),
        city: get(business, layout::ADDRESS_CITY),
        postal_code: get(business, layout::ADDRESS_POSTAL_CODE),
        state: get(business, layout::ADDRESS_STATE),
        country: get(business, layout::ADDRESS_COUNTRY),
    }
}

/// Parse attribute categories. Every category is kept; options without a
/// name are dropped.
fn parse_about(categories: &[Value]) -> Vec<About> {
    categories
        .iter()
        .map(|category| About {
            id: get(category, layout::ABOUT_ID),
            name: get(category, layout::ABOUT_NAME),
            options: get::<&[Value]>(category, layout::ABOUT_OPTIONS)
                .iter()
                .filter_map(parse_option)
                .collect(),
        })
        .collect()
}

fn parse_option(option: &Value) -> Option<AboutOption> {
    let name: String = get(option, layout::OPTION_NAME);
    if name.is_empty() {
        return None;
    }
    #[allow(clippy::float_cmp)]
    let enabled = get::<f64>(option, layout::OPTION_ENABLED) == 1.0;
    Some(AboutOption { name, enabled })
}

#[cfg(test)]
#[path = "listing_test.rs"]
mod tests;
