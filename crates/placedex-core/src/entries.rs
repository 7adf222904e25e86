use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Weekly opening hours keyed by day name, e.g. `"Monday" -> ["9 AM–5 PM"]`.
///
/// A day with no ranges is present with an empty list only when the source
/// listed the day without times.
pub type OpenHours = BTreeMap<String, Vec<String>>;

/// One business listing extracted from a map-search payload.
///
/// Every field holds its zero value when the corresponding position in the
/// source payload was missing, null, or of an unexpected type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    /// Upstream place identifier, e.g. `"0x89c259af:0x2a"`.
    pub data_id: String,
    /// Decimal rendering of the hex half of `data_id`; empty when `data_id`
    /// does not have the `<prefix>:0x<hex>` shape.
    pub cid: String,
    /// First element of `categories`, empty when there are none.
    pub category: String,
    pub categories: Vec<String>,
    pub web_site: String,
    /// Phone number with internal spaces removed.
    pub phone: String,
    pub review_rating: f64,
    pub review_count: i64,
    pub reviews_link: String,
    /// Unstructured address text joined from the raw address parts.
    pub address: String,
    pub complete_address: Address,
    pub latitude: f64,
    #[serde(rename = "longtitude")]
    pub longitude: f64,
    /// 10-character Open Location Code for `latitude`/`longitude`.
    pub plus_code: String,
    pub open_hours: OpenHours,
    pub status: String,
    pub timezone: String,
    pub about: Vec<About>,
}

impl Entry {
    /// Replaces `categories` and keeps `category` in step with it.
    pub fn set_categories(&mut self, categories: Vec<String>) {
        self.category = categories.first().cloned().unwrap_or_default();
        self.categories = categories;
    }

    /// Returns `true` if the payload carried coordinates for this listing.
    ///
    /// `(0.0, 0.0)` is treated as absent since it is the zero-value default.
    #[must_use]
    pub fn has_coordinates(&self) -> bool {
        self.latitude != 0.0 || self.longitude != 0.0
    }

    /// Looks up an attribute category by its upstream ID.
    #[must_use]
    pub fn about_by_id(&self, id: &str) -> Option<&About> {
        self.about.iter().find(|a| a.id == id)
    }
}

/// Structured postal address of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub borough: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub state: String,
    pub country: String,
}

impl Address {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.borough.is_empty()
            && self.street.is_empty()
            && self.city.is_empty()
            && self.postal_code.is_empty()
            && self.state.is_empty()
            && self.country.is_empty()
    }
}

/// An attribute category such as "Accessibility" or "Amenities".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub id: String,
    pub name: String,
    pub options: Vec<AboutOption>,
}

impl About {
    /// Names of the options flagged as enabled, in source order.
    pub fn enabled_options(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .filter(|o| o.enabled)
            .map(|o| o.name.as_str())
    }
}

/// A single attribute within an [`About`] category, e.g. "Wheelchair accessible entrance".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutOption {
    pub name: String,
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_categories_tracks_first_category() {
        let mut entry = Entry::default();
        entry.set_categories(vec!["Bakery".to_string(), "Cafe".to_string()]);
        assert_eq!(entry.category, "Bakery");
        assert_eq!(entry.categories.len(), 2);

        entry.set_categories(vec![]);
        assert_eq!(entry.category, "");
        assert!(entry.categories.is_empty());
    }

    #[test]
    fn default_entry_has_no_coordinates() {
        let entry = Entry::default();
        assert!(!entry.has_coordinates());
        assert!(entry.complete_address.is_empty());
    }

    #[test]
    fn longitude_serializes_with_upstream_spelling() {
        let entry = Entry {
            longitude: -73.98,
            ..Entry::default()
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["longtitude"], serde_json::json!(-73.98));
        assert!(json.get("longitude").is_none());
    }

    #[test]
    fn entry_round_trips_through_json() {
        let mut entry = Entry {
            id: "abc".to_string(),
            title: "Joe's Pizza".to_string(),
            review_count: 12,
            ..Entry::default()
        };
        entry
            .open_hours
            .insert("Monday".to_string(), vec!["11 AM–10 PM".to_string()]);
        let json = serde_json::to_string(&entry).unwrap();
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn enabled_options_filters_disabled() {
        let about = About {
            id: "accessibility".to_string(),
            name: "Accessibility".to_string(),
            options: vec![
                AboutOption {
                    name: "Wheelchair accessible entrance".to_string(),
                    enabled: true,
                },
                AboutOption {
                    name: "Wheelchair accessible restroom".to_string(),
                    enabled: false,
                },
            ],
        };
        let enabled: Vec<&str> = about.enabled_options().collect();
        assert_eq!(enabled, vec!["Wheelchair accessible entrance"]);
    }
}
