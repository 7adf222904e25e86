//! Opening-hours extraction.

use placedex_core::OpenHours;
use serde_json::Value;

use crate::layout;
use crate::raw::get;

/// Produces the weekly schedule for one business sub-array.
pub trait HoursParser {
    fn parse_hours(&self, business: &Value) -> OpenHours;
}

/// Reads the `[[day, [range, ...]], ...]` schedule block of a listing.
///
/// Days with an empty or non-string name are skipped. Ranges that are not
/// strings are kept as empty strings so positions line up with the source.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleHoursParser;

impl HoursParser for ScheduleHoursParser {
    fn parse_hours(&self, business: &Value) -> OpenHours {
        get::<&[Value]>(business, layout::HOURS)
            .iter()
            .filter_map(|item| {
                let day: String = get(item, layout::HOURS_DAY);
                if day.is_empty() {
                    return None;
                }
                let ranges = get::<&[Value]>(item, layout::HOURS_RANGES)
                    .iter()
                    .map(|r| get::<String>(r, &[]))
                    .collect();
                Some((day, ranges))
            })
            .collect()
    }
}

impl<F> HoursParser for F
where
    F: Fn(&Value) -> OpenHours,
{
    fn parse_hours(&self, business: &Value) -> OpenHours {
        self(business)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn business_with_hours(hours: Value) -> Value {
        let mut business = vec![Value::Null; 35];
        business[34] = json!([null, hours]);
        Value::Array(business)
    }

    #[test]
    fn parses_weekly_schedule() {
        let business = business_with_hours(json!([
            ["Monday", ["9 AM–5 PM"]],
            ["Tuesday", ["9 AM–12 PM", "1–5 PM"]],
            ["Sunday", []]
        ]));
        let hours = ScheduleHoursParser.parse_hours(&business);
        assert_eq!(hours.len(), 3);
        assert_eq!(hours["Monday"], vec!["9 AM–5 PM"]);
        assert_eq!(hours["Tuesday"], vec!["9 AM–12 PM", "1–5 PM"]);
        assert!(hours["Sunday"].is_empty());
    }

    #[test]
    fn skips_days_without_name() {
        let business = business_with_hours(json!([[null, ["9 AM–5 PM"]], ["", []]]));
        assert!(ScheduleHoursParser.parse_hours(&business).is_empty());
    }

    #[test]
    fn non_string_ranges_become_empty() {
        let business = business_with_hours(json!([["Friday", ["Open 24 hours", 7]]]));
        let hours = ScheduleHoursParser.parse_hours(&business);
        assert_eq!(hours["Friday"], vec!["Open 24 hours", ""]);
    }

    #[test]
    fn missing_block_yields_empty_schedule() {
        assert!(ScheduleHoursParser.parse_hours(&json!([])).is_empty());
        assert!(ScheduleHoursParser.parse_hours(&Value::Null).is_empty());
    }

    #[test]
    fn closures_act_as_parsers() {
        let parser = |_: &Value| {
            let mut hours = OpenHours::new();
            hours.insert("Monday".to_string(), vec![]);
            hours
        };
        assert!(parser.parse_hours(&Value::Null).contains_key("Monday"));
    }
}
