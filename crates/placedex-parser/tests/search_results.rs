//! End-to-end extraction over payloads shaped like live search responses.

use placedex_parser::{parse_search_results, strip_guard_prefix, ErrorKind};
use serde_json::{json, Value};

/// Build a business sub-array with the positions a typical listing fills.
fn business(title: &str, data_id: &str, lat: f64, lng: f64) -> Value {
    let mut b = vec![Value::Null; 184];
    b[0] = json!(format!("id-{title}"));
    b[2] = json!(["1 Example Rd", "Springfield", 62704]);
    b[4] = json!([null, null, null, ["https://maps.example/r"], null, null, null, 4.2, 87]);
    b[9] = json!([null, null, lat, lng]);
    b[10] = json!(data_id);
    b[11] = json!(title);
    b[13] = json!(["Coffee shop"]);
    b[178] = json!([["(217) 555 0100"]]);
    b[183] = json!([null, [null, "1 Example Rd", null, "Springfield", "62704", "IL", "US"]]);
    Value::Array(b)
}

fn element(business: Value) -> Value {
    let mut el = vec![Value::Null; 15];
    el[14] = business;
    Value::Array(el)
}

fn to_payload(elements: Vec<Value>) -> Vec<u8> {
    let mut items = vec![json!([null, "header"])];
    items.extend(elements);
    serde_json::to_vec(&json!([[null, items]])).unwrap()
}

#[test]
fn extracts_listings_in_source_order() {
    let raw = to_payload(vec![
        element(business("Alpha Cafe", "0x1:0xff", 39.78, -89.65)),
        json!(null),
        element(business("Beta Beans", "0x1:0x10", 39.80, -89.64)),
    ]);

    let entries = parse_search_results(&raw).unwrap();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].title, "Alpha Cafe");
    assert_eq!(entries[0].cid, "255");
    assert_eq!(entries[0].address, "1 Example Rd, Springfield, 62704");
    assert_eq!(entries[0].complete_address.state, "IL");
    assert_eq!(entries[0].phone, "(217)5550100");
    assert_eq!(entries[0].review_count, 87);
    assert_eq!(entries[0].reviews_link, "https://maps.example/r");
    assert_eq!(entries[0].category, "Coffee shop");
    assert_eq!(entries[0].plus_code.len(), 11);

    assert_eq!(entries[1].title, "Beta Beans");
    assert_eq!(entries[1].cid, "16");
}

#[test]
fn output_count_matches_array_elements_after_header() {
    let raw = to_payload(vec![
        element(business("A", "", 0.0, 0.0)),
        json!(1),
        json!("x"),
        json!({"k": "v"}),
        element(business("B", "", 0.0, 0.0)),
        json!([]),
    ]);
    let entries = parse_search_results(&raw).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[2].title, "");
}

#[test]
fn guarded_payload_parses_after_stripping() {
    let mut raw = b")]}'\n".to_vec();
    raw.extend(to_payload(vec![element(business("Guarded", "", 1.0, 1.0))]));

    let err = parse_search_results(&raw).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedPayload);

    let entries = parse_search_results(strip_guard_prefix(&raw)).unwrap();
    assert_eq!(entries[0].title, "Guarded");
}

#[test]
fn entries_serialize_with_snake_case_names() {
    let raw = to_payload(vec![element(business("Alpha Cafe", "0x1:0x2a", 1.0, 2.0))]);
    let entries = parse_search_results(&raw).unwrap();
    let json = serde_json::to_value(&entries[0]).unwrap();
    assert_eq!(json["title"], "Alpha Cafe");
    assert_eq!(json["cid"], "42");
    assert_eq!(json["complete_address"]["postal_code"], "62704");
    assert_eq!(json["longtitude"], 2.0);
}
