/*
[INPUT]:  Value trees and XML documents
[OUTPUT]: Test results for encode/decode interplay
[POS]:    Integration tests - XML codec
[UPDATE]: When list layout or decode heuristics change
*/

use mti_adapter::Value;
use mti_adapter::xml::{decode, encode};

fn map(entries: Vec<(&str, Value)>) -> Value {
    entries.into_iter().collect()
}

#[test]
fn test_round_trip_nested_records_and_lists() {
    let original = map(vec![
        ("order", map(vec![("id", "42".into()), ("status", "new".into())])),
        (
            "lines",
            map(vec![(
                "line",
                Value::List(vec![
                    map(vec![("sku", "A-1".into()), ("qty", "2".into())]),
                    map(vec![("sku", "B-7".into()), ("qty", "1".into())]),
                    map(vec![("sku", "C-3".into()), ("qty", "5".into())]),
                ]),
            )]),
        ),
        ("tags", map(vec![("tag", vec!["x", "y"].into())])),
        ("note", "a & b <c>".into()),
    ]);

    let xml = encode(&original, "request").unwrap();
    assert_eq!(decode(&xml).unwrap(), original);
}

#[test]
fn test_heuristic_merges_list_with_following_siblings() {
    // a list that is not the only entry of its mapping is outside the
    // round-trip guarantee
    let original = map(vec![("a", vec!["1", "2"].into()), ("b", "3".into())]);
    let xml = encode(&original, "root").unwrap();
    assert_eq!(
        decode(&xml).unwrap(),
        map(vec![("a", vec!["1", "2", "3"].into())])
    );
}

#[test]
fn test_single_item_list_decodes_as_scalar() {
    let original = map(vec![("a", vec!["only"].into())]);
    let xml = encode(&original, "root").unwrap();
    assert_eq!(decode(&xml).unwrap(), map(vec![("a", "only".into())]));
}
