use chrono::{NaiveDate, NaiveTime};

use fieldguard_core::{FieldShape, FieldValue, Shape};

#[test]
fn conversions_tag_the_obvious_rust_types() {
    assert_eq!(FieldValue::from("x"), FieldValue::Text("x".to_string()));
    assert_eq!(FieldValue::from(7), FieldValue::Int(7));
    assert_eq!(FieldValue::from(7i64), FieldValue::Int(7));
    assert_eq!(FieldValue::from(1.5), FieldValue::Float(1.5));
    assert_eq!(FieldValue::from(true), FieldValue::Bool(true));
    assert_eq!(FieldValue::from(None::<i64>), FieldValue::Null);
    assert_eq!(FieldValue::from(Some(7i64)), FieldValue::Int(7));

    let date = NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date");
    assert_eq!(
        FieldValue::from(date),
        FieldValue::Date(date.and_time(NaiveTime::MIN))
    );
}

#[test]
fn accessors_view_without_mutating() {
    let text = FieldValue::from("abc");
    assert_eq!(text.as_str(), Some("abc"));
    assert_eq!(text.as_f64(), None);

    let number = FieldValue::Int(2);
    assert_eq!(number.as_f64(), Some(2.0));
    assert_eq!(FieldValue::Float(2.5).as_f64(), Some(2.5));

    let date = NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date");
    assert_eq!(
        FieldValue::from(date).as_date(),
        Some(date.and_time(NaiveTime::MIN))
    );
    assert!(FieldValue::Null.is_null());
}

#[test]
fn candidates_resolve_to_their_canonical_stored_types() {
    assert_eq!(
        String::from_value(FieldValue::from("abc")),
        Some("abc".to_string())
    );
    assert_eq!(String::from_value(FieldValue::Int(1)), None);

    assert_eq!(f64::from_value(FieldValue::Int(2)), Some(2.0));
    assert_eq!(f64::from_value(FieldValue::Float(2.5)), Some(2.5));
    assert_eq!(f64::from_value(FieldValue::Float(f64::NAN)), None);
    assert_eq!(f64::from_value(FieldValue::from("2")), None);

    assert_eq!(
        FieldValue::from_value(FieldValue::Bool(true)),
        Some(FieldValue::Bool(true))
    );
}

#[test]
fn shapes_have_stable_serde_names_and_readable_labels() {
    assert_eq!(
        serde_json::to_string(&Shape::TextOrNumber).expect("serializes"),
        "\"text_or_number\""
    );
    assert_eq!(Shape::Text.to_string(), "a string");
    assert_eq!(Shape::Number.to_string(), "a finite number");
    assert_eq!(Shape::Date.to_string(), "a valid date");
}
