use fieldguard_contract::{catalog, Field, Violation};
use fieldguard_core::FieldValue;

#[test]
fn read_only_fields_accept_exactly_one_write() {
    let mut id = Field::install("Visitor", "id", None, catalog::read_only());
    id.set("somevalue").expect("first write accepted");
    assert_eq!(id.get(), Some(&FieldValue::from("somevalue")));

    // Rewriting the same value counts as a second write.
    let err = id.set("somevalue").expect_err("second write rejected");
    assert!(matches!(err, Violation::Constraint { .. }));
    let err = id.set("othervalue").expect_err("second write rejected");
    assert!(err.to_string().contains("read-only"));
    assert_eq!(id.get(), Some(&FieldValue::from("somevalue")));
}

#[test]
fn null_writes_do_not_arm_the_write_once_latch() {
    let mut id = Field::install("Visitor", "id", None, catalog::read_only());
    id.set(FieldValue::Null).expect("null while unset accepted");
    assert_eq!(id.get(), None);

    id.set("somevalue").expect("first real write accepted");
    let err = id.set(FieldValue::Null).expect_err("writes after the latch rejected");
    assert!(matches!(err, Violation::Constraint { .. }));
    assert_eq!(id.get(), Some(&FieldValue::from("somevalue")));
}

#[test]
fn key_fields_reject_absence_outright() {
    let mut key = Field::install("Entity", "key", None, catalog::key());
    let err = key.set(FieldValue::Null).expect_err("null rejected");
    assert!(matches!(err, Violation::Constraint { .. }));
    assert!(err.to_string().contains("required"));

    key.set("entity-1").expect("first write accepted");
    let err = key.set("entity-2").expect_err("second write rejected");
    assert!(err.to_string().contains("read-only"));
    assert_eq!(key.get(), Some(&FieldValue::from("entity-1")));
}

#[test]
fn required_fields_reject_absence_and_accept_values() {
    let mut field = Field::install("User", "login", None, catalog::required());
    let err = field.set(FieldValue::Null).expect_err("null rejected");
    assert_eq!(err.to_string(), "property 'login' is required (User)");

    field.set("jdoe").expect("value accepted");
    field.set("jdoe2").expect("required fields stay writable");
    assert_eq!(field.get(), Some(&FieldValue::from("jdoe2")));
}

#[test]
fn not_null_fields_reject_absence() {
    let mut field = Field::install("User", "rating", None, catalog::not_null());
    let err = field.set(FieldValue::Null).expect_err("null rejected");
    assert!(matches!(err, Violation::Constraint { .. }));
    assert!(err.to_string().contains("null"));

    field.set(5).expect("value accepted");
    assert_eq!(field.get(), Some(&FieldValue::Int(5)));
}

#[test]
fn installation_trusts_the_initial_value() {
    // The contract guards writes, not the captured initial value.
    let id = Field::install(
        "Visitor",
        "id",
        Some(FieldValue::from("preset")),
        catalog::read_only(),
    );
    assert_eq!(id.get(), Some(&FieldValue::from("preset")));
}
