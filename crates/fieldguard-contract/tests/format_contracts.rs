use fieldguard_contract::{catalog, AcceptedIssuers, Field, Violation};
use fieldguard_core::FieldValue;
use fieldguard_patterns::{CardIssuer, IbanCountry};

fn card_field(accepts: AcceptedIssuers) -> Field<String> {
    Field::install("User", "card_number", None, catalog::credit_card(accepts))
}

#[test]
fn card_numbers_store_their_canonical_digit_form() {
    let mut field = card_field(AcceptedIssuers::One(CardIssuer::MasterCard));
    for input in [
        "5105-1051-0510-5100",
        "5105 1051 0510 5100",
        "5105-10510510-5100",
        "5105105105105100",
    ] {
        field.set(input).expect("valid master card number");
        assert_eq!(field.get().map(String::as_str), Some("5105105105105100"));
    }
}

#[test]
fn numeric_card_candidates_resolve_to_the_canonical_string() {
    let mut field = card_field(AcceptedIssuers::One(CardIssuer::MasterCard));
    field.set(5555555555554444_i64).expect("valid number");
    assert_eq!(field.get().map(String::as_str), Some("5555555555554444"));

    let mut amex = card_field(AcceptedIssuers::One(CardIssuer::AmericanExpress));
    amex.set(378282246310005_i64).expect("valid number");
    assert_eq!(amex.get().map(String::as_str), Some("378282246310005"));
}

#[test]
fn every_issuer_is_reachable_through_the_open_set() {
    let samples = [
        "371449635398431",
        "5105105105105100",
        "4222222222222",
        "6011111111111117",
        "3530111333300000",
        "38520000023237",
    ];
    for sample in samples {
        let mut field = card_field(AcceptedIssuers::All);
        field.set(sample).expect("valid card number");
        assert_eq!(field.get().map(String::as_str), Some(sample));
    }
}

#[test]
fn issuer_mismatch_is_a_constraint_violation_and_keeps_the_prior_value() {
    let mut field = card_field(AcceptedIssuers::AnyOf(vec![
        CardIssuer::MasterCard,
        CardIssuer::AmericanExpress,
    ]));
    field.set("5105105105105100").expect("valid master card");

    let err = field.set("4111111111111111").expect_err("visa rejected");
    assert!(matches!(err, Violation::Constraint { .. }));
    assert_eq!(field.get().map(String::as_str), Some("5105105105105100"));
}

#[test]
fn non_text_non_number_card_candidates_are_type_violations() {
    let mut field = card_field(AcceptedIssuers::All);
    let err = field.set(true).expect_err("bool rejected");
    assert!(matches!(err, Violation::Type { .. }));
    assert!(err.to_string().contains("card_number"));
    assert!(err.to_string().contains("User"));
}

#[test]
fn iban_contract_stores_the_matched_canonical_run() {
    let mut field = Field::install(
        "BankAccount",
        "iban",
        None,
        catalog::iban(IbanCountry::Germany),
    );
    for input in [
        "DE75512108001245126199",
        "DE75 5121 0800 1245 1261 99",
        "dE75 5121 0800 1245 1261 99sdcsdcsdcsdc",
    ] {
        field.set(input).expect("valid German IBAN");
        assert_eq!(field.get().map(String::as_str), Some("DE75512108001245126199"));
    }
}

#[test]
fn iban_violations_name_the_country_field_and_owner() {
    let mut field = Field::install(
        "BankAccount",
        "iban",
        None,
        catalog::iban(IbanCountry::Germany),
    );
    field.set("DE75512108001245126199").expect("valid IBAN");

    let err = field.set("AL35202111090000000001234567").expect_err("wrong country");
    assert!(matches!(err, Violation::Constraint { .. }));
    let message = err.to_string();
    assert!(message.contains("Germany"));
    assert!(message.contains("iban"));
    assert!(message.contains("BankAccount"));
    assert_eq!(field.get().map(String::as_str), Some("DE75512108001245126199"));
}

#[test]
fn email_contract_accepts_and_stores_unchanged() {
    let mut field = Field::install("User", "email", None, catalog::email());
    field.set("john.doe@example.com").expect("valid email");
    assert_eq!(field.get().map(String::as_str), Some("john.doe@example.com"));

    let err = field.set("john.doe.example.com").expect_err("invalid email");
    assert!(matches!(err, Violation::Constraint { .. }));
    assert_eq!(field.get().map(String::as_str), Some("john.doe@example.com"));
}

#[test]
fn nullable_format_fields_accept_absence() {
    let mut field = Field::install("User", "email", None, catalog::email());
    field.set("john.doe@example.com").expect("valid email");
    field.set(FieldValue::Null).expect("null accepted");
    assert_eq!(field.get(), None);
}
