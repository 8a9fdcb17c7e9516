use chrono::NaiveDate;

use fieldguard_core::transform::{escape_html, escape_url_unsafe, format_message_date};

#[test]
fn html_escape_replaces_the_five_significant_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">&'"#),
        "&lt;a href=&quot;x&quot;&gt;&amp;&#039;"
    );
}

#[test]
fn html_escape_double_escapes_its_own_output() {
    // The transform is escape-every-time, not escape-once.
    assert_eq!(escape_html("&amp;"), "&amp;amp;");
}

#[test]
fn url_escape_escapes_percent_before_everything_else() {
    assert_eq!(escape_url_unsafe("%2F"), "%252F");
    assert_eq!(escape_url_unsafe("a+b/c?d#e&f'g"), "a%2Bb%2Fc%3Fd%23e%26f''g");
}

#[test]
fn url_escape_is_idempotent_on_escape_free_input() {
    let clean = "plain text without unsafe chars";
    assert_eq!(escape_url_unsafe(clean), clean);
}

#[test]
fn empty_input_yields_empty_output() {
    assert_eq!(escape_html(""), "");
    assert_eq!(escape_url_unsafe(""), "");
}

#[test]
fn message_dates_render_month_day_year() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date");
    assert_eq!(
        format_message_date(date.and_hms_opt(13, 45, 0).expect("valid time")),
        "01/05/2024"
    );
}
