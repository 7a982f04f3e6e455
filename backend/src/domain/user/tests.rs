//! Tests for user payload validation and name derivation.

use super::*;
use rstest::{fixture, rstest};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

#[fixture]
fn today() -> NaiveDate {
    date(2024, 5, 15)
}

fn valid_payload() -> UserPayload {
    UserPayload {
        id: None,
        email: Some("ada@example.org".to_owned()),
        login: Some("ada_1815".to_owned()),
        name: Some("Ada Lovelace".to_owned()),
        birthday: Some(date(1815, 12, 10)),
    }
}

fn violated_fields(err: &ValidationError) -> Vec<&'static str> {
    err.violations.iter().map(|v| v.field).collect()
}

#[rstest]
fn valid_payload_produces_draft_with_all_fields(today: NaiveDate) {
    let draft = valid_payload().validate(today).expect("payload is valid");

    assert_eq!(draft.requested_id(), None);
    assert_eq!(draft.email, "ada@example.org");
    assert_eq!(draft.login, "ada_1815");
    assert_eq!(draft.name, "Ada Lovelace");
    assert_eq!(draft.birthday, date(1815, 12, 10));
}

#[rstest]
#[case::missing(None)]
#[case::blank(Some("   ".to_owned()))]
#[case::empty(Some(String::new()))]
fn absent_display_name_falls_back_to_login(#[case] name: Option<String>, today: NaiveDate) {
    let payload = UserPayload {
        name,
        ..valid_payload()
    };

    let draft = payload.validate(today).expect("name is optional");
    assert_eq!(draft.name, "ada_1815");
}

#[rstest]
fn supplied_display_name_is_kept(today: NaiveDate) {
    let draft = valid_payload().validate(today).expect("payload is valid");
    assert_eq!(draft.name, "Ada Lovelace");
}

#[rstest]
#[case::plain("bob1")]
#[case::underscores("snake_case_99")]
#[case::single_letter("b")]
fn word_logins_are_accepted(#[case] login: &str, today: NaiveDate) {
    let payload = UserPayload {
        login: Some(login.to_owned()),
        ..valid_payload()
    };

    assert!(payload.validate(today).is_ok());
}

#[rstest]
#[case::inner_space("bo b")]
#[case::leading_space(" bob")]
#[case::empty("")]
#[case::blank("   ")]
#[case::punctuation("bob!")]
#[case::accented_letter("böb")]
fn non_word_logins_are_rejected(#[case] login: &str, today: NaiveDate) {
    let payload = UserPayload {
        login: Some(login.to_owned()),
        ..valid_payload()
    };

    let err = payload.validate(today).expect_err("login constraint");
    assert_eq!(violated_fields(&err), vec!["login"]);
}

#[rstest]
fn missing_login_is_rejected(today: NaiveDate) {
    let payload = UserPayload {
        login: None,
        ..valid_payload()
    };

    let err = payload.validate(today).expect_err("login is required");
    assert_eq!(violated_fields(&err), vec!["login"]);
}

#[rstest]
#[case::short_domain("a@b.co")]
#[case::plus_tag("ada+films@example.org")]
fn wellformed_emails_are_accepted(#[case] email: &str, today: NaiveDate) {
    let payload = UserPayload {
        email: Some(email.to_owned()),
        ..valid_payload()
    };

    assert!(payload.validate(today).is_ok());
}

#[rstest]
#[case::no_at("nope")]
#[case::double_at("a@@b")]
#[case::embedded_space("a b@c.io")]
#[case::missing_local("@example.org")]
#[case::missing_domain("ada@")]
fn malformed_emails_are_rejected(#[case] email: &str, today: NaiveDate) {
    let payload = UserPayload {
        email: Some(email.to_owned()),
        ..valid_payload()
    };

    let err = payload.validate(today).expect_err("email constraint");
    assert_eq!(violated_fields(&err), vec!["email"]);
}

#[rstest]
fn birthday_today_is_accepted(today: NaiveDate) {
    let payload = UserPayload {
        birthday: Some(today),
        ..valid_payload()
    };

    assert!(payload.validate(today).is_ok());
}

#[rstest]
fn birthday_tomorrow_is_rejected(today: NaiveDate) {
    let payload = UserPayload {
        birthday: Some(date(2024, 5, 16)),
        ..valid_payload()
    };

    let err = payload.validate(today).expect_err("future birthday");
    assert_eq!(violated_fields(&err), vec!["birthday"]);
}

#[rstest]
fn negative_id_is_rejected(today: NaiveDate) {
    let payload = UserPayload {
        id: Some(-5),
        ..valid_payload()
    };

    let err = payload.validate(today).expect_err("negative id");
    assert_eq!(violated_fields(&err), vec!["id"]);
}

#[rstest]
fn every_violation_is_reported_at_once(today: NaiveDate) {
    let payload = UserPayload {
        id: None,
        email: Some("not-an-email".to_owned()),
        login: Some("bo b".to_owned()),
        name: None,
        birthday: Some(date(2030, 1, 1)),
    };

    let err = payload.validate(today).expect_err("three failing constraints");
    assert_eq!(violated_fields(&err), vec!["email", "login", "birthday"]);
}

#[rstest]
fn draft_without_id_cannot_become_an_update(today: NaiveDate) {
    let draft = valid_payload().validate(today).expect("payload is valid");

    let err = draft.into_update().expect_err("update needs an id");
    assert_eq!(violated_fields(&err), vec!["id"]);
}

#[rstest]
fn draft_with_id_becomes_a_full_user(today: NaiveDate) {
    let payload = UserPayload {
        id: Some(3),
        name: None,
        ..valid_payload()
    };

    let user = payload
        .validate(today)
        .expect("payload is valid")
        .into_update()
        .expect("id present");
    assert_eq!(user.id(), 3);
    assert_eq!(user.name(), "ada_1815");
}
