use super::*;

const ENTRY_SCHEMA: Schema = &[
    FieldRule::required("day_of_week", FieldFormat::Weekday),
    FieldRule::required("start_hour", FieldFormat::Hour),
    FieldRule::required("teacher_id", FieldFormat::PositiveInt),
    FieldRule::optional("student_group_id", FieldFormat::PositiveInt),
];

fn filled_form() -> Form {
    Form::from_pairs([
        ("day_of_week", "Monday"),
        ("start_hour", "09:00"),
        ("teacher_id", "1"),
    ])
}

#[test]
fn filled_form_passes() {
    assert_eq!(validate(ENTRY_SCHEMA, &filled_form()), Ok(()));
}

#[test]
fn blank_required_field_is_reported_by_name() {
    let mut form = filled_form();
    form.set("teacher_id", "   ");
    let err = validate(ENTRY_SCHEMA, &form).unwrap_err();
    assert_eq!(err.field, "teacher_id");
    assert_eq!(err, ValidationError::missing("teacher_id"));
}

#[test]
fn first_failing_rule_wins() {
    let form = Form::from_pairs([("start_hour", "25")]);
    let err = validate(ENTRY_SCHEMA, &form).unwrap_err();
    assert_eq!(err.field, "day_of_week");
}

#[test]
fn optional_field_is_still_format_checked() {
    let mut form = filled_form();
    form.set("student_group_id", "A");
    let err = validate(ENTRY_SCHEMA, &form).unwrap_err();
    assert_eq!(err.field, "student_group_id");

    form.set("student_group_id", "");
    assert!(validate(ENTRY_SCHEMA, &form).is_ok());
}

#[test]
fn hours_accept_plain_and_clock_forms() {
    assert_eq!(parse_hour("h", "9"), Ok(9));
    assert_eq!(parse_hour("h", "09"), Ok(9));
    assert_eq!(parse_hour("h", "09:00"), Ok(9));
    assert_eq!(parse_hour("h", "23:00"), Ok(23));
    assert_eq!(parse_hour("h", "0"), Ok(0));
}

#[test]
fn hours_reject_malformed_values() {
    for bad in ["24", "9:0", "09:30", "nine", ":00", "123", "-1", "09:00:00", "9 "] {
        assert!(parse_hour("start_hour", bad).is_err(), "{} should fail", bad);
    }
    assert_eq!(
        parse_hour("start_hour", "10:15").unwrap_err().reason,
        "must be on the hour"
    );
}

#[test]
fn weekdays_are_canonicalised() {
    assert_eq!(parse_weekday("d", "monday"), Ok("Monday"));
    assert_eq!(parse_weekday("d", "SUNDAY"), Ok("Sunday"));
    assert!(parse_weekday("d", "Mon").is_err());
}

#[test]
fn positive_ints_only() {
    assert_eq!(parse_positive_int("id", "42"), Ok(42));
    assert!(parse_positive_int("id", "0").is_err());
    assert!(parse_positive_int("id", "-3").is_err());
    assert!(parse_positive_int("id", "4.5").is_err());
}

#[test]
fn reset_clears_every_field() {
    let mut form = filled_form();
    assert!(!form.is_empty());
    form.reset();
    assert!(form.is_empty());
    assert_eq!(form.get("day_of_week"), None);
}
