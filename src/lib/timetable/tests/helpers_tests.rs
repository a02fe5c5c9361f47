use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(
        endpoint("http://localhost:8000", "schedule/"),
        "http://localhost:8000/api/v1/timetable/schedule/"
    );
    assert_eq!(
        endpoint("http://127.0.0.1:8000/", "schedule/1"),
        "http://127.0.0.1:8000/api/v1/timetable/schedule/1"
    );
}

#[test]
fn error_message_prefers_server_detail() {
    let reply = HttpReply::new(400, r#"{"detail": "Invalid data"}"#);
    assert_eq!(error_message(&reply), "Invalid data");
}

#[test]
fn error_message_joins_validation_list() {
    let reply = HttpReply::new(
        422,
        r#"{"detail": [
            {"loc": ["body", "start_hour"], "msg": "field required", "type": "value_error.missing"},
            {"loc": ["body", "room_id"], "msg": "value is not a valid integer", "type": "type_error.integer"}
        ]}"#,
    );
    assert_eq!(
        error_message(&reply),
        "field required; value is not a valid integer"
    );
}

#[test]
fn error_message_falls_back_to_status_text() {
    let reply = HttpReply::new(404, "<html>not here</html>");
    assert_eq!(error_message(&reply), "Not Found");

    let reply = HttpReply::new(500, r#"{"detail": ""}"#);
    assert_eq!(error_message(&reply), "Internal Server Error");
}

#[test]
fn error_message_falls_back_to_code() {
    let reply = HttpReply {
        status: 599,
        status_text: String::new(),
        body: String::new(),
    };
    assert_eq!(error_message(&reply), "HTTP 599");
}

#[test]
fn hours_render_as_clock_time() {
    assert_eq!(format_hour(10), "10:00");
    assert_eq!(format_hour(9), "09:00");
}

#[test]
fn absent_values_render_as_placeholder() {
    assert_eq!(or_placeholder::<String>(None), "-");
    assert_eq!(or_placeholder(Some(&String::new())), "-");
    assert_eq!(or_placeholder(Some(&"A".to_owned())), "A");
    assert_eq!(or_placeholder(Some(&3)), "3");
}

#[test]
fn html_is_escaped() {
    assert_eq!(
        escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
        "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
    );
}

#[test]
fn example_config_is_readable() {
    let args = Args {
        config_json_path: std::path::PathBuf::from("example.config.json"),
        format: crate::timetable::models::OutputFormat::Text,
        command: crate::timetable::models::Command::Teachers(
            crate::timetable::models::TeachersCommand::List,
        ),
    };
    let config = get_config(&args).unwrap();
    assert_eq!(config.api_base, "http://localhost:8000");
    assert_eq!(config.default_group.as_deref(), Some("A"));
    assert_eq!(config.request_timeout_secs, 10);
}
