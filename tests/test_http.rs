use httpmock::{Method, MockServer};
use lib::timetable::fetcher::DataFetcher;
use lib::timetable::models::schedule_model::ScheduleEntry;
use lib::timetable::models::teacher_model::Teacher;
use lib::timetable::mutation::MutationHandler;
use lib::timetable::notifier::ConsoleNotifier;
use lib::timetable::renderer::Page;
use lib::timetable::transport::Transport;
use lib::timetable::validation::Form;
use reqwest::Client;
use serde_json::json;

#[tokio::test]
async fn client_get_sends_query_and_reads_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::GET)
                .path("/api/v1/timetable/schedule/")
                .query_param("group_name", "A");
            then.status(200).json_body(json!([]));
        })
        .await;

    let client = Client::new();
    let reply = Transport::get(
        &client,
        &format!("{}/api/v1/timetable/schedule/", server.base_url()),
        &[("group_name".to_owned(), "A".to_owned())],
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(reply.status, 200);
    assert_eq!(reply.status_text, "OK");
    assert_eq!(reply.body, "[]");
}

#[tokio::test]
async fn fetcher_reports_status_text_without_detail() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/api/v1/timetable/teachers/");
            then.status(404).body("nothing here");
        })
        .await;

    let client = Client::new();
    let base = server.base_url();
    let fetcher = DataFetcher::new(&client, &base);
    let mut page = Page::new();
    fetcher.load::<Teacher>(&mut page).await;

    assert!(page.is_error());
    assert_eq!(page.raw, "Not Found");
}

#[tokio::test]
async fn teacher_create_round_trip() {
    let server = MockServer::start_async().await;
    let create = server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path("/api/v1/timetable/teachers/")
                .json_body(json!({ "name": "Andy Warhol" }));
            then.status(200).json_body(json!({ "id": 1, "name": "Andy Warhol" }));
        })
        .await;
    let list = server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/api/v1/timetable/teachers/");
            then.status(200)
                .json_body(json!([{ "id": 1, "name": "Andy Warhol" }]));
        })
        .await;

    let client = Client::new();
    let notifier = ConsoleNotifier::default();
    let base = server.base_url();
    let handler = MutationHandler::new(&client, &notifier, &base);
    let mut form = Form::from_pairs([("name", "Andy Warhol")]);
    let mut page = Page::new();

    handler.create::<Teacher>(&mut form, &mut page).await.unwrap();

    create.assert_async().await;
    list.assert_async().await;
    assert!(form.is_empty());
    assert!(page.to_html().contains("<td>Andy Warhol</td>"));
}

#[tokio::test]
async fn schedule_delete_expects_no_content() {
    let server = MockServer::start_async().await;
    let delete = server
        .mock_async(|when, then| {
            when.method(Method::DELETE).path("/api/v1/timetable/schedule/4");
            then.status(204);
        })
        .await;
    let list = server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/api/v1/timetable/schedule/");
            then.status(200).json_body(json!([]));
        })
        .await;

    let client = Client::new();
    let notifier = ConsoleNotifier { assume_yes: true };
    let base = server.base_url();
    let handler = MutationHandler::new(&client, &notifier, &base);
    let mut page = Page::new();

    handler
        .delete::<ScheduleEntry>(4, &mut page)
        .await
        .unwrap();

    delete.assert_async().await;
    list.assert_async().await;
    assert_eq!(page.data_rows(), 0);
    assert!(!page.is_error());
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    /* nothing listens on the discard port */
    let client = Client::new();
    let fetcher = DataFetcher::new(&client, "http://127.0.0.1:9");
    let result = fetcher.fetch::<Teacher>(&[]).await;

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Network error: "));
}
