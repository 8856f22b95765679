//! Integration tests for the discovery pipeline.
//!
//! These exercise the full locate → fetch → filter → synthesize → present
//! flow over mocks, with no network or API access.

use discovery::{
    render, Discovery, DiscoveryConfig, DiscoveryError, FetchError, MeetingReport, MockFailure,
    MockFetcher, MockLanguageModel, ModelLocator, TableLocator, Town,
};

const SPRINGFIELD_URL: &str = "https://springfield.example.gov";

const SPRINGFIELD_HTML: &str =
    "<nav><a href=\"/services\">Online Services</a></nav><main>Town meets Tuesdays at 6pm, agenda at /agenda</main>";

const SPRINGFIELD_ANSWER: &str = r#"{
    "schedule": "Tuesdays at 6pm",
    "schedule_cron": null,
    "location": null,
    "agenda": {"url": "https://springfield.example.gov/agenda", "format": "unknown", "notes": null},
    "summary": "Meets Tuesdays 6pm; agenda: https://springfield.example.gov/agenda"
}"#;

fn springfield() -> Town {
    Town::new("Springfield")
}

fn springfield_locator() -> TableLocator {
    TableLocator::new().with_entry(&springfield(), SPRINGFIELD_URL)
}

fn render_string(report: &MeetingReport) -> String {
    let mut buf = Vec::new();
    render(report, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[tokio::test]
async fn test_springfield_end_to_end() {
    let fetcher = MockFetcher::new().with_html(SPRINGFIELD_URL, SPRINGFIELD_HTML);
    let model = MockLanguageModel::new().with_response(SPRINGFIELD_ANSWER);

    let discovery = Discovery::new(springfield_locator(), fetcher, model.clone());
    let report = discovery.run(&springfield()).await.unwrap();

    assert_eq!(report.website, SPRINGFIELD_URL);
    assert_eq!(report.details.schedule.as_deref(), Some("Tuesdays at 6pm"));

    // The filtered content reached the model: body text in, nav text out.
    let prompt = model.last_prompt().unwrap();
    assert!(prompt.contains("Town meets Tuesdays at 6pm, agenda at /agenda"));
    assert!(!prompt.contains("Online Services"));

    // The mocked answer's summary is printed verbatim as the last line.
    let rendered = render_string(&report);
    assert!(rendered
        .ends_with("Meets Tuesdays 6pm; agenda: https://springfield.example.gov/agenda\n"));
    assert!(!rendered.contains("Online Services"));
}

#[tokio::test]
async fn test_http_404_aborts_without_calling_model() {
    let fetcher = MockFetcher::new().with_failure(SPRINGFIELD_URL, MockFailure::Status(404));
    let model = MockLanguageModel::new().with_default_response(SPRINGFIELD_ANSWER);

    let discovery = Discovery::new(springfield_locator(), fetcher, model.clone());
    let err = discovery.run(&springfield()).await.unwrap_err();

    assert!(matches!(
        err,
        DiscoveryError::Fetch(FetchError::Status { status: 404, .. })
    ));
    // No fabricated result: the model was never consulted.
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn test_connection_error_aborts() {
    let fetcher = MockFetcher::new().with_failure(SPRINGFIELD_URL, MockFailure::Connect);
    let model = MockLanguageModel::new().with_default_response(SPRINGFIELD_ANSWER);

    let discovery = Discovery::new(springfield_locator(), fetcher, model.clone());
    let err = discovery.run(&springfield()).await.unwrap_err();

    assert!(matches!(err, DiscoveryError::Fetch(FetchError::Http(_))));
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn test_script_only_page_is_empty_content() {
    let fetcher = MockFetcher::new().with_html(SPRINGFIELD_URL, "<script>app();</script>");
    let model = MockLanguageModel::new().with_default_response(SPRINGFIELD_ANSWER);

    let discovery = Discovery::new(springfield_locator(), fetcher, model.clone());
    let err = discovery.run(&springfield()).await.unwrap_err();

    assert!(matches!(err, DiscoveryError::EmptyContent { .. }));
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn test_prose_answer_is_malformed() {
    let fetcher = MockFetcher::new().with_html(SPRINGFIELD_URL, SPRINGFIELD_HTML);
    let model = MockLanguageModel::new().with_response("The town meets on Tuesdays at 6pm.");

    let discovery = Discovery::new(springfield_locator(), fetcher, model);
    let err = discovery.run(&springfield()).await.unwrap_err();

    assert!(matches!(err, DiscoveryError::MalformedAnswer { .. }));
}

#[tokio::test]
async fn test_follows_meeting_links() {
    let landing = "<main>Welcome. \
<a href=\"/agendas\">Agendas and Minutes</a> \
<a href=\"/parks\">Parks and Recreation</a></main>";
    let agendas_page = "<main>Select Board agendas are posted each Friday.</main>";

    let fetcher = MockFetcher::new()
        .with_html(SPRINGFIELD_URL, landing)
        .with_html("https://springfield.example.gov/agendas", agendas_page);
    let model = MockLanguageModel::new().with_response(SPRINGFIELD_ANSWER);

    let discovery = Discovery::new(springfield_locator(), fetcher.clone(), model.clone());
    let report = discovery.run(&springfield()).await.unwrap();

    // The agendas page was fetched, filtered, and included in the prompt;
    // the parks page was not followed.
    assert!(report
        .pages_consulted
        .contains(&"https://springfield.example.gov/agendas".to_string()));
    let prompt = model.last_prompt().unwrap();
    assert!(prompt.contains("posted each Friday"));
    assert!(!fetcher
        .calls()
        .contains(&"https://springfield.example.gov/parks".to_string()));
}

#[tokio::test]
async fn test_follow_link_failure_is_skipped() {
    let landing = "<main>Welcome. <a href=\"/agendas\">Agendas</a></main>";

    let fetcher = MockFetcher::new()
        .with_html(SPRINGFIELD_URL, landing)
        .with_failure(
            "https://springfield.example.gov/agendas",
            MockFailure::Status(500),
        );
    let model = MockLanguageModel::new().with_response(SPRINGFIELD_ANSWER);

    let discovery = Discovery::new(springfield_locator(), fetcher, model);
    let report = discovery.run(&springfield()).await.unwrap();

    // The landing page alone still produces a report.
    assert_eq!(report.pages_consulted, vec![SPRINGFIELD_URL.to_string()]);
}

#[tokio::test]
async fn test_follow_links_honors_config_limit() {
    let landing = "<main>\
<a href=\"/a-meeting\">Meeting A</a>\
<a href=\"/b-meeting\">Meeting B</a>\
<a href=\"/c-meeting\">Meeting C</a></main>";

    let fetcher = MockFetcher::new()
        .with_html(SPRINGFIELD_URL, landing)
        .with_html("https://springfield.example.gov/a-meeting", "<main>A</main>")
        .with_html("https://springfield.example.gov/b-meeting", "<main>B</main>")
        .with_html("https://springfield.example.gov/c-meeting", "<main>C</main>");
    let model = MockLanguageModel::new().with_response(SPRINGFIELD_ANSWER);

    let discovery = Discovery::new(springfield_locator(), fetcher.clone(), model)
        .with_config(DiscoveryConfig::new().with_max_follow_links(1));
    discovery.run(&springfield()).await.unwrap();

    // Landing page + exactly one followed link.
    assert_eq!(fetcher.call_count(), 2);
}

#[tokio::test]
async fn test_model_locator_feeds_the_pipeline() {
    let fetcher = MockFetcher::new().with_html(SPRINGFIELD_URL, SPRINGFIELD_HTML);
    // First canned answer resolves the website, second synthesizes.
    let model = MockLanguageModel::new()
        .with_response("springfield.example.gov")
        .with_response(SPRINGFIELD_ANSWER);

    let discovery = Discovery::new(ModelLocator::new(model.clone()), fetcher, model.clone());
    let report = discovery.run(&springfield()).await.unwrap();

    assert_eq!(report.website, SPRINGFIELD_URL);
    assert_eq!(model.call_count(), 2);
    assert!(model.calls()[0].user.contains("Springfield"));
}
