use crate::api_models::CurrentJoke;
use crate::test_harness::mocks::MockJokeApi;
use crate::test_harness::TestHarness;
use crate::utilities::retry_loop::retry_until_ok;
use anyhow::{anyhow, Context};
use prometheus_parse::{Scrape, Value};
use reqwest::header::LOCATION;
use reqwest::StatusCode;
use std::time::Duration;

#[actix_rt::test]
pub async fn card_page_shows_loading_before_the_first_joke_arrives() {
    // Arrange
    // Make the joke API slow enough that the first fetch is still in flight
    let mock_joke_api = MockJokeApi::new().await;
    mock_joke_api
        .configure_delayed_joke(Duration::from_secs(3))
        .await;
    let test_harness = TestHarness::start(mock_joke_api).await;

    // Act
    let page = test_harness
        .client
        .get(test_harness.build_url("/"))
        .send()
        .await
        .expect("Failed to make request to server")
        .error_for_status()
        .expect("Server returned an error status code")
        .text()
        .await
        .expect("Failed to read body");

    // Assert
    assert!(page.contains(r#"id="joke-text">Loading...</div>"#));
    assert!(page.contains("Random Joke"));
    assert!(page.contains("Get New Joke"));
}

#[actix_rt::test]
pub async fn card_background_image_is_served_by_the_server() {
    // Arrange
    let mock_joke_api = MockJokeApi::new().await;
    mock_joke_api.configure_joke().await;
    let test_harness = TestHarness::start(mock_joke_api).await;

    let page = test_harness
        .client
        .get(test_harness.build_url("/"))
        .send()
        .await
        .expect("Failed to make request to server")
        .text()
        .await
        .expect("Failed to read body");
    let background_url = page
        .split("url('")
        .nth(1)
        .and_then(|rest| rest.split("')").next())
        .expect("Page does not reference a background image")
        .to_owned();
    assert_eq!(background_url, test_harness.config.background_image_url);

    // Act
    let response = test_harness
        .client
        .get(test_harness.build_url(background_url))
        .send()
        .await
        .expect("Failed to make request to server");

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .map(|value| value.as_bytes()),
        Some("image/svg+xml".as_bytes())
    );
    let body = response.text().await.expect("Failed to read body");
    assert!(body.starts_with("<svg"));
}

#[actix_rt::test]
pub async fn card_fetches_one_joke_on_start_and_shows_it() {
    // Arrange
    let mock_joke_api = MockJokeApi::new().await;
    let joke = mock_joke_api.configure_joke().await;

    // Act
    let test_harness = TestHarness::start(mock_joke_api).await;

    // Assert
    // The joke shows up without anyone touching the control, after one fetch
    wait_for_text(&test_harness, &joke)
        .await
        .expect("Joke was not shown within timeout");
    assert_eq!(test_harness.mock_joke_api.fetch_count().await, 1);

    let page = test_harness
        .client
        .get(test_harness.build_url("/"))
        .send()
        .await
        .expect("Failed to make request to server")
        .text()
        .await
        .expect("Failed to read body");
    assert!(page.contains(&joke));
}

#[actix_rt::test]
pub async fn new_joke_control_triggers_exactly_one_more_fetch() {
    // Arrange
    let mock_joke_api = MockJokeApi::new().await;
    let joke = mock_joke_api.configure_joke().await;
    let test_harness = TestHarness::start(mock_joke_api).await;
    wait_for_text(&test_harness, &joke)
        .await
        .expect("Joke was not shown within timeout");

    // Act
    let response = test_harness
        .client
        .post(test_harness.build_url("/joke"))
        .send()
        .await
        .expect("Failed to make request to server");

    // Assert
    // The browser is sent back to the card...
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(LOCATION).map(|value| value.as_bytes()),
        Some("/".as_bytes())
    );

    // ...and exactly one more fetch reaches the joke API
    retry_until_ok(
        || async {
            match test_harness.mock_joke_api.fetch_count().await {
                2 => Ok(()),
                count => Err(anyhow!("Expected 2 fetches, saw {}", count)),
            }
        },
        Duration::from_secs(5),
        Duration::from_secs(1),
        Duration::from_millis(50),
    )
    .await
    .expect("Second fetch did not happen within timeout");

    actix_rt::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(test_harness.mock_joke_api.fetch_count().await, 2);
}

#[actix_rt::test]
pub async fn failing_joke_api_shows_the_failure_message() {
    // Arrange
    let mock_joke_api = MockJokeApi::new().await;
    mock_joke_api.setup_failure().await;

    // Act
    let test_harness = TestHarness::start(mock_joke_api).await;

    // Assert
    wait_for_text(&test_harness, "Failed to fetch joke. Please try again.")
        .await
        .expect("Failure message was not shown within timeout");
}

#[actix_rt::test]
pub async fn event_stream_starts_with_the_current_text() {
    // Arrange
    let mock_joke_api = MockJokeApi::new().await;
    let joke = mock_joke_api.configure_joke().await;
    let test_harness = TestHarness::start(mock_joke_api).await;
    wait_for_text(&test_harness, &joke)
        .await
        .expect("Joke was not shown within timeout");

    // Act
    let mut response = test_harness
        .client
        .get(test_harness.build_url("/joke/events"))
        .send()
        .await
        .expect("Failed to make request to server")
        .error_for_status()
        .expect("Server returned an error status code");

    // Assert
    assert_eq!(
        response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .map(|value| value.as_bytes()),
        Some("text/event-stream".as_bytes())
    );
    let first_event = actix_rt::time::timeout(Duration::from_secs(5), response.chunk())
        .await
        .expect("No event arrived within timeout")
        .expect("Failed to read event")
        .expect("Event stream ended");
    assert_eq!(
        String::from_utf8_lossy(&first_event),
        format!("data: {}\n\n", joke)
    );
}

#[actix_rt::test]
pub async fn metrics_endpoint_after_new_joke_request_returns_correct_http_requests_total_metric() {
    // Arrange
    // Activate the new joke control once
    let mock_joke_api = MockJokeApi::new().await;
    mock_joke_api.configure_joke().await;
    let test_harness = TestHarness::start(mock_joke_api).await;

    let status_code = test_harness
        .client
        .post(test_harness.build_url("/joke"))
        .send()
        .await
        .expect("Failed to make request to server")
        .status();
    assert_eq!(status_code, StatusCode::SEE_OTHER);

    // Act
    // Call the /metrics endpoint
    let response = test_harness
        .client
        .get(test_harness.build_url("/metrics"))
        .send()
        .await
        .expect("Failed to make request to server")
        .error_for_status()
        .expect("Server returned an error status code");

    // Assert
    // Parse the body of the response from the /metrics endpoint
    let metrics = Scrape::parse(
        response
            .text()
            .await
            .expect("Failed to read body")
            .lines()
            .map(|line| Ok(line.to_owned())),
    )
    .expect("Failed to parse prometheus response");

    // Then check the `http_requests_total` metric
    let sample = metrics
        .samples
        .iter()
        .find(|sample| {
            sample.metric == "http_requests_total"
                && sample.labels.get("endpoint") == Some("/joke")
                && sample.labels.get("method") == Some("POST")
                && sample.labels.get("status") == Some("303")
        })
        .expect(r#"No matching http_requests_total sample found for "/joke" endpoint"#);

    assert_eq!(sample.value, Value::Counter(1.into()));
}

async fn wait_for_text(
    test_harness: &TestHarness,
    expected: &str,
) -> Result<(), anyhow::Error> {
    retry_until_ok(
        || async {
            let current = test_harness
                .client
                .get(test_harness.build_url("/joke"))
                .send()
                .await
                .context("Failed to make request to server")?
                .json::<CurrentJoke>()
                .await
                .context("Failed to deserialize body")?;
            if current.text == expected {
                Ok(())
            } else {
                Err(anyhow!(
                    "Expected text {:?}, but the card shows {:?}",
                    expected,
                    current.text
                ))
            }
        },
        Duration::from_secs(5),
        Duration::from_secs(1),
        Duration::from_millis(50),
    )
    .await
    .map_err(|timeout| {
        timeout
            .last_error
            .unwrap_or_else(|| anyhow!("No attempt completed before the timeout"))
    })
}
