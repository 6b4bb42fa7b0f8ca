//! Integration tests for the relay client using mockito for HTTP mocking.

use mockito::{Matcher, Server};
use serde_json::json;
use vyse_site::domain::Field;
use vyse_site::form::{ContactSubmission, SubmissionStrategy};
use vyse_site::{FormFields, RelayClient, RelayError, RelaySubmitter, SubmitError};

fn submission() -> ContactSubmission {
    let fields = FormFields::new()
        .with(Field::Name, "Jane Doe")
        .with(Field::Email, "jane@example.com")
        .with(Field::Phone, "555-123-4567")
        .with(Field::Message, "I'd like to hear more about your services.");
    ContactSubmission::parse(&fields).unwrap()
}

#[test]
fn test_submit_success() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/submit")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "access_key": "test-access-key",
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "555-123-4567",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "message": "Email sent successfully!"}"#)
        .create();

    let client = RelayClient::with_endpoint(format!("{}/submit", server.url()));
    let response = client.submit("test-access-key", &submission()).unwrap();

    mock.assert();
    assert!(response.success);
    assert_eq!(response.message.as_deref(), Some("Email sent successfully!"));
    assert_eq!(client.metrics().http_requests_total(), 1);
    assert_eq!(client.metrics().http_errors_total(), 0);
}

#[test]
fn test_submit_success_flag_false_is_rejection() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/submit")
        .with_status(200)
        .with_body(r#"{"success": false, "message": "Spam detected"}"#)
        .create();

    let client = RelayClient::with_endpoint(format!("{}/submit", server.url()));
    let result = client.submit("test-access-key", &submission());

    mock.assert();
    match result {
        Err(RelayError::ApiError { status, message }) => {
            assert_eq!(status, 200);
            assert_eq!(message, "Spam detected");
        }
        other => panic!("Expected ApiError, got: {:?}", other),
    }
    assert_eq!(client.metrics().http_errors_total(), 1);
}

#[test]
fn test_submit_error_status_surfaces_relay_message() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/submit")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": false, "message": "Invalid access key"}"#)
        .create();

    let client = RelayClient::with_endpoint(format!("{}/submit", server.url()));
    let result = client.submit("wrong-key", &submission());

    mock.assert();
    match result {
        Err(RelayError::ApiError { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid access key");
        }
        other => panic!("Expected ApiError, got: {:?}", other),
    }
}

#[test]
fn test_submit_error_status_without_message() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/submit")
        .with_status(500)
        .with_body("Internal Server Error")
        .create();

    let client = RelayClient::with_endpoint(format!("{}/submit", server.url()));
    let result = client.submit("test-access-key", &submission());

    mock.assert();
    match result {
        Err(RelayError::ApiError { message, .. }) => {
            assert_eq!(message, "Form submission failed");
        }
        other => panic!("Expected ApiError, got: {:?}", other),
    }
}

#[test]
fn test_submit_non_json_success_body() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/submit")
        .with_status(200)
        .with_body("<html>ok</html>")
        .create();

    let client = RelayClient::with_endpoint(format!("{}/submit", server.url()));
    let result = client.submit("test-access-key", &submission());

    mock.assert();
    assert!(matches!(result, Err(RelayError::JsonError(_))));
}

#[test]
fn test_submit_connection_refused() {
    // Nothing listens on port 9 locally
    let client = RelayClient::with_endpoint("http://127.0.0.1:9/submit".to_string());
    let result = client.submit("test-access-key", &submission());

    assert!(matches!(
        result,
        Err(RelayError::HttpError(_)) | Err(RelayError::Timeout)
    ));
    assert_eq!(client.metrics().http_errors_total(), 1);
}

#[tokio::test]
async fn test_relay_submitter_success() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/submit")
        .match_body(Matcher::PartialJson(json!({ "access_key": "abc-123" })))
        .with_status(200)
        .with_body(r#"{"success": true, "message": "Email sent successfully!"}"#)
        .create_async()
        .await;

    let client = RelayClient::with_endpoint(format!("{}/submit", server.url()));
    let strategy = RelaySubmitter::new(client, Some("abc-123".to_string()));

    let receipt = strategy.submit(&submission()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        receipt.relay_message.as_deref(),
        Some("Email sent successfully!")
    );
}

#[tokio::test]
async fn test_relay_submitter_rejection() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/submit")
        .with_status(200)
        .with_body(r#"{"success": false}"#)
        .create_async()
        .await;

    let client = RelayClient::with_endpoint(format!("{}/submit", server.url()));
    let strategy = RelaySubmitter::new(client, Some("abc-123".to_string()));

    let result = strategy.submit(&submission()).await;

    mock.assert_async().await;
    assert_eq!(
        result,
        Err(SubmitError::Rejected("Form submission failed".to_string()))
    );
}

#[tokio::test]
async fn test_relay_submitter_transport_failure() {
    let client = RelayClient::with_endpoint("http://127.0.0.1:9/submit".to_string());
    let strategy = RelaySubmitter::new(client, Some("abc-123".to_string()));

    let result = strategy.submit(&submission()).await;
    assert!(matches!(result, Err(SubmitError::Transport(_))));
}

#[tokio::test]
async fn test_relay_submitter_unconfigured_never_calls_relay() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/submit")
        .expect(0)
        .create_async()
        .await;

    let client = RelayClient::with_endpoint(format!("{}/submit", server.url()));
    let strategy = RelaySubmitter::new(client, Some("YOUR_ACCESS_KEY_HERE".to_string()));

    let result = strategy.submit(&submission()).await;

    mock.assert_async().await;
    assert!(matches!(result, Err(SubmitError::NotConfigured(_))));
}
