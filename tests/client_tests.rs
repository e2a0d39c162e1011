//! Integration tests for the ResendClient using mockito for HTTP mocking.

use folio_contact::{Config, EmailApiError, OutboundEmail, ResendClient};
use mockito::{Matcher, Server};
use serde_json::json;
use std::io::Read;
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

fn sample_email() -> OutboundEmail {
    OutboundEmail {
        from: "Folio <onboarding@resend.dev>".to_string(),
        to: vec!["owner@example.com".to_string()],
        reply_to: "ada@example.com".to_string(),
        subject: "💼 New Inquiry: Hi".to_string(),
        html: "<p>Hello</p>".to_string(),
        text: "Hello".to_string(),
    }
}

#[test]
fn test_send_email() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/emails")
        .match_header("authorization", "Bearer re_test_key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "from": "Folio <onboarding@resend.dev>",
            "to": ["owner@example.com"],
            "reply_to": "ada@example.com",
            "subject": "💼 New Inquiry: Hi",
            "html": "<p>Hello</p>",
            "text": "Hello"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794"}"#)
        .create();

    let client = ResendClient::with_base_url(server.url(), "re_test_key".to_string());
    let data = client.send_email(&sample_email()).unwrap();

    mock.assert();
    assert_eq!(data["id"], "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794");
    assert_eq!(client.metrics().http_requests_total(), 1);
    assert_eq!(client.metrics().http_errors_total(), 0);
}

#[test]
fn test_send_email_unauthorized() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/emails")
        .with_status(401)
        .with_body(r#"{"name": "missing_api_key"}"#)
        .create();

    let client = ResendClient::with_base_url(server.url(), "bad".to_string());
    let result = client.send_email(&sample_email());

    mock.assert();
    assert!(matches!(result, Err(EmailApiError::Unauthorized)));
    assert_eq!(client.metrics().http_errors_total(), 1);
}

#[test]
fn test_send_email_validation_error() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/emails")
        .with_status(422)
        .with_body(r#"{"name": "validation_error", "message": "Invalid `to` field."}"#)
        .create();

    let client = ResendClient::with_base_url(server.url(), "re_test_key".to_string());
    let result = client.send_email(&sample_email());

    mock.assert();
    match result {
        Err(EmailApiError::InvalidRequest(message)) => {
            assert!(message.contains("Invalid `to` field."))
        }
        other => panic!("Expected InvalidRequest, got: {:?}", other),
    }
}

#[test]
fn test_send_email_rate_limited() {
    let mut server = Server::new();

    let mock = server.mock("POST", "/emails").with_status(429).create();

    let client = ResendClient::with_base_url(server.url(), "re_test_key".to_string());
    let result = client.send_email(&sample_email());

    mock.assert();
    assert!(matches!(result, Err(EmailApiError::RateLimitExceeded)));
}

#[test]
fn test_send_email_server_error() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/emails")
        .with_status(500)
        .with_body("upstream exploded")
        .create();

    let client = ResendClient::with_base_url(server.url(), "re_test_key".to_string());
    let result = client.send_email(&sample_email());

    mock.assert();
    match result {
        Err(EmailApiError::ApiError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("Expected ApiError, got: {:?}", other),
    }
}

#[test]
fn test_send_email_malformed_response() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/emails")
        .with_status(200)
        .with_body("not json")
        .create();

    let client = ResendClient::with_base_url(server.url(), "re_test_key".to_string());
    let result = client.send_email(&sample_email());

    mock.assert();
    assert!(matches!(result, Err(EmailApiError::JsonError(_))));
}

#[test]
fn test_send_email_timeout() {
    // Accepts the connection but never answers
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let holder = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_secs(3));
        drop(stream);
    });

    let config = Config {
        resend_api_url: format!("http://{}", addr),
        resend_api_key: "re_test_key".to_string(),
        request_timeout: 1,
        ..Config::default()
    };
    let client = ResendClient::new(&config);
    let result = client.send_email(&sample_email());

    assert!(matches!(result, Err(EmailApiError::Timeout)), "{:?}", result);
    holder.join().unwrap();
}

#[test]
fn test_send_email_connection_closed_is_not_a_timeout() {
    // Reads the request, then hangs up without a response
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let closer = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 1024];
        let _ = stream.read(&mut buf);
        drop(stream);
    });

    let client = ResendClient::with_base_url(format!("http://{}", addr), "re_test_key".to_string());
    let result = client.send_email(&sample_email());

    match result {
        Err(EmailApiError::HttpError(_)) => {}
        other => panic!("Expected HttpError, got: {:?}", other),
    }
    closer.join().unwrap();
}
