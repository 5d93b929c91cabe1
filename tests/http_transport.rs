//! HTTP Transport Integration Tests
//!
//! Runs the reqwest transport and the full client against a one-shot local
//! TCP server. No external network access.

use std::io::Write;

use cyphergoat::adapters::HttpTransport;
use cyphergoat::config::{Config, CredentialsSection};
use cyphergoat::ports::{AuthPolicy, BearerToken, Transport};
use cyphergoat::{ApiError, CypherGoatClient, QuoteRequest, SetupError};
use rust_decimal_macros::dec;
use tempfile::NamedTempFile;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

// ============================================================================
// Test Server
// ============================================================================

/// Serve a single canned response; the request head is sent back on the channel
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        let _ = tx.send(String::from_utf8_lossy(&head).to_lowercase());
    });

    (format!("http://{}", addr), rx)
}

// ============================================================================
// Transport
// ============================================================================

#[tokio::test]
async fn test_transport_sends_bearer_token() {
    let (base, head) = serve_once("200 OK", r#"{"rates": []}"#).await;
    let transport = HttpTransport::new(BearerToken::new("secret-token")).unwrap();

    let body = transport.get(&format!("{}/estimate?coin1=btc", base)).await.unwrap();
    assert_eq!(body, br#"{"rates": []}"#.to_vec());

    let head = head.await.unwrap();
    assert!(head.starts_with("get /estimate?coin1=btc http/1.1"));
    assert!(head.contains("authorization: bearer secret-token"));
}

#[tokio::test]
async fn test_anonymous_transport_omits_authorization() {
    let (base, head) = serve_once("200 OK", "{}").await;
    let transport = HttpTransport::new(BearerToken::anonymous()).unwrap();

    transport.get(&format!("{}/transaction?id=1", base)).await.unwrap();

    let head = head.await.unwrap();
    assert!(!head.contains("authorization:"));
}

#[tokio::test]
async fn test_non_success_status_body_passed_through() {
    let (base, _head) = serve_once("500 Internal Server Error", r#"{"error":"exchange offline"}"#).await;
    let transport = HttpTransport::new(BearerToken::new("k")).unwrap();

    let body = transport.get(&format!("{}/swap", base)).await.unwrap();
    assert_eq!(body, br#"{"error":"exchange offline"}"#.to_vec());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = HttpTransport::new(BearerToken::new("k")).unwrap();
    let url = format!("http://{}/estimate", addr);
    let err = transport.get(&url).await.unwrap_err();
    assert_eq!(err.url, url);
}

// ============================================================================
// Client over HTTP
// ============================================================================

#[tokio::test]
async fn test_client_surfaces_remote_error_from_404() {
    let (base, _head) = serve_once("404 Not Found", r#"{"error":"no route"}"#).await;
    let client = CypherGoatClient::with_base_url(&base, BearerToken::new("k")).unwrap();

    let request = QuoteRequest::new("btc", "doge", dec!(1), "btc", "doge");
    let err = client.fetch_quotes(&request).await.unwrap_err();
    assert!(matches!(err, ApiError::Remote(ref msg) if msg == "no route"));
}

#[tokio::test]
async fn test_client_from_config_uses_env_file_token() {
    let (base, head) = serve_once("200 OK", r#"{"transaction": {"Id": "abc", "Status": "pending"}}"#).await;

    let mut env = NamedTempFile::new().unwrap();
    env.write_all(b"API_KEY=file-token\n").unwrap();

    let mut config = Config::default();
    config.api.base_url = base;
    config.credentials = CredentialsSection {
        env_file: Some(env.path().to_path_buf()),
        ..CredentialsSection::default()
    };

    let client = CypherGoatClient::from_config(&config).unwrap();
    let tx = client.get_transaction("abc").await.unwrap();
    assert_eq!(tx.status.as_deref(), Some("pending"));

    let head = head.await.unwrap();
    assert!(head.contains("authorization: bearer file-token"));
}

#[test]
fn test_from_config_required_token_missing_fails() {
    let mut config = Config::default();
    config.credentials = CredentialsSection {
        env_file: Some("/nonexistent/cyphergoat/.env".into()),
        ..CredentialsSection::default()
    };

    let result = CypherGoatClient::from_config(&config);
    assert!(matches!(result, Err(SetupError::Credentials(_))));
}

#[test]
fn test_from_config_fail_open_proceeds() {
    let mut config = Config::default();
    config.credentials = CredentialsSection {
        env_file: Some("/nonexistent/cyphergoat/.env".into()),
        policy: AuthPolicy::FailOpen,
        ..CredentialsSection::default()
    };

    assert!(CypherGoatClient::from_config(&config).is_ok());
}
