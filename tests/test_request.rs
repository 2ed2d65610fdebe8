use std::collections::HashMap;

use statico::http::request::{Headers, Method, Request};

fn request_with_headers(headers: Headers) -> Request {
    Request {
        method: Method::GET,
        path: "/".to_string(),
        raw_target: "/".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
        query: HashMap::new(),
        body: vec![],
    }
}

#[test]
fn test_headers_preserve_insertion_order() {
    let mut headers = Headers::new();
    headers.insert("Host", "example.com");
    headers.insert("Accept", "*/*");
    headers.insert("User-Agent", "test-client");

    let keys: Vec<&str> = headers.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["Host", "Accept", "User-Agent"]);
}

#[test]
fn test_headers_first_occurrence_wins() {
    let mut headers = Headers::new();
    headers.insert("Accept-Encoding", "gzip");
    headers.insert("accept-encoding", "br");

    assert_eq!(headers.get("Accept-Encoding"), Some("gzip"));
    assert_eq!(headers.len(), 1);
}

#[test]
fn test_headers_case_insensitive_lookup() {
    let mut headers = Headers::new();
    headers.insert("Content-Type", "application/json");

    let req = request_with_headers(headers);
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.header("CONTENT-TYPE"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_content_length_parsing() {
    let mut headers = Headers::new();
    headers.insert("Content-Length", "42");

    let req = request_with_headers(headers);
    assert_eq!(req.content_length(), 42);
}

#[test]
fn test_request_content_length_missing_or_invalid_is_zero() {
    let req = request_with_headers(Headers::new());
    assert_eq!(req.content_length(), 0);

    let mut headers = Headers::new();
    headers.insert("Content-Length", "not-a-number");
    let req = request_with_headers(headers);
    assert_eq!(req.content_length(), 0);
}

#[test]
fn test_accept_encoding_accessor() {
    let mut headers = Headers::new();
    headers.insert("Accept-Encoding", "gzip, deflate");

    let req = request_with_headers(headers);
    assert_eq!(req.accept_encoding(), Some("gzip, deflate"));

    let req = request_with_headers(Headers::new());
    assert_eq!(req.accept_encoding(), None);
}

#[test]
fn test_method_from_str() {
    assert_eq!(Method::from_str("GET"), Method::GET);
    assert_eq!(Method::from_str("POST"), Method::POST);
    assert_eq!(Method::from_str("PUT"), Method::Other("PUT".to_string()));
    // Case-sensitive: lowercase is not a known method
    assert_eq!(Method::from_str("get"), Method::Other("get".to_string()));
}

#[test]
fn test_method_as_str_round_trips_for_log() {
    assert_eq!(Method::GET.as_str(), "GET");
    assert_eq!(Method::POST.as_str(), "POST");
    assert_eq!(Method::Other("DELETE".to_string()).as_str(), "DELETE");
}
