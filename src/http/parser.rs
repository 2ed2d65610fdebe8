use std::collections::HashMap;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::http::request::{Headers, Method, Request};

#[derive(Debug, Error)]
pub enum RequestError {
    /// Request line with fewer than two tokens. The connection is dropped
    /// without a response.
    #[error("malformed request line: {0:?}")]
    Malformed(String),
    #[error("i/o while reading request")]
    Io(#[from] std::io::Error),
}

/// Reads one complete request from the stream.
///
/// Returns `Ok(None)` for an empty request (the client connected and sent
/// nothing, or closed immediately): the connection just closes, which is not
/// an error. Both CRLF and bare LF line endings are tolerated.
pub async fn read_request<R>(reader: &mut R) -> Result<Option<Request>, RequestError>
where
    R: AsyncBufRead + Unpin,
{
    let request_line = match read_trimmed_line(reader).await? {
        Some(line) if !line.is_empty() => line,
        _ => return Ok(None),
    };

    let (method, raw_target, version) = parse_request_line(&request_line)?;
    let (path, query_str) = split_target(&raw_target);
    let query = query_str.map(parse_query).unwrap_or_default();

    let mut headers = Headers::new();
    loop {
        match read_trimmed_line(reader).await? {
            Some(line) if !line.is_empty() => {
                if let Some((key, value)) = parse_header_line(&line) {
                    headers.insert(key, value);
                }
                // Lines with no colon are silently skipped.
            }
            _ => break,
        }
    }

    let body = if method == Method::POST {
        let declared = headers
            .get("Content-Length")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(0);
        read_body(reader, declared).await?
    } else {
        Vec::new()
    };

    Ok(Some(Request {
        method,
        path: path.to_string(),
        raw_target,
        version,
        headers,
        query,
        body,
    }))
}

/// Splits a request line into method, target and version. At least method
/// and target are required; the version token may be absent.
pub fn parse_request_line(line: &str) -> Result<(Method, String, String), RequestError> {
    let mut parts = line.split_whitespace();

    let method = parts
        .next()
        .ok_or_else(|| RequestError::Malformed(line.to_string()))?;
    let target = parts
        .next()
        .ok_or_else(|| RequestError::Malformed(line.to_string()))?;
    let version = parts.next().unwrap_or("");

    Ok((
        Method::from_str(method),
        target.to_string(),
        version.to_string(),
    ))
}

/// Splits a request target on the first `?`. The path is used verbatim, no
/// normalization or percent-decoding.
pub fn split_target(target: &str) -> (&str, Option<&str>) {
    match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    }
}

/// Parses a query string on `&` and the first `=` of each pair. A pair with
/// no `=` becomes a key with an empty value.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

/// Splits a header line on the first `:` and trims both sides. Returns
/// `None` for lines with no colon or with the colon in position 0; those
/// are skipped without affecting other headers.
pub fn parse_header_line(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(':')?;
    if key.is_empty() {
        return None;
    }
    Some((key.trim().to_string(), value.trim().to_string()))
}

/// Reads exactly `declared` body bytes. A stream that ends early yields the
/// bytes that did arrive (truncated body, non-fatal).
async fn read_body<R>(reader: &mut R, declared: usize) -> Result<Vec<u8>, RequestError>
where
    R: AsyncBufRead + Unpin,
{
    let mut body = vec![0u8; declared];
    let mut filled = 0;

    while filled < declared {
        let n = reader.read(&mut body[filled..]).await?;
        if n == 0 {
            body.truncate(filled);
            break;
        }
        filled += n;
    }

    Ok(body)
}

/// Reads one line and strips the trailing LF/CRLF. `None` means EOF with
/// nothing read.
async fn read_trimmed_line<R>(reader: &mut R) -> Result<Option<String>, RequestError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let n = reader.read_line(&mut line).await?;
    if n == 0 {
        return Ok(None);
    }

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
