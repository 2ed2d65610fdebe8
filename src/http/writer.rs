use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Bodies at or below this size are never compressed.
pub const COMPRESSION_THRESHOLD: usize = 1024;

/// The single supported content coding.
pub const ENCODING_TOKEN: &str = "gzip";

/// Compression applies only when all hold: the body exceeds the threshold,
/// the client advertised accepted encodings at all, the content type is
/// text-like, and the advertised value names gzip (substring match, not
/// full q-value negotiation).
pub fn should_compress(body_len: usize, content_type: &str, accept_encoding: Option<&str>) -> bool {
    let Some(accepted) = accept_encoding else {
        return false;
    };

    body_len > COMPRESSION_THRESHOLD
        && (content_type.contains("text") || content_type.contains("javascript"))
        && accepted.to_ascii_lowercase().contains(ENCODING_TOKEN)
}

pub fn gzip(body: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(body)?;
    encoder.finish()
}

/// Serializes the full response: status line, headers in stable order
/// (Content-Type, Content-Length, optional Content-Encoding, Connection),
/// blank line, body. Content-Length always reflects the bytes actually
/// written, compressed or not.
fn serialize_response(resp: &Response, accept_encoding: Option<&str>) -> anyhow::Result<Vec<u8>> {
    let body = if should_compress(resp.body.len(), &resp.content_type, accept_encoding) {
        Some(gzip(&resp.body)?)
    } else {
        None
    };
    let encoded = body.as_deref();
    let wire_body = encoded.unwrap_or(&resp.body);

    let mut buf = Vec::with_capacity(wire_body.len() + 128);

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    let mut header = |k: &str, v: &str| {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    };

    header("Content-Type", &resp.content_type);
    header("Content-Length", &wire_body.len().to_string());
    if encoded.is_some() {
        header("Content-Encoding", ENCODING_TOKEN);
    }
    header("Connection", "close");

    buf.extend_from_slice(b"\r\n");
    buf.extend_from_slice(wire_body);

    Ok(buf)
}

/// Serializes one response and writes it fully to the stream. One response
/// per connection; the caller closes afterwards.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response, accept_encoding: Option<&str>) -> anyhow::Result<Self> {
        Ok(Self {
            buffer: serialize_response(response, accept_encoding)?,
            written: 0,
        })
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }
        stream.flush().await?;

        Ok(())
    }
}
