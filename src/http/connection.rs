use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Local;
use tokio::io::BufReader;
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tracing::{debug, error, info};

use crate::access_log::{AccessEntry, AccessLogger};
use crate::config::ServerConfig;
use crate::files::{ResolveError, StaticFileResolver};
use crate::http::mime;
use crate::http::parser::{self, RequestError};
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Handles one accepted connection: parse, route, respond, log, close.
/// Exactly one response per connection; keep-alive is not supported.
pub struct Connection {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    peer: SocketAddr,
    resolver: StaticFileResolver,
    logger: AccessLogger,
    state: ConnectionState,
}

enum ConnectionState {
    Reading,
    Routing(Request),
    Writing {
        response: Response,
        accept_encoding: Option<String>,
        entry: AccessEntry,
    },
    Logging(AccessEntry),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr, config: Arc<ServerConfig>) -> Self {
        let (read_half, write_half) = stream.into_split();
        Self {
            reader: BufReader::new(read_half),
            writer: write_half,
            peer,
            resolver: StaticFileResolver::new(&config.document_root),
            logger: AccessLogger::new(&config.log_directory),
            state: ConnectionState::Reading,
        }
    }

    /// Drives the state machine to `Closed`. The terminal state is reached
    /// whether or not anything went wrong along the way.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => match parser::read_request(&mut self.reader).await {
                    Ok(Some(request)) => {
                        self.state = ConnectionState::Routing(request);
                    }
                    // Empty request: the connection just closes, nothing
                    // sent, nothing logged.
                    Ok(None) => {}
                    // Malformed request line: dropped silently.
                    Err(RequestError::Malformed(line)) => {
                        debug!("dropping malformed request from {}: {:?}", self.peer, line);
                    }
                    Err(RequestError::Io(e)) => {
                        debug!("read failed from {}: {}", self.peer, e);
                    }
                },

                ConnectionState::Routing(request) => {
                    let (response, accept_encoding) = match self.route(&request).await {
                        Ok(routed) => routed,
                        Err(e) => {
                            error!("error handling {} from {}: {}", request.path, self.peer, e);
                            (Response::internal_error(), None)
                        }
                    };

                    let entry = AccessEntry {
                        timestamp: Local::now(),
                        client_ip: self.peer.ip(),
                        method: request.method.as_str().to_string(),
                        target: request.raw_target.clone(),
                        status: response.status.as_u16(),
                    };

                    self.state = ConnectionState::Writing {
                        response,
                        accept_encoding,
                        entry,
                    };
                }

                ConnectionState::Writing {
                    response,
                    accept_encoding,
                    entry,
                } => {
                    // The entry is appended even when the write fails; one
                    // line per routed connection regardless of outcome.
                    if let Err(e) = self.write_response(&response, accept_encoding.as_deref()).await
                    {
                        error!("write to {} failed: {}", self.peer, e);
                    }
                    self.state = ConnectionState::Logging(entry);
                }

                ConnectionState::Logging(entry) => {
                    self.logger.append(&entry).await;
                }

                ConnectionState::Closed => break,
            }
        }

        Ok(())
    }

    /// Routes by method. The accepted-encoding value is forwarded to the
    /// writer only for a resolved static file; the canned 404/405/500 and
    /// POST acknowledgment bodies are always sent uncompressed.
    async fn route(&self, request: &Request) -> anyhow::Result<(Response, Option<String>)> {
        match &request.method {
            Method::GET => match self.resolver.resolve(&request.path).await {
                Ok(file) => {
                    let content_type = mime::content_type_for(&file.path);
                    let accept_encoding = request.accept_encoding().map(str::to_string);
                    Ok((Response::ok(content_type, file.contents), accept_encoding))
                }
                Err(ResolveError::NotFound) => Ok((Response::not_found(), None)),
                Err(e) => Err(e.into()),
            },

            Method::POST => {
                // Bodies go to the console sink only; nothing is persisted.
                info!(
                    "POST {} from {}: {}",
                    request.raw_target,
                    self.peer,
                    String::from_utf8_lossy(&request.body)
                );
                Ok((Response::post_received(), None))
            }

            Method::Other(_) => Ok((Response::method_not_allowed(), None)),
        }
    }

    async fn write_response(
        &mut self,
        response: &Response,
        accept_encoding: Option<&str>,
    ) -> anyhow::Result<()> {
        let mut writer = ResponseWriter::new(response, accept_encoding)?;
        writer.write_to_stream(&mut self.writer).await
    }
}
