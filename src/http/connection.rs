use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::handler::Router;
use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Serves exactly one request on a stream, then closes.
pub struct Connection<S> {
    stream: S,
    buffer: Vec<u8>,
    state: ConnectionState,
    router: Arc<Router>,
    max_request_size: usize,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

/// Outcome of reading from the client.
enum ReadOutcome {
    Request(Request),
    /// Unparseable, oversized or truncated request; answer it and close
    Rejected(Response),
    /// Client closed without sending anything
    Eof,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>, max_request_size: usize) -> Self {
        Self {
            stream,
            buffer: Vec::with_capacity(4096),
            state: ConnectionState::Reading,
            router,
            max_request_size,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.state = match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => match self.read_request().await? {
                    ReadOutcome::Request(req) => ConnectionState::Processing(req),
                    ReadOutcome::Rejected(response) => {
                        ConnectionState::Writing(ResponseWriter::new(&response))
                    }
                    ReadOutcome::Eof => ConnectionState::Closed,
                },

                ConnectionState::Processing(req) => {
                    let response = self.dispatch(req).await;
                    ConnectionState::Writing(ResponseWriter::new(&response))
                }

                ConnectionState::Writing(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    // No keep-alive: one request per connection
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            // Size limit applies before parsing, even to a request that arrived whole
            if self.buffer.len() > self.max_request_size {
                tracing::warn!(
                    size = self.buffer.len(),
                    limit = self.max_request_size,
                    "Rejecting oversized request"
                );
                return Ok(ReadOutcome::Rejected(Response::bad_request()));
            }

            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.drain(..consumed);
                    tracing::info!(
                        method = %request.method(),
                        path = request.path(),
                        "Request received"
                    );
                    return Ok(ReadOutcome::Request(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    tracing::warn!(error = %e, "Rejecting malformed request");
                    return Ok(ReadOutcome::Rejected(Response::bad_request()));
                }
            }

            // Read more data
            let mut temp = [0u8; 1024];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(ReadOutcome::Eof);
                }
                tracing::warn!(buffered = self.buffer.len(), "Client closed mid-request");
                return Ok(ReadOutcome::Rejected(Response::bad_request()));
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }

    /// Runs the router on the blocking pool; handlers do synchronous file I/O.
    async fn dispatch(&self, request: Request) -> Response {
        let router = Arc::clone(&self.router);

        match tokio::task::spawn_blocking(move || router.dispatch(&request)).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "Dispatch task failed");
                Response::internal_error()
            }
        }
    }
}
