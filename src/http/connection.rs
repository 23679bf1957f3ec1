use std::sync::Arc;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::http::parser::{ParseError, line_text, split_request_line};
use crate::http::resolver::{PathResolver, ResolveError, ResolvedPath};
use crate::http::writer::{ResponseWriter, write_message};

const READ_CHUNK: usize = 4096;

/// Most request bytes discarded after the response before giving up.
const DRAIN_LIMIT: usize = 1024 * 1024;

/// Longest wait for the peer to finish sending after the response.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

/// Serves exactly one request on a stream, then closes it.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    resolver: Arc<PathResolver>,
    writer: Arc<ResponseWriter>,
}

pub enum ConnectionState {
    Reading,
    Resolving(String),
    Writing(ResolvedPath),
    Rejecting(ResolveError),
    Closed,
}

/// What arrived on the stream before the first line terminator.
#[derive(Debug, PartialEq, Eq)]
pub enum Incoming {
    /// The request line, terminator stripped.
    Line(String),
    Malformed(ParseError),
    /// The peer closed without sending anything.
    Eof,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, resolver: Arc<PathResolver>, writer: Arc<ResponseWriter>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(READ_CHUNK),
            state: ConnectionState::Reading,
            resolver,
            writer,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request_line().await? {
                        Incoming::Line(line) => ConnectionState::Resolving(line),
                        Incoming::Malformed(err) => ConnectionState::Rejecting(err.into()),
                        Incoming::Eof => ConnectionState::Closed,
                    };
                }

                ConnectionState::Resolving(line) => {
                    self.state = match self.resolver.resolve(line).await {
                        Ok(resolved) => {
                            tracing::debug!(
                                request = %line,
                                path = %resolved.path().display(),
                                exists = resolved.exists(),
                                "Resolved request"
                            );
                            ConnectionState::Writing(resolved)
                        }
                        Err(err) => ConnectionState::Rejecting(err),
                    };
                }

                ConnectionState::Writing(resolved) => {
                    let sent = self.writer.write(resolved, &mut self.stream).await?;
                    tracing::info!(
                        path = %resolved.path().display(),
                        found = resolved.exists(),
                        bytes = sent,
                        "Response sent"
                    );
                    self.close().await;
                }

                // Malformed lines get the same answer as a missing file.
                ConnectionState::Rejecting(err) => {
                    tracing::warn!(error = %err, "Rejected request");
                    write_message(&mut self.stream).await?;
                    self.stream.flush().await?;
                    self.close().await;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the first `\n` and returns that line. Bytes after it are
    /// never interpreted.
    pub async fn read_request_line(&mut self) -> anyhow::Result<Incoming> {
        loop {
            match split_request_line(&self.buffer) {
                Ok((line, _consumed)) => return Ok(Incoming::Line(line)),
                Err(ParseError::Incomplete) => {}
                Err(err) => return Ok(Incoming::Malformed(err)),
            }

            self.buffer.reserve(READ_CHUNK);
            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(Incoming::Eof);
                }
                // Unterminated final line; use what we have.
                return Ok(Incoming::Line(line_text(&self.buffer)));
            }
        }
    }

    /// Half-closes the stream, then discards whatever the peer still sends.
    ///
    /// Dropping a TCP socket with unread input resets the connection, and the
    /// peer may lose response bytes it has not read yet.
    async fn close(&mut self) {
        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(error = %e, "Shutdown after response failed");
        }

        let discarded = self.drain().await;
        if discarded > 0 {
            tracing::trace!(bytes = discarded, "Discarded unread request bytes");
        }
        self.state = ConnectionState::Closed;
    }

    async fn drain(&mut self) -> usize {
        let mut discarded = 0;
        let stream = &mut self.stream;
        let buffer = &mut self.buffer;

        let result = timeout(DRAIN_TIMEOUT, async {
            while discarded < DRAIN_LIMIT {
                buffer.clear();
                buffer.reserve(READ_CHUNK);
                match stream.read_buf(buffer).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => discarded += n,
                }
            }
        })
        .await;

        if result.is_err() {
            tracing::debug!(bytes = discarded, "Peer still sending after drain timeout");
        }
        discarded
    }
}
