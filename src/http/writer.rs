use anyhow::Context;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::mime::ContentTypeTable;
use crate::http::resolver::ResolvedPath;
use crate::http::response::{NOT_FOUND_MESSAGE, ResponseHead};

/// Writes framed responses for resolved paths.
#[derive(Debug, Clone, Default)]
pub struct ResponseWriter {
    content_types: ContentTypeTable,
}

impl ResponseWriter {
    pub fn new(content_types: ContentTypeTable) -> Self {
        Self { content_types }
    }

    /// Writes the response for `resolved` to `sink` and returns the number of
    /// body bytes sent.
    ///
    /// A file that disappears or becomes unreadable after resolution fails
    /// the write; nothing is retried.
    pub async fn write<W>(&self, resolved: &ResolvedPath, sink: &mut W) -> anyhow::Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let sent = match resolved {
            ResolvedPath::Exists(path) => {
                let file = File::open(path)
                    .await
                    .with_context(|| format!("failed to open {}", path.display()))?;
                let len = file
                    .metadata()
                    .await
                    .with_context(|| format!("failed to stat {}", path.display()))?
                    .len();

                let head = ResponseHead::new(self.content_types.for_path(path), len);
                sink.write_all(&head.to_bytes()).await?;

                // Never send more than Content-Length promised.
                let mut body = file.take(len);
                let copied = tokio::io::copy(&mut body, sink).await?;
                if copied < len {
                    anyhow::bail!(
                        "{} shrank while streaming: sent {} of {} bytes",
                        path.display(),
                        copied,
                        len
                    );
                }
                copied
            }
            ResolvedPath::Missing(_) => {
                write_message(sink).await?;
                NOT_FOUND_MESSAGE.len() as u64
            }
        };

        sink.flush().await?;
        Ok(sent)
    }
}

/// Writes the plain-text "not found" response.
pub async fn write_message<W>(sink: &mut W) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    sink.write_all(&ResponseHead::not_found().to_bytes()).await?;
    sink.write_all(NOT_FOUND_MESSAGE).await?;
    Ok(())
}
