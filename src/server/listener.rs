use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::time::sleep;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::mime::ContentTypeTable;
use crate::http::resolver::PathResolver;
use crate::http::writer::ResponseWriter;

/// Pause after an accept error that is not tied to a single connection,
/// e.g. running out of file descriptors.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen_addr))?;
    info!(
        "Listening on {}, serving {}",
        cfg.listen_addr,
        cfg.document_root.display()
    );

    serve(listener, cfg).await
}

/// Accepts connections forever, serving each one on its own task.
///
/// Errors from a single connection are logged and never stop the loop.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    let resolver = Arc::new(PathResolver::new(cfg.document_root.clone()));
    let writer = Arc::new(ResponseWriter::new(ContentTypeTable::with_overrides(
        &cfg.content_types,
    )));

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) if is_connection_error(&e) => {
                tracing::debug!(error = %e, "Aborted connection dropped");
                continue;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to accept connection");
                sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let mut conn = Connection::new(socket, resolver.clone(), writer.clone());
        tokio::spawn(async move {
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}

fn is_connection_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset
    )
}
