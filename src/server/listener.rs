use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::static_files::{Dispatcher, DocumentRoot};

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let root = DocumentRoot::new(&cfg.document_root)?;
    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen_addr))?;

    info!(
        addr = %cfg.listen_addr,
        root = %root.path().display(),
        "Listening"
    );

    serve(listener, Arc::new(Dispatcher::new(root)), cfg.max_request_bytes).await
}

/// Accepts connections forever, one task per connection.
pub async fn serve(
    listener: TcpListener,
    dispatcher: Arc<Dispatcher>,
    max_request_bytes: usize,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let dispatcher = Arc::clone(&dispatcher);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, dispatcher, max_request_bytes);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
