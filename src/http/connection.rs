use std::sync::Arc;

use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::writer::ResponseWriter;
use crate::static_files::Dispatcher;

/// One client connection: a single request, a single response, then close.
pub struct Connection<S> {
    stream: S,
    dispatcher: Arc<Dispatcher>,
    max_request_bytes: usize,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Bytes),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, dispatcher: Arc<Dispatcher>, max_request_bytes: usize) -> Self {
        Self {
            stream,
            dispatcher,
            max_request_bytes,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(raw) => ConnectionState::Processing(raw),
                        // Client closed without sending anything
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(raw) => {
                    let response = self.dispatcher.dispatch(raw).await;
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.stream.shutdown().await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Performs a single read of at most `max_request_bytes`. Whatever
    /// arrived is dispatched as is; anything past the bound is never read.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Bytes>> {
        let mut buffer = BytesMut::with_capacity(self.max_request_bytes);

        (&mut self.stream)
            .take(self.max_request_bytes as u64)
            .read_buf(&mut buffer)
            .await?;

        if buffer.is_empty() {
            return Ok(None);
        }

        tracing::debug!(bytes = buffer.len(), "Received request");
        Ok(Some(buffer.freeze()))
    }
}
