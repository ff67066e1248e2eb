//! Outbound half of the game connection.

use async_trait::async_trait;
use futures::{Sink, SinkExt};
use shared::protocol::{encode_move, MoveRequest};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{self, Message},
    MaybeTlsStream, WebSocketStream,
};
use tracing::debug;
use url::Url;

use crate::error::ClientError;

pub type GameSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Where accepted move attempts are delivered. Delivery is fire-and-forget:
/// the next action frame from the server is the only acknowledgement.
#[async_trait]
pub trait MoveTransport: Send {
    async fn send_move(&mut self, request: MoveRequest) -> Result<(), ClientError>;
}

pub struct WsMoveSink<S> {
    sink: S,
}

impl<S> WsMoveSink<S>
where
    S: Sink<Message, Error = tungstenite::Error> + Unpin + Send,
{
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub async fn close(&mut self) -> Result<(), ClientError> {
        self.sink.close().await.map_err(ClientError::Send)
    }
}

#[async_trait]
impl<S> MoveTransport for WsMoveSink<S>
where
    S: Sink<Message, Error = tungstenite::Error> + Unpin + Send,
{
    async fn send_move(&mut self, request: MoveRequest) -> Result<(), ClientError> {
        let text = encode_move(&request)?;
        debug!(board = request.board, cell = request.pos, "sending move");
        self.sink
            .send(Message::Text(text))
            .await
            .map_err(ClientError::Send)
    }
}

/// Normalizes a configured server address into a websocket url.
///
/// `http(s)://` addresses are rewritten to `ws(s)://`; a bare host without a
/// path gets the default `/ws` endpoint.
pub fn websocket_url(raw: &str) -> Result<Url, ClientError> {
    let raw = raw.trim();
    let rewritten = if let Some(rest) = raw.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = raw.strip_prefix("http://") {
        format!("ws://{rest}")
    } else if raw.starts_with("ws://") || raw.starts_with("wss://") {
        raw.to_string()
    } else {
        return Err(ClientError::UnsupportedScheme(raw.to_string()));
    };

    let mut url = Url::parse(&rewritten).map_err(|source| ClientError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;
    if url.path().is_empty() || url.path() == "/" {
        url.set_path("/ws");
    }
    Ok(url)
}

pub async fn connect(url: &Url) -> Result<GameSocket, ClientError> {
    let (socket, _) = connect_async(url.as_str())
        .await
        .map_err(|source| ClientError::Connect {
            url: url.to_string(),
            source,
        })?;
    Ok(socket)
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
