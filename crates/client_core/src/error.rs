use shared::error::ProtocolError;
use thiserror::Error;
use tokio_tungstenite::tungstenite;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("server_url must start with ws://, wss://, http:// or https://: {0}")]
    UnsupportedScheme(String),
    #[error("invalid server url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to connect websocket {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: tungstenite::Error,
    },
    #[error("websocket send failed: {0}")]
    Send(#[source] tungstenite::Error),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
