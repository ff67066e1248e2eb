use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed server frame: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid player code {0}, expected -1 or 1")]
    InvalidPlayer(i64),
    #[error("invalid outcome code {0}, expected -1, 0 or 1")]
    InvalidOutcome(i64),
    #[error("coordinate ({board}, {cell}) is outside the 9x9 board")]
    CoordOutOfRange { board: i64, cell: i64 },
}
