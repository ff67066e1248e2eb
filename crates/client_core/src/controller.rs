//! Local gate between cell activations and the server.
//!
//! The server enforces legality on its own; this only avoids sending moves
//! that the current [`GameView`] already knows to be unplayable. Rejections
//! are logged and otherwise invisible.

use shared::{domain::Coord, protocol::MoveRequest};
use tracing::info;

use crate::{error::ClientError, session::GameView, transport::MoveTransport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NotLegal,
    Locked,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDecision {
    Sent(MoveRequest),
    Rejected(RejectReason),
}

pub fn check_move(view: &GameView, coord: Coord) -> Result<MoveRequest, RejectReason> {
    if !view.is_legal(coord) {
        return Err(RejectReason::NotLegal);
    }
    if view.locked() {
        return Err(RejectReason::Locked);
    }
    if view.is_terminal() {
        return Err(RejectReason::GameOver);
    }
    Ok(MoveRequest::new(coord, view.locked()))
}

pub async fn activate_cell<T>(
    view: &GameView,
    coord: Coord,
    transport: &mut T,
) -> Result<MoveDecision, ClientError>
where
    T: MoveTransport + ?Sized,
{
    match check_move(view, coord) {
        Ok(request) => {
            transport.send_move(request).await?;
            Ok(MoveDecision::Sent(request))
        }
        Err(reason) => {
            match reason {
                RejectReason::NotLegal => info!(
                    board = coord.board(),
                    cell = coord.cell(),
                    "tried to move at an invalid spot"
                ),
                RejectReason::Locked => info!(
                    board = coord.board(),
                    cell = coord.cell(),
                    "attempted to move while the opponent is moving"
                ),
                RejectReason::GameOver => info!(
                    board = coord.board(),
                    cell = coord.cell(),
                    "attempted to move after the game ended"
                ),
            }
            Ok(MoveDecision::Rejected(reason))
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
