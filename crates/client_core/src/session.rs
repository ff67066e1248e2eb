use std::collections::HashSet;

use shared::{
    domain::{Coord, Outcome, Player},
    protocol::{ActionUpdate, ErrorMessage, InitMessage, ServerMessage},
};
use tracing::{debug, info, warn};

use crate::{
    board::BoardModel,
    render::{outcome_banner, render_board},
    ClientEvent,
};

/// Client-side view of one game, owned by the connection that feeds it.
#[derive(Debug, Clone)]
pub struct GameView {
    legal_moves: HashSet<Coord>,
    current_player: Player,
    locked: bool,
    board: BoardModel,
    outcome_banner: Option<&'static str>,
    last_win_chance: Option<f64>,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            legal_moves: HashSet::new(),
            current_player: Player::Blue,
            locked: false,
            board: BoardModel::new(),
            outcome_banner: None,
            last_win_chance: None,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn legal_moves(&self) -> &HashSet<Coord> {
        &self.legal_moves
    }

    pub fn is_legal(&self, coord: Coord) -> bool {
        self.legal_moves.contains(&coord)
    }

    /// Whose turn it is, as last reported by the server.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn board(&self) -> &BoardModel {
        &self.board
    }

    pub fn result(&self) -> Option<Outcome> {
        self.board.result()
    }

    pub fn is_terminal(&self) -> bool {
        self.board.is_terminal()
    }

    pub fn outcome_banner(&self) -> Option<&'static str> {
        self.outcome_banner
    }

    pub fn last_win_chance(&self) -> Option<f64> {
        self.last_win_chance
    }

    /// Applies one decoded server frame and returns what the front-end should
    /// be told about it.
    pub fn handle_message(&mut self, message: ServerMessage) -> Vec<ClientEvent> {
        match message {
            ServerMessage::Init(init) => self.apply_init(init),
            ServerMessage::Action(update) => self.apply_action(update),
            ServerMessage::Error(error) => self.surface_error(error),
        }
    }

    fn apply_init(&mut self, init: InitMessage) -> Vec<ClientEvent> {
        self.legal_moves = init.valid_moves.into_iter().collect();
        if let Some(player) = init.player {
            self.current_player = player;
        }
        info!(
            legal_moves = self.legal_moves.len(),
            current_player = %self.current_player,
            "game initialized"
        );
        let mut legal_moves: Vec<Coord> = self.legal_moves.iter().copied().collect();
        legal_moves.sort_unstable();
        vec![ClientEvent::Ready {
            current_player: self.current_player,
            legal_moves,
            view: render_board(&self.board),
        }]
    }

    fn apply_action(&mut self, update: ActionUpdate) -> Vec<ClientEvent> {
        if self.is_terminal() {
            debug!(
                board = update.coord.board(),
                cell = update.coord.cell(),
                "ignoring action frame after game end"
            );
            return Vec::new();
        }

        self.legal_moves = update.valid_moves.iter().copied().collect();
        self.locked = update.locked;
        self.current_player = update.player.opponent();
        if update.win_chance.is_some() {
            self.last_win_chance = update.win_chance;
        }
        self.board.apply_update(&update);

        let mut events = vec![ClientEvent::BoardUpdated {
            view: render_board(&self.board),
            source: update.source,
            win_chance: update.win_chance,
        }];

        if let Some(outcome) = update.result {
            let banner = outcome_banner(outcome);
            self.outcome_banner = Some(banner);
            info!(result = outcome.code(), banner, "game finished");
            events.push(ClientEvent::GameOver { outcome, banner });
        }
        events
    }

    fn surface_error(&self, error: ErrorMessage) -> Vec<ClientEvent> {
        let message = error
            .message
            .unwrap_or_else(|| "no description provided".to_string());
        warn!(%message, "server reported an error");
        vec![ClientEvent::Alert(format!("Unknown error: {message}"))]
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
