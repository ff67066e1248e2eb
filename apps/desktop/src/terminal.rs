//! Text drawing of rendered boards and client notifications.

use client_core::{BoardView, CellOwner, CellView, ClientEvent, ConnectionState, SubBoardStatus};
use colored::Colorize;
use shared::{
    domain::{Outcome, Player},
    protocol::MoveSource,
};

const ROW_DIVIDER: &str = "-------+-------+-------";

fn cell_symbol(cell: &CellView) -> char {
    match cell.owner {
        Some(CellOwner::Player(Player::Blue)) => 'B',
        Some(CellOwner::Player(Player::Red)) => 'R',
        Some(CellOwner::Claimed(Outcome::Winner(Player::Blue))) => 'b',
        Some(CellOwner::Claimed(Outcome::Winner(Player::Red))) => 'r',
        Some(CellOwner::Claimed(Outcome::Draw)) => '-',
        None if cell.style.clickable => '*',
        // Legal, but locked while the server answers.
        None if cell.style.opacity < 1.0 => '+',
        None => '.',
    }
}

fn paint(cell: &CellView, color: bool) -> String {
    let symbol = cell_symbol(cell).to_string();
    if !color {
        return symbol;
    }
    match cell.owner {
        Some(CellOwner::Player(Player::Blue)) => symbol.bright_cyan().bold().to_string(),
        Some(CellOwner::Player(Player::Red)) => symbol.bright_red().bold().to_string(),
        Some(CellOwner::Claimed(Outcome::Winner(Player::Blue))) => symbol.blue().to_string(),
        Some(CellOwner::Claimed(Outcome::Winner(Player::Red))) => symbol.red().to_string(),
        Some(CellOwner::Claimed(Outcome::Draw)) => symbol.dimmed().to_string(),
        None if cell.style.clickable => symbol.yellow().bold().to_string(),
        None if cell.style.opacity < 1.0 => symbol.yellow().dimmed().to_string(),
        None => symbol,
    }
}

/// Lays the nine sub-boards out as a 3x3 grid, sub-board 0 top-left and
/// cell 0 at the top-left of each sub-board.
pub fn draw_board(view: &BoardView, color: bool) -> String {
    let mut out = String::new();
    for row in 0..9usize {
        if row > 0 && row % 3 == 0 {
            out.push_str(ROW_DIVIDER);
            out.push('\n');
        }
        let band = row / 3;
        let cell_row = row % 3;
        let mut blocks = Vec::with_capacity(3);
        for board_col in 0..3usize {
            let sub_board = &view.sub_boards[band * 3 + board_col];
            let cells: Vec<String> = (0..3usize)
                .map(|cell_col| paint(&sub_board.cells[cell_row * 3 + cell_col], color))
                .collect();
            blocks.push(format!(" {} ", cells.join(" ")));
        }
        out.push_str(blocks.join("|").trim_end());
        out.push('\n');
    }
    out
}

fn status_line(view: &BoardView) -> String {
    let open: Vec<String> = view
        .sub_boards
        .iter()
        .filter(|sub_board| sub_board.status == SubBoardStatus::Open)
        .map(|sub_board| sub_board.index.to_string())
        .collect();
    if open.is_empty() {
        "No sub-board is open".to_string()
    } else {
        format!("Open sub-boards: {}", open.join(", "))
    }
}

/// What to print for an event, if anything. Alerts go to stderr.
pub enum Output {
    Stdout(String),
    Stderr(String),
}

pub fn describe_event(event: &ClientEvent, color: bool) -> Option<Output> {
    match event {
        ClientEvent::ConnectionChanged(ConnectionState::Connecting) => {
            Some(Output::Stdout("Connecting to game server...".to_string()))
        }
        ClientEvent::ConnectionChanged(ConnectionState::Open) => {
            Some(Output::Stdout("Connected.".to_string()))
        }
        ClientEvent::ConnectionChanged(ConnectionState::Closed) => {
            Some(Output::Stdout("Connection closed.".to_string()))
        }
        ClientEvent::TransportError(message) => {
            Some(Output::Stderr(format!("connection error: {message}")))
        }
        ClientEvent::Ready {
            current_player,
            legal_moves,
            view,
        } => {
            let moves: Vec<String> = legal_moves
                .iter()
                .map(|coord| format!("{} {}", coord.board(), coord.cell()))
                .collect();
            Some(Output::Stdout(format!(
                "{}{current_player} to move. Legal moves: {}\nEnter `<board> <cell>` or `q`.",
                draw_board(view, color),
                moves.join(", ")
            )))
        }
        ClientEvent::BoardUpdated {
            view,
            source,
            win_chance,
        } => {
            let mut text = String::new();
            if *source == MoveSource::Computer {
                text.push_str("Computer moved.\n");
            }
            text.push_str(&draw_board(view, color));
            if view.result.is_none() {
                text.push_str(&status_line(view));
            }
            if let Some(chance) = win_chance {
                text.push_str(&format!("\nComputer win estimate: {:.0}%", chance * 100.0));
            }
            Some(Output::Stdout(text))
        }
        ClientEvent::GameOver { banner, .. } => {
            let banner = if color {
                banner.bold().to_string()
            } else {
                banner.to_string()
            };
            Some(Output::Stdout(banner))
        }
        ClientEvent::Alert(message) => Some(Output::Stderr(format!("!! {message}"))),
        ClientEvent::MoveSent(_) | ClientEvent::Error(_) => None,
    }
}

#[cfg(test)]
#[path = "tests/terminal_tests.rs"]
mod tests;
