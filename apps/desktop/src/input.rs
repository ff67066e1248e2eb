//! Move entry from standard input.

use std::io::BufRead;

use client_core::ClientCommand;
use shared::domain::Coord;
use tokio::sync::mpsc;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    Command(ClientCommand),
    Empty,
    Invalid(String),
}

/// Accepts `<board> <cell>` (space or comma separated) or `q` / `quit`.
pub fn parse_line(line: &str) -> InputLine {
    let line = line.trim();
    if line.is_empty() {
        return InputLine::Empty;
    }
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return InputLine::Command(ClientCommand::Shutdown);
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let [board, cell] = parts.as_slice() else {
        return InputLine::Invalid(format!("expected `<board> <cell>`, got `{line}`"));
    };
    match (board.parse::<u8>(), cell.parse::<u8>()) {
        (Ok(board), Ok(cell)) => match Coord::new(board, cell) {
            Ok(coord) => InputLine::Command(ClientCommand::ActivateCell(coord)),
            Err(err) => InputLine::Invalid(err.to_string()),
        },
        _ => InputLine::Invalid(format!("board and cell must be numbers 0-8, got `{line}`")),
    }
}

/// Reads stdin on a plain thread until EOF or `quit`. Stdin reads block, so
/// this stays off the runtime.
pub fn spawn_stdin_reader(commands: mpsc::Sender<ClientCommand>) {
    std::thread::spawn(move || forward_lines(std::io::stdin().lock(), &commands));
}

/// Forwards parsed lines until EOF, `quit`, a read failure or a closed
/// channel. EOF counts as `quit`. Bytes that are not UTF-8 only spoil their
/// own line.
fn forward_lines<R: BufRead>(mut reader: R, commands: &mpsc::Sender<ClientCommand>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                let _ = commands.blocking_send(ClientCommand::Shutdown);
                return;
            }
            Ok(_) => {}
            Err(err) => {
                warn!(error = %err, "failed to read stdin");
                return;
            }
        }

        match parse_line(&String::from_utf8_lossy(&buf)) {
            InputLine::Command(command) => {
                let quit = command == ClientCommand::Shutdown;
                if commands.blocking_send(command).is_err() || quit {
                    return;
                }
            }
            InputLine::Empty => {}
            InputLine::Invalid(reason) => eprintln!("{reason}"),
        }
    }
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
