//! Console view module
//!
//! The thin view layer: turns stdin lines into timer commands and renders
//! the snapshots the machine publishes.

pub mod render;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::tasks::Command;

pub use render::{format_mm_ss, render_loop};

/// Parse a single console line into a command. Returns `None` for input
/// that is not a command.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_lowercase().as_str() {
        "work" | "w" => Some(Command::StartWork),
        "break" | "b" => Some(Command::StartBreak),
        "stop" | "s" => Some(Command::Stop),
        _ => None,
    }
}

/// Read commands from stdin until EOF or `quit`, forwarding them to the
/// timer driver
pub async fn command_loop(commands: mpsc::Sender<Command>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("q") {
                    info!("Quit requested");
                    break;
                }
                match parse_command(trimmed) {
                    Some(command) => {
                        if commands.send(command).await.is_err() {
                            warn!("Timer driver is gone, closing console");
                            break;
                        }
                    }
                    None => {
                        warn!("Unknown command {:?} (try work, break, stop, quit)", trimmed);
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!("Failed to read from stdin: {}", e);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_commands() {
        assert_eq!(parse_command("work"), Some(Command::StartWork));
        assert_eq!(parse_command("  BREAK "), Some(Command::StartBreak));
        assert_eq!(parse_command("stop"), Some(Command::Stop));
        assert_eq!(parse_command("w"), Some(Command::StartWork));
    }

    #[test]
    fn rejects_unknown_input() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("lunch"), None);
    }
}
