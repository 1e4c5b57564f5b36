//! Snapshot rendering for the console

use tokio::sync::watch;
use tracing::warn;

use crate::state::Snapshot;

/// Format milliseconds of remaining time as mm:ss
pub fn format_mm_ss(remaining_ms: u64) -> String {
    let total_seconds = remaining_ms / 1000;
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Follow the snapshot channel and print each update, skipping ones that
/// would repeat the displayed line. With `json` set, emits one JSON object
/// per update instead of the human-readable line.
pub async fn render_loop(mut snapshots: watch::Receiver<Snapshot>, json: bool) {
    let mut last_line: Option<String> = None;

    loop {
        let snapshot = snapshots.borrow_and_update().clone();

        let line = if json {
            match serde_json::to_string(&snapshot) {
                Ok(line) => Some(line),
                Err(e) => {
                    warn!("Failed to serialize snapshot: {}", e);
                    None
                }
            }
        } else {
            Some(format!(
                "[{:>7}] {}",
                snapshot.state.as_str(),
                format_mm_ss(snapshot.remaining_ms)
            ))
        };

        if let Some(line) = line {
            if last_line.as_deref() != Some(line.as_str()) {
                println!("{}", line);
                last_line = Some(line);
            }
        }

        if snapshots.changed().await.is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_the_presets() {
        assert_eq!(format_mm_ss(1_500_000), "25:00");
        assert_eq!(format_mm_ss(300_000), "05:00");
    }

    #[test]
    fn formats_edge_values() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(999), "00:00");
        assert_eq!(format_mm_ss(61_000), "01:01");
        assert_eq!(format_mm_ss(1_000), "00:01");
    }
}
