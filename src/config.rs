//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "tomato-bell")]
#[command(about = "A state-machine driven Pomodoro countdown timer")]
#[command(version = "0.2.0")]
pub struct Config {
    /// Emit snapshots as JSON lines instead of the mm:ss display
    #[arg(long)]
    pub json: bool,

    /// Disable desktop notifications
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
