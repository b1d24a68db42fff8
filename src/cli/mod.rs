use clap::Parser;

pub mod messages;
pub mod prompt;
pub mod report;

/// Interactively create a systemd service and register it
#[derive(Parser, Debug)]
#[command(name = "svcreg", version, about)]
pub struct Cli {
    /// Print diagnostic logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
