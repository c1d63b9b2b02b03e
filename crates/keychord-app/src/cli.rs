use std::path::PathBuf;

use clap::Parser;

/// keychord: replay captured key and pointer events through a shortcut
/// recorder and print how each one was classified.
#[derive(Parser, Debug)]
#[command(name = "keychord", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// JSON-lines event script. Reads stdin when omitted.
    #[arg(long)]
    pub events: Option<PathBuf>,

    /// Persisted shortcut record to start with, e.g. '{"modifiers":8388608}'.
    #[arg(long)]
    pub bound: Option<String>,

    /// Answer system-reserved conflicts by overriding the system shortcut.
    #[arg(long)]
    pub force_system_override: bool,

    /// Recorder width in points.
    #[arg(long, default_value_t = 160.0)]
    pub width: f64,

    /// Recorder height in points.
    #[arg(long, default_value_t = 24.0)]
    pub height: f64,

    /// Print the default config file and exit.
    #[arg(long)]
    pub print_default_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
