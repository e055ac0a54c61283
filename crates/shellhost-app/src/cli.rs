use std::path::PathBuf;

use clap::Parser;
use shellhost_config::StartupOverrides;

/// A desktop shell that displays one web app and exposes a small,
/// validated command bridge to it.
#[derive(Parser, Debug)]
#[command(name = "shellhost", version, about)]
pub struct Args {
    /// URL or local path to display.
    #[arg(long)]
    pub url: Option<String>,

    /// Window width. Any geometry flag turns fullscreen off.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Window x position.
    #[arg(long, allow_hyphen_values = true)]
    pub x: Option<i32>,

    /// Window y position.
    #[arg(long, allow_hyphen_values = true)]
    pub y: Option<i32>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. `shellhost=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    pub fn startup_overrides(&self) -> StartupOverrides {
        StartupOverrides {
            url: self.url.clone(),
            width: self.width,
            height: self.height,
            x: self.x,
            y: self.y,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
