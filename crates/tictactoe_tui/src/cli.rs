//! Command-line interface for the tic-tac-toe terminal client.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tictactoe_core::Marker;

/// Tic-tac-toe - play a friend or an unbeatable minimax AI
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start directly in this mode instead of showing the mode menu
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeChoice>,

    /// Marker played by the AI (x or o)
    #[arg(long, value_parser = parse_marker)]
    pub ai_marker: Option<Marker>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File receiving log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Game mode as chosen on the command line or in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeChoice {
    /// Two players share the keyboard
    Pvp,
    /// Play against the minimax AI
    Ai,
}

fn parse_marker(s: &str) -> Result<Marker, String> {
    match s.trim() {
        "x" | "X" => Ok(Marker::X),
        "o" | "O" => Ok(Marker::O),
        other => Err(format!("expected x or o, got {:?}", other)),
    }
}
