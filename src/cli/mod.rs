pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shoplist")]
#[command(about = "A shopping list with address tagging", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/shoplist/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI
    Tui,
    /// Line-oriented session on stdin
    Shell,
    /// Reverse geocode a coordinate and print the candidate addresses
    Geocode {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },
}
