//! CLI interface for Gliss

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tablet theremin - stylus position and pressure to MIDI
#[derive(Parser)]
#[command(name = "gliss")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play stylus samples read from stdin to a MIDI output
    Play {
        /// Configuration file path
        #[arg(short, long, default_value = "gliss.yaml")]
        config: PathBuf,

        /// MIDI output port (substring match, overrides the config)
        #[arg(short, long)]
        port: Option<String>,
    },

    /// List available MIDI output ports
    Ports,

    /// Validate a configuration file
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = "gliss.yaml")]
        config: PathBuf,
    },

    /// Print an example configuration file
    Init,
}
