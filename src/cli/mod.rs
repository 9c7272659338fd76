//! CLI entrypoints

pub mod serve;

use clap::{Parser, Subcommand};

/// Hackathon registration service
#[derive(Parser)]
#[command(name = "hackreg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
