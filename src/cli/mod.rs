//! CLI module for the address book service

pub mod serve;

use clap::{Parser, Subcommand};

/// Address Book - in-memory address records over JSON/HTTP
#[derive(Parser)]
#[command(name = "address-book")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve(serve::ServeArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve(serve::ServeArgs::default())
    }
}
