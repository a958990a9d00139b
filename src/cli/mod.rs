//! CLI module - Command-line interface for the catalog API
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Enhanced Bangumi API - a read-only catalog of where to watch anime,
/// merged with episode metadata from Bangumi
#[derive(Parser)]
#[command(name = "enhanced-bangumi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API (default)
    #[command(alias = "-d", alias = "--daemon", alias = "daemon")]
    Serve,

    /// Check connectivity to the database and the Bangumi API
    #[command(alias = "-c", alias = "--check")]
    Check {
        /// Subject to look up on both sides
        #[arg(default_value = "120925")]
        subject_id: String,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["enhanced-bangumi"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_check_with_subject() {
        let cli = Cli::try_parse_from(["enhanced-bangumi", "check", "78405"]).unwrap();
        match cli.command {
            Some(Commands::Check { subject_id }) => assert_eq!(subject_id, "78405"),
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn daemon_alias_maps_to_serve() {
        let cli = Cli::try_parse_from(["enhanced-bangumi", "daemon"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
    }
}
