use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::types::{Gender, UserId};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "In-memory user roster with search, filters and pagination")]
#[command(version)]
pub struct Cli {
    /// Config file (overrides ROSTER_CONFIG and ./roster.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output flag
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Search, filter and page arguments for the list view
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Case-insensitive match on name or email, substring match on phone
    #[arg(short, long)]
    pub search: Option<String>,

    /// Male or Female (case-insensitive)
    #[arg(short, long, value_parser = parse_gender)]
    pub gender: Option<Gender>,

    /// Substring of the designation (case-insensitive)
    #[arg(short, long)]
    pub designation: Option<String>,

    /// Four-digit birth year
    #[arg(short, long)]
    pub year: Option<String>,

    /// Page number, starting at 1
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Rows per page (default from config)
    #[arg(long)]
    pub per_page: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List users, one page at a time
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        args: ListArgs,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Display one user
    Show {
        id: UserId,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Render the printable profile of a user
    Print { id: UserId },

    /// User counts by gender and designation
    Stats {
        #[command(flatten)]
        output: OutputOptions,
    },

    /// Routes generated from the sidebar
    Routes {
        #[command(flatten)]
        output: OutputOptions,
    },

    /// Option lists for the filter and form inputs
    Options {
        #[command(flatten)]
        output: OutputOptions,
    },

    /// Replay a JSON-lines session against one dashboard
    Session {
        /// Session file (reads stdin if omitted)
        file: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config,
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    s.parse()
        .map_err(|_| "Invalid gender. Must be one of: Male, Female".to_string())
}
