use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use roster::cli::{Cli, Commands};
use roster::commands::{
    cmd_config_show, cmd_list, cmd_options, cmd_print, cmd_routes, cmd_session, cmd_show,
    cmd_stats,
};
use roster::config::Config;
use roster::error::Result;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::List { args, output } => cmd_list(&config, &args, output),
        Commands::Show { id, output } => cmd_show(&config, id, output),
        Commands::Print { id } => cmd_print(&config, id),
        Commands::Stats { output } => cmd_stats(&config, output),
        Commands::Routes { output } => cmd_routes(output),
        Commands::Options { output } => cmd_options(&config, output),
        Commands::Session { file } => cmd_session(&config, file.as_deref()),
        Commands::Config => cmd_config_show(&config),
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
