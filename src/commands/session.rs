use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use super::today;
use crate::config::Config;
use crate::error::Result;
use crate::session::{SessionRunner, run_session};
use crate::ui::model::DashboardState;

/// Replay a JSON-lines session from `file`, or stdin
pub fn cmd_session(config: &Config, file: Option<&Path>) -> Result<()> {
    let mut runner = SessionRunner::new(DashboardState::from_config(config), today());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let executed = match file {
        Some(path) => run_session(&mut runner, BufReader::new(File::open(path)?), &mut out)?,
        None => run_session(&mut runner, io::stdin().lock(), &mut out)?,
    };
    tracing::info!(executed, "session finished");
    Ok(())
}
