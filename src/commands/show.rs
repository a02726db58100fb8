use super::print_json;
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::display::format_user_detail;
use crate::error::{Result, RosterError};
use crate::types::UserId;
use crate::ui::model::DashboardState;

/// Display a single user
pub fn cmd_show(config: &Config, id: UserId, output: OutputOptions) -> Result<()> {
    let state = DashboardState::from_config(config);
    let user = state.store.get(id).ok_or(RosterError::UserNotFound(id))?;

    if output.json {
        return print_json(user);
    }

    println!("{}", format_user_detail(user));
    Ok(())
}
