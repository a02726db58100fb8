use super::today;
use crate::config::Config;
use crate::error::{Result, RosterError};
use crate::print::ProfileDocument;
use crate::types::UserId;
use crate::ui::model::DashboardState;

/// Render the printable profile of a user.
///
/// A missing user still prints the not-found page, then fails.
pub fn cmd_print(config: &Config, id: UserId) -> Result<()> {
    let state = DashboardState::from_config(config);
    let doc = ProfileDocument::for_id(&state.store, id, today());
    println!("{doc}");
    if !doc.is_found() {
        return Err(RosterError::UserNotFound(id));
    }
    Ok(())
}
