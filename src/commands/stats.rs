use serde_json::json;

use super::print_json;
use crate::analytics::{designation_stats, gender_totals};
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::display::format_stats;
use crate::error::Result;
use crate::ui::model::DashboardState;

/// Show the overview counts and designation chart data
pub fn cmd_stats(config: &Config, output: OutputOptions) -> Result<()> {
    let state = DashboardState::from_config(config);
    let users = state.store.records();
    let totals = gender_totals(users);
    let stats = designation_stats(users);

    if output.json {
        return print_json(&json!({
            "totals": totals,
            "designations": stats,
        }));
    }

    println!("{}", format_stats(&totals, &stats));
    Ok(())
}
