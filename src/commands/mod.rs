mod config;
mod list;
mod options;
mod print;
mod routes;
mod session;
mod show;
mod stats;

pub use config::cmd_config_show;
pub use list::cmd_list;
pub use options::cmd_options;
pub use print::cmd_print;
pub use routes::cmd_routes;
pub use session::cmd_session;
pub use show::cmd_show;
pub use stats::cmd_stats;

use serde::Serialize;

use crate::error::Result;

/// Print a value as pretty JSON on stdout
pub fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// The date stamped on generated documents
pub fn today() -> jiff::civil::Date {
    jiff::Zoned::now().date()
}
