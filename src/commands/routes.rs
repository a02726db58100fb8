use super::print_json;
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::nav::{default_sidebar, flatten_routes, format_route_table};

/// List the routes generated from the sidebar tree
pub fn cmd_routes(output: OutputOptions) -> Result<()> {
    let routes = flatten_routes(&default_sidebar());

    if output.json {
        return print_json(&routes);
    }

    println!("{}", format_route_table(&routes));
    Ok(())
}
