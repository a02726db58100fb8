use owo_colors::OwoColorize;
use serde_json::json;

use super::print_json;
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::error::Result;
use crate::types::{DESIGNATIONS, PER_PAGE_OPTIONS, SKILLS};
use crate::ui::model::DashboardState;

/// Show the filter dropdown options and the form catalogs
pub fn cmd_options(config: &Config, output: OutputOptions) -> Result<()> {
    let state = DashboardState::from_config(config);
    let filters = state.store.filter_options();

    if output.json {
        return print_json(&json!({
            "filters": filters,
            "designations": DESIGNATIONS,
            "skills": SKILLS,
            "per_page": PER_PAGE_OPTIONS,
        }));
    }

    let genders: Vec<String> = filters.genders.iter().map(|g| g.to_string()).collect();
    let per_page: Vec<String> = PER_PAGE_OPTIONS.iter().map(|n| n.to_string()).collect();
    let catalog: Vec<&str> = DESIGNATIONS.iter().map(|d| d.label).collect();
    let skills: Vec<&str> = SKILLS.iter().map(|s| s.label).collect();

    println!("{}", "Filters".bold());
    println!("  Genders:      {}", genders.join(", "));
    println!("  Designations: {}", filters.designations.join(", "));
    println!("  Birth years:  {}", filters.years.join(", "));
    println!();
    println!("{}", "Form".bold());
    println!("  Designations: {}", catalog.join(", "));
    println!("  Skills:       {}", skills.join(", "));
    println!("  Per page:     {}", per_page.join(", "));
    Ok(())
}
