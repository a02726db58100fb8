use std::time::Instant;

use serde_json::json;

use super::print_json;
use crate::cli::{ListArgs, OutputOptions};
use crate::config::Config;
use crate::display::format_list_page;
use crate::error::Result;
use crate::ui::model::{
    DashboardAction, DashboardState, DashboardViewModel, compute_view_model, reduce_dashboard,
};

/// Actions reproducing the list arguments, in the order a user would apply them.
///
/// The page is set last because every search or filter change resets it.
pub fn list_actions(args: &ListArgs, quiet: std::time::Duration) -> Vec<DashboardAction> {
    let mut actions = Vec::new();
    if let Some(per_page) = args.per_page {
        actions.push(DashboardAction::SetItemsPerPage(per_page));
    }
    if let Some(search) = &args.search {
        let at = Instant::now();
        actions.push(DashboardAction::TypeSearch {
            text: search.clone(),
            at,
        });
        actions.push(DashboardAction::Tick(at + quiet));
    }
    if args.gender.is_some() {
        actions.push(DashboardAction::SetGenderFilter(args.gender));
    }
    if let Some(designation) = &args.designation {
        actions.push(DashboardAction::SetDesignationFilter(designation.clone()));
    }
    if let Some(year) = &args.year {
        actions.push(DashboardAction::SetYearFilter(year.clone()));
    }
    actions.push(DashboardAction::GoToPage(args.page));
    actions
}

pub fn list_view(config: &Config, args: &ListArgs) -> DashboardViewModel {
    let state = list_actions(args, config.search_debounce())
        .into_iter()
        .fold(DashboardState::from_config(config), reduce_dashboard);
    compute_view_model(&state)
}

/// List one page of users
pub fn cmd_list(config: &Config, args: &ListArgs, output: OutputOptions) -> Result<()> {
    let vm = list_view(config, args);

    if output.json {
        let rows: Vec<_> = vm
            .rows
            .iter()
            .map(|row| json!({ "index": row.index, "user": row.user }))
            .collect();
        print_json(&json!({
            "page": vm.pagination.current_page,
            "total_pages": vm.pagination.total_pages,
            "items_per_page": vm.pagination.items_per_page,
            "total_filtered": vm.pagination.total_filtered,
            "total_users": vm.total_users,
            "rows": rows,
        }))?;
        return Ok(());
    }

    println!("{}", format_list_page(&vm));
    Ok(())
}
