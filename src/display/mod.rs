//! Terminal rendering for users, pages and chart data

use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::analytics::{DesignationStat, GenderTotals};
use crate::types::{Gender, UserRecord};
use crate::ui::model::{DashboardViewModel, EmptyStateKind, UserRow};

pub fn format_gender_colored(gender: Gender) -> String {
    let badge = format!("[{gender}]");
    match gender {
        Gender::Male => badge.blue().to_string(),
        Gender::Female => badge.magenta().to_string(),
    }
}

/// A row in the user list table
#[derive(Tabled)]
struct UserTableRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Date of Birth")]
    dob: String,
    #[tabled(rename = "Gender")]
    gender: String,
    #[tabled(rename = "Designation")]
    designation: String,
}

impl From<&UserRow> for UserTableRow {
    fn from(row: &UserRow) -> Self {
        UserTableRow {
            index: row.index,
            id: row.user.id,
            name: row.user.name.clone(),
            email: row.user.email.clone(),
            phone: row.user.phone.clone(),
            dob: row.user.date_of_birth.to_string(),
            gender: row.user.gender.to_string(),
            designation: row.user.designation.clone(),
        }
    }
}

pub fn format_user_table(rows: &[UserRow]) -> String {
    let rows: Vec<UserTableRow> = rows.iter().map(UserTableRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

pub fn empty_state_message(kind: EmptyStateKind) -> &'static str {
    match kind {
        EmptyStateKind::NoUsers => "No users yet.",
        EmptyStateKind::NoMatches => "No users match the current search and filters.",
        EmptyStateKind::PageOutOfRange => "This page is empty.",
    }
}

/// The list page: table, or empty state, followed by the page footer
pub fn format_list_page(vm: &DashboardViewModel) -> String {
    let body = match vm.empty_state {
        Some(kind) => empty_state_message(kind).to_string(),
        None => format_user_table(&vm.rows),
    };
    let p = &vm.pagination;
    format!(
        "{body}\n\n{}",
        format!(
            "Page {} of {} ({} matching, {} total)",
            p.current_page,
            p.total_pages.max(1),
            p.total_filtered,
            vm.total_users
        )
        .dimmed()
    )
}

pub fn format_user_detail(user: &UserRecord) -> String {
    let skills = if user.skills.is_empty() {
        "-".to_string()
    } else {
        user.skills.join(", ")
    };
    let mut lines = vec![
        format!("{} {}", user.name.bold(), format_gender_colored(user.gender)),
        format!("{} {}", "ID:".dimmed(), user.id),
        format!("{} {}", "Email:".dimmed(), user.email),
        format!("{} {}", "Phone:".dimmed(), user.phone),
        format!("{} {}", "Date of Birth:".dimmed(), user.date_of_birth),
        format!("{} {}", "Designation:".dimmed(), user.designation.cyan()),
        format!("{} {}", "Skills:".dimmed(), skills),
    ];
    if let Some(image) = &user.image {
        lines.push(format!("{} {}", "Image:".dimmed(), image));
    }
    lines.push(String::new());
    lines.push(user.bio.clone());
    lines.join("\n")
}

#[derive(Tabled)]
struct DesignationRow {
    #[tabled(rename = "Designation")]
    designation: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Male")]
    male: usize,
    #[tabled(rename = "Female")]
    female: usize,
}

/// Overview cards followed by the designation breakdown
pub fn format_stats(totals: &GenderTotals, stats: &[DesignationStat]) -> String {
    let header = format!(
        "{} {}   {} {}   {} {}",
        "Total Users:".bold(),
        totals.total,
        "Male:".bold(),
        totals.male,
        "Female:".bold(),
        totals.female
    );
    if stats.is_empty() {
        return header;
    }
    let rows: Vec<DesignationRow> = stats
        .iter()
        .map(|s| DesignationRow {
            designation: s.designation.clone(),
            count: s.count,
            male: s.male,
            female: s.female,
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{header}\n\n{table}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewUser;
    use jiff::civil::date;

    fn row(index: usize) -> UserRow {
        UserRow {
            index,
            user: NewUser {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                phone: "0171".to_string(),
                date_of_birth: date(1990, 1, 2),
                gender: Gender::Female,
                designation: "Team Lead".to_string(),
                bio: "bio".to_string(),
                skills: vec![],
                image: None,
            }
            .into_record(4),
        }
    }

    #[test]
    fn test_user_table_has_headers_and_values() {
        let table = format_user_table(&[row(6)]);
        for needle in ["Name", "Date of Birth", "Alice", "1990-01-02", "Team Lead", "6"] {
            assert!(table.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn test_stats_without_designations_is_header_only() {
        let out = format_stats(&GenderTotals::default(), &[]);
        assert!(out.contains("Total Users:"));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_detail_lists_skills_placeholder() {
        let out = format_user_detail(&row(1).user);
        assert!(out.contains("Skills:"));
        assert!(out.contains(" -"));
        assert!(!out.contains("Image:"));
    }
}
