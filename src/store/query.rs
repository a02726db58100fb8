//! Search, filter and pagination pipeline over user records
//!
//! Everything here is a pure function of the record slice and a
//! [`QueryState`]; results are recomputed on every read.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{Gender, UserRecord};

/// Default page size for the user list
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Column filters applied on top of the search text. Blank means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub dob_year: String,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.gender.is_none() && self.designation.is_empty() && self.dob_year.is_empty()
    }
}

/// Session query state: search text, filters and page position.
///
/// Every setter that changes what matches re-anchors `current_page` to 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryState {
    search_query: String,
    filters: Filters,
    current_page: usize,
    items_per_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl QueryState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            search_query: String::new(),
            filters: Filters::default(),
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
    }

    /// Replace all filters at once
    pub fn set_filters(&mut self, filters: Filters) {
        self.filters = filters;
        self.current_page = 1;
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.filters.gender = gender;
        self.current_page = 1;
    }

    pub fn set_designation(&mut self, designation: impl Into<String>) {
        self.filters.designation = designation.into();
        self.current_page = 1;
    }

    pub fn set_dob_year(&mut self, year: impl Into<String>) {
        self.filters.dob_year = year.into();
        self.current_page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.set_filters(Filters::default());
    }

    /// Move to `page`. Pages are 1-based; 0 is treated as 1. Pages past
    /// the end are allowed and simply render empty.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Change the page size. The current page is kept as-is.
    pub fn set_items_per_page(&mut self, items: usize) {
        self.items_per_page = items.max(1);
    }

    /// Half-open index range of the current page
    pub fn page_bounds(&self) -> (usize, usize) {
        let start = (self.current_page - 1).saturating_mul(self.items_per_page);
        (start, start.saturating_add(self.items_per_page))
    }
}

/// Case-insensitive substring match on name or email, raw substring on phone
pub fn matches_search(user: &UserRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    user.name.to_lowercase().contains(&needle)
        || user.email.to_lowercase().contains(&needle)
        || user.phone.contains(query)
}

/// AND of the gender, designation and birth-year filters
pub fn matches_filters(user: &UserRecord, filters: &Filters) -> bool {
    if filters.is_empty() {
        return true;
    }
    let gender_ok = filters.gender.is_none_or(|g| user.gender == g);

    let designation_ok = filters.designation.is_empty()
        || user
            .designation
            .to_lowercase()
            .contains(&filters.designation.to_lowercase());

    let year_ok = filters.dob_year.is_empty() || user.birth_year().to_string() == filters.dob_year;

    gender_ok && designation_ok && year_ok
}

/// Records passing the search text and every active filter, in insertion order
pub fn filter_users<'a>(users: &'a [UserRecord], query: &QueryState) -> Vec<&'a UserRecord> {
    users
        .iter()
        .filter(|u| matches_search(u, &query.search_query) && matches_filters(u, &query.filters))
        .collect()
}

/// The slice of `items` on `page` (1-based). Out-of-range pages are empty.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let per_page = per_page.max(1);
    let start = page.max(1).saturating_sub(1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `count` items; zero items means zero pages
pub fn total_pages(count: usize, per_page: usize) -> usize {
    count.div_ceil(per_page.max(1))
}

/// Option lists for the filter dropdowns, derived from the records present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub designations: Vec<String>,
    pub years: Vec<String>,
    pub genders: Vec<Gender>,
}

pub fn filter_options(users: &[UserRecord]) -> FilterOptions {
    let mut designations = BTreeSet::new();
    let mut years = BTreeSet::new();
    let mut genders = BTreeSet::new();

    for user in users {
        designations.insert(user.designation.clone());
        years.insert(user.birth_year());
        genders.insert(user.gender);
    }

    FilterOptions {
        designations: designations.into_iter().collect(),
        years: years.into_iter().map(|y| y.to_string()).collect(),
        genders: genders.into_iter().collect(),
    }
}
