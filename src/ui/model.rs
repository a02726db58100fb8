//! Dashboard model types for testable state management
//!
//! This module separates state (`DashboardState`) from view
//! (`DashboardViewModel`) so that every interaction of the list, form and
//! confirmation views can be unit tested without a renderer.

use std::time::{Duration, Instant};

use crate::config::Config;
use crate::fixtures::seed_users;
use crate::form::{DEFAULT_MAX_IMAGE_BYTES, FormErrors, ImageUpload, UserForm};
use crate::store::query::paginate;
use crate::store::{FilterOptions, Filters, QueryState, RecordStore};
use crate::types::{Gender, UserId, UserRecord};
use crate::ui::debounce::SearchDebounce;
use crate::ui::dialog::{DialogState, FormMode, UiStore};
use crate::ui::toast::Toast;

/// Explicit state container for one dashboard session
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The record collection
    pub store: RecordStore,
    /// Committed search text, filters and page position
    pub query: QueryState,
    /// Which dialog is open and for which record
    pub ui: UiStore,
    /// Search text as typed, waiting for the debounce to commit it
    pub search: SearchDebounce,
    /// Draft values of the open user form
    pub form: Option<UserForm>,
    /// Validation messages from the last rejected submission
    pub form_errors: FormErrors,
    /// Optional toast notification to display
    pub toast: Option<Toast>,
    /// Whether the loading overlay is shown
    pub loading: bool,
    /// Upload limit applied to the photo input
    pub max_image_bytes: u64,
    /// Latest instant seen on `Tick` or `TypeSearch`; toasts are stamped with it
    pub now: Instant,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(RecordStore::new())
    }
}

impl DashboardState {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            query: QueryState::default(),
            ui: UiStore::new(),
            search: SearchDebounce::default(),
            form: None,
            form_errors: FormErrors::default(),
            toast: None,
            loading: false,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            now: Instant::now(),
        }
    }

    /// Build a session from configuration, seeding fixture records if enabled
    pub fn from_config(config: &Config) -> Self {
        let store = if config.seed_fixtures {
            RecordStore::with_records(seed_users())
        } else {
            RecordStore::new()
        };
        Self {
            query: QueryState::new(config.items_per_page),
            search: SearchDebounce::new(Duration::from_millis(config.search_debounce_ms)),
            max_image_bytes: config.max_image_bytes,
            ..Self::new(store)
        }
    }
}

/// All possible actions on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    // Search
    /// A keystroke in the search box at the given instant
    TypeSearch { text: String, at: Instant },
    /// Timer tick: commits a due search and expires an old toast
    Tick(Instant),
    /// Clear the search box and the committed query immediately
    ClearSearch,

    // Filters
    SetGenderFilter(Option<Gender>),
    SetDesignationFilter(String),
    SetYearFilter(String),
    ClearFilters,

    // Pagination
    GoToPage(usize),
    NextPage,
    PrevPage,
    SetItemsPerPage(usize),

    // Row and toolbar actions
    /// "Create User" button
    OpenCreate,
    /// Row "Edit" action
    OpenEdit(UserId),
    /// Row "Delete" action
    OpenDelete(UserId),

    // Form
    /// Replace the draft values of the open form
    UpdateForm(UserForm),
    /// A file was chosen for the photo input
    AttachImage(ImageUpload),
    /// Remove the photo preview
    ClearImage,
    SubmitForm,
    CancelForm,

    // Confirmation
    ConfirmDelete,
    CancelDelete,

    // App
    SetLoading(bool),
    DismissToast,
    ToggleSidebar,
}

/// Kind of empty state shown in place of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyStateKind {
    /// The store holds no records at all
    NoUsers,
    /// Records exist but none pass the search and filters
    NoMatches,
    /// Records match, but the current page lies past the last one
    PageOutOfRange,
}

/// Computed view model for rendering the whole dashboard
#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    pub rows: Vec<UserRow>,
    pub pagination: PaginationViewModel,
    pub filters: FiltersViewModel,
    pub search: SearchViewModel,
    /// The user form, when the modal is open
    pub form: Option<FormViewModel>,
    /// The delete confirmation, when open
    pub confirm: Option<ConfirmViewModel>,
    pub toast: Option<Toast>,
    pub loading: bool,
    pub empty_state: Option<EmptyStateKind>,
    pub total_users: usize,
    pub sidebar_open: bool,
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    /// 1-based position within the filtered view, continuing across pages
    pub index: usize,
    pub user: UserRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationViewModel {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_filtered: usize,
    pub items_per_page: usize,
    pub page_numbers: Vec<usize>,
    pub has_prev: bool,
    pub has_next: bool,
    /// Pagination controls are hidden when everything fits on one page
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiltersViewModel {
    pub options: FilterOptions,
    pub active: Filters,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchViewModel {
    /// Text shown in the search box
    pub input: String,
    /// Query the table is filtered by
    pub committed: String,
    /// Whether a commit is waiting on the debounce
    pub pending: bool,
    pub result_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormViewModel {
    pub mode: FormMode,
    pub title: &'static str,
    pub values: UserForm,
    pub errors: FormErrors,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmViewModel {
    pub id: UserId,
    /// Name of the targeted record, if it still exists
    pub name: Option<String>,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Pure function: compute view model from state
pub fn compute_view_model(state: &DashboardState) -> DashboardViewModel {
    let filtered = state.store.filtered_view(&state.query);
    let total_filtered = filtered.len();
    let total_users = state.store.len();
    let current_page = state.query.current_page();
    let items_per_page = state.query.items_per_page();
    let total_pages = crate::store::query::total_pages(total_filtered, items_per_page);

    let (start, _) = state.query.page_bounds();
    let rows: Vec<UserRow> = paginate(&filtered, current_page, items_per_page)
        .iter()
        .enumerate()
        .map(|(i, user)| UserRow {
            index: start + i + 1,
            user: (*user).clone(),
        })
        .collect();

    let empty_state = if total_users == 0 {
        Some(EmptyStateKind::NoUsers)
    } else if total_filtered == 0 {
        Some(EmptyStateKind::NoMatches)
    } else if rows.is_empty() {
        Some(EmptyStateKind::PageOutOfRange)
    } else {
        None
    };

    let pagination = PaginationViewModel {
        current_page,
        total_pages,
        total_filtered,
        items_per_page,
        page_numbers: (1..=total_pages).collect(),
        has_prev: current_page > 1,
        has_next: current_page < total_pages,
        visible: total_pages > 1,
    };

    let filters = FiltersViewModel {
        options: state.store.filter_options(),
        active: state.query.filters().clone(),
    };

    let search = SearchViewModel {
        input: state.search.pending().to_string(),
        committed: state.query.search_query().to_string(),
        pending: state.search.is_armed(),
        result_count: total_filtered,
    };

    let form = if state.ui.modal_open() {
        let mode = state.ui.form_mode();
        Some(FormViewModel {
            mode,
            title: match mode {
                FormMode::Create => "Create User",
                FormMode::Update => "Update User",
            },
            values: state.form.clone().unwrap_or_default(),
            errors: state.form_errors.clone(),
        })
    } else {
        None
    };

    let confirm = match state.ui.dialog() {
        DialogState::ConfirmingDelete { id } => Some(ConfirmViewModel {
            id,
            name: state.store.get(id).map(|u| u.name.clone()),
        }),
        _ => None,
    };

    DashboardViewModel {
        rows,
        pagination,
        filters,
        search,
        form,
        confirm,
        toast: state.toast.clone(),
        loading: state.loading,
        empty_state,
        total_users,
        sidebar_open: state.ui.sidebar_open(),
    }
}

/// Pure function: apply action to state (reducer pattern)
///
/// All store mutations happen here, one action at a time.
pub fn reduce_dashboard(mut state: DashboardState, action: DashboardAction) -> DashboardState {
    match action {
        // Search
        DashboardAction::TypeSearch { text, at } => {
            state.now = state.now.max(at);
            state.search.input(text, at);
        }
        DashboardAction::Tick(now) => {
            state.now = state.now.max(now);
            if let Some(committed) = state.search.poll(now) {
                state.query.set_search_query(committed);
            }
            if state.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
                state.toast = None;
            }
        }
        DashboardAction::ClearSearch => {
            state.search.clear();
            state.query.set_search_query(String::new());
        }

        // Filters
        DashboardAction::SetGenderFilter(gender) => state.query.set_gender(gender),
        DashboardAction::SetDesignationFilter(d) => state.query.set_designation(d),
        DashboardAction::SetYearFilter(y) => state.query.set_dob_year(y),
        DashboardAction::ClearFilters => state.query.clear_filters(),

        // Pagination
        DashboardAction::GoToPage(page) => state.query.set_current_page(page),
        DashboardAction::NextPage => {
            let total = state.store.total_pages(&state.query);
            let page = state.query.current_page();
            if page < total {
                state.query.set_current_page(page + 1);
            }
        }
        DashboardAction::PrevPage => {
            let page = state.query.current_page();
            if page > 1 {
                state.query.set_current_page(page - 1);
            }
        }
        DashboardAction::SetItemsPerPage(n) => state.query.set_items_per_page(n),

        // Row and toolbar actions
        DashboardAction::OpenCreate => {
            state.ui.open_create();
            state.form = Some(UserForm::default());
            state.form_errors = FormErrors::default();
        }
        DashboardAction::OpenEdit(id) => {
            state.ui.open_edit(id);
            state.form = Some(
                state
                    .store
                    .get(id)
                    .map(UserForm::from_record)
                    .unwrap_or_default(),
            );
            state.form_errors = FormErrors::default();
        }
        DashboardAction::OpenDelete(id) => {
            state.ui.open_delete(id);
            state.form = None;
            state.form_errors = FormErrors::default();
        }

        // Form
        DashboardAction::UpdateForm(values) => {
            if state.ui.modal_open() {
                state.form = Some(values);
            }
        }
        DashboardAction::AttachImage(upload) => {
            let max = state.max_image_bytes;
            if let Some(form) = state.form.as_mut() {
                // The rejection message is kept on the form and surfaces on submit
                let _ = form.attach_image(upload, max);
            }
        }
        DashboardAction::ClearImage => {
            if let Some(form) = state.form.as_mut() {
                form.clear_image();
            }
        }
        DashboardAction::SubmitForm => submit_form(&mut state),
        DashboardAction::CancelForm => close_form(&mut state),

        // Confirmation
        DashboardAction::ConfirmDelete => {
            if let Some(id) = state.ui.confirm_delete()
                && state.store.delete(id)
            {
                state.toast = Some(Toast::new("User deleted", state.now));
            }
        }
        DashboardAction::CancelDelete => state.ui.cancel_delete(),

        // App
        DashboardAction::SetLoading(loading) => state.loading = loading,
        DashboardAction::DismissToast => state.toast = None,
        DashboardAction::ToggleSidebar => state.ui.toggle_sidebar(),
    }
    state
}

fn submit_form(state: &mut DashboardState) {
    let Some(form) = state.form.as_ref() else {
        return;
    };

    let new_user = match form.validate() {
        Ok(user) => user,
        Err(errors) => {
            state.form_errors = errors;
            state.loading = false;
            return;
        }
    };

    match state.ui.dialog() {
        DialogState::Creating => {
            state.store.add(new_user);
            state.toast = Some(Toast::new("User created", state.now));
        }
        DialogState::Editing { id } => {
            if state.store.update(id, new_user.into()) {
                state.toast = Some(Toast::new("User updated", state.now));
            }
        }
        DialogState::Idle | DialogState::ConfirmingDelete { .. } => return,
    }

    state.loading = false;
    close_form(state);
}

fn close_form(state: &mut DashboardState) {
    state.ui.close_form();
    state.form = None;
    state.form_errors = FormErrors::default();
}

/// Get the record the open dialog targets
pub fn get_selected_user(state: &DashboardState) -> Option<&UserRecord> {
    state.ui.selected_id().and_then(|id| state.store.get(id))
}

// ============================================================================
// Tests
// ============================================================================
