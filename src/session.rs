//! Scripted dashboard sessions.
//!
//! A session is a JSON-lines script, one command object per line, tagged by
//! `cmd`. Blank lines and lines starting with `#` are skipped. Each command
//! is translated into [`DashboardAction`]s against one [`DashboardState`] and
//! reports a one-line summary of the resulting view.
//!
//! Time is virtual: the runner keeps its own `Instant` which only moves on
//! `wait` and `search`, so debounce behavior replays deterministically.

use std::io::{BufRead, Write};
use std::time::Instant;

use jiff::civil::Date;
use serde::Deserialize;

use crate::analytics::gender_totals;
use crate::error::{Result, RosterError};
use crate::form::{ImageUpload, UserForm};
use crate::print::ProfileDocument;
use crate::types::{Gender, UserId, UserPatch};
use crate::ui::model::{DashboardAction, DashboardState, compute_view_model, reduce_dashboard};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum SessionCommand {
    /// Fill in the create form and submit it
    Create {
        #[serde(default)]
        form: UserForm,
        #[serde(default)]
        image: Option<ImageUpload>,
    },
    /// Open the edit form, change the named fields and submit
    Edit {
        id: UserId,
        #[serde(default)]
        changes: UserPatch,
    },
    /// Open the delete confirmation and confirm (or cancel) it
    Delete {
        id: UserId,
        #[serde(default = "default_confirm")]
        confirm: bool,
    },
    /// A keystroke in the search box; committed only after a quiet period
    Type { text: String },
    /// Advance the clock
    Wait { ms: u64 },
    /// Type and wait out the debounce in one step
    Search { text: String },
    ClearSearch,
    Filter {
        #[serde(default)]
        gender: Option<String>,
        #[serde(default)]
        designation: Option<String>,
        #[serde(default)]
        year: Option<String>,
    },
    ClearFilters,
    Page { page: usize },
    Next,
    Prev,
    PerPage { n: usize },
    /// Print the rows of the current page
    Show,
    /// Render the printable profile of a user
    Print { id: UserId },
    Stats,
}

fn default_confirm() -> bool {
    true
}

/// Parse one script line. Returns `None` for blank and comment lines.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<SessionCommand>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|e| RosterError::Session {
            line: line_no,
            message: e.to_string(),
        })
}

/// Drives one dashboard through a sequence of session commands
pub struct SessionRunner {
    state: DashboardState,
    now: Instant,
    today: Date,
}

impl SessionRunner {
    /// `today` stamps printed profiles
    /// The virtual clock starts at the dashboard's own clock.
    pub fn new(state: DashboardState, today: Date) -> Self {
        Self {
            now: state.now,
            state,
            today,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    fn dispatch(&mut self, action: DashboardAction) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce_dashboard(state, action);
    }

    fn advance(&mut self, by: std::time::Duration) {
        self.now += by;
        self.dispatch(DashboardAction::Tick(self.now));
    }

    /// Run one command, returning the lines it reports
    pub fn execute(&mut self, line_no: usize, command: SessionCommand) -> Result<Vec<String>> {
        let mut out = Vec::new();
        let label = command_label(&command);

        match command {
            SessionCommand::Create { form, image } => {
                self.dispatch(DashboardAction::OpenCreate);
                self.dispatch(DashboardAction::UpdateForm(form));
                if let Some(upload) = image {
                    self.dispatch(DashboardAction::AttachImage(upload));
                }
                self.submit(&mut out);
            }
            SessionCommand::Edit { id, changes } => {
                let Some(user) = self.state().store.get(id) else {
                    out.push(format!("{label}: {}", RosterError::UserNotFound(id)));
                    return Ok(out);
                };
                let mut form = UserForm::from_record(user);
                form.apply_patch(changes);
                self.dispatch(DashboardAction::OpenEdit(id));
                self.dispatch(DashboardAction::UpdateForm(form));
                self.submit(&mut out);
            }
            SessionCommand::Delete { id, confirm } => {
                self.dispatch(DashboardAction::OpenDelete(id));
                self.dispatch(if confirm {
                    DashboardAction::ConfirmDelete
                } else {
                    DashboardAction::CancelDelete
                });
            }
            SessionCommand::Type { text } => {
                let at = self.now;
                self.dispatch(DashboardAction::TypeSearch { text, at });
            }
            SessionCommand::Wait { ms } => self.advance(std::time::Duration::from_millis(ms)),
            SessionCommand::Search { text } => {
                let at = self.now;
                self.dispatch(DashboardAction::TypeSearch { text, at });
                let quiet = self.state().search.quiet();
                self.advance(quiet);
            }
            SessionCommand::ClearSearch => self.dispatch(DashboardAction::ClearSearch),
            SessionCommand::Filter {
                gender,
                designation,
                year,
            } => {
                if let Some(gender) = gender {
                    let gender = parse_gender_filter(line_no, &gender)?;
                    self.dispatch(DashboardAction::SetGenderFilter(gender));
                }
                if let Some(designation) = designation {
                    self.dispatch(DashboardAction::SetDesignationFilter(designation));
                }
                if let Some(year) = year {
                    self.dispatch(DashboardAction::SetYearFilter(year));
                }
            }
            SessionCommand::ClearFilters => self.dispatch(DashboardAction::ClearFilters),
            SessionCommand::Page { page } => self.dispatch(DashboardAction::GoToPage(page)),
            SessionCommand::Next => self.dispatch(DashboardAction::NextPage),
            SessionCommand::Prev => self.dispatch(DashboardAction::PrevPage),
            SessionCommand::PerPage { n } => self.dispatch(DashboardAction::SetItemsPerPage(n)),
            SessionCommand::Show => {
                let vm = compute_view_model(self.state());
                for row in &vm.rows {
                    out.push(format!(
                        "  {}. {} <{}> #{}",
                        row.index, row.user.name, row.user.email, row.user.id
                    ));
                }
            }
            SessionCommand::Print { id } => {
                let doc = ProfileDocument::for_id(&self.state().store, id, self.today);
                out.extend(doc.render().lines().map(str::to_string));
            }
            SessionCommand::Stats => {
                let totals = gender_totals(self.state().store.records());
                out.push(format!(
                    "  total {}, male {}, female {}",
                    totals.total, totals.male, totals.female
                ));
            }
        }

        out.push(self.summary(label));
        // Toasts are reported once, in the summary line of the command that raised them
        self.dispatch(DashboardAction::DismissToast);
        Ok(out)
    }

    fn submit(&mut self, out: &mut Vec<String>) {
        self.dispatch(DashboardAction::SubmitForm);
        let state = self.state();
        if state.ui.modal_open() {
            let err = RosterError::Validation(state.form_errors.clone());
            out.push(format!("  rejected: {err}"));
            self.dispatch(DashboardAction::CancelForm);
        }
    }

    fn summary(&self, label: &str) -> String {
        let vm = compute_view_model(self.state());
        let p = &vm.pagination;
        let mut line = format!(
            "{label}: page {}/{} | {} matching | {} total",
            p.current_page, p.total_pages, p.total_filtered, vm.total_users
        );
        if vm.search.pending {
            line.push_str(&format!(" | typing \"{}\"", vm.search.input));
        }
        if let Some(toast) = &vm.toast {
            line.push_str(&format!(" | {}", toast.message));
        }
        line
    }
}

fn parse_gender_filter(line_no: usize, value: &str) -> Result<Option<Gender>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    value
        .parse::<Gender>()
        .map(Some)
        .map_err(|e| RosterError::Session {
            line: line_no,
            message: e.to_string(),
        })
}

fn command_label(command: &SessionCommand) -> &'static str {
    match command {
        SessionCommand::Create { .. } => "create",
        SessionCommand::Edit { .. } => "edit",
        SessionCommand::Delete { .. } => "delete",
        SessionCommand::Type { .. } => "type",
        SessionCommand::Wait { .. } => "wait",
        SessionCommand::Search { .. } => "search",
        SessionCommand::ClearSearch => "clear_search",
        SessionCommand::Filter { .. } => "filter",
        SessionCommand::ClearFilters => "clear_filters",
        SessionCommand::Page { .. } => "page",
        SessionCommand::Next => "next",
        SessionCommand::Prev => "prev",
        SessionCommand::PerPage { .. } => "per_page",
        SessionCommand::Show => "show",
        SessionCommand::Print { .. } => "print",
        SessionCommand::Stats => "stats",
    }
}

/// Replay every command from `reader`, writing reports to `writer`.
///
/// Stops at the first malformed line.
pub fn run_session<R: BufRead, W: Write>(
    runner: &mut SessionRunner,
    reader: R,
    writer: &mut W,
) -> Result<usize> {
    let mut executed = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let Some(command) = parse_line(line_no, &line)? else {
            continue;
        };
        tracing::debug!(line = line_no, ?command, "session command");
        for out in runner.execute(line_no, command)? {
            writeln!(writer, "{out}")?;
        }
        executed += 1;
    }
    Ok(executed)
}
