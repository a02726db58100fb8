//! Debounced search input
//!
//! The text field updates a pending value on every keystroke; the value the
//! filter pipeline sees is committed only after a quiet period with no
//! further input. A new keystroke cancels the pending commit.
//!
//! Two flavours share that contract:
//! - [`SearchDebounce`] is clock-driven. The caller supplies `Instant`s and
//!   polls for a commit, which keeps the dashboard reducer pure.
//! - [`Debouncer`] owns a tokio timer task and calls a commit callback.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;

/// Quiet period before a typed search is committed
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Pending text plus the deadline at which it will be committed
#[derive(Debug, Clone)]
pub struct SearchDebounce {
    quiet: Duration,
    pending: String,
    committed: String,
    deadline: Option<Instant>,
}

impl Default for SearchDebounce {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS))
    }
}

impl SearchDebounce {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: String::new(),
            committed: String::new(),
            deadline: None,
        }
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// What the text field shows right now
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// The last value handed to the filter pipeline
    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Record a keystroke at `now`, re-arming the commit deadline
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = text.into();
        self.deadline = Some(now + self.quiet);
    }

    /// Commit the pending text once the quiet period has elapsed.
    ///
    /// Returns the newly committed value, or `None` while still waiting or
    /// when nothing is armed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => Some(self.commit()),
            _ => None,
        }
    }

    /// Commit immediately, skipping the wait
    pub fn flush(&mut self) -> Option<String> {
        self.deadline.map(|_| self.commit())
    }

    /// Drop the pending commit. The field keeps showing what was typed.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Reset both the field and the committed value without waiting
    pub fn clear(&mut self) {
        self.pending.clear();
        self.committed.clear();
        self.deadline = None;
    }

    fn commit(&mut self) -> String {
        self.deadline = None;
        self.committed = self.pending.clone();
        self.committed.clone()
    }
}

type CommitFn<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Timer-task debouncer: a timer handle plus a commit callback.
///
/// Must be used inside a tokio runtime. Dropping the debouncer cancels any
/// pending commit.
pub struct Debouncer<T> {
    quiet: Duration,
    commit: CommitFn<T>,
    timer: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(quiet: Duration, commit: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            quiet,
            commit: Arc::new(commit),
            timer: None,
        }
    }

    /// Schedule `value` for commit, cancelling the previously scheduled one
    pub fn input(&mut self, value: T) {
        self.cancel();
        let commit = Arc::clone(&self.commit);
        let quiet = self.quiet;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            commit(value);
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
