//! Dashboard interaction state
//!
//! - `dialog`: which modal or confirmation is open
//! - `debounce`: search text waiting to be committed
//! - `toast`: transient notifications
//! - `model`: the reducer and computed view model tying them together

pub mod debounce;
pub mod dialog;
pub mod model;
pub mod toast;

pub use debounce::{Debouncer, SearchDebounce};
pub use dialog::{DialogState, FormMode, UiStore};
pub use model::{
    DashboardAction, DashboardState, DashboardViewModel, EmptyStateKind, compute_view_model,
    reduce_dashboard,
};
pub use toast::Toast;
