pub mod analytics;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod fixtures;
pub mod form;
pub mod nav;
pub mod print;
pub mod session;
pub mod store;
pub mod types;
pub mod ui;

pub use config::Config;
pub use error::{Result, RosterError};
pub use form::{FormErrors, FormField, ImageUpload, UserForm};
pub use nav::{NavItem, Route, ViewKind, default_sidebar, flatten_routes, resolve};
pub use store::{FilterOptions, Filters, QueryState, RecordStore};
pub use types::{Gender, NewUser, UserId, UserPatch, UserRecord};
pub use ui::{DashboardAction, DashboardState, compute_view_model, reduce_dashboard};
