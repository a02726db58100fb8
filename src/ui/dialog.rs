//! Which modal or confirmation dialog is visible, and which record it targets.
//!
//! Only one dialog renders at a time. Opening a new one replaces whatever
//! was open before; there is no guard against that.

use serde::Serialize;

use crate::types::UserId;

/// Whether the user form creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Create,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DialogState {
    #[default]
    Idle,
    Creating,
    Editing {
        id: UserId,
    },
    ConfirmingDelete {
        id: UserId,
    },
}

/// Transient UI flags coordinating the list, form and alert views
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiStore {
    dialog: DialogState,
    sidebar_open: bool,
}

impl Default for UiStore {
    fn default() -> Self {
        Self {
            dialog: DialogState::Idle,
            sidebar_open: true,
        }
    }
}

impl UiStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn modal_open(&self) -> bool {
        matches!(
            self.dialog,
            DialogState::Creating | DialogState::Editing { .. }
        )
    }

    pub fn confirm_open(&self) -> bool {
        matches!(self.dialog, DialogState::ConfirmingDelete { .. })
    }

    /// Mode of the user form. Defaults to create when no form is open.
    pub fn form_mode(&self) -> FormMode {
        match self.dialog {
            DialogState::Editing { .. } => FormMode::Update,
            _ => FormMode::Create,
        }
    }

    /// The record targeted by the open edit form or delete confirmation
    pub fn selected_id(&self) -> Option<UserId> {
        match self.dialog {
            DialogState::Editing { id } | DialogState::ConfirmingDelete { id } => Some(id),
            DialogState::Idle | DialogState::Creating => None,
        }
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// "Create User" button
    pub fn open_create(&mut self) {
        self.dialog = DialogState::Creating;
    }

    /// Row "Edit" action
    pub fn open_edit(&mut self, id: UserId) {
        self.dialog = DialogState::Editing { id };
    }

    /// Row "Delete" action
    pub fn open_delete(&mut self, id: UserId) {
        self.dialog = DialogState::ConfirmingDelete { id };
    }

    /// Form submitted or cancelled. Leaves a delete confirmation alone.
    pub fn close_form(&mut self) {
        if self.modal_open() {
            self.dialog = DialogState::Idle;
        }
    }

    pub fn cancel_delete(&mut self) {
        if self.confirm_open() {
            self.dialog = DialogState::Idle;
        }
    }

    /// Close the confirmation, returning the id the caller should delete
    pub fn confirm_delete(&mut self) -> Option<UserId> {
        match self.dialog {
            DialogState::ConfirmingDelete { id } => {
                self.dialog = DialogState::Idle;
                Some(id)
            }
            _ => None,
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let ui = UiStore::new();
        assert_eq!(ui.dialog(), DialogState::Idle);
        assert!(!ui.modal_open());
        assert!(!ui.confirm_open());
        assert_eq!(ui.selected_id(), None);
        assert!(ui.sidebar_open());
    }

    #[test]
    fn test_edit_flow() {
        let mut ui = UiStore::new();
        ui.open_edit(3);
        assert!(ui.modal_open());
        assert_eq!(ui.form_mode(), FormMode::Update);
        assert_eq!(ui.selected_id(), Some(3));

        ui.close_form();
        assert_eq!(ui.dialog(), DialogState::Idle);
        assert_eq!(ui.selected_id(), None);
    }

    #[test]
    fn test_create_flow() {
        let mut ui = UiStore::new();
        ui.open_create();
        assert!(ui.modal_open());
        assert_eq!(ui.form_mode(), FormMode::Create);
        assert_eq!(ui.selected_id(), None);
        ui.close_form();
        assert!(!ui.modal_open());
    }

    #[test]
    fn test_delete_confirm_returns_target() {
        let mut ui = UiStore::new();
        ui.open_delete(9);
        assert!(ui.confirm_open());
        assert!(!ui.modal_open());
        assert_eq!(ui.confirm_delete(), Some(9));
        assert_eq!(ui.dialog(), DialogState::Idle);
        assert_eq!(ui.confirm_delete(), None);
    }

    #[test]
    fn test_delete_cancel() {
        let mut ui = UiStore::new();
        ui.open_delete(9);
        ui.cancel_delete();
        assert_eq!(ui.dialog(), DialogState::Idle);
    }

    #[test]
    fn test_new_action_overwrites_target() {
        let mut ui = UiStore::new();
        ui.open_edit(1);
        ui.open_edit(2);
        assert_eq!(ui.selected_id(), Some(2));
        ui.open_delete(5);
        assert!(!ui.modal_open());
        assert_eq!(ui.selected_id(), Some(5));
    }

    #[test]
    fn test_close_form_does_not_dismiss_confirmation() {
        let mut ui = UiStore::new();
        ui.open_delete(4);
        ui.close_form();
        assert!(ui.confirm_open());
    }

    #[test]
    fn test_toggle_sidebar() {
        let mut ui = UiStore::new();
        ui.toggle_sidebar();
        assert!(!ui.sidebar_open());
        ui.set_sidebar_open(true);
        assert!(ui.sidebar_open());
    }
}
