//! Builders for test users and dashboards, so tests never depend on fixtures.

use jiff::civil::{Date, date};
use roster::types::{Gender, NewUser, UserRecord};
use roster::ui::DashboardState;
use roster::{RecordStore, UserForm};

/// Builder for creating test users
pub struct UserBuilder {
    user: NewUser,
}

impl UserBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            user: NewUser {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
                phone: "01700000000".to_string(),
                date_of_birth: date(1990, 1, 1),
                gender: Gender::Male,
                designation: "Software Engineer".to_string(),
                bio: "Test user".to_string(),
                skills: Vec::new(),
                image: None,
            },
        }
    }

    pub fn email(mut self, email: &str) -> Self {
        self.user.email = email.to_string();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.user.phone = phone.to_string();
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.user.gender = gender;
        self
    }

    pub fn designation(mut self, designation: &str) -> Self {
        self.user.designation = designation.to_string();
        self
    }

    pub fn born(mut self, dob: Date) -> Self {
        self.user.date_of_birth = dob;
        self
    }

    pub fn skills(mut self, skills: &[&str]) -> Self {
        self.user.skills = skills.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> NewUser {
        self.user
    }

    pub fn record(self, id: u64) -> UserRecord {
        self.user.into_record(id)
    }
}

/// A store holding `users` in order, with ids starting at 1
pub fn store_of(users: Vec<NewUser>) -> RecordStore {
    let mut store = RecordStore::new();
    for user in users {
        store.add(user);
    }
    store
}

/// A dashboard over `users` with the given page size
pub fn dashboard_of(users: Vec<NewUser>, per_page: usize) -> DashboardState {
    let mut state = DashboardState::new(store_of(users));
    state.query.set_items_per_page(per_page);
    state
}

/// Alice (female) and Bob (male), both team leads
pub fn alice_and_bob() -> Vec<NewUser> {
    vec![
        UserBuilder::new("Alice")
            .gender(Gender::Female)
            .designation("Team Lead")
            .born(date(1990, 3, 1))
            .build(),
        UserBuilder::new("Bob")
            .gender(Gender::Male)
            .designation("Team Lead")
            .born(date(1985, 7, 9))
            .build(),
    ]
}

/// A valid create-form submission
pub fn valid_form(name: &str) -> UserForm {
    UserForm {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "01999999999".to_string(),
        dob: "1998-08-08".to_string(),
        gender: "Female".to_string(),
        designation: "Project Manager".to_string(),
        bio: "Created in a test".to_string(),
        ..Default::default()
    }
}
