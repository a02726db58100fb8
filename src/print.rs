//! Printable user profile
//!
//! A fixed-layout plain text document: header with the generation date,
//! personal and professional sections, the bio, and a footer carrying the
//! record id.

use std::fmt;

use jiff::civil::Date;

use crate::store::RecordStore;
use crate::types::{UserId, UserRecord};

const LABEL_WIDTH: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileDocument {
    Profile {
        generated_on: Date,
        user: Box<UserRecord>,
    },
    NotFound,
}

impl ProfileDocument {
    pub fn new(user: Option<&UserRecord>, generated_on: Date) -> Self {
        match user {
            Some(user) => ProfileDocument::Profile {
                generated_on,
                user: Box::new(user.clone()),
            },
            None => ProfileDocument::NotFound,
        }
    }

    /// Build the document for `id`, or the not-found page when it is gone
    pub fn for_id(store: &RecordStore, id: UserId, generated_on: Date) -> Self {
        Self::new(store.get(id), generated_on)
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ProfileDocument::Profile { .. })
    }

    pub fn render(&self) -> String {
        match self {
            ProfileDocument::NotFound => "User not found".to_string(),
            ProfileDocument::Profile { generated_on, user } => render_profile(user, *generated_on),
        }
    }
}

impl fmt::Display for ProfileDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn field(label: &str, value: &str) -> String {
    format!("  {label:<LABEL_WIDTH$}{value}")
}

fn render_profile(user: &UserRecord, generated_on: Date) -> String {
    let skills = if user.skills.is_empty() {
        "-".to_string()
    } else {
        user.skills.join(", ")
    };

    let lines = vec![
        "User Profile".to_string(),
        format!("Generated on {generated_on}"),
        String::new(),
        "Personal Information".to_string(),
        field("Full Name:", &user.name),
        field("Email:", &user.email),
        field("Phone:", &user.phone),
        field("Date of Birth:", &user.date_of_birth.to_string()),
        field("Gender:", &user.gender.to_string()),
        String::new(),
        "Professional Information".to_string(),
        field("Designation:", &user.designation),
        field("Skills:", &skills),
        String::new(),
        "About".to_string(),
        format!("  {}", user.bio),
        String::new(),
        format!("User ID: {} | This document is system generated", user.id),
    ];

    lines
        .iter()
        .map(|l| l.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}
