//! User form draft and validation
//!
//! The form holds raw input strings exactly as typed. [`UserForm::validate`]
//! turns a draft into a [`NewUser`] or reports per-field messages that the
//! form renders inline next to each input.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::{
    Gender, NewUser, UserPatch, UserRecord, lookup_designation, normalize_skills, parse_date,
};

/// Largest accepted photo upload
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should be valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Phone,
    DateOfBirth,
    Gender,
    Designation,
    Bio,
    Skills,
    Image,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::DateOfBirth => "dob",
            FormField::Gender => "gender",
            FormField::Designation => "designation",
            FormField::Bio => "bio",
            FormField::Skills => "skills",
            FormField::Image => "image",
        };
        write!(f, "{s}")
    }
}

/// Inline validation messages keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(field, msg)| format!("{field}: {msg}")).collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// A chosen file for the photo input, already read into a data URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUpload {
    pub mime_type: String,
    pub size: u64,
    pub data_url: String,
}

/// Raw form input for creating or updating a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
    pub gender: String,
    pub designation: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub image: Option<String>,
    /// Set when the last upload was rejected; blocks submission
    #[serde(skip)]
    pub image_error: Option<String>,
}

impl UserForm {
    /// A form pre-filled with the values of an existing record
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            dob: user.date_of_birth.to_string(),
            gender: user.gender.to_string(),
            designation: user.designation.clone(),
            bio: user.bio.clone(),
            skills: user.skills.clone(),
            image: user.image.clone(),
            image_error: None,
        }
    }

    /// Overwrite the inputs named in `patch`, as if the user had retyped them
    pub fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(dob) = patch.date_of_birth {
            self.dob = dob.to_string();
        }
        if let Some(gender) = patch.gender {
            self.gender = gender.to_string();
        }
        if let Some(designation) = patch.designation {
            self.designation = designation;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
    }

    /// Accept or reject a photo upload.
    ///
    /// A rejected upload leaves the current image untouched and records the
    /// message shown under the photo input.
    pub fn attach_image(&mut self, upload: ImageUpload, max_bytes: u64) -> Result<(), String> {
        if !upload.mime_type.starts_with("image/") {
            let msg = "Please upload an image file".to_string();
            self.image_error = Some(msg.clone());
            return Err(msg);
        }
        if upload.size > max_bytes {
            let msg = format!(
                "File size should be less than {}MB",
                max_bytes / (1024 * 1024)
            );
            self.image_error = Some(msg.clone());
            return Err(msg);
        }
        self.image = Some(upload.data_url);
        self.image_error = None;
        Ok(())
    }

    /// Remove the photo preview
    pub fn clear_image(&mut self) {
        self.image = None;
        self.image_error = None;
    }

    /// Check every field, returning the record values when the form is valid
    pub fn validate(&self) -> Result<NewUser, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.chars().count() < 2 {
            errors.insert(FormField::Name, "Username must be at least 2 characters.");
        }

        let email = self.email.trim();
        if !EMAIL_RE.is_match(email) {
            errors.insert(FormField::Email, "Invalid email address");
        }

        let bio = self.bio.trim();
        if bio.chars().count() < 2 {
            errors.insert(FormField::Bio, "Bio must be at least 2 characters.");
        }

        let dob = if self.dob.trim().is_empty() {
            errors.insert(FormField::DateOfBirth, "Date of birth is required");
            None
        } else {
            match parse_date(&self.dob) {
                Ok(d) => Some(d),
                Err(_) => {
                    errors.insert(FormField::DateOfBirth, "Enter a valid date");
                    None
                }
            }
        };

        let gender = if self.gender.trim().is_empty() {
            errors.insert(FormField::Gender, "Please select a gender");
            None
        } else {
            match self.gender.parse::<Gender>() {
                Ok(g) => Some(g),
                Err(_) => {
                    errors.insert(FormField::Gender, "Please select a gender");
                    None
                }
            }
        };

        let designation = if self.designation.trim().is_empty() {
            errors.insert(FormField::Designation, "Please select a designation");
            None
        } else {
            let found = lookup_designation(&self.designation);
            if found.is_none() {
                errors.insert(FormField::Designation, "Unknown designation");
            }
            found
        };

        if let Some(msg) = &self.image_error {
            errors.insert(FormField::Image, msg.clone());
        }

        match (dob, gender, designation) {
            (Some(date_of_birth), Some(gender), Some(designation)) if errors.is_empty() => {
                Ok(NewUser {
                    name: name.to_string(),
                    email: email.to_string(),
                    phone: self.phone.trim().to_string(),
                    date_of_birth,
                    gender,
                    designation: designation.to_string(),
                    bio: bio.to_string(),
                    skills: normalize_skills(&self.skills),
                    image: self.image.clone(),
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn valid_form() -> UserForm {
        UserForm {
            name: "Rahim Uddin".to_string(),
            email: "rahim@example.com".to_string(),
            phone: "01711223344".to_string(),
            dob: "1994-08-21".to_string(),
            gender: "Male".to_string(),
            designation: "software_engineer".to_string(),
            bio: "Backend engineer".to_string(),
            skills: vec!["Rust".to_string(), "Git".to_string(), "Rust".to_string()],
            image: None,
            image_error: None,
        }
    }

    fn png(size: u64) -> ImageUpload {
        ImageUpload {
            mime_type: "image/png".to_string(),
            size,
            data_url: "data:image/png;base64,AAAA".to_string(),
        }
    }

    #[test]
    fn test_valid_form_produces_new_user() {
        let user = valid_form().validate().unwrap();
        assert_eq!(user.name, "Rahim Uddin");
        assert_eq!(user.date_of_birth, date(1994, 8, 21));
        assert_eq!(user.gender, Gender::Male);
        assert_eq!(user.designation, "Software Engineer");
        assert_eq!(user.skills, vec!["Rust", "Git"]);
    }

    #[test]
    fn test_short_name_is_rejected() {
        let form = UserForm {
            name: "R".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(FormField::Name),
            Some("Username must be at least 2 characters.")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        for bad in ["", "rahim", "rahim@", "rahim@example", "a b@example.com"] {
            let form = UserForm {
                email: bad.to_string(),
                ..valid_form()
            };
            let errors = form.validate().unwrap_err();
            assert!(errors.get(FormField::Email).is_some(), "{bad} should fail");
        }
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = UserForm::default().validate().unwrap_err();
        for field in [
            FormField::Name,
            FormField::Email,
            FormField::Bio,
            FormField::DateOfBirth,
            FormField::Gender,
            FormField::Designation,
        ] {
            assert!(errors.get(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn test_unknown_designation_is_rejected() {
        let form = UserForm {
            designation: "Astronaut".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::Designation), Some("Unknown designation"));
    }

    #[test]
    fn test_attach_non_image_is_rejected() {
        let mut form = valid_form();
        let upload = ImageUpload {
            mime_type: "application/pdf".to_string(),
            ..png(10)
        };
        assert_eq!(
            form.attach_image(upload, DEFAULT_MAX_IMAGE_BYTES),
            Err("Please upload an image file".to_string())
        );
        assert!(form.image.is_none());
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::Image), Some("Please upload an image file"));
    }

    #[test]
    fn test_attach_oversized_image_is_rejected() {
        let mut form = valid_form();
        let err = form
            .attach_image(png(DEFAULT_MAX_IMAGE_BYTES + 1), DEFAULT_MAX_IMAGE_BYTES)
            .unwrap_err();
        assert_eq!(err, "File size should be less than 2MB");
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_attach_image_then_clear() {
        let mut form = valid_form();
        form.attach_image(png(1024), DEFAULT_MAX_IMAGE_BYTES).unwrap();
        assert_eq!(form.validate().unwrap().image.as_deref(), Some("data:image/png;base64,AAAA"));

        form.clear_image();
        assert!(form.validate().unwrap().image.is_none());
    }

    #[test]
    fn test_good_upload_clears_previous_error() {
        let mut form = valid_form();
        let _ = form.attach_image(png(DEFAULT_MAX_IMAGE_BYTES * 2), DEFAULT_MAX_IMAGE_BYTES);
        form.attach_image(png(10), DEFAULT_MAX_IMAGE_BYTES).unwrap();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_from_record_round_trips_through_validate() {
        let user = valid_form().validate().unwrap().into_record(4);
        let form = UserForm::from_record(&user);
        assert_eq!(form.dob, "1994-08-21");
        let again = form.validate().unwrap();
        assert_eq!(again.into_record(4), user);
    }

    #[test]
    fn test_apply_patch_overwrites_named_inputs() {
        let mut form = valid_form();
        form.apply_patch(UserPatch::default());
        assert_eq!(form, valid_form());

        form.apply_patch(UserPatch {
            date_of_birth: Some(date(2000, 1, 2)),
            gender: Some(Gender::Female),
            image: Some(None),
            ..Default::default()
        });
        assert_eq!(form.dob, "2000-01-02");
        assert_eq!(form.gender, "Female");
        assert_eq!(form.name, "Rahim Uddin");
    }

    #[test]
    fn test_errors_display() {
        let mut errors = FormErrors::default();
        errors.insert(FormField::Email, "Invalid email address");
        errors.insert(FormField::Name, "too short");
        assert_eq!(errors.to_string(), "name: too short; email: Invalid email address");
    }
}
