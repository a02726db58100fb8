use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;

/// Identifier assigned to a user record by the store
pub type UserId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

impl FromStr for Gender {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(RosterError::InvalidGender(s.to_string())),
        }
    }
}

/// A `value`/`label` pair used to populate select inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

/// Role names a record's designation is drawn from.
///
/// Records store the label; the value is the stable key used by form inputs.
pub const DESIGNATIONS: &[SelectOption] = &[
    opt("junior_software_engineer", "Junior Software Engineer"),
    opt("software_engineer", "Software Engineer"),
    opt("senior_software_engineer", "Senior Software Engineer"),
    opt("team_lead", "Team Lead"),
    opt("project_manager", "Project Manager"),
    opt("technical_architect", "Technical Architect"),
];

pub const SKILLS: &[SelectOption] = &[
    opt("html", "HTML"),
    opt("css", "CSS"),
    opt("javascript", "JavaScript"),
    opt("react", "React.js"),
    opt("nextjs", "Next.js"),
    opt("nodejs", "Node.js"),
    opt("express", "Express.js"),
    opt("mongodb", "MongoDB"),
    opt("postgresql", "PostgreSQL"),
    opt("typescript", "TypeScript"),
    opt("tailwind", "Tailwind CSS"),
    opt("redux", "Redux"),
    opt("firebase", "Firebase"),
    opt("git", "Git"),
    opt("docker", "Docker"),
    opt("python", "Python"),
    opt("java", "Java"),
    opt("graphql", "GraphQL"),
    opt("restapi", "REST API"),
    opt("jest", "Jest"),
];

pub const PER_PAGE_OPTIONS: &[usize] = &[2, 4, 6, 8, 10];

/// Resolve a designation given either its catalog value or its label.
///
/// Returns the catalog label, which is what records store.
pub fn lookup_designation(input: &str) -> Option<&'static str> {
    let needle = input.trim();
    DESIGNATIONS
        .iter()
        .find(|d| d.value.eq_ignore_ascii_case(needle) || d.label.eq_ignore_ascii_case(needle))
        .map(|d| d.label)
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(input: &str) -> Result<Date, RosterError> {
    input
        .trim()
        .parse::<Date>()
        .map_err(|_| RosterError::InvalidDate(input.to_string()))
}

/// Drop empty and repeated skill tags, keeping first-seen order
pub fn normalize_skills<I, S>(skills: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for skill in skills {
        let skill = skill.as_ref().trim();
        if !skill.is_empty() && !out.iter().any(|s| s == skill) {
            out.push(skill.to_string());
        }
    }
    out
}

/// A user record managed by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "dob")]
    pub date_of_birth: Date,
    pub gender: Gender,
    pub designation: String,
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl UserRecord {
    /// Merge every field present in `patch`, leaving the id untouched
    pub fn apply(&mut self, patch: UserPatch) {
        let UserPatch {
            name,
            email,
            phone,
            date_of_birth,
            gender,
            designation,
            bio,
            skills,
            image,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        if let Some(dob) = date_of_birth {
            self.date_of_birth = dob;
        }
        if let Some(gender) = gender {
            self.gender = gender;
        }
        if let Some(designation) = designation {
            self.designation = designation;
        }
        if let Some(bio) = bio {
            self.bio = bio;
        }
        if let Some(skills) = skills {
            self.skills = normalize_skills(skills);
        }
        if let Some(image) = image {
            self.image = image;
        }
    }

    /// The calendar year of the date of birth, as used by the year filter
    pub fn birth_year(&self) -> i16 {
        self.date_of_birth.year()
    }
}

/// Field values for a record that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "dob")]
    pub date_of_birth: Date,
    pub gender: Gender,
    pub designation: String,
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewUser {
    pub fn into_record(self, id: UserId) -> UserRecord {
        UserRecord {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            designation: self.designation,
            bio: self.bio,
            skills: normalize_skills(self.skills),
            image: self.image,
        }
    }
}

/// Partial update of a record. Absent fields are left as they are.
///
/// `image` is doubly optional so a patch can clear the photo
/// (`Some(None)`) as well as leave it alone (`None`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, rename = "dob", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<Option<String>>,
}

/// Maps a present field (including an explicit `null`) to `Some`
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        *self == UserPatch::default()
    }
}

impl From<NewUser> for UserPatch {
    fn from(user: NewUser) -> Self {
        UserPatch {
            name: Some(user.name),
            email: Some(user.email),
            phone: Some(user.phone),
            date_of_birth: Some(user.date_of_birth),
            gender: Some(user.gender),
            designation: Some(user.designation),
            bio: Some(user.bio),
            skills: Some(user.skills),
            image: Some(user.image),
        }
    }
}
