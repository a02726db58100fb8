//! Seed records loaded into a fresh session

use jiff::civil::date;

use crate::types::{Gender, NewUser, UserRecord};

struct Seed {
    name: &'static str,
    gender: Gender,
    dob: (i16, i8, i8),
    designation: &'static str,
    skills: &'static [&'static str],
    bio: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        name: "Alice Rahman",
        gender: Gender::Female,
        dob: (1990, 4, 12),
        designation: "Team Lead",
        skills: &["React.js", "TypeScript", "Git"],
        bio: "Leads the frontend team and reviews most pull requests.",
    },
    Seed {
        name: "Bob Karim",
        gender: Gender::Male,
        dob: (1985, 9, 3),
        designation: "Team Lead",
        skills: &["Node.js", "PostgreSQL", "Docker"],
        bio: "Owns the API platform.",
    },
    Seed {
        name: "Chaity Das",
        gender: Gender::Female,
        dob: (1995, 1, 20),
        designation: "Software Engineer",
        skills: &["JavaScript", "CSS", "Tailwind CSS"],
        bio: "Builds dashboard widgets.",
    },
    Seed {
        name: "Dipu Hasan",
        gender: Gender::Male,
        dob: (1992, 7, 15),
        designation: "Senior Software Engineer",
        skills: &["Python", "GraphQL", "REST API"],
        bio: "Maintains the reporting service.",
    },
    Seed {
        name: "Eva Sultana",
        gender: Gender::Female,
        dob: (1988, 11, 30),
        designation: "Project Manager",
        skills: &["Jest"],
        bio: "Plans releases and keeps the roadmap honest.",
    },
    Seed {
        name: "Farhan Ahmed",
        gender: Gender::Male,
        dob: (1999, 3, 8),
        designation: "Junior Software Engineer",
        skills: &["HTML", "CSS", "JavaScript"],
        bio: "Joined this year from the internship program.",
    },
    Seed {
        name: "Gulshan Ara",
        gender: Gender::Female,
        dob: (1985, 5, 25),
        designation: "Technical Architect",
        skills: &["Java", "Docker", "MongoDB"],
        bio: "Designs the service boundaries.",
    },
    Seed {
        name: "Habib Khan",
        gender: Gender::Male,
        dob: (1995, 12, 2),
        designation: "Software Engineer",
        skills: &["Next.js", "Redux", "Firebase"],
        bio: "Works on the customer portal.",
    },
];

/// The initial user collection, with ids 1 through 8
pub fn seed_users() -> Vec<UserRecord> {
    SEEDS
        .iter()
        .enumerate()
        .map(|(i, seed)| {
            let id = i as u64 + 1;
            let first = seed.name.split_whitespace().next().unwrap_or(seed.name);
            let (y, m, d) = seed.dob;
            NewUser {
                name: seed.name.to_string(),
                email: format!("{}@example.com", first.to_lowercase()),
                phone: format!("0171100000{id}"),
                date_of_birth: date(y, m, d),
                gender: seed.gender,
                designation: seed.designation.to_string(),
                bio: seed.bio.to_string(),
                skills: seed.skills.iter().map(|s| s.to_string()).collect(),
                image: Some(format!("https://i.pravatar.cc/150?img={id}")),
            }
            .into_record(id)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SKILLS, lookup_designation};

    #[test]
    fn test_seed_ids_are_sequential() {
        let users = seed_users();
        assert_eq!(users.len(), 8);
        let ids: Vec<_> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_seeds_use_catalog_values() {
        for user in seed_users() {
            assert_eq!(lookup_designation(&user.designation), Some(user.designation.as_str()));
            for skill in &user.skills {
                assert!(SKILLS.iter().any(|s| s.label == skill), "{skill} not in catalog");
            }
        }
    }
}
