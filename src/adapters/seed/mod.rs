//! Seed data loading.
//!
//! User accounts come from a JSON document (a checked-in default ships
//! with the repo and is compiled in); modules and labs are in-memory
//! literals. Both are loaded once at startup and never change.

use std::collections::HashSet;
use std::path::Path;

use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::catalog::{CourseModule, Difficulty, Lab};
use crate::domain::foundation::{
    LabId, ModuleId, Role, Timestamp, UserId, ValidationError,
};
use crate::domain::user::UserAccount;

/// The default user seed, compiled into the binary.
pub const DEFAULT_USERS_JSON: &str = include_str!("../../../seed/users.json");

/// Errors raised while loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate email in seed data: {0}")]
    DuplicateEmail(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    users: Vec<SeedUser>,
}

#[derive(Debug, Deserialize)]
struct SeedUser {
    id: String,
    email: String,
    password: SecretString,
    role: Role,
    name: String,
    #[serde(default)]
    avatar: String,
    join_date: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    certificates: Vec<String>,
}

/// Parses user accounts from a seed JSON string.
///
/// Rejects duplicate emails: the auth contract depends on email being
/// unique across the store.
pub fn users_from_json(json: &str) -> Result<Vec<UserAccount>, SeedError> {
    let file: SeedFile = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    let mut accounts = Vec::with_capacity(file.users.len());
    for user in file.users {
        if !seen.insert(user.email.clone()) {
            return Err(SeedError::DuplicateEmail(user.email));
        }
        accounts.push(UserAccount::new(
            UserId::new(user.id)?,
            user.email,
            user.password,
            user.role,
            user.name,
            user.avatar,
            Timestamp::from_datetime(user.join_date),
            user.certificates,
        ));
    }
    Ok(accounts)
}

/// Loads user accounts from a seed file on disk.
pub fn load_users(path: &Path) -> Result<Vec<UserAccount>, SeedError> {
    let json = std::fs::read_to_string(path)?;
    users_from_json(&json)
}

/// The built-in module and lab catalog.
///
/// Insertion order here is the order every listing endpoint returns.
pub fn default_catalog() -> (Vec<CourseModule>, Vec<Lab>) {
    let module = |id: &str,
                  title: &str,
                  description: &str,
                  duration: &str,
                  difficulty: Difficulty,
                  category: &str,
                  content: &str,
                  video_url: &str| CourseModule {
        id: ModuleId::new(id).expect("seed module id is non-empty"),
        title: title.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
        difficulty,
        category: category.to_string(),
        content: content.to_string(),
        video_url: video_url.to_string(),
    };

    let modules = vec![
        module(
            "m1",
            "Introduction to Cybersecurity",
            "Core concepts: threats, vulnerabilities, and the CIA triad.",
            "45 min",
            Difficulty::Beginner,
            "fundamentals",
            "This module walks through the threat landscape, the CIA triad, \
             and how attackers and defenders think about risk.",
            "/videos/intro-to-cybersecurity.mp4",
        ),
        module(
            "m2",
            "Network Security Fundamentals",
            "Firewalls, segmentation, and monitoring network traffic.",
            "60 min",
            Difficulty::Intermediate,
            "network",
            "Covers perimeter defense, network segmentation, IDS/IPS \
             placement, and reading packet captures.",
            "/videos/network-security.mp4",
        ),
        module(
            "m3",
            "Web Application Security",
            "The OWASP Top 10 and how to exploit and fix each class.",
            "75 min",
            Difficulty::Advanced,
            "appsec",
            "Injection, broken authentication, XSS and friends: what each \
             class looks like in code and how to remediate it.",
            "/videos/web-app-security.mp4",
        ),
    ];

    let labs = vec![
        Lab {
            id: LabId::new("l1").expect("seed lab id is non-empty"),
            title: "SQL Injection Basics".to_string(),
            description: "Exploit a vulnerable login form in a sandboxed app.".to_string(),
            estimated_time: "30 min".to_string(),
            difficulty: Difficulty::Beginner,
            category: "appsec".to_string(),
            objectives: vec![
                "Identify the injectable parameter".to_string(),
                "Bypass the login form with a crafted payload".to_string(),
                "Extract the user table".to_string(),
                "Patch the query and verify the fix".to_string(),
            ],
            simulation_url: "/sims/sql-injection-basics".to_string(),
        },
        Lab {
            id: LabId::new("l2").expect("seed lab id is non-empty"),
            title: "Network Packet Analysis".to_string(),
            description: "Hunt for exfiltration in a captured traffic sample.".to_string(),
            estimated_time: "45 min".to_string(),
            difficulty: Difficulty::Intermediate,
            category: "network".to_string(),
            objectives: vec![
                "Load and filter the capture".to_string(),
                "Identify the suspicious flow".to_string(),
                "Reconstruct the exfiltrated file".to_string(),
            ],
            simulation_url: "/sims/packet-analysis".to_string(),
        },
    ];

    (modules, labs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_parses_and_contains_the_demo_student() {
        let users = users_from_json(DEFAULT_USERS_JSON).unwrap();
        assert!(users.len() >= 2);
        let student = users
            .iter()
            .find(|u| u.email() == "student@cyberzone.com")
            .expect("demo student present");
        assert!(student.password_matches("password123"));
        assert_eq!(student.role(), Role::Student);
    }

    #[test]
    fn duplicate_emails_are_rejected() {
        let json = r#"{"users": [
            {"id": "1", "email": "a@x.com", "password": "p", "role": "student",
             "name": "A", "join_date": "2024-01-01T00:00:00Z"},
            {"id": "2", "email": "a@x.com", "password": "p", "role": "admin",
             "name": "B", "join_date": "2024-01-01T00:00:00Z"}
        ]}"#;
        assert!(matches!(
            users_from_json(json),
            Err(SeedError::DuplicateEmail(_))
        ));
    }

    #[test]
    fn catalog_has_modules_and_labs_with_objectives() {
        let (modules, labs) = default_catalog();
        assert!(modules.len() >= 3);
        assert!(labs.len() >= 2);
        assert!(labs.iter().all(|l| !l.objectives.is_empty()));
    }
}
