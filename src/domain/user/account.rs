//! User account entity and its credential-stripped projection.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::domain::foundation::{Role, Timestamp, UserId};

use super::ProgressSummary;

/// A platform account as held by the user store.
///
/// Accounts are created by seed data only; nothing creates or deletes
/// them at runtime. The password is kept behind `SecretString` so it
/// never appears in debug output or serialized payloads.
#[derive(Debug, Clone)]
pub struct UserAccount {
    id: UserId,
    email: String,
    password: SecretString,
    role: Role,
    name: String,
    avatar: String,
    join_date: Timestamp,
    certificates: Vec<String>,
}

impl UserAccount {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        password: SecretString,
        role: Role,
        name: impl Into<String>,
        avatar: impl Into<String>,
        join_date: Timestamp,
        certificates: Vec<String>,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            password,
            role,
            name: name.into(),
            avatar: avatar.into(),
            join_date,
            certificates,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn certificates(&self) -> &[String] {
        &self.certificates
    }

    /// Compares a candidate password against the stored one in constant
    /// time. Length differences short-circuit, which is acceptable here:
    /// the seeded credentials are not secret material of real value.
    pub fn password_matches(&self, candidate: &str) -> bool {
        let stored = self.password.expose_secret().as_bytes();
        let candidate = candidate.as_bytes();
        if stored.len() != candidate.len() {
            return false;
        }
        stored.ct_eq(candidate).into()
    }

    /// Strips the credential and attaches a progress summary, producing
    /// the projection that auth responses carry.
    pub fn to_public(&self, progress: ProgressSummary) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            email: self.email.clone(),
            role: self.role,
            name: self.name.clone(),
            avatar: self.avatar.clone(),
            join_date: self.join_date,
            progress,
        }
    }
}

/// Credential-stripped account projection returned by login and session
/// lookups. This is the only user shape that crosses the HTTP boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: UserId,
    pub email: String,
    pub role: Role,
    pub name: String,
    pub avatar: String,
    pub join_date: Timestamp,
    pub progress: ProgressSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> UserAccount {
        UserAccount::new(
            UserId::new("1").unwrap(),
            "student@cyberzone.com",
            SecretString::new("password123".to_string()),
            Role::Student,
            "Alex Student",
            "/avatars/alex.png",
            Timestamp::now(),
            vec!["cert-essentials".to_string()],
        )
    }

    #[test]
    fn password_matches_exact_string_only() {
        let account = account();
        assert!(account.password_matches("password123"));
        assert!(!account.password_matches("password124"));
        assert!(!account.password_matches("password12"));
        assert!(!account.password_matches(""));
    }

    #[test]
    fn public_projection_carries_no_password() {
        let public = account().to_public(ProgressSummary::default());
        let json = serde_json::to_value(&public).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "student@cyberzone.com");
        assert_eq!(json["role"], "student");
    }

    #[test]
    fn debug_output_redacts_password() {
        let debug = format!("{:?}", account());
        assert!(!debug.contains("password123"));
    }
}
