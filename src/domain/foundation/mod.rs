//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the CyberZone domain.

mod auth;
mod errors;
mod ids;
mod role;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{StoreError, ValidationError};
pub use ids::{LabId, ModuleId, SessionTokenId, UserId};
pub use role::Role;
pub use timestamp::Timestamp;
