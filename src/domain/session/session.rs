//! Server-side session record.

use chrono::Duration;

use crate::domain::foundation::{SessionTokenId, Timestamp, UserId};

/// One login session, stored server-side and referenced by a signed
/// opaque token held by the client. The client never stores user data;
/// it only keeps the token string.
#[derive(Debug, Clone)]
pub struct Session {
    token_id: SessionTokenId,
    user_id: UserId,
    issued_at: Timestamp,
    expires_at: Timestamp,
}

impl Session {
    /// Issues a fresh session for a user with the given time to live.
    pub fn issue(user_id: UserId, ttl: Duration) -> Self {
        let issued_at = Timestamp::now();
        Self {
            token_id: SessionTokenId::new(),
            user_id,
            issued_at,
            expires_at: issued_at.plus(ttl),
        }
    }

    pub fn token_id(&self) -> SessionTokenId {
        self.token_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn issued_at(&self) -> Timestamp {
        self.issued_at
    }

    pub fn expires_at(&self) -> Timestamp {
        self.expires_at
    }

    /// Whether the session has passed its expiry at the given moment.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now.is_after(&self.expires_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_id() -> UserId {
        UserId::new("1").unwrap()
    }

    #[test]
    fn fresh_session_is_not_expired() {
        let session = Session::issue(user_id(), Duration::hours(8));
        assert!(!session.is_expired_at(Timestamp::now()));
    }

    #[test]
    fn session_with_negative_ttl_is_expired() {
        let session = Session::issue(user_id(), Duration::seconds(-1));
        assert!(session.is_expired_at(Timestamp::now()));
    }

    #[test]
    fn issued_sessions_get_distinct_token_ids() {
        let a = Session::issue(user_id(), Duration::hours(8));
        let b = Session::issue(user_id(), Duration::hours(8));
        assert_ne!(a.token_id(), b.token_id());
    }
}
