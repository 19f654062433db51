//! HMAC-SHA256 session token signer.
//!
//! Wire format: `<token id as 32 hex chars>.<hmac-sha256 hex>`. The
//! token carries no user data; it is only a signed reference to the
//! server-side session record.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::domain::foundation::{AuthError, SessionTokenId};
use crate::ports::TokenSigner;

/// Signer keyed by the configured session signing secret.
pub struct HmacTokenSigner {
    key: SecretString,
}

impl HmacTokenSigner {
    pub fn new(key: SecretString) -> Self {
        Self { key }
    }

    fn compute_signature(&self, token_id: &Uuid) -> Vec<u8> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.key.expose_secret().as_bytes())
            .expect("HMAC accepts any key");
        mac.update(token_id.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

impl TokenSigner for HmacTokenSigner {
    fn issue(&self, token_id: SessionTokenId) -> String {
        let uuid = token_id.as_uuid();
        format!(
            "{}.{}",
            uuid.simple(),
            hex::encode(self.compute_signature(uuid))
        )
    }

    fn verify(&self, token: &str) -> Result<SessionTokenId, AuthError> {
        let (id_part, signature_part) = token.split_once('.').ok_or(AuthError::InvalidToken)?;

        let uuid = Uuid::parse_str(id_part).map_err(|_| AuthError::InvalidToken)?;
        let presented = hex::decode(signature_part).map_err(|_| AuthError::InvalidToken)?;
        let expected = self.compute_signature(&uuid);

        if !constant_time_compare(&expected, &presented) {
            return Err(AuthError::InvalidToken);
        }

        Ok(SessionTokenId::from_uuid(uuid))
    }
}

fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
