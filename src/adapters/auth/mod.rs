//! Auth adapters - session token signing.

mod hmac_signer;

pub use hmac_signer::HmacTokenSigner;
