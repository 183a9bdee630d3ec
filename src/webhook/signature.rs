//! HMAC-SHA256 webhook signatures.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Computes the signature the provider sends for `payload`.
///
/// Returns the lowercase hex HMAC-SHA256 of the raw payload bytes keyed
/// by `secret`.
#[must_use]
pub fn compute_signature(payload: &[u8], secret: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts any key length");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// Returns true iff `signature` is exactly the hex HMAC-SHA256 of `payload`.
///
/// The comparison is constant-time over the signature bytes, so timing
/// does not reveal where the first mismatch occurs.
#[must_use]
pub fn verify_signature(payload: &[u8], signature: &str, secret: &[u8]) -> bool {
    let expected = compute_signature(payload, secret);
    expected.as_bytes().ct_eq(signature.as_bytes()).into()
}
