// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmurcore

//! Recipient-bound payload envelope.
//!
//! The envelope wraps the encrypted payload before framing, binding it to a
//! textual recipient identity:
//!
//! ```text
//! "EMAIL:"       6-byte ASCII literal
//! identity tag   recipient email, or "NONE" when unaddressed
//! "|"
//! identity hash  8 lowercase hex chars: truncated SHA-256 of the tag,
//!                or the fixed placeholder "00000000" when unaddressed
//! "|"
//! ciphertext     nonce || AES-256-GCM-SIV output (may itself contain '|')
//! ```
//!
//! Only the first two `'|'` bytes delimit fields; everything after the
//! second is ciphertext. The truncated hash binds the envelope to an
//! identity string and doubles as a corruption check — it is not a MAC over
//! the ciphertext. Real tamper detection comes from the AEAD tag at
//! decrypt. The unaddressed path ("NONE"/"00000000") is kept byte-exact for
//! wire compatibility and carries no integrity binding at all.

use sha2::{Digest, Sha256};

use crate::stego::crypto::{self, SymmetricKey};
use crate::stego::error::StegoError;

/// Leading magic of every envelope.
pub const EMAIL_PREFIX: &[u8] = b"EMAIL:";
/// Identity tag used when no recipient was specified.
pub const NO_RECIPIENT: &str = "NONE";
/// Hash field used when no recipient was specified.
pub const PLACEHOLDER_HASH: &str = "00000000";
/// Length of the truncated identity hash, in hex characters.
pub const HASH_CHARS: usize = 8;

/// First [`HASH_CHARS`] hex characters of SHA-256 over the identity string.
fn identity_digest(identity: &str) -> String {
    let digest = Sha256::digest(identity.as_bytes());
    hex::encode(digest)[..HASH_CHARS].to_string()
}

/// Encrypt `raw` under `key` and bind the result to `recipient`.
pub fn wrap(raw: &[u8], recipient: Option<&str>, key: &SymmetricKey) -> Vec<u8> {
    let ciphertext = crypto::encrypt(raw, key);
    let (tag, hash) = match recipient {
        Some(email) => (email, identity_digest(email)),
        None => (NO_RECIPIENT, PLACEHOLDER_HASH.to_string()),
    };

    let mut out =
        Vec::with_capacity(EMAIL_PREFIX.len() + tag.len() + 1 + HASH_CHARS + 1 + ciphertext.len());
    out.extend_from_slice(EMAIL_PREFIX);
    out.extend_from_slice(tag.as_bytes());
    out.push(b'|');
    out.extend_from_slice(hash.as_bytes());
    out.push(b'|');
    out.extend_from_slice(&ciphertext);
    out
}

/// A parsed, not yet verified envelope.
struct Envelope<'a> {
    identity_tag: &'a str,
    identity_hash: &'a str,
    ciphertext: &'a [u8],
}

/// Split an envelope on its first two `'|'` bytes.
fn parse(data: &[u8]) -> Result<Envelope<'_>, StegoError> {
    let rest = data
        .strip_prefix(EMAIL_PREFIX)
        .ok_or(StegoError::MissingEmailPrefix)?;

    let first = rest
        .iter()
        .position(|&b| b == b'|')
        .ok_or(StegoError::EnvelopeCorrupted)?;
    let after = &rest[first + 1..];
    let second = after
        .iter()
        .position(|&b| b == b'|')
        .ok_or(StegoError::EnvelopeCorrupted)?;

    let identity_tag =
        std::str::from_utf8(&rest[..first]).map_err(|_| StegoError::EnvelopeCorrupted)?;
    let identity_hash =
        std::str::from_utf8(&after[..second]).map_err(|_| StegoError::EnvelopeCorrupted)?;

    Ok(Envelope {
        identity_tag,
        identity_hash,
        ciphertext: &after[second + 1..],
    })
}

/// Verify the identity binding of an envelope and decrypt its payload.
///
/// The hash and recipient checks only apply to addressed envelopes; an
/// unaddressed envelope (tag `"NONE"`) goes straight to decryption.
///
/// # Errors
/// - [`StegoError::MissingEmailPrefix`] if the data lacks the `EMAIL:` magic.
/// - [`StegoError::EnvelopeCorrupted`] if the field structure is malformed.
/// - [`StegoError::HashMismatch`] if the stored hash disagrees with the
///   recomputed one.
/// - [`StegoError::RecipientMismatch`] if the tag names someone other than
///   `current_identity`.
/// - [`StegoError::DecryptionFailed`] if the ciphertext fails to decrypt.
pub fn unwrap(
    data: &[u8],
    key: &SymmetricKey,
    current_identity: Option<&str>,
) -> Result<Vec<u8>, StegoError> {
    let envelope = parse(data)?;

    if envelope.identity_tag != NO_RECIPIENT {
        if envelope.identity_hash != identity_digest(envelope.identity_tag) {
            return Err(StegoError::HashMismatch);
        }
        if current_identity != Some(envelope.identity_tag) {
            return Err(StegoError::RecipientMismatch);
        }
    }

    crypto::decrypt(envelope.ciphertext, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_unwrap_roundtrip_with_recipient() {
        let key = SymmetricKey::generate();
        let sealed = wrap(b"the payload", Some("a@b.com"), &key);

        assert!(sealed.starts_with(b"EMAIL:a@b.com|"));
        let raw = unwrap(&sealed, &key, Some("a@b.com")).unwrap();
        assert_eq!(raw, b"the payload");
    }

    #[test]
    fn wrap_unwrap_roundtrip_unaddressed() {
        let key = SymmetricKey::generate();
        let sealed = wrap(b"open secret", None, &key);

        assert!(sealed.starts_with(b"EMAIL:NONE|00000000|"));
        // Unaddressed envelopes decrypt regardless of the current identity.
        assert_eq!(unwrap(&sealed, &key, None).unwrap(), b"open secret");
        assert_eq!(
            unwrap(&sealed, &key, Some("anyone@else.com")).unwrap(),
            b"open secret"
        );
    }

    #[test]
    fn hash_field_is_truncated_sha256() {
        let key = SymmetricKey::generate();
        let sealed = wrap(b"x", Some("a@b.com"), &key);
        let expected = identity_digest("a@b.com");
        assert_eq!(expected.len(), HASH_CHARS);
        let field = &sealed[b"EMAIL:a@b.com|".len()..b"EMAIL:a@b.com|".len() + HASH_CHARS];
        assert_eq!(field, expected.as_bytes());
    }

    #[test]
    fn missing_prefix_rejected() {
        let key = SymmetricKey::generate();
        assert!(matches!(
            unwrap(b"MAIL:a@b.com|12345678|junk", &key, None),
            Err(StegoError::MissingEmailPrefix)
        ));
    }

    #[test]
    fn missing_delimiters_rejected() {
        let key = SymmetricKey::generate();
        assert!(matches!(
            unwrap(b"EMAIL:a@b.com", &key, None),
            Err(StegoError::EnvelopeCorrupted)
        ));
        assert!(matches!(
            unwrap(b"EMAIL:a@b.com|12345678", &key, None),
            Err(StegoError::EnvelopeCorrupted)
        ));
    }

    #[test]
    fn tampered_tag_fails_hash_check() {
        let key = SymmetricKey::generate();
        let sealed = wrap(b"payload", Some("a@b.com"), &key);
        // Swap the tag for a different address without recomputing the hash.
        let tail = &sealed[b"EMAIL:a@b.com".len()..];
        let mut forged = b"EMAIL:c@d.com".to_vec();
        forged.extend_from_slice(tail);

        assert!(matches!(
            unwrap(&forged, &key, Some("c@d.com")),
            Err(StegoError::HashMismatch)
        ));
    }

    #[test]
    fn wrong_recipient_rejected() {
        let key = SymmetricKey::generate();
        let sealed = wrap(b"payload", Some("a@b.com"), &key);

        assert!(matches!(
            unwrap(&sealed, &key, Some("c@d.com")),
            Err(StegoError::RecipientMismatch)
        ));
        // No identity at all is also a mismatch for an addressed envelope.
        assert!(matches!(
            unwrap(&sealed, &key, None),
            Err(StegoError::RecipientMismatch)
        ));
    }

    #[test]
    fn pipe_bytes_in_ciphertext_survive() {
        // Force many '|' bytes through the sealed path: only the first two
        // delimiters matter, so wrap/unwrap must round-trip regardless of
        // ciphertext content.
        let key = SymmetricKey::generate();
        let raw = vec![b'|'; 64];
        let sealed = wrap(&raw, Some("a@b.com"), &key);
        assert_eq!(unwrap(&sealed, &key, Some("a@b.com")).unwrap(), raw);
    }

    #[test]
    fn wrong_key_fails_after_identity_checks() {
        let key = SymmetricKey::generate();
        let sealed = wrap(b"payload", Some("a@b.com"), &key);
        assert!(matches!(
            unwrap(&sealed, &SymmetricKey::generate(), Some("a@b.com")),
            Err(StegoError::DecryptionFailed)
        ));
    }
}
