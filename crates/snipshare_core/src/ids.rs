//! Snippet identifier generation.
//!
//! Ids double as unguessable share tokens, so they are drawn from the
//! operating system CSPRNG rather than a seeded generator.

use crate::constants::{SNIPPET_ID_BYTES, SNIPPET_ID_LEN};
use rand::{rngs::OsRng, RngCore};

/// Generate a fresh snippet id: 4 random bytes as 8 lowercase hex chars.
pub fn generate_id() -> String {
    let mut bytes = [0u8; SNIPPET_ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Return `true` when `id` has the shape of a generated snippet id.
pub fn is_well_formed_id(id: &str) -> bool {
    id.len() == SNIPPET_ID_LEN
        && id
            .bytes()
            .all(|byte| byte.is_ascii_digit() || (b'a'..=b'f').contains(&byte))
}
