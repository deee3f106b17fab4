//! Opaque article id generation.
//!
//! Ids are random, not sequential, so they carry no information about save
//! order and can be generated without coordination with the external store.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const ID_LENGTH_BYTES: usize = 9;

/// Generates a fresh opaque article id.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character id.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_article_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
