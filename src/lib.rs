//! Earworm: a memory-hard password hashing function in the scrypt/Argon
//! lineage.
//!
//! The public surface is deliberately small: [`initialize_arena`] builds
//! the process-wide shared arena once, and [`phs`] derives a password
//! hash against it. Everything else in this crate — the hand-rolled
//! SHA-256, HMAC-SHA-256, PBKDF2-SHA-256, and AES-256 primitives — exists
//! to support those two calls and is exposed for the test harness and for
//! callers who want to validate the standard test vectors independently.
//!
//! ```
//! earworm::initialize_arena(20).unwrap();
//!
//! let mut out = [0u8; 32];
//! earworm::phs(&mut out, b"hunter2", b"some salt", 3, 8).unwrap();
//! ```

mod arena;
mod bytes;
mod cipher;
mod error;
mod hash;
mod kdf;
mod mac;
mod phs;

pub use arena::{initialize_arena, Arena};
pub use error::Error;
pub use phs::{phs, Params, LANES, STATE_BYTES};

/// Re-exported for callers (and the demo harness) that want to exercise
/// the underlying primitives directly, e.g. to validate the standard test
/// vectors against an independent implementation.
pub mod primitives {
    pub use crate::bytes::{be32dec, be32enc, be64dec, be64enc};
    pub use crate::cipher::aes::{aes256enc, aes256enc_keysetup, aesenc_round, Aes256RoundKeys};
    pub use crate::hash::sha256::{sha256, Sha256};
    pub use crate::kdf::pbkdf2::pbkdf2_sha256;
    pub use crate::mac::hmac::{hmac_sha256, HmacSha256};
}
