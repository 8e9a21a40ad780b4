//! Password-based key derivation.

pub mod pbkdf2;

pub use pbkdf2::pbkdf2_sha256;
