//! Cryptographic hash functions.
//!
//! Only [SHA-256](sha256::Sha256) is needed by the rest of the crate; it is
//! kept in its own module so its round constants and message-schedule
//! helpers stay local to the one place that uses them.

pub mod sha256;

pub use sha256::Sha256;
