//! AES primitives.
//!
//! Only AES-256 is needed: the arena generator uses full AES-256
//! encryption, and the memory-hard loop uses the bare AES round function.

pub mod aes;

pub use aes::{aes256enc, aes256enc_keysetup, aesenc_round, Aes256RoundKeys};
