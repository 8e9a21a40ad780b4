//! The error taxonomy shared by every fallible entry point in this crate.
//!
//! Every variant corresponds to one of the error kinds of the original C
//! API (`ARENA_UNINITIALIZED`, `INVALID_PARAM`, ...). The core never
//! aborts the process; every failure, including programmer error, is
//! surfaced here instead.

use thiserror::Error;

/// Errors returned by [`crate::initialize_arena`] and [`crate::phs`].
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A cost parameter, output length, or length combination was invalid.
    #[error("invalid parameter: {0}")]
    InvalidParam(&'static str),

    /// `phs` was called before the arena had been initialized.
    #[error("arena not initialized")]
    ArenaUninitialized,

    /// `initialize_arena` was called more than once.
    #[error("arena already initialized")]
    AlreadyInitialized,

    /// The host refused the arena allocation.
    #[error("arena allocation failed")]
    AllocFailed,

    /// Reserved for implementation bugs; never returned for well-formed
    /// input against a correctly initialized arena.
    #[error("internal error")]
    Internal,
}

pub type Result<T> = std::result::Result<T, Error>;
