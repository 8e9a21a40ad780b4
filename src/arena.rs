//! The process-wide, read-only pseudo-random arena that the memory-hard
//! loop in [`crate::phs`] draws from.
//!
//! The arena is a write-once, read-many singleton: [`initialize_arena`]
//! fills it exactly once via a [`OnceLock`](std::sync::OnceLock), and
//! every [`crate::phs`] call thereafter takes a shared reference. This
//! removes the initialization path from the hot path entirely — there is
//! no lock to contend for once the `OnceLock` has been written, only an
//! atomic load.
//!
//! `OnceLock` has no supported reset operation, so this implementation
//! does not offer a teardown call: resetting it would reintroduce exactly
//! the synchronization the one-shot latch is meant to avoid, for a
//! process-lifetime resource that is freed automatically at exit in any
//! case.

use std::sync::OnceLock;

use crate::{
    cipher::aes::{aes256enc, aes256enc_keysetup, BLOCK_BYTES},
    error::Error,
    hash::sha256::sha256,
};

/// Domain-separation tag hashed to derive the arena's fixed AES-256 key.
/// Public and constant across every process; the arena's pseudo-randomness
/// comes from AES, not from secrecy of this tag.
const ARENA_DOMAIN_TAG: &[u8] = b"earworm-arena-v1";

static ARENA: OnceLock<Arena> = OnceLock::new();

/// The shared, read-only pseudo-random table.
pub struct Arena {
    bytes: Vec<u8>,
}

impl Arena {
    /// Number of 16-byte blocks the arena holds.
    pub fn block_count(&self) -> usize {
        self.bytes.len() / BLOCK_BYTES
    }

    /// Reads 16-byte block `idx`. Panics if `idx >= self.block_count()`;
    /// callers (only [`crate::phs`]) are responsible for keeping indices
    /// in range, which they do by masking against `block_count() - 1`.
    pub fn block(&self, idx: usize) -> &[u8; BLOCK_BYTES] {
        let start = idx * BLOCK_BYTES;
        // Slice is exactly BLOCK_BYTES long by construction.
        (&self.bytes[start..start + BLOCK_BYTES]).try_into().unwrap()
    }
}

/// Allocates `2^exponent` bytes of deterministic pseudo-random data and
/// retains it for the remainder of the process. Must be called exactly
/// once, before any call to [`crate::phs`].
///
/// Fails with [`Error::InvalidParam`] if `exponent` would overflow a
/// `usize` byte count or yield fewer than one 16-byte block, with
/// [`Error::AlreadyInitialized`] on a second call (including a concurrent
/// racing call — exactly one of the racing callers wins), and with
/// [`Error::AllocFailed`] if the allocation itself is refused by the host.
pub fn initialize_arena(exponent: u32) -> Result<(), Error> {
    if ARENA.get().is_some() {
        return Err(Error::AlreadyInitialized);
    }

    let len: usize = 1usize
        .checked_shl(exponent)
        .filter(|_| exponent < usize::BITS)
        .ok_or(Error::InvalidParam("arena exponent too large for this host"))?;
    if len < BLOCK_BYTES {
        return Err(Error::InvalidParam(
            "arena exponent too small to hold a single block",
        ));
    }

    log::info!("initializing earworm arena: {len} bytes (2^{exponent})");
    let start = std::time::Instant::now();

    let mut bytes = Vec::new();
    bytes.try_reserve_exact(len).map_err(|_| Error::AllocFailed)?;
    bytes.resize(len, 0);
    fill(&mut bytes);

    log::info!(
        "earworm arena ready in {:.3}s ({} blocks)",
        start.elapsed().as_secs_f64(),
        len / BLOCK_BYTES
    );

    ARENA
        .set(Arena { bytes })
        .map_err(|_| Error::AlreadyInitialized)
}

/// Returns the initialized arena, or [`Error::ArenaUninitialized`] if
/// [`initialize_arena`] has not yet completed on this process.
pub fn arena() -> Result<&'static Arena, Error> {
    ARENA.get().ok_or(Error::ArenaUninitialized)
}

/// Fills `bytes` with the AES-CTR-like expansion committed to by this
/// design: block `j` is `AES256_Enc(K_arena, BE(j))`, where `K_arena` is
/// `SHA256(`[`ARENA_DOMAIN_TAG`]`)` and `BE(j)` is `j` encoded as a
/// 16-byte big-endian counter (the low 8 bytes carry the count; arenas
/// never reach 2^64 blocks).
pub(crate) fn fill(bytes: &mut [u8]) {
    let key = aes256enc_keysetup(&sha256(ARENA_DOMAIN_TAG));
    for (j, chunk) in bytes.chunks_mut(BLOCK_BYTES).enumerate() {
        let mut block = [0u8; BLOCK_BYTES];
        block[8..].copy_from_slice(&(j as u64).to_be_bytes());
        aes256enc(&mut block, &key);
        chunk.copy_from_slice(&block[..chunk.len()]);
    }
}
