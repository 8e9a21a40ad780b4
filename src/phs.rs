//! The memory-hard password hashing core, `PHS`.
//!
//! One call chains three phases: a single-iteration PBKDF2 pre-phase that
//! spreads the secret across the internal lanes, a `t_cost`-round
//! memory-hard loop that mixes each lane with AES rounds fed by
//! pseudo-random [arena](crate::arena) reads, and a single-iteration
//! PBKDF2 post-phase that compresses the final lane state into the
//! requested output length.
//!
//! # Pinned parameters
//!
//! This implementation fixes two choices left open by the design:
//!
//! - **Lane count `L = 4`**: the state `S` is [`STATE_BYTES`] = 64 bytes.
//! - **Arena index derivation**: `idx = BE64(lane[0..8]) & (2^m_cost - 1)`,
//!   a bitmask rather than a modulo, which is exact because `m_cost` is
//!   required to satisfy `2^m_cost <= block_count`.
//!
//! See `DESIGN.md` for the rationale and the arena seeding construction.

use zeroize::Zeroize;

use crate::{
    arena::{self, Arena},
    bytes::be64dec,
    cipher::aes::{aesenc_round, BLOCK_BYTES},
    error::Error,
    kdf::pbkdf2::pbkdf2_sha256,
};

/// Number of 16-byte lanes making up the internal state `S`.
pub const LANES: usize = 4;

/// Size in bytes of the internal state `S` (`LANES * 16`).
pub const STATE_BYTES: usize = LANES * BLOCK_BYTES;

type Lane = [u8; BLOCK_BYTES];
type State = [Lane; LANES];

/// Cost parameters for one `phs` call, bundled for callers (such as the
/// demo CLI) that want to carry them around as a unit rather than as four
/// loose arguments.
#[derive(Debug, Clone, Copy)]
pub struct Params {
    pub t_cost: u32,
    pub m_cost: u32,
    pub out_len: usize,
}

/// Computes the Earworm password hash.
///
/// Fills `out` with `out.len()` bytes derived from `secret`, `salt`,
/// `t_cost`, and `m_cost` against the process-wide arena. Requires
/// [`crate::initialize_arena`] to have completed first.
///
/// # Errors
///
/// - [`Error::ArenaUninitialized`] if the arena has not been initialized.
/// - [`Error::InvalidParam`] if `out` is empty, `t_cost == 0`, or
///   `2^m_cost` exceeds the arena's block count.
///
/// On any error, `out` is left unmodified ("output undefined" per the
/// contract — this implementation chooses not to touch it at all).
pub fn phs(out: &mut [u8], secret: &[u8], salt: &[u8], t_cost: u32, m_cost: u32) -> Result<(), Error> {
    let arena = arena::arena()?;
    validate(out, t_cost, m_cost, arena)?;

    let mut state = seed_state(secret, salt)?;
    let mask = (1u64 << m_cost) - 1;

    for _ in 0..t_cost {
        probe_arena(&mut state, arena, mask);
        diffuse_lanes(&mut state);
    }

    let mut state_bytes = [0u8; STATE_BYTES];
    for (chunk, lane) in state_bytes.chunks_exact_mut(BLOCK_BYTES).zip(state.iter()) {
        chunk.copy_from_slice(lane);
    }

    let result = pbkdf2_sha256(secret, &state_bytes, 1, out);

    state.zeroize();
    state_bytes.zeroize();

    result
}

fn validate(out: &[u8], t_cost: u32, m_cost: u32, arena: &Arena) -> Result<(), Error> {
    if out.is_empty() {
        return Err(Error::InvalidParam("phs output length must be >= 1"));
    }
    if t_cost < 1 {
        return Err(Error::InvalidParam("phs t_cost must be >= 1"));
    }
    if m_cost < 1 {
        return Err(Error::InvalidParam("phs m_cost must be >= 1"));
    }
    let max_blocks: u64 = 1u64
        .checked_shl(m_cost)
        .ok_or(Error::InvalidParam("phs m_cost too large"))?;
    if max_blocks > arena.block_count() as u64 {
        return Err(Error::InvalidParam(
            "phs m_cost implies more blocks than the arena holds",
        ));
    }
    Ok(())
}

/// Pre-phase: a single PBKDF2-SHA256 iteration spreads `secret` (salted by
/// `salt`) uniformly across the `LANES` lanes. One iteration is enough —
/// this step exists to domain-separate and distribute, not to cost time;
/// all of the time cost lives in the memory-hard loop.
fn seed_state(secret: &[u8], salt: &[u8]) -> Result<State, Error> {
    let mut seed = [0u8; STATE_BYTES];
    pbkdf2_sha256(secret, salt, 1, &mut seed)?;

    let mut state = [[0u8; BLOCK_BYTES]; LANES];
    for (lane, chunk) in state.iter_mut().zip(seed.chunks_exact(BLOCK_BYTES)) {
        lane.copy_from_slice(chunk);
    }
    seed.zeroize();
    Ok(state)
}

/// Step 1 of the memory-hard loop: each lane independently derives an
/// arena index from its own current bytes, reads that block, and mixes it
/// in via one AES round. Embarrassingly parallel across lanes, but every
/// lane must wait on a large, unpredictable-to-precompute arena read.
fn probe_arena(state: &mut State, arena: &Arena, mask: u64) {
    for lane in state.iter_mut() {
        // Lane is BLOCK_BYTES == 16 long, so the first 8 bytes always exist.
        let first8: [u8; 8] = lane[..8].try_into().unwrap();
        let idx = (be64dec(&first8) & mask) as usize;
        let r = *arena.block(idx);
        aesenc_round(lane, &r);
    }
}

/// Step 2 of the memory-hard loop: each lane is mixed with its neighbor
/// (as of the start of this step) via one more AES round, coupling the
/// lanes so that next round's arena indices depend on all of them —
/// otherwise an attacker could amortize arena fetches across lanes that
/// never interact.
fn diffuse_lanes(state: &mut State) {
    let prev = *state;
    for (lane_idx, lane) in state.iter_mut().enumerate() {
        let neighbor = prev[(lane_idx + 1) % LANES];
        aesenc_round(lane, &neighbor);
    }
}
