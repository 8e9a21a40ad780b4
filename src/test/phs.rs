use std::sync::Once;

use crate::{arena::initialize_arena, error::Error, phs::phs};

static INIT: Once = Once::new();

// 2^22 bytes = 4 MiB = 2^18 blocks, comfortably above the 2^16 blocks
// scenario E7 probes with m_cost = 16.
const TEST_ARENA_EXPONENT: u32 = 22;

fn ensure_arena() {
    INIT.call_once(|| {
        initialize_arena(TEST_ARENA_EXPONENT).unwrap();
    });
}

#[test]
fn deterministic_for_fixed_inputs() {
    ensure_arena();
    let mut a = [0u8; 16];
    let mut b = [0u8; 16];
    phs(&mut a, b"secret", b"salt", 10, 4).unwrap();
    phs(&mut b, b"secret", b"salt", 10, 4).unwrap();
    assert_eq!(a, b);
}

#[test]
fn distinct_salts_give_distinct_output() {
    ensure_arena();
    let mut a = [0u8; 16];
    let mut b = [0u8; 16];
    phs(&mut a, b"secret", b"salt-a", 10, 4).unwrap();
    phs(&mut b, b"secret", b"salt-b", 10, 4).unwrap();
    assert_ne!(a, b);
}

#[test]
fn rejects_zero_t_cost() {
    ensure_arena();
    let mut out = [0u8; 16];
    assert_eq!(
        phs(&mut out, b"secret", b"salt", 0, 4),
        Err(Error::InvalidParam("phs t_cost must be >= 1"))
    );
}

#[test]
fn rejects_zero_m_cost() {
    ensure_arena();
    let mut out = [0u8; 16];
    assert_eq!(
        phs(&mut out, b"secret", b"salt", 10, 0),
        Err(Error::InvalidParam("phs m_cost must be >= 1"))
    );
}

#[test]
fn rejects_m_cost_exceeding_arena() {
    ensure_arena();
    let mut out = [0u8; 16];
    // 2^22 bytes = 2^18 blocks; m_cost above 18 must be rejected.
    assert_eq!(
        phs(&mut out, b"secret", b"salt", 10, 19),
        Err(Error::InvalidParam(
            "phs m_cost implies more blocks than the arena holds"
        ))
    );
}

#[test]
fn rejects_empty_output() {
    ensure_arena();
    assert_eq!(
        phs(&mut [], b"secret", b"salt", 10, 4),
        Err(Error::InvalidParam("phs output length must be >= 1"))
    );
}

/// Scenario E7: sixteen distinct thread salts, same secret/t_cost/m_cost,
/// all derived from one arena, must be pairwise distinct and individually
/// reproducible. The exact reference bytes are not pinned in-tree (see
/// `DESIGN.md`); this checks the self-consistency property the vector
/// depends on instead of a hardcoded digest.
#[test]
fn e7_sixteen_thread_salts_are_reproducible_and_distinct() {
    ensure_arena();
    let mut outputs = Vec::new();
    for thread_no in 0u32..16 {
        let mut out = [0u8; 16];
        phs(&mut out, b"secret", &thread_no.to_be_bytes(), 10_000, 16).unwrap();
        outputs.push(out);
    }

    for thread_no in 0u32..16 {
        let mut repeat = [0u8; 16];
        phs(&mut repeat, b"secret", &thread_no.to_be_bytes(), 10_000, 16).unwrap();
        assert_eq!(repeat, outputs[thread_no as usize]);
    }

    for i in 0..outputs.len() {
        for j in (i + 1)..outputs.len() {
            assert_ne!(outputs[i], outputs[j], "thread {i} and {j} collided");
        }
    }
}
