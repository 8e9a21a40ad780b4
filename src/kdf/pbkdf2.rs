//! PBKDF2 with HMAC-SHA-256 as the pseudorandom function, specified by
//! [RFC 8018](https://www.rfc-editor.org/rfc/rfc8018).
//!
//! $$
//! \mathrm{DK} = T_1 \parallel T_2 \parallel \cdots \parallel T_{\lceil
//! \mathrm{dkLen} / \mathrm{hLen} \rceil}
//! $$
//!
//! where each block $T_i = F(P, S, c, i)$ is the XOR of `c` successive
//! HMAC evaluations seeded by the block index, and the final block is
//! truncated to fill exactly `dkLen` bytes.

use zeroize::Zeroize;

use crate::{error::Error, mac::hmac::HmacSha256};

const HLEN: usize = 32;

/// Derives `out.len()` bytes into `out` from `secret` and `salt` using
/// `iterations` rounds of HMAC-SHA-256.
///
/// `iterations` must be at least 1 and `out` must be non-empty; otherwise
/// this fails with [`Error::InvalidParam`] and leaves `out` untouched.
pub fn pbkdf2_sha256(
    secret: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), Error> {
    if iterations < 1 {
        return Err(Error::InvalidParam("pbkdf2 iterations must be >= 1"));
    }
    if out.is_empty() {
        return Err(Error::InvalidParam("pbkdf2 output length must be >= 1"));
    }

    for (i, chunk) in out.chunks_mut(HLEN).enumerate() {
        let block_index = u32::try_from(i + 1).map_err(|_| {
            Error::InvalidParam("pbkdf2 output length implies too many blocks")
        })?;
        let t = f(secret, salt, iterations, block_index);
        chunk.copy_from_slice(&t[..chunk.len()]);
    }

    Ok(())
}

/// Computes $F(P, S, c, i) = U_1 \oplus U_2 \oplus \cdots \oplus U_c$,
/// where $U_1 = \mathrm{HMAC}(P, S \parallel \mathrm{BE32}(i))$ and $U_j =
/// \mathrm{HMAC}(P, U_{j-1})$ for $j > 1$.
fn f(secret: &[u8], salt: &[u8], iterations: u32, block_index: u32) -> [u8; HLEN] {
    let mut salt_and_index = Vec::with_capacity(salt.len() + 4);
    salt_and_index.extend_from_slice(salt);
    salt_and_index.extend_from_slice(&block_index.to_be_bytes());

    let mut u = {
        let mut ctx = HmacSha256::new(secret);
        ctx.update(&salt_and_index);
        ctx.final_tag()
    };
    let mut t = u;

    for _ in 1..iterations {
        let mut ctx = HmacSha256::new(secret);
        ctx.update(&u);
        u = ctx.final_tag();
        for (t, u) in t.iter_mut().zip(u.iter()) {
            *t ^= u;
        }
    }

    salt_and_index.zeroize();
    u.zeroize();

    t
}
