//! HMAC-SHA-256, specified by [RFC 2104](https://www.rfc-editor.org/rfc/rfc2104)
//! and instantiated with SHA-256 as in [RFC
//! 4231](https://www.rfc-editor.org/rfc/rfc4231).
//!
//! $$
//! \mathrm{HMAC}(K, m) = H\big((K' \oplus opad) \parallel H((K' \oplus
//! ipad) \parallel m)\big)
//! $$
//!
//! where $K'$ is the key padded (or hashed down, if oversized) to the
//! hash's 64-byte block size.

use zeroize::Zeroize;

use crate::hash::sha256::Sha256;

const BLOCK_BYTES: usize = 64;
const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Streaming HMAC-SHA-256 context.
///
/// Holds an inner and an outer SHA-256 context, each already seeded with
/// the padded key, matching the data model of `HMAC_SHA256_CTX`. `update`
/// feeds the message into the inner context; `final_tag` consumes the
/// context.
pub struct HmacSha256 {
    inner: Sha256,
    outer: Sha256,
}

impl HmacSha256 {
    /// Accepts a key of any length: keys longer than the 64-byte block are
    /// first hashed down; shorter keys are zero-padded.
    pub fn new(key: &[u8]) -> Self {
        let mut k = [0u8; BLOCK_BYTES];
        if key.len() <= BLOCK_BYTES {
            k[..key.len()].copy_from_slice(key);
        } else {
            let digest = crate::hash::sha256::sha256(key);
            k[..digest.len()].copy_from_slice(&digest);
        }

        let mut inner = Sha256::new();
        let mut inner_pad = [0u8; BLOCK_BYTES];
        for (p, k) in inner_pad.iter_mut().zip(k.iter()) {
            *p = k ^ IPAD;
        }
        inner.update(&inner_pad);
        inner_pad.zeroize();

        let mut outer = Sha256::new();
        let mut outer_pad = [0u8; BLOCK_BYTES];
        for (p, k) in outer_pad.iter_mut().zip(k.iter()) {
            *p = k ^ OPAD;
        }
        outer.update(&outer_pad);
        outer_pad.zeroize();

        k.zeroize();
        Self { inner, outer }
    }

    /// Feeds `data` into the running MAC. May be called any number of
    /// times.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finalizes the MAC, consuming the context.
    pub fn final_tag(self) -> [u8; 32] {
        let mut inner_digest = self.inner.final_digest();
        let mut outer = self.outer;
        outer.update(&inner_digest);
        inner_digest.zeroize();
        outer.final_digest()
    }
}

/// One-shot convenience wrapper for callers with the whole message in
/// memory.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; 32] {
    let mut ctx = HmacSha256::new(key);
    ctx.update(data);
    ctx.final_tag()
}
