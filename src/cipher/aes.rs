//! AES-256, specified by [FIPS 197](https://doi.org/10.6028/NIST.FIPS.197).
//!
//! Provides three operations: [`aes256enc_keysetup`] (key schedule),
//! [`aes256enc`] (full 14-round block encryption), and [`aesenc_round`]
//! (a single SubBytes/ShiftRows/MixColumns/AddRoundKey round, equivalent
//! to the hardware `AESENC` instruction). The memory-hard loop in
//! [`crate::phs`] only ever uses the single-round primitive; the full
//! block cipher exists to build the [arena](crate::arena).
//!
//! This is a portable, table-driven implementation. A hardware-accelerated
//! path (AES-NI) could be swapped in behind the same three function
//! signatures without any caller-visible change, per the dispatch
//! transparency required of this design; none is implemented here.

use docext::docext;

const WORD_SIZE: usize = 4;
const NB: usize = 4;
const NK: usize = 8;
const NR: usize = 14;
pub const BLOCK_BYTES: usize = NB * WORD_SIZE;
const KEY_BYTES: usize = NK * WORD_SIZE;
const EXPANSION_WORDS: usize = NB * (NR + 1);

/// The expanded AES-256 round key schedule: 15 round keys of 16 bytes
/// each, produced once by [`aes256enc_keysetup`] from a 32-byte user key
/// and immutable thereafter. Cheap to copy.
#[derive(Clone, Copy)]
pub struct Aes256RoundKeys([u8; EXPANSION_WORDS * WORD_SIZE]);

/// The substitution table, defined in Figure 7 of the AES specification.
#[docext]
pub const S_BOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16,
];

/// The round constant word array, defined in Section 5.2 of the AES
/// specification.
pub const RCON: [u8; 15] = [
    0x0, 0x1, 0x2, 0x4, 0x8, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36, 0x6c, 0xd8, 0xab, 0x4d,
];

/// Expands a 32-byte user key into the 15-round AES-256 key schedule,
/// defined in Section 5.2 of the AES specification.
pub fn aes256enc_keysetup(user_key: &[u8; KEY_BYTES]) -> Aes256RoundKeys {
    let mut w = [0u8; EXPANSION_WORDS * WORD_SIZE];
    w[..KEY_BYTES].copy_from_slice(user_key);

    for i in NK..EXPANSION_WORDS {
        let mut temp = [0u8; WORD_SIZE];
        temp.copy_from_slice(&w[(i - 1) * WORD_SIZE..i * WORD_SIZE]);

        if i % NK == 0 {
            temp.rotate_left(1);
            sub_bytes(&mut temp);
            temp[0] ^= RCON[i / NK];
        } else if i % NK == 4 {
            sub_bytes(&mut temp);
        }

        for j in 0..WORD_SIZE {
            w[i * WORD_SIZE + j] = w[(i - NK) * WORD_SIZE + j] ^ temp[j];
        }
    }

    Aes256RoundKeys(w)
}

/// Encrypts one 16-byte block in place under the expanded key, defined in
/// Section 5.1 of the AES specification.
pub fn aes256enc(block: &mut [u8; BLOCK_BYTES], key: &Aes256RoundKeys) {
    add_round_key(block, &key.0, 0);

    for round in 1..NR {
        sub_bytes(block);
        shift_rows(block);
        mix_columns(block);
        add_round_key(block, &key.0, round);
    }

    sub_bytes(block);
    shift_rows(block);
    add_round_key(block, &key.0, NR);
}

/// Performs exactly one AES round — SubBytes, ShiftRows, MixColumns, then
/// XOR with `round_key` — in place. Equivalent to the hardware `AESENC`
/// instruction semantics.
pub fn aesenc_round(state: &mut [u8; BLOCK_BYTES], round_key: &[u8; BLOCK_BYTES]) {
    sub_bytes(state);
    shift_rows(state);
    mix_columns(state);
    for (s, k) in state.iter_mut().zip(round_key.iter()) {
        *s ^= k;
    }
}

fn add_round_key(state: &mut [u8; BLOCK_BYTES], w: &[u8], round: usize) {
    for (s, k) in state
        .iter_mut()
        .zip(&w[round * BLOCK_BYTES..(round + 1) * BLOCK_BYTES])
    {
        *s ^= k;
    }
}

fn sub_bytes(bytes: &mut [u8]) {
    for b in bytes.iter_mut() {
        *b = S_BOX[*b as usize];
    }
}

fn shift_rows(state: &mut [u8; BLOCK_BYTES]) {
    state.swap(1, 13);
    state.swap(5, 9);
    state.swap(1, 9);

    state.swap(2, 10);
    state.swap(6, 14);

    state.swap(3, 7);
    state.swap(11, 15);
    state.swap(3, 11);
}

/// The MixColumns transformation defined in Section 5.1.3 of the AES
/// specification.
///
/// Multiplies each column of the state array (represented as a column
/// vector of $GF(2^8)$ polynomials) by a fixed matrix. The matrix is
/// designed to cause a nonlinear correlation between the elements of the
/// column, mixing them together.
///
/// The multiplications are carried out via [`times_02`] and [`times_03`].
#[docext]
fn mix_columns(state: &mut [u8; BLOCK_BYTES]) {
    let copy = *state;
    for (s, c) in state.chunks_mut(4).zip(copy.chunks(4)) {
        s[0] = times_02(c[0]) ^ times_03(c[1]) ^ c[2] ^ c[3];
        s[1] = c[0] ^ times_02(c[1]) ^ times_03(c[2]) ^ c[3];
        s[2] = c[0] ^ c[1] ^ times_02(c[2]) ^ times_03(c[3]);
        s[3] = times_03(c[0]) ^ c[1] ^ c[2] ^ times_02(c[3]);
    }
}

/// Multiply `b` by `0x02` in the Galois field $GF(2^8)$, per Section 4.2.1
/// of the AES specification: a left shift, conditionally XORed with the
/// reduction polynomial `0x1b` if the high bit was set before the shift.
#[docext]
fn times_02(b: u8) -> u8 {
    let r = b << 1;
    if b & 0x80 != 0 {
        r ^ 0x1b
    } else {
        r
    }
}

fn times_03(b: u8) -> u8 {
    times_02(b) ^ b
}
