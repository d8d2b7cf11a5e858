// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 block transform per FIPS 180-4 Section 6.2.2

use zeroize::Zeroize;

use crate::consts::{BLOCK_LEN, IV, K256};
use crate::word32::{bsig0, bsig1, ch, maj, ssig0, ssig1};

/// Running hash value H(i): eight 32-bit words
pub type State = [u32; 8];

/// One 512-bit message block as sixteen big-endian decoded words
pub type Block = [u32; 16];

/// Load a 64-byte block as big-endian words.
///
/// Word order and byte order follow FIPS 180-4 regardless of host endianness.
pub const fn block_from_bytes(bytes: &[u8; BLOCK_LEN]) -> Block {
    let mut block = [0u32; 16];
    let mut t = 0;
    while t < 16 {
        block[t] = u32::from_be_bytes([
            bytes[4 * t],
            bytes[4 * t + 1],
            bytes[4 * t + 2],
            bytes[4 * t + 3],
        ]);
        t += 1;
    }
    block
}

/// SHA-256 compression function (single block)
///
/// Expands `block` into the 64-word message schedule, runs 64 rounds over a
/// copy of `state` and adds the result back into `state` (feed-forward).
/// Total and side-effect free, so usable in constant evaluation.
pub const fn transform(state: State, block: Block) -> State {
    // Step 1: Prepare message schedule W[0..63]
    let mut w = [0u32; 64];
    let mut t = 0;
    while t < 16 {
        w[t] = block[t];
        t += 1;
    }

    // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
    while t < 64 {
        w[t] = ssig1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(ssig0(w[t - 15]))
            .wrapping_add(w[t - 16]);
        t += 1;
    }

    // Step 2: Working variables a..h
    let mut wv = state;

    // Step 3: 64 rounds
    t = 0;
    while t < 64 {
        // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
        let t1 = wv[7]
            .wrapping_add(bsig1(wv[4]))
            .wrapping_add(ch(wv[4], wv[5], wv[6]))
            .wrapping_add(K256[t])
            .wrapping_add(w[t]);

        // T2 = Σ0(a) + Maj(a,b,c)
        let t2 = bsig0(wv[0]).wrapping_add(maj(wv[0], wv[1], wv[2]));

        // h=g, g=f, f=e, e=d+T1, d=c, c=b, b=a, a=T1+T2
        wv = [
            t1.wrapping_add(t2),
            wv[0],
            wv[1],
            wv[2],
            wv[3].wrapping_add(t1),
            wv[4],
            wv[5],
            wv[6],
        ];
        t += 1;
    }

    // Step 4: H(i) = H(i-1) + working variables
    let mut out = [0u32; 8];
    let mut i = 0;
    while i < 8 {
        out[i] = state[i].wrapping_add(wv[i]);
        i += 1;
    }
    out
}

/// Chaining value between blocks: the running state plus the number of
/// 64-byte blocks already folded into it.
///
/// The block count feeds the length field at finalization, so hashing from a
/// precomputed chaining value still encodes the full message length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub struct ChainingValue {
    state: State,
    blocks: u64,
}

impl ChainingValue {
    /// Chaining value before any input: H(0), zero blocks
    pub const IV: Self = Self::new(IV, 0);

    /// Create chaining value from a state and the number of blocks behind it
    pub const fn new(state: State, blocks: u64) -> Self {
        Self { state, blocks }
    }

    /// Fold one block into the chaining value
    pub const fn absorb(self, block: Block) -> Self {
        Self {
            state: transform(self.state, block),
            blocks: self.blocks + 1,
        }
    }

    /// Running state
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Number of blocks already absorbed
    pub const fn blocks(&self) -> u64 {
        self.blocks
    }
}
