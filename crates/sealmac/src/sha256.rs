// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 Merkle–Damgård hashing per FIPS 180-4 Sections 5.1.1 and 6.2

use zeroize::Zeroize;

use crate::compress::{ChainingValue, block_from_bytes};
use crate::consts::{BLOCK_LEN, HASH_LEN, LEN_FIELD};
use crate::error::MacError;

/// SHA-256 digest (32 bytes)
pub type Digest = [u8; HASH_LEN];

/// Fold every complete block of `data` into `cv`.
///
/// Returns the new chaining value and the trailing partial block (0..63 bytes).
pub(crate) fn absorb_blocks<'a>(
    cv: ChainingValue,
    data: &'a [u8],
    scratch: &mut [u8; BLOCK_LEN],
) -> (ChainingValue, &'a [u8]) {
    let mut cv = cv;
    let mut blocks = data.chunks_exact(BLOCK_LEN);

    for chunk in &mut blocks {
        scratch.copy_from_slice(chunk);
        cv = cv.absorb(block_from_bytes(scratch));
    }
    scratch.zeroize();

    (cv, blocks.remainder())
}

/// Total bit length covered by the final length field.
///
/// Counts the blocks already behind `initial` plus `len` message bytes.
fn total_bit_len(initial: &ChainingValue, len: usize) -> Result<u64, MacError> {
    u64::try_from(len)
        .ok()
        .and_then(|len| {
            initial
                .blocks()
                .checked_mul(BLOCK_LEN as u64)
                .and_then(|prefix| prefix.checked_add(len))
        })
        .and_then(|total| total.checked_mul(8))
        .ok_or(MacError::InputTooLarge { len })
}

/// SHA-256 of `message`, continuing from the chaining value `initial`.
///
/// With [`ChainingValue::IV`] this is plain SHA-256. With a precomputed
/// chaining value the result equals SHA-256 of the absorbed prefix followed by
/// `message`.
///
/// # Errors
/// Returns [`MacError::InputTooLarge`] if the total bit length overflows `u64`.
pub fn sha256(
    out: &mut Digest,
    message: &[u8],
    initial: &ChainingValue,
) -> Result<(), MacError> {
    let bit_len = total_bit_len(initial, message.len())?;

    let mut tail = [0u8; BLOCK_LEN];
    let (mut cv, rem) = absorb_blocks(*initial, message, &mut tail);

    // Padding: rem || 0x80 || 0x00.. || bit_len (big-endian)
    tail[..rem.len()].copy_from_slice(rem);
    tail[rem.len()] = 0x80;

    // No room for the length field: flush and start an all-zero block
    if rem.len() >= BLOCK_LEN - LEN_FIELD {
        cv = cv.absorb(block_from_bytes(&tail));
        tail.zeroize();
    }

    tail[BLOCK_LEN - LEN_FIELD..].copy_from_slice(&bit_len.to_be_bytes());
    cv = cv.absorb(block_from_bytes(&tail));
    tail.zeroize();

    // Output H(N) big-endian
    for (bytes, word) in out.chunks_exact_mut(4).zip(cv.state().iter()) {
        bytes.copy_from_slice(&word.to_be_bytes());
    }
    cv.zeroize();

    Ok(())
}

/// Plain SHA-256 of `message` (starts from H(0))
///
/// # Errors
/// Returns [`MacError::InputTooLarge`] if `message.len() * 8` overflows `u64`.
pub fn sha256_digest(out: &mut Digest, message: &[u8]) -> Result<(), MacError> {
    sha256(out, message, &ChainingValue::IV)
}
