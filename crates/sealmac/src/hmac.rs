// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256 per RFC 2104

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::compress::{ChainingValue, block_from_bytes};
use crate::consts::{BLOCK_LEN, DEFAULT_KEY, HASH_LEN, IPAD, OPAD};
use crate::error::MacError;
use crate::sha256::{Digest, sha256};

/// HMAC-SHA256 key, stored as the chaining values left after absorbing
/// `K ⊕ ipad` (inner) and `K ⊕ opad` (outer).
///
/// Both pads are exactly one block, so these replace hashing the pad block on
/// every call. Pad states are zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct HmacKey {
    pub(crate) inner: ChainingValue,
    pub(crate) outer: ChainingValue,
}

/// Pad states for [`DEFAULT_KEY`], folded at compile time
pub static DEFAULT_HMAC_KEY: HmacKey = HmacKey::from_block(&DEFAULT_KEY);

/// XOR every byte of `key` with `pad`
const fn xor_pad(key: &[u8; BLOCK_LEN], pad: u8) -> [u8; BLOCK_LEN] {
    let mut out = [0u8; BLOCK_LEN];
    let mut i = 0;
    while i < BLOCK_LEN {
        out[i] = key[i] ^ pad;
        i += 1;
    }
    out
}

impl HmacKey {
    /// Derive pad states from a key that is exactly one block long.
    ///
    /// `State0 = transform(IV, K ⊕ ipad)`, `State1 = transform(IV, K ⊕ opad)`.
    pub const fn from_block(key: &[u8; BLOCK_LEN]) -> Self {
        let k_ipad = xor_pad(key, IPAD);
        let k_opad = xor_pad(key, OPAD);

        Self {
            inner: ChainingValue::IV.absorb(block_from_bytes(&k_ipad)),
            outer: ChainingValue::IV.absorb(block_from_bytes(&k_opad)),
        }
    }

    /// Derive pad states from a key of any length.
    ///
    /// Keys longer than one block are replaced by their SHA-256 digest; shorter
    /// keys are zero-padded to one block (RFC 2104 Section 2).
    ///
    /// # Errors
    /// Returns [`MacError::InputTooLarge`] if a long key cannot be hashed.
    pub fn new(key: &[u8]) -> Result<Self, MacError> {
        let mut key_block = [0u8; BLOCK_LEN];

        if key.len() > BLOCK_LEN {
            let mut hashed_key = [0u8; HASH_LEN];
            let hashed = sha256(&mut hashed_key, key, &ChainingValue::IV);
            key_block[..HASH_LEN].copy_from_slice(&hashed_key);
            hashed_key.zeroize();
            if let Err(err) = hashed {
                key_block.zeroize();
                return Err(err);
            }
        } else {
            key_block[..key.len()].copy_from_slice(key);
        }

        let hmac_key = Self::from_block(&key_block);
        key_block.zeroize();

        Ok(hmac_key)
    }

    /// HMAC-SHA256 of `message` under this key.
    ///
    /// Inner digest from the ipad state over `message`, then outer digest from
    /// the opad state over the 32-byte inner digest.
    ///
    /// # Errors
    /// Returns [`MacError::InputTooLarge`] if `message` is too long to hash.
    pub fn mac(&self, out: &mut Digest, message: &[u8]) -> Result<(), MacError> {
        let mut inner_hash = [0u8; HASH_LEN];

        let result = sha256(&mut inner_hash, message, &self.inner)
            .and_then(|()| sha256(out, &inner_hash, &self.outer));

        inner_hash.zeroize();
        result
    }
}

/// HMAC-SHA256 of `message` under the fixed [`DEFAULT_KEY`]
///
/// # Errors
/// Returns [`MacError::InputTooLarge`] if `message` is too long to hash.
pub fn sha256_hmac(out: &mut Digest, message: &[u8]) -> Result<(), MacError> {
    DEFAULT_HMAC_KEY.mac(out, message)
}

/// One-shot HMAC-SHA256 with a caller-supplied key of any length
///
/// # Errors
/// Returns [`MacError::InputTooLarge`] if the key or message is too long to hash.
pub fn hmac_sha256(key: &[u8], message: &[u8], out: &mut Digest) -> Result<(), MacError> {
    HmacKey::new(key)?.mac(out, message)
}
