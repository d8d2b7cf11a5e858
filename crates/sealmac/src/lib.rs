// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256 with precomputed key chaining values
//!
//! Implementation per FIPS 180-4 (SHA-256) and RFC 2104 (HMAC).
//! A key occupies exactly one 64-byte block after RFC 2104 normalization, so
//! the chaining values left behind by `K ⊕ ipad` and `K ⊕ opad` can be
//! computed once per key and reused for every message.
//!
//! Layers, bottom-up:
//! - [`transform()`]: SHA-256 compression of one block (`const fn`)
//! - [`sha256()`]: Merkle–Damgård padding and finalization from any chaining value
//! - [`HmacKey`]: inner/outer composition over the precomputed pad states
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod compress;
mod consts;
mod error;
mod hmac;
mod sha256;
mod word32;

pub use compress::{Block, ChainingValue, State, block_from_bytes, transform};
pub use consts::{BLOCK_LEN, DEFAULT_KEY, HASH_LEN, IPAD, IV, K256, OPAD};
pub use error::MacError;
pub use hmac::{DEFAULT_HMAC_KEY, HmacKey, hmac_sha256, sha256_hmac};
pub use sha256::{Digest, sha256, sha256_digest};
