// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hex helpers for digest output and test fixtures.
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

use alloc::string::String;
#[cfg(feature = "test-utils")]
use alloc::vec::Vec;

const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";

/// Lowercase hex string of `bytes`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        hex.push(HEX_LOWER[(byte >> 4) as usize] as char);
        hex.push(HEX_LOWER[(byte & 0x0f) as usize] as char);
    }
    hex
}

/// Decode a hex string (either case) into bytes.
///
/// Test fixture helper.
///
/// # Panics
/// Panics on odd length or non-hex characters.
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    fn nibble(c: u8) -> u8 {
        match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            b'A'..=b'F' => c - b'A' + 10,
            _ => panic!("invalid hex character: {:?}", c as char),
        }
    }

    let hex = hex.as_bytes();
    assert!(hex.len() % 2 == 0, "hex string has odd length");

    hex.chunks_exact(2)
        .map(|pair| (nibble(pair[0]) << 4) | nibble(pair[1]))
        .collect()
}
