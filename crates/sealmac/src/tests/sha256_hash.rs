// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Test for sha256_digest (full SHA-256 with padding)
//
// References:
// [1] FIPS 180-4: Secure Hash Standard (SHS)
//     https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf
// [2] NIST SHA-256 Examples PDF
//     https://csrc.nist.gov/csrc/media/projects/cryptographic-standards-and-guidelines/documents/examples/SHA256.pdf
// [3] RFC 6234 Section 8.5 test vectors (TEST1, TEST2_1, TEST3)

use sealmac_util::hex_to_bytes;

use crate::compress::ChainingValue;
use crate::sha256::{Digest, sha256, sha256_digest};

fn assert_digest(msg: &[u8], expected_hex: &str) {
    let mut digest: Digest = [0u8; 32];
    sha256_digest(&mut digest, msg).expect("Failed to sha256_digest(..)");

    assert_eq!(
        digest.as_slice(),
        hex_to_bytes(expected_hex).as_slice(),
        "SHA-256 mismatch for {}-byte message",
        msg.len()
    );
}

#[test]
fn test_sha256_hash_empty() {
    assert_digest(
        b"",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    );
}

#[test]
fn test_sha256_hash_abc() {
    assert_digest(
        b"abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    );
}

#[test]
fn test_sha256_hash_56_bytes() {
    // Exactly 56 bytes forces a second block with only padding + length
    let msg = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
    assert_eq!(msg.len(), 56, "Test vector should be 56 bytes");

    assert_digest(
        msg,
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    );
}

#[test]
fn test_sha256_hash_112_bytes() {
    // One full block, then 48 bytes + padding in the second block
    let msg = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
    assert_eq!(msg.len(), 112, "Test vector should be 112 bytes");

    assert_digest(
        msg,
        "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    );
}

#[test]
fn test_sha256_hash_one_million_a() {
    let msg = vec![b'a'; 1_000_000];
    assert_digest(
        &msg,
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    );
}

#[test]
fn test_sha256_from_iv_matches_sha256_digest() {
    let msg = b"the quick brown fox";

    let mut from_iv = [0u8; 32];
    let mut plain = [0u8; 32];
    sha256(&mut from_iv, msg, &ChainingValue::IV).expect("Failed to sha256(..)");
    sha256_digest(&mut plain, msg).expect("Failed to sha256_digest(..)");

    assert_eq!(from_iv, plain);
}

#[test]
fn test_sha256_overwrites_output() {
    let mut digest = [0xffu8; 32];
    sha256_digest(&mut digest, b"").expect("Failed to sha256_digest(..)");

    assert_eq!(
        digest.as_slice(),
        hex_to_bytes("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855").as_slice()
    );
}
