// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod bytes_to_hex_tests {
    use sealmac_util::{bytes_to_hex, hex_to_bytes};

    #[test]
    fn test_lowercase_output() {
        assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
    }

    #[test]
    fn test_leading_zero_nibbles() {
        assert_eq!(bytes_to_hex(&[0x00, 0x01, 0x0a, 0xf0]), "00010af0");
    }

    #[test]
    fn test_empty() {
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn test_digest_is_64_chars() {
        let hex = bytes_to_hex(&[0xffu8; 32]);
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c == 'f'));
    }

    #[test]
    fn test_decode_inverts_encode() {
        let bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(hex_to_bytes(&bytes_to_hex(&bytes)), bytes);
    }
}
