// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// HMAC-SHA256 error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacError {
    /// Message bit length does not fit in the 64-bit SHA-256 length field
    #[error("input of {len} bytes exceeds the SHA-256 length limit (2^64 - 1 bits)")]
    InputTooLarge {
        /// Length of the rejected input in bytes
        len: usize,
    },
}
