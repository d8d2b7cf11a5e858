// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use sealmac::MacError;
use thiserror::Error;

/// CLI error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Positional message argument missing
    #[error("usage: {program} <message>")]
    Usage {
        /// Name the binary was invoked as
        program: String,
    },

    /// Hashing core rejected the input
    #[error(transparent)]
    Mac(#[from] MacError),
}
