// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Command-line front end: HMAC-SHA256 of one argument under the fixed key.
//!
//! Prints the MAC as 64 lowercase hex characters. A missing argument is a
//! usage error (exit code 1) rather than a crash.

#![warn(missing_docs)]

mod error;

use std::ffi::{OsStr, OsString};

use sealmac::sha256_hmac;
use sealmac_util::bytes_to_hex;

pub use error::CliError;

const DEFAULT_PROGRAM: &str = "sealmac";

/// Raw bytes of an argument; lossy outside Unix
#[cfg(unix)]
fn arg_bytes(arg: &OsStr) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;

    arg.as_bytes().to_vec()
}

/// Raw bytes of an argument; lossy outside Unix
#[cfg(not(unix))]
fn arg_bytes(arg: &OsStr) -> Vec<u8> {
    arg.to_string_lossy().into_owned().into_bytes()
}

/// Compute the hex MAC line for a full argument vector (program name first).
///
/// Extra arguments after the message are ignored.
///
/// # Errors
/// - [`CliError::Usage`] if no message argument is present
/// - [`CliError::Mac`] if the hashing core rejects the message
pub fn run<I>(args: I) -> Result<String, CliError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let program = args
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_owned());

    let message = args.next().ok_or(CliError::Usage { program })?;

    let mut mac = [0u8; 32];
    sha256_hmac(&mut mac, &arg_bytes(&message))?;

    Ok(bytes_to_hex(&mac))
}
