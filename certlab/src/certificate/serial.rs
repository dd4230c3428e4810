// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Serial number generation.
//!
//! A serial is 16 bytes printed as 32 lowercase hex digits. The first eight
//! bytes are a process-wide sequence number, the last eight come from the
//! system RNG, so two serials minted by one process never collide and
//! serials from different processes are unlikely to.

extern crate alloc;

use alloc::string::String;
use core::fmt::Write;
use core::sync::atomic::{AtomicU64, Ordering};

use ring::rand::{SecureRandom, SystemRandom};

use crate::time::Time;

/// Serial length in bytes
pub const SERIAL_LEN: usize = 16;

static SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Mint a fresh serial number.
///
/// Never fails: if the RNG is unavailable the random half is replaced by
/// `now`, which keeps the value unique within the process.
pub fn generate(now: Time) -> String {
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);

    let mut entropy = [0u8; 8];
    if SystemRandom::new().fill(&mut entropy).is_err() {
        log::warn!("serial: system RNG unavailable, using timestamp instead");
        entropy = now.unix_secs().to_be_bytes();
    }

    let mut bytes = [0u8; SERIAL_LEN];
    bytes[..8].copy_from_slice(&sequence.to_be_bytes());
    bytes[8..].copy_from_slice(&entropy);
    to_hex(&bytes)
}

fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // Writing to a String cannot fail.
        let _ = write!(out, "{:02x}", b);
    }
    out
}
