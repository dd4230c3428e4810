// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

#![no_main]

use libfuzzer_sys::fuzz_target;

use certlab::{Certificate, CertificateChain, Time};

const NAMES: [&str; 4] = ["Root CA", "Intermediate CA", "example.com", "Unknown CA"];

fn read_i64(bytes: &[u8]) -> i64 {
    let mut buf = [0u8; 8];
    let n = bytes.len().min(8);
    buf[..n].copy_from_slice(&bytes[..n]);
    i64::from_le_bytes(buf)
}

// Each 19-byte record is: subject index, issuer index, root flag,
// valid_from (8 bytes), valid_to (8 bytes). The first 8 bytes are "now".
fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let now = Time::from_unix_secs(read_i64(&data[..8]));

    let mut chain = CertificateChain::new();
    for record in data[8..].chunks(19) {
        if record.len() < 3 {
            break;
        }
        let subject = NAMES[record[0] as usize % NAMES.len()];
        let issuer = NAMES[record[1] as usize % NAMES.len()];
        let is_root = record[2] & 1 == 1;
        let from = Time::from_unix_secs(read_i64(record.get(3..11).unwrap_or(&[])));
        let to = Time::from_unix_secs(read_i64(record.get(11..).unwrap_or(&[])));
        chain.add_certificate(Certificate::new(subject, issuer, from, to, is_root, "fuzz"));
    }

    let strict = chain.validate_at(now, false);
    let bypass = chain.validate_at(now, true);

    // Anything strict mode accepts, the bypass accepts too.
    if strict.is_valid() {
        assert!(bypass.is_valid());
    }
    if let Some(err) = bypass.error() {
        assert_eq!(strict.error(), Some(err));
    }
    let _ = strict.message();
});
