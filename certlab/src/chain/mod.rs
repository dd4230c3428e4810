// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Certificate chain types.
//!
//! This module provides the `CertificateChain` type for representing
//! an ordered sequence of certificates from leaf to root. The order is the
//! caller's responsibility; validation walks the sequence as given.

extern crate alloc;

use alloc::vec::Vec;

use crate::certificate::Certificate;
use crate::time::Time;
use crate::validator::{self, ValidationOptions, ValidationResult};

// ============================================================================
// Certificate Chain
// ============================================================================

/// A certificate chain, ordered from leaf (end-entity) to root (trust anchor).
///
/// Chains only grow: certificates are appended and never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateChain {
    certificates: Vec<Certificate>,
}

impl CertificateChain {
    /// Create an empty certificate chain
    pub fn new() -> Self {
        Self {
            certificates: Vec::new(),
        }
    }

    /// Create a chain from certificates already in leaf-to-root order
    pub fn from_certificates(certificates: Vec<Certificate>) -> Self {
        Self { certificates }
    }

    /// Create a chain with a single certificate
    pub fn single(cert: Certificate) -> Self {
        Self {
            certificates: alloc::vec![cert],
        }
    }

    /// Append a certificate after the current last one
    pub fn add_certificate(&mut self, cert: Certificate) {
        self.certificates.push(cert);
    }

    /// Get the leaf (end-entity) certificate
    pub fn leaf(&self) -> Option<&Certificate> {
        self.certificates.first()
    }

    /// Get the last certificate, which must be the root for a trusted chain
    pub fn root(&self) -> Option<&Certificate> {
        self.certificates.last()
    }

    /// Get the certificates in leaf-to-root order
    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    /// Get the chain length
    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    /// Check if the chain is empty
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    /// Get an iterator over the certificates
    pub fn iter(&self) -> core::slice::Iter<'_, Certificate> {
        self.certificates.iter()
    }

    /// Validate the chain as of `now`.
    ///
    /// With `trust_server_certificate` set only the validity windows are
    /// checked; issuer links and the root anchor are skipped.
    pub fn validate_at(&self, now: Time, trust_server_certificate: bool) -> ValidationResult {
        let options =
            ValidationOptions::new().with_trust_server_certificate(trust_server_certificate);
        validator::validate_chain_at(self, now, &options).into()
    }

    /// Validate the chain against the system clock.
    #[cfg(feature = "std")]
    pub fn validate(&self, trust_server_certificate: bool) -> ValidationResult {
        self.validate_at(crate::time::current_time(), trust_server_certificate)
    }
}

impl Extend<Certificate> for CertificateChain {
    fn extend<T: IntoIterator<Item = Certificate>>(&mut self, iter: T) {
        for cert in iter {
            self.add_certificate(cert);
        }
    }
}

impl FromIterator<Certificate> for CertificateChain {
    fn from_iter<T: IntoIterator<Item = Certificate>>(iter: T) -> Self {
        Self::from_certificates(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CertificateChain {
    type Item = &'a Certificate;
    type IntoIter = core::slice::Iter<'a, Certificate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
