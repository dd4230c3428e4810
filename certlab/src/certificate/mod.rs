// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Certificate value type and its named constructors.
//!
//! A [`Certificate`] carries an identity (`subject`), an issuer claim, a
//! validity window, a root flag and an informational serial number. Nothing
//! is checked when a certificate is built: an issuer that names nobody or a
//! window that ends before it starts is legal to construct and is only
//! caught when a chain containing it is validated.
//!
//! # Examples
//!
//! ```
//! use certlab::{Certificate, Time};
//!
//! let now = Time::from_unix_secs(1_700_000_000);
//! let root = Certificate::create_root_ca_at(now, "Root CA");
//! let leaf = Certificate::create_leaf_at(now, &root, "example.com");
//!
//! assert!(root.is_root());
//! assert_eq!(root.issuer(), root.subject());
//! assert_eq!(leaf.issuer(), "Root CA");
//! assert_eq!(leaf.valid_to(), now.add_days(365));
//! ```

pub mod serial;

extern crate alloc;

use alloc::string::String;
use core::fmt;

use crate::time::{Time, Validity};

/// Default subject for a root CA
pub const DEFAULT_ROOT_CA_NAME: &str = "Root CA";
/// Default subject for an intermediate CA
pub const DEFAULT_INTERMEDIATE_NAME: &str = "Intermediate CA";
/// Default subject for a leaf
pub const DEFAULT_LEAF_NAME: &str = "example.com";

/// Lifetime of a certificate minted by [`Certificate::create_root_ca`]
pub const ROOT_CA_VALIDITY_DAYS: i64 = 3650;
/// Lifetime of a certificate minted by [`Certificate::create_intermediate`]
pub const INTERMEDIATE_VALIDITY_DAYS: i64 = 730;
/// Lifetime of a certificate minted by [`Certificate::create_leaf`]
pub const LEAF_VALIDITY_DAYS: i64 = 365;

// ============================================================================
// Certificate Role
// ============================================================================

/// Position-derived role of a certificate, used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateRole {
    /// Self-signed trust anchor
    Root,
    /// Non-root certificate after the first position
    Intermediate,
    /// First certificate of the sequence
    Leaf,
}

impl CertificateRole {
    /// Get a human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Root => "Root",
            Self::Intermediate => "Intermediate",
            Self::Leaf => "Leaf",
        }
    }
}

impl fmt::Display for CertificateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Certificate
// ============================================================================

/// An immutable certificate.
///
/// Fields are read through accessors; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    subject: String,
    issuer: String,
    validity: Validity,
    is_root: bool,
    serial_number: String,
}

impl Certificate {
    /// Create a certificate from raw field values.
    ///
    /// No consistency checks are applied. This is how deliberately broken
    /// certificates (wrong issuer, expired, impostor roots) are built.
    pub fn new<S, I, N>(
        subject: S,
        issuer: I,
        valid_from: Time,
        valid_to: Time,
        is_root: bool,
        serial_number: N,
    ) -> Self
    where
        S: Into<String>,
        I: Into<String>,
        N: Into<String>,
    {
        Self {
            subject: subject.into(),
            issuer: issuer.into(),
            validity: Validity::new(valid_from, valid_to),
            is_root,
            serial_number: serial_number.into(),
        }
    }

    /// Create a self-signed root CA valid for ten years from `now`.
    pub fn create_root_ca_at(now: Time, name: &str) -> Self {
        let validity = Validity::starting_at(now, ROOT_CA_VALIDITY_DAYS);
        Self::new(
            name,
            name,
            validity.not_before,
            validity.not_after,
            true,
            serial::generate(now),
        )
    }

    /// Create an intermediate CA issued by `issuer`, valid for two years from `now`.
    pub fn create_intermediate_at(now: Time, issuer: &Certificate, name: &str) -> Self {
        Self::issued_by(now, issuer, name, INTERMEDIATE_VALIDITY_DAYS)
    }

    /// Create a leaf issued by `issuer`, valid for one year from `now`.
    pub fn create_leaf_at(now: Time, issuer: &Certificate, name: &str) -> Self {
        Self::issued_by(now, issuer, name, LEAF_VALIDITY_DAYS)
    }

    fn issued_by(now: Time, issuer: &Certificate, name: &str, days: i64) -> Self {
        let validity = Validity::starting_at(now, days);
        Self::new(
            name,
            issuer.subject.as_str(),
            validity.not_before,
            validity.not_after,
            false,
            serial::generate(now),
        )
    }

    /// Create a root CA starting at the current system time.
    #[cfg(feature = "std")]
    pub fn create_root_ca(name: &str) -> Self {
        Self::create_root_ca_at(crate::time::current_time(), name)
    }

    /// Create an intermediate CA starting at the current system time.
    #[cfg(feature = "std")]
    pub fn create_intermediate(issuer: &Certificate, name: &str) -> Self {
        Self::create_intermediate_at(crate::time::current_time(), issuer, name)
    }

    /// Create a leaf starting at the current system time.
    #[cfg(feature = "std")]
    pub fn create_leaf(issuer: &Certificate, name: &str) -> Self {
        Self::create_leaf_at(crate::time::current_time(), issuer, name)
    }

    /// Get the subject identity.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Get the issuer identity claim.
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Get the validity period.
    pub fn validity(&self) -> &Validity {
        &self.validity
    }

    /// Start of the validity window.
    pub fn valid_from(&self) -> Time {
        self.validity.not_before
    }

    /// End of the validity window.
    pub fn valid_to(&self) -> Time {
        self.validity.not_after
    }

    /// Check if this certificate is marked as a trust anchor.
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Get the serial number.
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// Check if subject and issuer are the same string.
    pub fn is_self_issued(&self) -> bool {
        self.subject == self.issuer
    }

    /// Classify this certificate by its position in a leaf-first sequence.
    ///
    /// The root flag wins. Otherwise index 0 is the leaf and anything after
    /// it is an intermediate.
    pub fn role_in(&self, index: usize) -> CertificateRole {
        if self.is_root {
            CertificateRole::Root
        } else if index == 0 {
            CertificateRole::Leaf
        } else {
            CertificateRole::Intermediate
        }
    }
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Certificate:")?;
        writeln!(f, "  Serial Number: {}", self.serial_number)?;
        writeln!(f, "  Issuer: {}", self.issuer)?;
        writeln!(f, "  Validity:")?;
        writeln!(f, "    Not Before: {}", self.validity.not_before)?;
        writeln!(f, "    Not After: {}", self.validity.not_after)?;
        writeln!(f, "  Subject: {}", self.subject)?;
        writeln!(f, "  Root: {}", self.is_root)
    }
}

// ============================================================================
// Tests
// ============================================================================
