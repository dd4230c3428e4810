// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Certificate chain validation.
//!
//! Validation runs in a fixed order and stops at the first failure:
//!
//! 1. the chain must not be empty;
//! 2. every certificate, leaf to root, must be inside its validity window;
//! 3. with `trust_server_certificate` set, the chain is accepted here;
//! 4. each certificate's issuer must equal the next certificate's subject;
//! 5. the last certificate must be a root.
//!
//! Step 3 models the "trust server certificate" connection option found in
//! database drivers and HTTP clients. Dates are still enforced, but any
//! self-made certificate with a current window is accepted, which is what
//! makes the option dangerous outside development.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;

use crate::certificate::Certificate;
use crate::chain::CertificateChain;
use crate::error::{Error, Result};
#[cfg(feature = "std")]
use crate::time::SystemTimeSource;
use crate::time::{Time, TimeSource};

// ============================================================================
// Validation Options
// ============================================================================

/// Options for chain validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Accept any date-valid chain without walking issuer links or
    /// requiring a root anchor
    pub trust_server_certificate: bool,
}

impl ValidationOptions {
    /// Create a new ValidationOptions with all checks enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trust-server-certificate bypass
    pub fn with_trust_server_certificate(mut self, enabled: bool) -> Self {
        self.trust_server_certificate = enabled;
        self
    }

    /// Enable the trust-server-certificate bypass
    pub fn trust_server_certificate(self) -> Self {
        self.with_trust_server_certificate(true)
    }
}

// ============================================================================
// Validation Result
// ============================================================================

/// How a chain was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// Every link and the root anchor were checked
    ChainVerified,

    /// Dates passed and the rest was skipped by the bypass
    TrustBypassed,
}

impl Acceptance {
    /// Message reported for this acceptance
    pub fn message(&self) -> &'static str {
        match self {
            Acceptance::ChainVerified => "Valid certificate chain",
            Acceptance::TrustBypassed => {
                "Valid (Trust Server Certificate enabled - chain validation skipped)"
            }
        }
    }
}

impl fmt::Display for Acceptance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of validating a chain: pass or fail plus a readable reason.
///
/// Failures are ordinary values here, not errors to propagate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    outcome: Result<Acceptance>,
}

impl ValidationResult {
    /// Wrap a validation outcome
    pub fn new(outcome: Result<Acceptance>) -> Self {
        Self { outcome }
    }

    /// Whether the chain was accepted
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The reason, one of the fixed message templates
    pub fn message(&self) -> String {
        match &self.outcome {
            Ok(acceptance) => acceptance.message().to_string(),
            Err(err) => err.to_string(),
        }
    }

    /// How the chain was accepted, if it was
    pub fn acceptance(&self) -> Option<Acceptance> {
        self.outcome.as_ref().ok().copied()
    }

    /// Why the chain was rejected, if it was
    pub fn error(&self) -> Option<&Error> {
        self.outcome.as_ref().err()
    }

    /// Borrow the underlying outcome
    pub fn outcome(&self) -> &Result<Acceptance> {
        &self.outcome
    }

    /// Consume into the underlying outcome
    pub fn into_outcome(self) -> Result<Acceptance> {
        self.outcome
    }

    /// Consume into the `(valid, message)` pair
    pub fn into_pair(self) -> (bool, String) {
        (self.is_valid(), self.message())
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(acceptance) => write!(f, "{}", acceptance),
            Err(err) => write!(f, "{}", err),
        }
    }
}

impl From<Result<Acceptance>> for ValidationResult {
    fn from(outcome: Result<Acceptance>) -> Self {
        Self::new(outcome)
    }
}

impl From<ValidationResult> for (bool, String) {
    fn from(result: ValidationResult) -> Self {
        result.into_pair()
    }
}

// ============================================================================
// Validator
// ============================================================================

/// Chain validator bound to a clock.
pub struct Validator<C: TimeSource> {
    /// Where `now` comes from for each validation
    clock: C,
}

#[cfg(feature = "std")]
impl Validator<SystemTimeSource> {
    /// Create a new Validator reading the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemTimeSource)
    }
}

#[cfg(feature = "std")]
impl Default for Validator<SystemTimeSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TimeSource> Validator<C> {
    /// Create a new Validator with a specific clock
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// The clock this validator reads
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Validate a chain, returning the acceptance kind or the first failure.
    pub fn validate_chain(
        &self,
        chain: &CertificateChain,
        options: &ValidationOptions,
    ) -> Result<Acceptance> {
        let now = self.clock.now();
        validate_chain_at(chain, now, options)
    }

    /// Validate a chain into a [`ValidationResult`].
    pub fn validate(
        &self,
        chain: &CertificateChain,
        options: &ValidationOptions,
    ) -> ValidationResult {
        self.validate_chain(chain, options).into()
    }
}

/// Validate a chain as of `now`.
///
/// The clock is read once by the caller, so every certificate is judged
/// against the same instant.
pub fn validate_chain_at(
    chain: &CertificateChain,
    now: Time,
    options: &ValidationOptions,
) -> Result<Acceptance> {
    log::trace!(
        "validate_chain: starting validation, chain_len={}, now={}",
        chain.len(),
        now
    );

    if chain.is_empty() {
        log::error!("validate_chain: EMPTY chain");
        return Err(Error::empty_chain());
    }

    // Every window is checked before any link, so an expired root fails
    // even when the leaf is fine.
    for (idx, cert) in chain.iter().enumerate() {
        log::trace!(
            "validate_chain: checking dates of cert {} (subject={:?})",
            idx,
            cert.subject()
        );
        validate_time(cert, now)?;
    }

    if options.trust_server_certificate {
        log::warn!(
            "validate_chain: trust_server_certificate set, skipping issuer links and root anchor"
        );
        return Ok(Acceptance::TrustBypassed);
    }

    validate_links(chain)?;
    validate_anchor(chain)?;

    log::trace!("validate_chain: SUCCESS all validations passed");
    Ok(Acceptance::ChainVerified)
}

/// Check that `now` lies inside the certificate's validity window.
///
/// An inverted window is not rejected separately; it simply fails one of
/// the two comparisons for every `now`.
fn validate_time(cert: &Certificate, now: Time) -> Result<()> {
    if now.is_before(&cert.valid_from()) {
        log::error!(
            "validate_time: {:?} not valid before {}",
            cert.subject(),
            cert.valid_from()
        );
        return Err(Error::not_yet_valid(cert.subject()));
    }

    if now.is_after(&cert.valid_to()) {
        log::error!(
            "validate_time: {:?} expired at {}",
            cert.subject(),
            cert.valid_to()
        );
        return Err(Error::expired(cert.subject()));
    }

    Ok(())
}

/// Check each adjacent `(certificate, issuer)` pair, leaf first.
///
/// Names are compared byte for byte.
fn validate_links(chain: &CertificateChain) -> Result<()> {
    for (idx, pair) in chain.certificates().windows(2).enumerate() {
        let (cert, issuer) = (&pair[0], &pair[1]);

        if cert.issuer() != issuer.subject() {
            log::error!(
                "validate_links: ISSUER MISMATCH at cert {}: {:?} claims {:?}, next is {:?}",
                idx,
                cert.subject(),
                cert.issuer(),
                issuer.subject()
            );
            return Err(Error::issuer_mismatch(cert.subject(), issuer.subject()));
        }
    }

    Ok(())
}

/// Check that the chain terminates at a root.
fn validate_anchor(chain: &CertificateChain) -> Result<()> {
    match chain.root() {
        Some(last) if last.is_root() => Ok(()),
        Some(last) => {
            log::error!(
                "validate_anchor: last cert {:?} is not a root",
                last.subject()
            );
            Err(Error::untrusted_root())
        }
        None => Err(Error::empty_chain()),
    }
}

// ============================================================================
// Tests
// ============================================================================
