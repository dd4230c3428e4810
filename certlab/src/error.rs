// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Error types for certificate chain validation
//!
//! Every way a chain can be rejected is one variant here. The set is closed:
//! an empty chain, a certificate outside its validity window, a broken issuer
//! link, or a chain that does not end at a root. The `Display` output of each
//! variant is the exact message reported to callers.

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Result type alias for chain validation operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for certificate chain validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A certificate in the chain is outside its validity window
    TimeError(TimeError),

    /// The chain is empty, broken, or not anchored at a root
    ChainError(ChainError),
}

/// Errors related to time validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Current time is before `valid_from`
    NotYetValid { subject: String },

    /// Current time is after `valid_to`
    Expired { subject: String },
}

/// Errors related to certificate chain structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// Chain has no certificates
    EmptyChain,

    /// `subject`'s issuer claim does not name `issuer_subject`
    IssuerMismatch {
        subject: String,
        issuer_subject: String,
    },

    /// Last certificate in the chain is not a root
    UntrustedRoot,
}

// ============================================================================
// Display implementations
// ============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TimeError(e) => write!(f, "{}", e),
            Error::ChainError(e) => write!(f, "{}", e),
        }
    }
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeError::NotYetValid { subject } => {
                write!(f, "Certificate for {} is not yet valid", subject)
            }
            TimeError::Expired { subject } => {
                write!(f, "Certificate for {} has expired", subject)
            }
        }
    }
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::EmptyChain => write!(f, "Empty chain"),
            ChainError::IssuerMismatch {
                subject,
                issuer_subject,
            } => write!(
                f,
                "Invalid issuer: {} not issued by {}",
                subject, issuer_subject
            ),
            ChainError::UntrustedRoot => {
                write!(f, "Chain doesn't end with a trusted root certificate")
            }
        }
    }
}

// ============================================================================
// std::error::Error implementation (when std feature is enabled)
// ============================================================================

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for TimeError {}

#[cfg(feature = "std")]
impl std::error::Error for ChainError {}

// ============================================================================
// Conversions
// ============================================================================

impl From<TimeError> for Error {
    fn from(err: TimeError) -> Self {
        Error::TimeError(err)
    }
}

impl From<ChainError> for Error {
    fn from(err: ChainError) -> Self {
        Error::ChainError(err)
    }
}

// ============================================================================
// Helper constructors
// ============================================================================

impl Error {
    /// Create an empty chain error
    pub fn empty_chain() -> Self {
        Error::ChainError(ChainError::EmptyChain)
    }

    /// Create a certificate not yet valid error
    pub fn not_yet_valid<S: Into<String>>(subject: S) -> Self {
        Error::TimeError(TimeError::NotYetValid {
            subject: subject.into(),
        })
    }

    /// Create a certificate expired error
    pub fn expired<S: Into<String>>(subject: S) -> Self {
        Error::TimeError(TimeError::Expired {
            subject: subject.into(),
        })
    }

    /// Create an issuer mismatch error
    pub fn issuer_mismatch<S: Into<String>, T: Into<String>>(
        subject: S,
        issuer_subject: T,
    ) -> Self {
        Error::ChainError(ChainError::IssuerMismatch {
            subject: subject.into(),
            issuer_subject: issuer_subject.into(),
        })
    }

    /// Create an untrusted root error
    pub fn untrusted_root() -> Self {
        Error::ChainError(ChainError::UntrustedRoot)
    }

    /// Whether this is a validity-window failure
    pub fn is_time_error(&self) -> bool {
        matches!(self, Error::TimeError(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
