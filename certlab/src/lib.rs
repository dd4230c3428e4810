// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Certificate Trust Chain Model
//!
//! A no_std-compatible model of X.509-style certificate chains and the
//! leaf-to-root validation walk used to teach how chains of trust work.
//! There is no cryptography and no ASN.1 here: identities are plain strings
//! and a chain is trusted when every issuer claim names the next subject and
//! the last certificate is a root.
//!
//! # Features
//! - Root, intermediate and leaf constructors with fixed validity windows
//! - Append-only leaf-first chains
//! - Ordered validation: dates, optional trust bypass, issuer links, root anchor
//! - Canned demonstration scenarios (expired leaf, broken chain, MITM, ...)
//!
//! # Limitations
//! Issuer matching is exact string equality between an issuer claim and the
//! next certificate's subject. Real path validation compares distinguished
//! names and key identifiers and verifies signatures.
//!
//! # Example
//! ```
//! use certlab::{Certificate, CertificateChain, Time};
//!
//! let now = Time::from_unix_secs(1_700_000_000);
//! let root = Certificate::create_root_ca_at(now, "Root CA");
//! let intermediate = Certificate::create_intermediate_at(now, &root, "Intermediate CA");
//! let leaf = Certificate::create_leaf_at(now, &intermediate, "example.com");
//!
//! let mut chain = CertificateChain::new();
//! chain.add_certificate(leaf);
//! chain.add_certificate(intermediate);
//! chain.add_certificate(root);
//!
//! let result = chain.validate_at(now, false);
//! assert!(result.is_valid());
//! assert_eq!(result.message(), "Valid certificate chain");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod certificate;
pub mod chain;
pub mod error;
pub mod scenarios;
pub mod time;
pub mod validator;

pub use certificate::{Certificate, CertificateRole};
pub use chain::CertificateChain;
pub use error::{ChainError, Error, Result, TimeError};
pub use scenarios::Scenario;
#[cfg(feature = "std")]
pub use time::SystemTimeSource;
pub use time::{FixedTimeSource, Time, TimeSource, Validity};
pub use validator::{validate_chain_at, Acceptance, ValidationOptions, ValidationResult, Validator};
