// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Canned demonstration chains.
//!
//! Each scenario only calls certificate constructors and
//! [`CertificateChain::add_certificate`]; none of them validate anything.
//! Chains are always assembled leaf first.

use crate::certificate::{
    Certificate, DEFAULT_INTERMEDIATE_NAME, DEFAULT_LEAF_NAME, DEFAULT_ROOT_CA_NAME,
};
use crate::chain::CertificateChain;
use crate::time::Time;

/// A numbered demonstration scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Root → intermediate → leaf, all freshly issued
    Basic,
    /// Valid root and intermediate, leaf expired a year ago
    ExpiredLeaf,
    /// Leaf claims an issuer that is not the intermediate
    BrokenChain,
    /// A lone certificate from an unknown CA
    Untrusted,
    /// An attacker's self-made root and a leaf impersonating a bank
    MitmAttack,
}

impl Scenario {
    /// All scenarios in menu order
    pub const ALL: [Scenario; 5] = [
        Scenario::Basic,
        Scenario::ExpiredLeaf,
        Scenario::BrokenChain,
        Scenario::Untrusted,
        Scenario::MitmAttack,
    ];

    /// Menu number, starting at 1
    pub fn number(&self) -> u8 {
        match self {
            Scenario::Basic => 1,
            Scenario::ExpiredLeaf => 2,
            Scenario::BrokenChain => 3,
            Scenario::Untrusted => 4,
            Scenario::MitmAttack => 5,
        }
    }

    /// Look up a scenario by menu number
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.number() == number)
    }

    /// Get a human-readable name
    pub fn title(&self) -> &'static str {
        match self {
            Scenario::Basic => "Basic Valid Certificate Chain",
            Scenario::ExpiredLeaf => "Expired Certificate Scenario",
            Scenario::BrokenChain => "Broken Certificate Chain",
            Scenario::Untrusted => "Trust Server Certificate Flag Demo",
            Scenario::MitmAttack => "Man-in-the-Middle Attack Scenario",
        }
    }

    /// Whether the scenario is demonstrated with the bypass switched on
    pub fn default_trust_server_certificate(&self) -> bool {
        matches!(self, Scenario::Untrusted | Scenario::MitmAttack)
    }

    /// Build the scenario's chain with `now` as the issuance time.
    pub fn build_at(&self, now: Time) -> CertificateChain {
        match self {
            Scenario::Basic => basic_chain(now),
            Scenario::ExpiredLeaf => expired_leaf_chain(now),
            Scenario::BrokenChain => broken_chain(now),
            Scenario::Untrusted => untrusted_chain(now),
            Scenario::MitmAttack => mitm_attack_chain(now),
        }
    }

    /// Build the scenario's chain as of the system clock.
    #[cfg(feature = "std")]
    pub fn build(&self) -> CertificateChain {
        self.build_at(crate::time::current_time())
    }
}

fn basic_chain(now: Time) -> CertificateChain {
    let root = Certificate::create_root_ca_at(now, DEFAULT_ROOT_CA_NAME);
    let intermediate = Certificate::create_intermediate_at(now, &root, DEFAULT_INTERMEDIATE_NAME);
    let leaf = Certificate::create_leaf_at(now, &intermediate, DEFAULT_LEAF_NAME);

    let mut chain = CertificateChain::new();
    chain.add_certificate(leaf);
    chain.add_certificate(intermediate);
    chain.add_certificate(root);
    chain
}

fn expired_leaf_chain(now: Time) -> CertificateChain {
    let root = Certificate::create_root_ca_at(now, DEFAULT_ROOT_CA_NAME);
    let intermediate = Certificate::create_intermediate_at(now, &root, DEFAULT_INTERMEDIATE_NAME);
    let leaf = Certificate::new(
        "expired.example.com",
        intermediate.subject(),
        now.sub_days(730),
        now.sub_days(365),
        false,
        "expired123",
    );

    let mut chain = CertificateChain::new();
    chain.add_certificate(leaf);
    chain.add_certificate(intermediate);
    chain.add_certificate(root);
    chain
}

fn broken_chain(now: Time) -> CertificateChain {
    let root = Certificate::create_root_ca_at(now, DEFAULT_ROOT_CA_NAME);
    let intermediate = Certificate::create_intermediate_at(now, &root, DEFAULT_INTERMEDIATE_NAME);
    let leaf = Certificate::new(
        "wrong.example.com",
        "Wrong Issuer",
        now,
        now.add_days(365),
        false,
        "wrong123",
    );

    let mut chain = CertificateChain::new();
    chain.add_certificate(leaf);
    chain.add_certificate(intermediate);
    chain.add_certificate(root);
    chain
}

fn untrusted_chain(now: Time) -> CertificateChain {
    let standalone = Certificate::new(
        "untrusted.example.com",
        "Unknown CA",
        now,
        now.add_days(365),
        false,
        "untrusted123",
    );

    let mut chain = CertificateChain::new();
    chain.add_certificate(standalone);
    chain
}

fn mitm_attack_chain(now: Time) -> CertificateChain {
    let malicious_root = Certificate::new(
        "Malicious Root CA",
        "Malicious Root CA",
        now,
        now.add_days(365),
        true,
        "malicious_root_123",
    );
    let malicious_leaf = Certificate::new(
        "bank.example.com",
        malicious_root.subject(),
        now,
        now.add_days(365),
        false,
        "malicious_leaf_123",
    );

    let mut chain = CertificateChain::new();
    chain.add_certificate(malicious_leaf);
    chain.add_certificate(malicious_root);
    chain
}
