// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Plain-text drawing of chains and validation results.

use core::fmt;

use certlab::{CertificateChain, ValidationResult};

/// Inner width of a certificate card, between the corner glyphs.
pub const CARD_WIDTH: usize = 40;

/// Output surface for chains and their validation results.
pub trait ChainRenderer {
    /// Draw every certificate of `chain` leaf first.
    fn draw_chain(&mut self, chain: &CertificateChain) -> fmt::Result;

    /// Draw the verdict banner followed by the result message.
    fn show_validation_result(&mut self, result: &ValidationResult) -> fmt::Result;
}

/// Renders boxed certificate cards into any `fmt::Write` sink.
pub struct TextRenderer<W: fmt::Write> {
    out: W,
}

impl<W: fmt::Write> TextRenderer<W> {
    /// Create a renderer writing into `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the renderer, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn card_line(&mut self, label: &str, value: &str) -> fmt::Result {
        let text = format!("{}: {}", label, value);
        writeln!(self.out, "│ {:<width$} │", text, width = CARD_WIDTH - 2)
    }

    fn card_border(&mut self, left: char, right: char) -> fmt::Result {
        self.out.write_char(left)?;
        for _ in 0..CARD_WIDTH {
            self.out.write_char('─')?;
        }
        self.out.write_char(right)?;
        self.out.write_char('\n')
    }
}

impl<W: fmt::Write> ChainRenderer for TextRenderer<W> {
    fn draw_chain(&mut self, chain: &CertificateChain) -> fmt::Result {
        if chain.is_empty() {
            return writeln!(self.out, "\nWarning: No certificates to display");
        }

        writeln!(self.out, "\nCertificate Chain Visualization:")?;
        let last = chain.len() - 1;
        for (idx, cert) in chain.iter().enumerate() {
            let branch = if idx > 0 { "└── " } else { "" };
            writeln!(self.out, "\n{}{}", branch, cert.subject())?;
            self.card_border('┌', '┐')?;
            self.card_line("Subject", cert.subject())?;
            self.card_line("Issuer", cert.issuer())?;
            self.card_line("Valid From", &cert.valid_from().date_string())?;
            self.card_line("Valid To", &cert.valid_to().date_string())?;
            self.card_line("Type", cert.role_in(idx).name())?;
            self.card_border('└', '┘')?;

            if idx < last {
                writeln!(self.out, "         │")?;
                writeln!(self.out, "         ▼")?;
            }
        }
        Ok(())
    }

    fn show_validation_result(&mut self, result: &ValidationResult) -> fmt::Result {
        if result.is_valid() {
            writeln!(self.out, "\n✓ Chain Validation Successful")?;
        } else {
            writeln!(self.out, "\n✗ Chain Validation Failed")?;
        }
        writeln!(self.out, "{}", result.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certlab::{Certificate, Error, Time};

    const NOW: Time = Time::from_unix_secs(1_704_067_200);

    fn render_chain(chain: &CertificateChain) -> String {
        let mut renderer = TextRenderer::new(String::new());
        renderer.draw_chain(chain).unwrap();
        renderer.into_inner()
    }

    #[test]
    fn test_empty_chain_warning() {
        let text = render_chain(&CertificateChain::new());
        assert_eq!(text, "\nWarning: No certificates to display\n");
    }

    #[test]
    fn test_three_tier_cards() {
        let root = Certificate::create_root_ca_at(NOW, "Root CA");
        let inter = Certificate::create_intermediate_at(NOW, &root, "Intermediate CA");
        let leaf = Certificate::create_leaf_at(NOW, &inter, "example.com");
        let chain = CertificateChain::from_certificates(vec![leaf, inter, root]);

        let text = render_chain(&chain);
        assert!(text.starts_with("\nCertificate Chain Visualization:\n"));
        assert!(text.contains("\nexample.com\n┌"));
        assert!(text.contains("\n└── Intermediate CA\n"));
        assert!(text.contains("\n└── Root CA\n"));
        assert!(text.contains("Valid From: 2024-01-01"));
        assert!(text.contains("Valid To: 2024-12-31"));
        assert_eq!(text.matches("         ▼").count(), 2);

        let types: Vec<&str> = text
            .lines()
            .filter_map(|l| l.strip_prefix("│ Type: "))
            .map(|l| l.trim_end_matches('│').trim())
            .collect();
        assert_eq!(types, ["Leaf", "Intermediate", "Root"]);
    }

    #[test]
    fn test_card_lines_are_aligned() {
        let root = Certificate::create_root_ca_at(NOW, "Root CA");
        let text = render_chain(&CertificateChain::single(root));
        for line in text.lines().filter(|l| l.starts_with('│') || l.starts_with('┌')) {
            assert_eq!(line.chars().count(), CARD_WIDTH + 2, "{:?}", line);
        }
        assert!(!text.contains('▼'));
    }

    #[test]
    fn test_validation_banners() {
        let mut renderer = TextRenderer::new(String::new());
        let ok = ValidationResult::new(Ok(certlab::Acceptance::ChainVerified));
        let failed = ValidationResult::new(Err(Error::untrusted_root()));
        renderer.show_validation_result(&ok).unwrap();
        renderer.show_validation_result(&failed).unwrap();

        let text = renderer.into_inner();
        assert_eq!(
            text,
            "\n✓ Chain Validation Successful\nValid certificate chain\n\
             \n✗ Chain Validation Failed\nChain doesn't end with a trusted root certificate\n"
        );
    }
}
