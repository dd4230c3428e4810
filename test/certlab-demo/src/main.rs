// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

#![forbid(unsafe_code)]

use std::process::ExitCode;

use certlab::{
    CertificateChain, Scenario, SystemTimeSource, ValidationOptions, ValidationResult, Validator,
};
use clap::Parser;

mod render;

use render::{ChainRenderer, TextRenderer};

/// Walk through certificate chain of trust scenarios.
#[derive(Parser, Debug)]
#[command(name = "certlab-demo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Scenario to run (1-5). May be given more than once.
    #[arg(short, long = "scenario", value_name = "N",
          value_parser = clap::value_parser!(u8).range(1..=5))]
    scenarios: Vec<u8>,

    /// Run every scenario in order.
    #[arg(short, long, conflicts_with = "scenarios")]
    all: bool,

    /// Override the scenario's trustServerCertificate setting.
    #[arg(short, long, value_name = "BOOL", action = clap::ArgAction::Set)]
    trust_server_certificate: Option<bool>,

    /// Also validate with the opposite trustServerCertificate setting.
    #[arg(short, long)]
    compare: bool,

    /// Print a short explanation before each scenario.
    #[arg(short, long)]
    explain: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    debug: bool,

    /// Exit with failure if any primary validation fails.
    #[arg(long)]
    strict_exit: bool,
}

impl Cli {
    fn selected(&self) -> Vec<Scenario> {
        if self.all {
            return Scenario::ALL.to_vec();
        }
        self.scenarios
            .iter()
            .filter_map(|n| Scenario::from_number(*n))
            .collect()
    }
}

fn print_menu() {
    println!("Available scenarios:");
    for scenario in Scenario::ALL {
        println!("  {}. {}", scenario.number(), scenario.title());
    }
    println!("\nRun one with --scenario N or all of them with --all.");
}

fn validate_with(
    validator: &Validator<SystemTimeSource>,
    chain: &CertificateChain,
    trust_server_certificate: bool,
) -> ValidationResult {
    println!("\nRunning validation with trustServerCertificate={}", trust_server_certificate);
    let options = ValidationOptions::new().with_trust_server_certificate(trust_server_certificate);
    validator.validate(chain, &options)
}

/// Run one scenario, returning whether its primary validation passed.
fn run_scenario(
    cli: &Cli,
    validator: &Validator<SystemTimeSource>,
    scenario: Scenario,
) -> Result<bool, std::fmt::Error> {
    println!("\n=== {}. {} ===", scenario.number(), scenario.title());
    if cli.explain {
        println!("\n{}", explain::explanation(scenario));
    }

    let chain = scenario.build();
    log::debug!("scenario {} built {} certificate(s)", scenario.number(), chain.len());

    let mut renderer = TextRenderer::new(String::new());
    renderer.draw_chain(&chain)?;
    print!("{}", renderer.into_inner());

    let trust = cli
        .trust_server_certificate
        .unwrap_or_else(|| scenario.default_trust_server_certificate());
    let primary = validate_with(validator, &chain, trust);

    let mut renderer = TextRenderer::new(String::new());
    renderer.show_validation_result(&primary)?;
    print!("{}", renderer.into_inner());

    // Scenarios demonstrated with the bypass also show what strict mode says.
    let compare = cli.compare
        || (cli.trust_server_certificate.is_none() && scenario.default_trust_server_certificate());
    if compare {
        let other = validate_with(validator, &chain, !trust);
        let mut renderer = TextRenderer::new(String::new());
        renderer.show_validation_result(&other)?;
        print!("{}", renderer.into_inner());
    }

    log::info!(
        "scenario {}: {} ({})",
        scenario.number(),
        if primary.is_valid() { "accepted" } else { "rejected" },
        primary.message()
    );
    Ok(primary.is_valid())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::builder()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let scenarios = cli.selected();
    if scenarios.is_empty() {
        print_menu();
        return ExitCode::SUCCESS;
    }

    let validator = Validator::new();
    let mut all_passed = true;
    for scenario in scenarios {
        match run_scenario(&cli, &validator, scenario) {
            Ok(passed) => all_passed &= passed,
            Err(e) => {
                log::error!("failed to render scenario {}: {}", scenario.number(), e);
                return ExitCode::FAILURE;
            }
        }
    }

    if cli.strict_exit && !all_passed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_selection() {
        let cli = Cli::try_parse_from(["certlab-demo", "-s", "2", "--scenario", "5"]).unwrap();
        assert_eq!(cli.selected(), [Scenario::ExpiredLeaf, Scenario::MitmAttack]);
        assert_eq!(cli.trust_server_certificate, None);

        let cli = Cli::try_parse_from(["certlab-demo", "--all", "-t", "false"]).unwrap();
        assert_eq!(cli.selected().len(), 5);
        assert_eq!(cli.trust_server_certificate, Some(false));

        assert!(Cli::try_parse_from(["certlab-demo", "--scenario", "6"]).is_err());
        assert!(Cli::try_parse_from(["certlab-demo", "--all", "-s", "1"]).is_err());
    }
}
