use std::io;

use chaum_pedersen_modp::age::{parse_age, AgeProver, AgeVerifier, ADULT_AGE};
use chaum_pedersen_modp::config::{BetaDerivation, ShellConfig, DEFAULT_CONFIG_PATH};
use chaum_pedersen_modp::shell::{init_tracing, println_colored, prompt_line};
use chaum_pedersen_modp::{Error, SecureRng};
use clap::Parser;
use crossterm::style::Color;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "zkp-age")]
#[command(about = "Chaum-Pedersen age-over-threshold console", long_about = None)]
#[command(version)]
struct Args {
    /// Configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Derivation of the second generator (overrides the configuration file)
    #[arg(short, long, value_enum)]
    beta: Option<BetaDerivation>,

    /// Age that must be reached
    #[arg(short, long, default_value_t = ADULT_AGE)]
    threshold: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = ShellConfig::load(&args.config)?;
    config.beta = args.beta.unwrap_or(config.beta);

    init_tracing(&config.log_filter);

    let mut rng = SecureRng::new();
    let params = config.group_parameters(&mut rng)?;
    info!(threshold = args.threshold, "age shell ready");

    let prover = AgeProver::new(params.clone());
    let verifier = AgeVerifier::new(params);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    while let Some(line) = prompt_line(&mut input, "Enter age (or type 'exit' to quit): ")? {
        let age = match parse_age(&line) {
            Ok(age) => age,
            Err(e) => {
                println_colored(Color::Red, &e.to_string());
                continue;
            }
        };

        let accepted = match prover.prove_over(&mut rng, age, args.threshold) {
            Ok(claim) => verifier.verify(&claim),
            Err(Error::BelowThreshold) => false,
            Err(e) => {
                debug!("claim could not be produced: {e}");
                false
            }
        };

        if accepted {
            println_colored(
                Color::Green,
                &format!("Proof successful: The age is over {}!", args.threshold),
            );
        } else {
            println_colored(Color::Red, "Proof failed!");
        }
    }

    Ok(())
}
