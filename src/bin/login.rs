use std::io;

use chaum_pedersen_modp::auth::{Authenticator, InMemoryStore, LoginOutcome};
use chaum_pedersen_modp::config::{BetaDerivation, GroupChoice, ShellConfig, DEFAULT_CONFIG_PATH};
use chaum_pedersen_modp::shell::{init_tracing, println_colored, prompt_line};
use chaum_pedersen_modp::{Error, SecureRng};
use clap::Parser;
use crossterm::style::Color;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "zkp-login")]
#[command(about = "Chaum-Pedersen password login console", long_about = None)]
#[command(version)]
struct Args {
    /// Configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Group to run over (overrides the configuration file)
    #[arg(short, long, value_enum)]
    group: Option<GroupChoice>,

    /// Derivation of the second generator (overrides the configuration file)
    #[arg(short, long, value_enum)]
    beta: Option<BetaDerivation>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = ShellConfig::load(&args.config)?;
    config.group = args.group.unwrap_or(config.group);
    config.beta = args.beta.unwrap_or(config.beta);

    init_tracing(&config.log_filter);

    let mut rng = SecureRng::new();
    let params = config.group_parameters(&mut rng)?;
    info!(
        group = ?config.group,
        modulus_bits = params.modulus_bits(),
        "group parameters ready"
    );

    let auth = Authenticator::new(params, InMemoryStore::new());
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println_colored(Color::Cyan, "Registration");
    let Some(username) = prompt_line(&mut input, "Enter username: ")? else {
        return Ok(());
    };
    let Some(password) = prompt_line(&mut input, "Enter password: ")? else {
        return Ok(());
    };

    match auth.register(&username, &password) {
        Ok(()) => println_colored(Color::Green, "Registration successful!"),
        Err(Error::AlreadyRegistered(name)) => {
            println_colored(Color::Red, &format!("User '{name}' already registered"));
        }
        Err(e) => return Err(e.into()),
    }

    loop {
        println!();
        println_colored(Color::Cyan, "Login");
        let Some(username) = prompt_line(&mut input, "Enter username: ")? else {
            break;
        };

        if !auth.is_registered(&username) {
            println_colored(Color::Red, &LoginOutcome::UnknownUser.to_string());
            continue;
        }

        let Some(password) = prompt_line(&mut input, "Enter password: ")? else {
            break;
        };

        match auth.login(&username, &password) {
            Ok(LoginOutcome::Success) => {
                println_colored(Color::Green, &LoginOutcome::Success.to_string());
            }
            Ok(outcome) => println_colored(Color::Red, &outcome.to_string()),
            Err(e) => {
                error!("login round failed: {e}");
                println_colored(Color::Red, &format!("Error: {e}"));
            }
        }
    }

    Ok(())
}
