//! Polish Ciphers command-line front end
//!
//! Usage: `polish-ciphers <algorithm> <encrypt|decrypt> [--key KEY] [TEXT...]`
//!
//! Without TEXT the input is read from stdin.

use std::env;
use std::io::{self, Read};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use polish_ciphers::runner::{self, Request};
use polish_ciphers::{Algorithm, CipherConfig, Direction, VERSION};

const USAGE: &str = "Usage: polish-ciphers <caesar|polybius|vigenere|playfair|rsa> <encrypt|decrypt> [--key KEY] [TEXT...]";

fn main() -> Result<()> {
    // The configured filter is not known yet, so loading logs through a
    // scoped subscriber built from the environment
    let config = tracing::subscriber::with_default(bootstrap_subscriber(), CipherConfig::load)?;

    // Initialize logging
    init_logging(&config);

    info!("Polish Ciphers v{}", VERSION);

    let request = parse_args(env::args().skip(1))?;
    let output = runner::run(&request, &config)?;
    println!("{}", output);

    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Request> {
    let algorithm = args.next().context(USAGE)?;
    let algorithm = Algorithm::from_str(&algorithm)
        .with_context(|| format!("Unknown algorithm {:?}\n{}", algorithm, USAGE))?;

    let direction = args.next().context(USAGE)?;
    let direction = Direction::from_str(&direction)
        .with_context(|| format!("Unknown direction {:?}\n{}", direction, USAGE))?;

    let mut key = None;
    let mut words = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--key" {
            key = Some(args.next().context("--key requires a value")?);
        } else {
            words.push(arg);
        }
    }

    if key.is_some() && !algorithm.takes_key() {
        anyhow::bail!("The {} cipher does not take a key", algorithm.as_str());
    }

    let input = if words.is_empty() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read input from stdin")?;
        buffer.trim_end_matches(&['\r', '\n'][..]).to_string()
    } else {
        words.join(" ")
    };

    Ok(Request {
        algorithm,
        direction,
        input,
        key,
    })
}

fn bootstrap_subscriber() -> impl tracing::Subscriber + Send + Sync {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("POLISH_CIPHERS_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(&CipherConfig::default().log_filter));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .finish()
}

fn init_logging(config: &CipherConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}
