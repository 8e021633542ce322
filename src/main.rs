// src/main.rs

use env_logger::Env;
use num::{BigInt, ToPrimitive};
use serde::Serialize;
use std::env;

use ntheory::config::toolkit_config::ToolkitConfig;
use ntheory::core::factor_counts::FactorCounts;
use ntheory::error::{NtError, Result};
use ntheory::integer_math::factorization;
use ntheory::integer_math::primality;
use ntheory::integer_math::prime_factory;
use ntheory::integer_math::prime_sieve;

#[derive(Serialize)]
struct FactorReport {
    n: String,
    factors: Vec<String>,
    display: String,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = ToolkitConfig::load()?;

    // Initialize the logger
    let env = Env::default()
        .filter_or("NTHEORY_LOG", config.log_level.clone())
        .write_style_or("NTHEORY_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    let args: Vec<String> = env::args().collect();
    dispatch(&args[1..], &config)
}

fn dispatch(args: &[String], config: &ToolkitConfig) -> Result<()> {
    match args {
        [cmd, value] if cmd == "factor" => factor_command(value, config),
        [cmd, value] if cmd == "is-prime" => {
            let n: BigInt = value.parse()?;
            let verdict = primality::is_prime(&n, config.precision)?;
            println!("{}", if verdict { "prime" } else { "composite" });
            Ok(())
        }
        [cmd, value] if cmd == "next-prime" => {
            let n: BigInt = value.parse()?;
            println!("{}", prime_factory::next_prime(&n));
            Ok(())
        }
        [cmd, value] if cmd == "primes" => {
            let limit: BigInt = value.parse()?;
            let limit = limit.to_u64().ok_or_else(|| {
                NtError::InvalidArgument(format!("sieve limit {} is out of range", limit))
            })?;
            for p in prime_sieve::sieve_upto(limit) {
                println!("{}", p);
            }
            Ok(())
        }
        _ => {
            usage();
            Ok(())
        }
    }
}

fn factor_command(value: &str, config: &ToolkitConfig) -> Result<()> {
    let n: BigInt = value.parse()?;
    let factors = if config.output.sorted {
        factorization::prime_factors_sorted(&n)?
    } else {
        factorization::prime_factors(&n)?
    };
    let counts = FactorCounts::from_factors(&factors);

    if config.output.json {
        let report = FactorReport {
            n: n.to_string(),
            factors: factors.iter().map(|f| f.to_string()).collect(),
            display: counts.to_string(),
        };
        println!("{}", serde_json::to_string(&report).expect("report is serializable"));
    } else {
        println!("{} = {}", n, counts);
    }
    Ok(())
}

fn usage() {
    eprintln!("usage: ntheory <command> <value>");
    eprintln!();
    eprintln!("commands:");
    eprintln!("  factor N      prime factorization of N");
    eprintln!("  is-prime N    primality verdict for N");
    eprintln!("  next-prime N  smallest prime greater than N");
    eprintln!("  primes LIMIT  all primes below LIMIT");
}
