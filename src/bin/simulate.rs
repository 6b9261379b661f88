//! Dungeon balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze dungeon difficulty.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # Default: 1000 heroes, Small Forest
//!   cargo run --bin simulate -- -n 100 --size large  # 100 heroes in a Large dungeon
//!   cargo run --bin simulate -- --seed 42            # Reproducible run

use crawler::dungeon::types::{Biome, DungeonSize};
use crawler::simulator::{run_simulation, SimConfig};
use std::env;
use std::process::ExitCode;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("Run with --help for usage.");
            return ExitCode::FAILURE;
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              CRAWLER BALANCE SIMULATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Dungeon:        {} - {}", config.biome.display_name(), config.size.display_name());
    println!("  Attempts/Run:   {}", config.attempts_per_run);
    println!("  Attack Cap:     {}", config.max_attacks_per_attempt);
    println!("  Buy Upgrades:   {}", config.buy_upgrades);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, report.to_json()) {
            eprintln!("Failed to write JSON report {}: {}", filename, e);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}

fn parse_biome(value: &str) -> Option<Biome> {
    Biome::all()
        .into_iter()
        .find(|b| format!("{:?}", b).eq_ignore_ascii_case(value))
}

fn parse_size(value: &str) -> Option<DungeonSize> {
    DungeonSize::all()
        .into_iter()
        .find(|s| s.display_name().eq_ignore_ascii_case(value))
}

fn parse_number<T: FromStr>(flag: &str, value: Option<&str>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} needs a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("{} expects a number, got '{}'", flag, value))
}

fn parse_args(args: &[String]) -> Result<SimConfig, String> {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        let next = args.get(i + 1).map(String::as_str);
        match args[i].as_str() {
            "-n" | "--runs" => {
                config.num_runs = parse_number("--runs", next)?;
                i += 1;
            }
            "-s" | "--seed" => {
                config.seed = Some(parse_number("--seed", next)?);
                i += 1;
            }
            "-a" | "--attempts" => {
                config.attempts_per_run = parse_number("--attempts", next)?;
                i += 1;
            }
            "--max-attacks" => {
                config.max_attacks_per_attempt = parse_number("--max-attacks", next)?;
                i += 1;
            }
            "-b" | "--biome" => {
                let value = next.ok_or("--biome needs a value")?;
                config.biome =
                    parse_biome(value).ok_or_else(|| format!("unknown biome '{}'", value))?;
                i += 1;
            }
            "--size" => {
                let value = next.ok_or("--size needs a value")?;
                config.size =
                    parse_size(value).ok_or_else(|| format!("unknown dungeon size '{}'", value))?;
                i += 1;
            }
            "--no-shop" => {
                config.buy_upgrades = false;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--json" => {}
            other => return Err(format!("unknown option '{}'", other)),
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Crawler Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of simulated heroes (default: 1000)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -a, --attempts <A>    Dungeon attempts per hero (default: 20)");
    println!("    --max-attacks <N>     Attacks before an attempt flees (default: 10000)");
    println!("    -b, --biome <B>       forest, cave, desert, ice, volcano (default: forest)");
    println!("    --size <S>            small, medium, large, epic (default: small)");
    println!("    --no-shop             Never buy upgrades");
    println!("    -v, --verbose         Print every run");
    println!("    -q, --quiet           Summary only");
    println!("    --json                Save JSON report");
    println!("    -h, --help            Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                        # Default run");
    println!("    cargo run --bin simulate -- --size epic -n 50   # Epic dungeon balance");
    println!("    cargo run --bin simulate -- --seed 42 --json    # Reproducible, with JSON");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("simulate")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_defaults() {
        let config = parse_args(&args(&[])).unwrap();
        assert_eq!(config.num_runs, 1000);
        assert_eq!(config.biome, Biome::Forest);
    }

    #[test]
    fn test_parse_full_options() {
        let config = parse_args(&args(&[
            "-n", "10", "--seed", "5", "--biome", "ice", "--size", "Epic", "--no-shop",
        ]))
        .unwrap();
        assert_eq!(config.num_runs, 10);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.biome, Biome::Ice);
        assert_eq!(config.size, DungeonSize::Epic);
        assert!(!config.buy_upgrades);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(parse_args(&args(&["--biome", "swamp"])).is_err());
        assert!(parse_args(&args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_numbers() {
        for bad in [
            &["-n", "lots"][..],
            &["--attempts", "-3"],
            &["--max-attacks", "1e4"],
            &["--seed", "abc"],
            &["-n"],
        ] {
            let err = parse_args(&args(bad)).unwrap_err();
            assert!(err.contains("--"), "{bad:?}: {err}");
        }
    }

    #[test]
    fn test_parse_numeric_options() {
        let config =
            parse_args(&args(&["-a", "7", "--max-attacks", "250", "-s", "9"])).unwrap();
        assert_eq!(config.attempts_per_run, 7);
        assert_eq!(config.max_attacks_per_attempt, 250);
        assert_eq!(config.seed, Some(9));
    }
}
