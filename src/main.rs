//! Hexfire - Scenario Resolver
//!
//! Loads a scenario, computes every declared attack's to-hit number and
//! rolls the dice. Output is text or JSON.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use hexfire::core::error::Result;
use hexfire::core::types::{Phase, Round};
use hexfire::roll::Dice;
use hexfire::scenario::AttackReport;
use hexfire::{EquipmentCatalog, GameOptions, Scenario};

/// Resolve the attacks declared in a scenario file
#[derive(Parser, Debug)]
#[command(name = "hexfire")]
#[command(about = "Resolve hex-grid wargame attacks from a scenario file")]
struct Args {
    /// Scenario TOML file
    scenario: PathBuf,

    /// Random seed for deterministic dice
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Game options TOML file
    #[arg(long)]
    options: Option<PathBuf>,

    /// Equipment catalog TOML file (defaults to the built-in catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One line per attack plus its modifier breakdown
    Text,
    /// Pretty-printed JSON report
    Json,
}

#[derive(Serialize)]
struct Report {
    seed: u64,
    round: Round,
    phase: Phase,
    attacks: Vec<AttackReport>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hexfire=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let options = match &args.options {
        Some(path) => GameOptions::load(path)?,
        None => GameOptions::default(),
    };
    let catalog = match &args.catalog {
        Some(path) => EquipmentCatalog::load(path)?,
        None => EquipmentCatalog::standard(),
    };
    let scenario = Scenario::load(&args.scenario, &catalog)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut dice = Dice::seeded(seed);
    let attacks = scenario.resolve(&options, &mut dice)?;

    let report = Report { seed, round: scenario.round, phase: scenario.phase, attacks };

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("Round {} {:?} phase (seed {})", report.round, report.phase, report.seed);
            println!("=========================");
            for attack in &report.attacks {
                let rolled = attack
                    .result
                    .roll
                    .map_or_else(|| "-".to_string(), |r| r.to_string());
                println!(
                    "{} -> {} with {}: needs {}, rolled {}, {:?}",
                    attack.attacker,
                    attack.target,
                    attack.weapon,
                    attack.to_hit,
                    rolled,
                    attack.result.outcome
                );
                println!("    {}", attack.result.desc);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_defaults_to_text() {
        let args = Args::try_parse_from(["hexfire", "ridge.toml"]).unwrap();
        assert!(matches!(args.format, OutputFormat::Text));
        assert!(args.seed.is_none());
    }

    #[test]
    fn test_format_rejects_unknown_values() {
        let args = Args::try_parse_from(["hexfire", "ridge.toml", "--format", "json"]).unwrap();
        assert!(matches!(args.format, OutputFormat::Json));
        assert!(Args::try_parse_from(["hexfire", "ridge.toml", "--format", "yaml"]).is_err());
    }
}
