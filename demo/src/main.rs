//! Carepath — reference collaborator demo CLI
//!
//! Plays the role of the persistence/transport collaborator around the risk
//! engine: it parses raw input into attributes, invokes the assessor, stores
//! results in the in-memory registry, and renders them.
//!
//! Usage:
//!   cargo run -p demo -- cohort
//!   cargo run -p demo -- assess --age 75 --condition diabetes
//!   cargo run -p demo -- check-config --path demo/config/carepath.toml

mod mock_data;
mod registry;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use carepath_contracts::{
    error::CarepathResult,
    patient::PatientAttributes,
};
use carepath_core::Assessor;
use carepath_plan::{CareRegime, ThresholdPlanner};
use carepath_scoring::WeightedScorer;

use crate::mock_data::mock_cohort;
use crate::registry::PatientRegistry;

/// The bundled default calibration.
const DEFAULT_CONFIG: &str = include_str!("../config/carepath.toml");

// ── CLI definition ────────────────────────────────────────────────────────────

/// Carepath — chronic-care risk stratification demo.
///
/// Each subcommand drives the same pipeline: attributes → risk score →
/// care plan.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Carepath risk engine demo",
    long_about = "Runs the Carepath risk engine over demo patients, showing\n\
                  configuration loading, risk scoring, and care plan derivation."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assess the fictional demo cohort and print a summary.
    Cohort,
    /// Assess a single ad-hoc patient built from flags.
    Assess {
        /// Age in years.
        #[arg(long)]
        age: i64,
        /// Chronic condition name; repeat the flag for several.
        #[arg(long = "condition")]
        conditions: Vec<String>,
    },
    /// Load and validate a TOML configuration file.
    CheckConfig {
        /// Path to the configuration file.
        #[arg(long)]
        path: PathBuf,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::Cohort => run_cohort(),
        Command::Assess { age, conditions } => run_assess(age, conditions),
        Command::CheckConfig { path } => run_check_config(&path),
    };

    match result {
        Ok(()) => {
            println!("Done.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn build_assessor(config: &str) -> CarepathResult<Assessor> {
    let scorer = WeightedScorer::from_toml_str(config)?;
    let planner = ThresholdPlanner::from_toml_str(config)?;
    Ok(Assessor::new(Box::new(scorer), Box::new(planner)))
}

fn run_cohort() -> CarepathResult<()> {
    let assessor = build_assessor(DEFAULT_CONFIG)?;
    // A second planner over the same document, kept for regime labels.
    let planner = ThresholdPlanner::from_toml_str(DEFAULT_CONFIG)?;

    let registry = PatientRegistry::new();
    let ids: Vec<_> = mock_cohort()
        .into_iter()
        .map(|record| registry.insert(record))
        .collect();

    println!(
        "=== Cohort assessment ({} patients, threshold {}) ===",
        registry.len(),
        planner.threshold()
    );
    println!();

    let mut high = 0usize;
    let mut low = 0usize;

    for id in &ids {
        let Some(record) = registry.get(id) else {
            continue;
        };

        let assessment = assessor.assess(&record.attributes)?;
        let regime = planner.regime_for(assessment.score);
        match regime {
            CareRegime::High => high += 1,
            CareRegime::Low => low += 1,
        }

        println!(
            "  {:<18} age {:>3}  score {:.2}  regime {:<4}  follow-up {}",
            record.name,
            record.attributes.age,
            assessment.score.value(),
            regime,
            assessment.plan.cadence,
        );

        registry.record_assessment(id, assessment)?;
    }

    println!();
    println!(
        "  {} HIGH (weekly follow-up), {} LOW (monthly monitoring)",
        high, low
    );
    println!("  All {} assessments recorded in the registry.", registry.len());
    println!();

    Ok(())
}

fn run_assess(age: i64, conditions: Vec<String>) -> CarepathResult<()> {
    let assessor = build_assessor(DEFAULT_CONFIG)?;
    let planner = ThresholdPlanner::from_toml_str(DEFAULT_CONFIG)?;

    // Checked boundary: a negative age is rejected here, before scoring.
    let mut attributes = PatientAttributes::from_raw_age(Some(age))?;
    for condition in conditions {
        attributes.chronic_conditions.insert(condition);
    }

    let assessment = assessor.assess(&attributes)?;

    println!("=== Single assessment ===");
    println!();
    println!("  Age:        {}", attributes.age);
    println!(
        "  Conditions: {}",
        if attributes.chronic_conditions.is_empty() {
            "none".to_string()
        } else {
            attributes
                .chronic_conditions
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        }
    );
    println!("  Score:      {}", assessment.score);
    println!(
        "  Regime:     {} (threshold {})",
        planner.regime_for(assessment.score),
        planner.threshold()
    );
    println!(
        "  Plan:       {}",
        serde_json::to_string_pretty(&assessment.plan)
            .unwrap_or_else(|_| "<unserializable>".to_string())
    );
    println!();

    Ok(())
}

fn run_check_config(path: &Path) -> CarepathResult<()> {
    // Both engines parse the same document; either one failing fails the
    // whole check before anything could serve scores.
    let scorer = WeightedScorer::from_file(path)?;
    let planner = ThresholdPlanner::from_file(path)?;

    println!("=== Configuration check: {} ===", path.display());
    println!();
    println!("  Age buckets:         {}", scorer.config().age_buckets.len());
    println!("  Condition weights:   {}", scorer.config().condition_weights.len());
    println!("  High-risk threshold: {}", planner.threshold());
    println!();
    println!("  Configuration is valid.");
    println!();

    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("Carepath — Risk Stratification Engine");
    println!("Reference Collaborator Demo");
    println!("=====================================");
    println!();
    println!("Pipeline per assessment:");
    println!("  [1] Attributes parsed and validated (age required, non-negative)");
    println!("  [2] Weighted scorer: age-bucket baseline + condition weights, clipped to [0, 1]");
    println!("  [3] Threshold planner: score > threshold → HIGH/weekly, otherwise LOW/monthly");
    println!("  [4] Assessment stamped and recorded by the collaborator");
    println!();
}
