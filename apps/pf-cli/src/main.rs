use clap::{Parser, Subcommand};
use pf_core::UnitSystem;
use pf_project::{ProjectError, ProjectResult, Scenario, check_inputs, load_scenario, run_report};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "PeakFlow CLI - SCS curve-number peak flow and culvert sizing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a scenario file and list every input problem
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Run the peak flow calculation for a scenario
    Run {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Units for the report (metric or imperial); defaults to the scenario's
        #[arg(long)]
        units: Option<UnitSystem>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the Mica Creek reference scenario
    Example {
        /// Print as JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ProjectResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Run {
            scenario_path,
            units,
            json,
        } => cmd_run(&scenario_path, units, json),
        Commands::Example { json } => cmd_example(json),
    }
}

fn cmd_validate(scenario_path: &Path) -> ProjectResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load_scenario(scenario_path)?;

    if let Err(err) = check_inputs(&scenario) {
        if let ProjectError::InputProblems { problems } = &err {
            println!("✗ {} problem(s) found:", problems.len());
            for problem in problems {
                println!("  - {}", problem);
            }
        }
        return Err(err);
    }

    println!("✓ Scenario is valid");
    Ok(())
}

fn cmd_run(scenario_path: &Path, units: Option<UnitSystem>, json: bool) -> ProjectResult<()> {
    let scenario = load_scenario(scenario_path)?;
    let units = units.unwrap_or(scenario.units);
    tracing::info!(scenario = %scenario.name, %units, "running peak flow");

    let report = run_report(&scenario, units)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
        if report.value("q").is_some() && report.value("D").is_none() {
            println!("  Culvert sizing needs Sg > 0.05 and h between 0.3 and 18.3 m.");
        }
    }
    Ok(())
}

fn cmd_example(json: bool) -> ProjectResult<()> {
    let scenario = Scenario::mica_creek();
    if json {
        println!("{}", serde_json::to_string_pretty(&scenario)?);
    } else {
        print!("{}", serde_yaml::to_string(&scenario)?);
    }
    Ok(())
}
