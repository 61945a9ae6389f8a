//! Growth Projection CLI
//!
//! Command-line interface for running compound-interest projections

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use growth_projection::{
    CompoundingFrequency, ContributionFrequency, ContributionTiming, GrowthEngine, GrowthInput,
    GrowthResult, ProjectionConfig, ScenarioRunner,
};
use growth_projection::projection::Granularity;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "growth_projection", version, about = "Compound-interest growth projections")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project a single investment
    Project(ProjectArgs),

    /// Run every scenario in a CSV file
    Batch {
        /// Scenario CSV with columns principal, annual_rate, compounding, horizon_years,
        /// contribution, contribution_frequency and timing
        #[arg(long)]
        scenarios: PathBuf,

        /// Write a summary CSV here
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct ProjectArgs {
    /// Initial principal
    #[arg(long, default_value_t = 0.0)]
    principal: f64,

    /// Annual rate as a fraction (0.05 = 5%)
    #[arg(long)]
    rate: f64,

    /// annually, semiannually, quarterly, monthly or daily
    #[arg(long, default_value = "monthly")]
    compounding: CompoundingFrequency,

    /// Whole years in the horizon
    #[arg(long, default_value_t = 0)]
    years: u32,

    /// Additional months in the horizon
    #[arg(long, default_value_t = 0)]
    months: u32,

    /// Amount deposited at each contribution event
    #[arg(long, default_value_t = 0.0)]
    contribution: f64,

    /// monthly or annually
    #[arg(long)]
    contribution_frequency: Option<ContributionFrequency>,

    /// beginning or end
    #[arg(long, default_value = "end")]
    timing: ContributionTiming,

    /// Print and export the monthly ledger instead of the yearly one
    #[arg(long)]
    monthly: bool,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,

    /// Write the schedule as CSV here
    #[arg(long)]
    output: Option<PathBuf>,
}

/// One line of the batch summary
#[derive(Serialize)]
struct SummaryRow {
    scenario: usize,
    principal: f64,
    annual_rate: f64,
    compounding: CompoundingFrequency,
    horizon_years: f64,
    contribution: f64,
    ending_balance: Option<f64>,
    total_principal: Option<f64>,
    total_interest: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Project(args) => run_project(args),
        Command::Batch { scenarios, output } => run_batch(scenarios, output),
    }
}

fn run_project(args: ProjectArgs) -> Result<()> {
    let input = GrowthInput {
        initial_principal: args.principal,
        annual_rate: args.rate,
        compounding: args.compounding,
        horizon_years: GrowthInput::horizon_from(args.years, args.months),
        contribution_amount: args.contribution,
        contribution_frequency: args.contribution_frequency,
        contribution_timing: args.timing,
    };

    let config = ProjectionConfig {
        monthly_schedule: args.monthly,
        ..Default::default()
    };
    let result = GrowthEngine::new(config)
        .try_project(&input)
        .context("Cannot project these inputs")?;

    let granularity = if args.monthly { Granularity::Monthly } else { Granularity::Yearly };

    if args.json {
        println!("{}", result.to_json()?);
    } else {
        print_result(&result, granularity);
    }

    if let Some(path) = args.output {
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        for record in result.schedule.records(granularity) {
            writer.serialize(record)?;
        }
        writer.flush()?;
        println!("\nSchedule written to: {}", path.display());
    }

    Ok(())
}

fn print_result(result: &GrowthResult, granularity: Granularity) {
    println!("{:>6} {:>5} {:>14} {:>14} {:>14} {:>16}",
        "Period", "Year", "Deposit", "Principal", "Interest", "Balance");
    println!("{}", "-".repeat(74));

    for row in result.schedule.records(granularity) {
        println!("{:>6} {:>5} {:>14.2} {:>14.2} {:>14.2} {:>16.2}",
            row.period_index,
            row.year_index,
            row.deposit,
            row.cumulative_principal,
            row.interest_earned,
            row.ending_balance,
        );
    }

    println!("\nSummary:");
    println!("  Ending Balance:        {:.2}", result.ending_balance);
    println!("  Total Principal:       {:.2}", result.total_principal);
    println!("  Total Contributions:   {:.2}", result.total_contributions);
    println!("  Total Interest:        {:.2}", result.total_interest);
    println!("    from initial:        {:.2}", result.interest_from_initial);
    println!("    from contributions:  {:.2}", result.interest_from_contributions);
}

fn run_batch(scenarios: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let runner = ScenarioRunner::with_config(ProjectionConfig::yearly_only());
    let results = runner
        .run_csv(&scenarios)
        .with_context(|| format!("Failed to run scenarios from {}", scenarios.display()))?;

    let rows: Vec<SummaryRow> = results
        .iter()
        .enumerate()
        .map(|(i, (input, result))| SummaryRow {
            scenario: i + 1,
            principal: input.initial_principal,
            annual_rate: input.annual_rate,
            compounding: input.compounding,
            horizon_years: input.horizon_years,
            contribution: input.contribution_amount,
            ending_balance: result.as_ref().map(|r| r.ending_balance),
            total_principal: result.as_ref().map(|r| r.total_principal),
            total_interest: result.as_ref().map(|r| r.total_interest),
        })
        .collect();

    println!("{:>8} {:>16} {:>16} {:>16}", "Scenario", "Balance", "Principal", "Interest");
    for row in &rows {
        match (row.ending_balance, row.total_principal, row.total_interest) {
            (Some(balance), Some(principal), Some(interest)) => {
                println!(
                    "{:>8} {:>16.2} {:>16.2} {:>16.2}",
                    row.scenario, balance, principal, interest
                )
            }
            _ => println!("{:>8} {:>16}", row.scenario, "invalid input"),
        }
    }

    if let Some(path) = output {
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        for row in &rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        println!("\nSummary written to: {}", path.display());
    }

    Ok(())
}
