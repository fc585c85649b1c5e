//! Command Line Interface for Fin Planner.
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use fin_planner_auth::{AuthService, InMemoryIdentityProvider, SessionStore};
use fin_planner_data::load_csv;
use fin_planner_domain::chart::render_series;
use fin_planner_domain::{
    ChartPoint, CompoundParameters, DepositFrequency, PricePolicy, ResamplePeriod, SeriesPoint,
    SeriesSummary, SimulationParameters,
};
use fin_planner_simulation::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod output;

use output::{Report, TableSink, summary_lines};

#[derive(Parser)]
#[command(name = "fin-planner")]
#[command(version, long_about = None)]
#[command(about = "Compound-interest projections and historical buy-and-hold simulations")]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "FIN_PLANNER_LOG", default_value = "info", global = true)]
    log_level: String,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a balance growing with compound interest
    Compound(CompoundArgs),
    /// Replay buying a stock over a historical window
    Simulate(SimulateArgs),
    /// Show the identity stored in the session file
    ///
    /// Only reads the session. The file is written by whatever signs the
    /// user in (an application embedding the auth crate), never by this CLI.
    Whoami {
        /// Session file written by a sign-in elsewhere
        #[arg(long, env = "FIN_PLANNER_SESSION", default_value = "fin-planner-session.json")]
        session: PathBuf,
    },
}

#[derive(Args)]
struct CompoundArgs {
    /// Initial amount
    #[arg(short, long, default_value_t = 1000.0)]
    principal: f64,

    /// Annual interest rate in percent
    #[arg(short, long, default_value_t = 5.0)]
    rate: f64,

    /// Number of years to project
    #[arg(short, long, default_value_t = 10)]
    years: u32,

    /// Amount added every deposit period
    #[arg(short, long, default_value_t = 0.0)]
    deposit: f64,

    /// Deposit and compounding frequency (monthly, yearly)
    #[arg(short, long, default_value = "monthly")]
    frequency: DepositFrequency,
}

#[derive(Args)]
struct SimulateArgs {
    /// Price history CSV (Date,Open,High,Low,Close,Volume; DD/MM/YYYY dates)
    #[arg(short, long)]
    file: PathBuf,

    /// First day of the window (YYYY-MM-DD)
    #[arg(long, default_value = "2005-01-01")]
    start: NaiveDate,

    /// Last day of the window (YYYY-MM-DD)
    #[arg(long, default_value = "2025-01-01")]
    end: NaiveDate,

    /// Capital invested on the first bucket
    #[arg(short, long, default_value_t = 1000.0)]
    capital: f64,

    /// Amount invested on every later bucket
    #[arg(short, long, default_value_t = 300.0)]
    deposit: f64,

    /// Bucket size (daily, monthly, yearly)
    #[arg(short, long, default_value = "monthly")]
    period: ResamplePeriod,

    /// Purchase price (close, low, high)
    #[arg(long, default_value = "close")]
    policy: PricePolicy,
}

impl CompoundArgs {
    fn to_params(&self) -> CompoundParameters {
        CompoundParameters::new(self.principal, self.rate, self.years)
            .with_deposit(self.deposit, self.frequency)
    }
}

impl SimulateArgs {
    fn to_params(&self) -> SimulationParameters {
        SimulationParameters::new(self.start, self.end)
            .with_starting_capital(self.capital)
            .with_recurring_deposit(self.deposit)
            .with_period(self.period)
            .with_policy(self.policy)
    }
}

/// Installs the log subscriber. `RUST_LOG` takes precedence over `level`.
fn init_logging(level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries the tables and JSON
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Prints a series as JSON or as a table followed by its summary and warnings.
fn print_series<P>(points: &[P], warnings: Vec<String>, json: bool) -> Result<()>
where
    P: ChartPoint + SeriesPoint + Serialize,
{
    let summary = SeriesSummary::from_series(points);

    if json {
        let report = Report {
            points,
            summary,
            warnings,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for warning in &warnings {
        println!("⚠️  {warning}");
    }

    let mut sink = TableSink::new();
    let Ok(()) = render_series(&mut sink, points);
    match (sink.table(), summary) {
        (Some(table), Some(summary)) => {
            table.printstd();
            println!();
            for line in summary_lines(&summary) {
                println!("{line}");
            }
        }
        _ => println!("❌ No data points for the selected inputs."),
    }
    Ok(())
}

fn run_compound(args: &CompoundArgs, json: bool) -> Result<()> {
    // Inputs only reach the projector through a commit.
    let mut stage = ParameterStage::new(CompoundParameters::default());
    stage.set_draft(args.to_params());

    let points = CompoundProjector::new(*stage.commit()).run();
    info!(years = points.len(), "Compound projection finished");
    print_series(&points, Vec::new(), json)
}

async fn run_simulate(args: &SimulateArgs, json: bool) -> Result<()> {
    let history = load_csv(&args.file)
        .await
        .with_context(|| format!("failed to load price history from {}", args.file.display()))?;

    let mut stage = ParameterStage::new(SimulationParameters::default());
    stage.set_draft(args.to_params());
    let params = *stage.commit();

    let mut warnings: Vec<String> = validate_range(
        params.start_date,
        params.end_date,
        history.date_bounds(),
    )
    .iter()
    .map(ToString::to_string)
    .collect();
    if history.skipped_rows() > 0 {
        warnings.push(format!(
            "{} unreadable CSV rows were skipped",
            history.skipped_rows()
        ));
    }

    let points = HistoricalSimulator::new(params).run(history.records());
    info!(points = points.len(), "Simulation finished");
    print_series(&points, warnings, json)
}

async fn run_whoami(session: PathBuf, json: bool) -> Result<()> {
    let auth = AuthService::new(
        Arc::new(InMemoryIdentityProvider::new()),
        SessionStore::new(session),
    );
    let identity = auth.restore().await.context("failed to read session")?;
    debug!(signed_in = identity.is_some(), "Session checked");

    if json {
        println!("{}", serde_json::to_string_pretty(&identity)?);
        return Ok(());
    }

    match identity {
        Some(user) if !user.display_name.is_empty() => {
            println!("👤 {} <{}>", user.display_name, user.email)
        }
        Some(user) => println!("👤 {}", user.email),
        None => println!("Not signed in."),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.verbose);

    match cli.command {
        Commands::Compound(args) => run_compound(&args, cli.json),
        Commands::Simulate(args) => run_simulate(&args, cli.json).await,
        Commands::Whoami { session } => run_whoami(session, cli.json).await,
    }
}
