//! Command-line entry point: load CSV inputs, schedule, export, report.

use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

use league_schedule::export;
use league_schedule::loader;
use league_schedule::scheduler::{ScheduleReport, SeasonScheduler};
use league_schedule::validation;

#[derive(Parser)]
#[command(
    name = "league-schedule",
    version,
    about = "Deterministic league match scheduler"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schedule a season from CSV inputs and write schedule.csv / schedule.json.
    Run {
        /// Directory containing team.csv, venue.csv and league.csv.
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
        /// Output directory; defaults to the data directory.
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run { data_dir, out_dir } => run(&data_dir, out_dir.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing() {
    let level = env::var("RUST_LOG")
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("failed to install tracing subscriber");
}

fn run(data_dir: &Path, out_dir: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let request = loader::load_dir(data_dir)?;

    if let Err(findings) =
        validation::validate_input(&request.teams, &request.venues, &request.leagues)
    {
        for finding in &findings {
            warn!("{finding}");
        }
    }

    let outcome = SeasonScheduler::new().schedule_request(&request);

    let out_dir = out_dir.unwrap_or(data_dir);
    export::write_outputs(out_dir, &outcome.matches)?;

    print_report(&ScheduleReport::calculate(&outcome));
    println!(
        "wrote {} and {}",
        out_dir.join("schedule.csv").display(),
        out_dir.join("schedule.json").display()
    );
    Ok(())
}

fn print_report(report: &ScheduleReport) {
    println!(
        "scheduled {} of {} required matches",
        report.total_scheduled, report.total_required
    );
    for league in &report.leagues {
        match league.skipped {
            Some(reason) => println!("  {}: skipped ({reason})", league.league_name),
            None if league.deficit() > 0 => println!(
                "  {}: {}/{} scheduled, deficit {}",
                league.league_name,
                league.scheduled,
                league.required,
                league.deficit()
            ),
            None => println!(
                "  {}: {}/{} scheduled",
                league.league_name, league.scheduled, league.required
            ),
        }
    }
}
