use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mock_date::{
    convert_json, evaluate_with_options, parse, Clock, EvaluateOptions, FixedClock, SystemClock,
};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[derive(Parser)]
#[command(name = "mock-date", version)]
#[command(about = "Resolve relative-date phrases such as \"10 days ago\" or \"end of month next month\"")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Reference date (YYYY-MM-DD) used instead of the system date
    #[arg(long, global = true, value_parser = parse_today)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single phrase
    Eval {
        /// The phrase, e.g. "beginning of month 9 months from now"
        phrase: String,

        /// Output format for phrases without an (as ...) transform
        #[arg(long, short)]
        format: Option<String>,

        /// Print the parsed expression as JSON instead of evaluating it
        #[arg(long)]
        explain: bool,
    },
    /// Convert every phrase in a JSON fixture read from stdin
    Table,
}

fn parse_today(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level != LevelFilter::OFF {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }
}

fn run(cli: Cli) -> Result<()> {
    let clock: Box<dyn Clock> = match cli.today {
        Some(date) => Box::new(FixedClock::new(date)),
        None => Box::new(SystemClock),
    };
    let today = clock.today();
    tracing::debug!(%today, pinned = cli.today.is_some(), "reference date");

    match cli.command {
        Commands::Eval {
            phrase,
            format,
            explain,
        } => {
            if explain {
                let expr = parse(&phrase)?;
                println!("{}", serde_json::to_string_pretty(&expr)?);
                return Ok(());
            }
            let mut options = EvaluateOptions::default();
            if let Some(format) = format {
                options.default_format = format;
            }
            let output = evaluate_with_options(&phrase, today, &options)
                .with_context(|| format!("evaluating '{}'", phrase))?;
            println!("{}", output);
        }
        Commands::Table => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("reading stdin")?;
            let value: serde_json::Value =
                serde_json::from_str(&input).context("parsing fixture JSON")?;
            let converted = convert_json(&value, today).context("converting fixture")?;
            println!("{}", serde_json::to_string_pretty(&converted)?);
        }
    }

    Ok(())
}
