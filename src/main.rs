use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cowsim_core::{init_logging, SimConfig};
use cowsim_io::EventLog;
use cowsim_lib::registry::EnvironmentKind;
use cowsim_lib::{EventSummary, RunOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "A simple cow pen simulator.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a cow pen simulation.
    Run(RunArgs),
    /// Summarise the event log of a previous run.
    Summarize {
        /// Path to an events.jsonl file
        #[arg(default_value = "output/events.jsonl")]
        log: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Set the simulation environment.
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = EnvironmentKind::CowPen)]
    environment: EnvironmentKind,

    /// Set entities and quantity to run in simulation, e.g. `-t "Purple Angus" 12`.
    /// Defaults to 10 Purple Angus.
    #[arg(
        short = 't',
        long = "entity",
        num_args = 2,
        value_names = ["KIND", "QTY"],
        action = clap::ArgAction::Append,
        allow_negative_numbers = true
    )]
    entities: Vec<String>,

    /// Directory for CSV reports, the manifest and the event log
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Maximum head count per cohort
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Number of days to simulate
    #[arg(short, long)]
    steps: Option<u64>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Custom config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

impl RunArgs {
    fn founders(&self) -> Result<Vec<(String, i64)>> {
        self.entities
            .chunks(2)
            .map(|pair| match pair {
                [kind, quantity] => {
                    let quantity = quantity.parse::<i64>().with_context(|| {
                        format!("Invalid quantity {quantity:?} for {kind}")
                    })?;
                    Ok((kind.clone(), quantity))
                }
                _ => anyhow::bail!("Entity needs a kind and a quantity"),
            })
            .collect()
    }

    fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                SimConfig::from_toml(&content)
                    .with_context(|| format!("Invalid config {}", path.display()))?
            }
            None => SimConfig::default(),
        };
        if let Some(capacity) = self.capacity {
            config.max_capacity = capacity;
        }
        if let Some(steps) = self.steps {
            config.max_steps = steps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn run(args: RunArgs) -> Result<()> {
    let options = RunOptions {
        environment: args.environment,
        founders: args.founders()?,
        config: args.sim_config()?,
        output: Some(args.output.clone()),
    };

    let outcome = cowsim_lib::run(options)?;

    println!(
        "{} finished after {} steps",
        args.environment,
        outcome.steps()
    );
    for (cohort, population) in outcome.environment.populations() {
        println!("  {cohort}: {population}");
    }
    println!("Report written to {}", args.output.display());
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => run(args),
        Command::Summarize { log } => {
            let events = EventLog::read(&log)
                .with_context(|| format!("Failed to read {}", log.display()))?;
            print!("{}", EventSummary::from_events(&events));
            Ok(())
        }
    }
}
