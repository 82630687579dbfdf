//! rocket-lander - run one landing episode, logging and recording each step

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rocket_lander::gnc::{Controller, LandingController, OpenLoop};
use rocket_lander::io::{ConsoleLogger, CsvRecorder};
use rocket_lander::sim::{self, observe_fn, Engine, StepObserver};
use rocket_lander::RocketConfig;

#[derive(Parser)]
#[command(name = "rocket-lander")]
#[command(about = "2D rocket landing environment")]
#[command(version)]
struct Cli {
    /// JSON configuration file; missing fields use defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for randomized starts
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start from the fixed (0, 100) scenario
    #[arg(short, long)]
    deterministic: bool,

    /// Where to write per-step records
    #[arg(short, long, default_value = "results.csv")]
    output: PathBuf,

    /// Policy flying the vehicle
    #[arg(long, value_enum, default_value_t = Policy::Lander)]
    controller: Policy,

    /// Stop after this many steps even if the episode is still running
    #[arg(long)]
    steps: Option<usize>,

    /// Skip per-step console logging
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    Lander,
    FreeFall,
    FullThrust,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RocketConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => RocketConfig::default(),
    };
    if cli.deterministic {
        config.disable_random_coords = true;
    }

    let mut controller: Box<dyn Controller> = match cli.controller {
        Policy::Lander => Box::new(LandingController::new(&config)),
        Policy::FreeFall => Box::new(OpenLoop::new(0.0, 0.0)),
        Policy::FullThrust => Box::new(OpenLoop::new(1.0, 0.0)),
    };

    let recorder = CsvRecorder::create(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    let quiet = cli.quiet;
    let mut logger = ConsoleLogger;
    let console = observe_fn(move |p, v, a| {
        if !quiet {
            logger.on_step(p, v, a);
        }
    });

    let mut engine = match cli.seed {
        Some(seed) => Engine::seeded(config, (console, recorder), seed),
        None => Engine::with_observer(config, (console, recorder)),
    };

    let outcome = sim::run_episode(&mut engine, controller.as_mut(), cli.steps);

    let (_, recorder) = engine.into_observer();
    let ticks = recorder.ticks();
    recorder
        .finish()
        .with_context(|| format!("writing {}", cli.output.display()))?;

    println!(
        "{} after {} steps: reward={} pos=({:.2}, {:.2}) vel=({:.2}, {:.2}) fuel={:.2}",
        outcome
            .reason
            .map_or_else(|| "stopped".to_string(), |r| format!("terminated ({})", r)),
        outcome.steps,
        outcome.reward,
        outcome.final_state.position.x,
        outcome.final_state.position.y,
        outcome.final_state.velocity.x,
        outcome.final_state.velocity.y,
        outcome.final_state.fuel_remaining,
    );
    println!("Exported {} rows to {}", ticks, cli.output.display());
    Ok(())
}
