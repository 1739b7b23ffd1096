//! isim — discrete-event simulation of a two-street intersection.
//!
//! Runs one or more replications with the configured arrival rates and light
//! timing, prints per-approach statistics, and optionally appends one result
//! line per run to an experiment CSV.  `isim summarize <csv>` averages such a
//! file across runs.

mod cli;


use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{info, LevelFilter};

use isim_core::{SimConfig, SimRng};
use isim_engine::Event;
use isim_model::{EventKind, IntersectionParams, IntersectionState, Outcome};
use isim_output::{summarize, CsvWriter, RunOutputObserver};
use isim_sim::{RunStatistics, SimBuilder, SimObserver, TraceObserver};

use cli::{Cli, Command, RunArgs};

/// Crates whose log level `-d 1` raises to debug.
const TRACE_TARGETS: [&str; 5] = ["isim", "isim_engine", "isim_model", "isim_sim", "isim_output"];

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Forwards every hook to the trace and CSV observers that are enabled.
struct AppObserver<'a> {
    trace:  Option<TraceObserver>,
    output: Option<&'a mut RunOutputObserver<CsvWriter>>,
}

impl SimObserver for AppObserver<'_> {
    fn on_sim_start(&mut self, config: &SimConfig, params: &IntersectionParams) {
        if let Some(t) = self.trace.as_mut() {
            t.on_sim_start(config, params);
        }
        if let Some(o) = self.output.as_deref_mut() {
            o.on_sim_start(config, params);
        }
    }

    fn on_event(&mut self, event: &Event<EventKind>, outcome: Outcome, state: &IntersectionState) {
        if let Some(t) = self.trace.as_mut() {
            t.on_event(event, outcome, state);
        }
        if let Some(o) = self.output.as_deref_mut() {
            o.on_event(event, outcome, state);
        }
    }

    fn on_sim_end(&mut self, stats: &RunStatistics) {
        if let Some(t) = self.trace.as_mut() {
            t.on_sim_end(stats);
        }
        if let Some(o) = self.output.as_deref_mut() {
            o.on_sim_end(stats);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.run.trace());

    match cli.command {
        Some(Command::Summarize { path }) => run_summarize(&path),
        None => run_experiment(&cli.run),
    }
}

fn init_logging(trace: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if trace {
        for target in TRACE_TARGETS {
            builder.filter_module(target, LevelFilter::Debug);
        }
    }
    builder.init();
}

fn run_experiment(args: &RunArgs) -> Result<()> {
    let base = args.sim_config();
    let params = args.params();
    base.validate().context("invalid simulation time")?;
    params.validate().context("invalid intersection parameters")?;

    let mut output = match &args.output {
        Some(path) => {
            let writer = CsvWriter::append(path)
                .with_context(|| format!("opening output file {}", path.display()))?;
            Some(RunOutputObserver::new(writer))
        }
        None => None,
    };

    // Replications draw their seeds from one root RNG so the whole batch is
    // reproducible from --seed.
    let mut seeds = SimRng::new(args.seed);
    for run in 0..args.runs {
        let seed = if args.runs == 1 { args.seed } else { seeds.child_seed(run as u64) };
        let config = SimConfig { seed, ..base.clone() };

        let mut observer = AppObserver {
            trace:  config.trace.then(TraceObserver::new),
            output: output.as_mut(),
        };
        let mut sim = SimBuilder::new(config, params.clone())
            .build()
            .context("building simulation")?;
        let stats = sim
            .run(&mut observer)
            .with_context(|| format!("run {} (seed {seed}) aborted", run + 1))?;

        if args.runs > 1 {
            println!("Run {}/{} (seed {seed})", run + 1, args.runs);
        }
        println!("{stats}");
        println!();

        if let Some(e) = output.as_mut().and_then(RunOutputObserver::take_error) {
            bail!("writing run {} to the output file failed: {e}", run + 1);
        }
    }

    if let Some(obs) = output {
        let writer = obs.into_writer();
        info!(
            "appended {} run record(s) to {}",
            writer.written(),
            writer.path().display()
        );
    }
    Ok(())
}

fn run_summarize(path: &Path) -> Result<()> {
    let summary = summarize(path)
        .with_context(|| format!("summarizing {}", path.display()))?;
    println!("{summary}");
    Ok(())
}
