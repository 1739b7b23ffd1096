//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use isim_core::SimConfig;
use isim_model::{IntersectionParams, LightMode, TransitTimes};

#[derive(Parser, Debug)]
#[command(name = "isim")]
#[command(about = "Discrete-event simulation of the 14th Street / Atlantic Drive intersection")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Average an experiment file per approach
    Summarize {
        /// CSV file written by earlier runs with --output
        path: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Print a trace of every event: 1 traces, 0 does not
    #[arg(short = 'd', long = "debugmode", default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub debugmode: u8,

    /// Mean inter-arrival time of cars on Atlantic Drive
    #[arg(short = 'a', long, default_value_t = 6.0)]
    pub atlantic: f64,

    /// Mean inter-arrival time of cars on 14th Street
    #[arg(short = 'f', long, default_value_t = 0.1)]
    pub fourteenth: f64,

    /// Time the 14th Street light stays green (Atlantic red)
    #[arg(short = 'g', long = "greenlighttime", default_value_t = 45)]
    pub green: u32,

    /// Time the 14th Street light stays red (Atlantic green)
    #[arg(short = 'r', long = "redlighttime", default_value_t = 30)]
    pub red: u32,

    /// Use the traffic light: true, t, True or T turns it on
    #[arg(short = 'l', long, default_value = "False", action = ArgAction::Set, value_parser = parse_light)]
    pub light: bool,

    /// Time after which no new cars arrive
    #[arg(short = 't', long = "simtime", default_value_t = SimConfig::DEFAULT_HORIZON)]
    pub simtime: f64,

    /// Master RNG seed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of replications; each gets a seed derived from --seed
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub runs: u32,

    /// Append one result line per run to this CSV file
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

impl RunArgs {
    pub fn trace(&self) -> bool {
        self.debugmode == 1
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            horizon: self.simtime,
            seed:    self.seed,
            trace:   self.trace(),
        }
    }

    pub fn params(&self) -> IntersectionParams {
        IntersectionParams {
            fourteenth_mean: self.fourteenth,
            atlantic_mean:   self.atlantic,
            light:           if self.light { LightMode::Signalized } else { LightMode::Uncontrolled },
            green_duration:  self.green as f64,
            red_duration:    self.red as f64,
            transit:         TransitTimes::default(),
        }
    }
}

/// Anything other than the four accepted spellings leaves the light off.
fn parse_light(raw: &str) -> Result<bool, String> {
    Ok(matches!(raw, "true" | "t" | "True" | "T"))
}
