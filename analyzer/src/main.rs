//! Data visualization for FRET trajectories: TDP, TODP and POKIT analysis.
//!
//! Points at a directory of per-molecule `.dat` transition files, bins the
//! transitions onto a 2D (initial, final) FRET grid, and writes the
//! requested figures. With no `--analysis-method` all three are produced.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::analysis::{compute_pokit, compute_tdp, compute_todp};
use crate::data_handling::conditions::PokitConditions;
use crate::data_handling::trace_files::discover_trace_files;
use crate::plotting::figure_path;
use crate::plotting::heatmap::plot_heat_map;
use crate::plotting::pokit_plot::plot_pokit;

mod analysis;
mod data_handling;
mod models;
mod plotting;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Method {
    Tdp,
    Todp,
    Pokit,
}

impl Method {
    fn kind(self) -> &'static str {
        match self {
            Method::Tdp => "TDP",
            Method::Todp => "TODP",
            Method::Pokit => "POKIT",
        }
    }
}

/// Data visualization for FRET trajectories, including TDP, TODP and POKIT
/// plot analysis.
#[derive(Debug, Parser)]
#[command(name = "analyzer")]
struct Cli {
    /// Directory holding per-molecule `.dat` trajectory files
    data: PathBuf,

    /// Number of bins dividing the [0, 1] FRET range
    #[arg(
        short = 'n',
        long = "number-bin",
        default_value_t = 40,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    number_bin: u16,

    /// Duration of one frame, in ms
    #[arg(long = "time-per-frame", default_value_t = 5.0)]
    time_per_frame: f64,

    /// Prefix for output figure file names
    #[arg(short = 'f', long = "figure-name")]
    figure_name: Option<String>,

    /// Figure file type: png, bmp or svg
    #[arg(short = 't', long = "type-of-figure", default_value = "png")]
    type_of_figure: String,

    /// Run a single analysis (TDP, TODP or POKIT) instead of all three
    #[arg(short = 'a', long = "analysis-method", ignore_case = true)]
    analysis_method: Option<Method>,

    /// Dwell-time classification table (JSON); bundled default otherwise
    #[arg(long = "dwell-config")]
    dwell_config: Option<PathBuf>,

    /// Fraction classification table (JSON); bundled default otherwise
    #[arg(long = "fraction-config")]
    fraction_config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Cli::parse();
    info!("Starting FRET transition analysis");

    let files = discover_trace_files(&args.data)
        .with_context(|| format!("discovering trace files in {}", args.data.display()))?;

    let methods = match args.analysis_method {
        Some(method) => vec![method],
        None => vec![Method::Tdp, Method::Todp, Method::Pokit],
    };

    for method in methods {
        run_method(method, &files, &args)
            .with_context(|| format!("{} analysis failed", method.kind()))?;
    }

    info!("All analyses complete");
    Ok(())
}

fn run_method(method: Method, files: &[PathBuf], args: &Cli) -> anyhow::Result<()> {
    let output = figure_path(
        args.figure_name.as_deref(),
        method.kind(),
        &args.type_of_figure,
    );

    let num_bins = args.number_bin as usize;
    match method {
        Method::Tdp => {
            let grid = compute_tdp(files, num_bins)?;
            plot_heat_map(&grid, "Number of Events", &output)?;
        }
        Method::Todp => {
            let grid = compute_todp(files, num_bins)?;
            plot_heat_map(&grid, "Fraction of Molecules", &output)?;
        }
        Method::Pokit => {
            let conditions = PokitConditions::load(
                args.dwell_config.as_deref(),
                args.fraction_config.as_deref(),
            )?;
            let entries = compute_pokit(files, num_bins, args.time_per_frame)?;
            plot_pokit(&entries, &conditions, &output)?;
        }
    }
    Ok(())
}
