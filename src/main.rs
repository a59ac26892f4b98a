use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use percolation::parameter_reader::ParameterReader;
use percolation::{ExperimentConfig, PercolationExperiment};

const PARAMETERS: [&str; 4] = [
    "grid_size",
    "trials",
    "seed",
    "parallel",
];

/// Estimate the site percolation threshold of an N-by-N grid by Monte Carlo simulation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args
{
    /// Grid size N
    #[clap(value_name = "N", allow_negative_numbers = true)]
    grid_size: Option<i32>,

    /// Number of independent trials T
    #[clap(value_name = "T", allow_negative_numbers = true)]
    trials: Option<i32>,

    /// Parameter file with `name: value` lines (grid_size, trials, seed, parallel); arguments override it
    #[clap(short = 'p', long = "params")]
    params: Option<PathBuf>,

    /// Seed for reproducible runs
    #[clap(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Run the trials one after another on the current thread
    #[clap(long = "sequential")]
    sequential: bool,

    /// Write the threshold of every trial to this file
    #[clap(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_field<T>(value: &str, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.parse().with_context(|| format!("could not parse {name} = {value:?}"))
}

fn resolve_config(args: &Args) -> Result<ExperimentConfig>
{
    let mut grid_size = None;
    let mut trials    = None;
    let mut seed      = None;
    let mut parallel  = true;

    if let Some(path) = &args.params
    {
        let mut required = Vec::new();
        if args.grid_size.is_none()
        {
            required.push("grid_size");
        }
        if args.trials.is_none()
        {
            required.push("trials");
        }
        let reader = ParameterReader::build(path, &PARAMETERS)?;
        let params = reader.parse_required(":", &required)?;
        if let Some(value) = params.get("grid_size")
        {
            grid_size = Some(parse_field::<i32>(value, "grid_size")?);
        }
        if let Some(value) = params.get("trials")
        {
            trials = Some(parse_field::<i32>(value, "trials")?);
        }
        if let Some(value) = params.get("seed")
        {
            seed = Some(parse_field::<u64>(value, "seed")?);
        }
        if let Some(value) = params.get("parallel")
        {
            parallel = parse_field::<bool>(&value.to_lowercase(), "parallel")?;
        }
    }

    let Some(grid_size) = args.grid_size.or(grid_size) else
    {
        bail!("missing grid size N (positional argument or `grid_size` in the parameter file)");
    };
    let Some(trials) = args.trials.or(trials) else
    {
        bail!("missing trial count T (positional argument or `trials` in the parameter file)");
    };

    let config = ExperimentConfig {
        grid_size,
        trials,
        seed: args.seed.or(seed),
        parallel: parallel && !args.sequential,
    };
    config.validate().context("invalid experiment parameters")?;
    Ok(config)
}

fn main() -> Result<()>
{
    let args = Args::parse();

    let level = match args.verbose
    {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = resolve_config(&args)?;
    info!(
        "Launching percolation experiment for N:{0}x{0} with {1} trials (seed: {2:?}, parallel: {3})",
        config.grid_size, config.trials, config.seed, config.parallel
    );

    let time         = std::time::Instant::now();
    let experiment   = PercolationExperiment::from_config(&config)?;
    let elapsed_time = time.elapsed();
    info!("Time taken: {:.3}s", elapsed_time.as_secs_f64());

    println!("mean                    = {}", experiment.mean());
    println!("stddev                  = {}", experiment.stddev());
    println!("95% confidence interval = [{}, {}]", experiment.confidence_lo(), experiment.confidence_hi());

    if let Some(output) = &args.output
    {
        experiment
            .statistics()
            .write_to_file(output, config.grid_size, elapsed_time)
            .with_context(|| format!("could not write thresholds to {}", output.display()))?;
        info!("File saved as {}", output.display());
    }

    Ok(())
}
