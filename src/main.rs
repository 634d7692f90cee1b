//! Inheritance Sim - Entry Point
//!
//! Runs the generational simulation from the command line and reports the
//! inequality time series as text or JSON.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use inheritance_sim::core::config::Params;
use inheritance_sim::core::error::Result;
use inheritance_sim::simulation::{Simulation, SimulationOutput};
use tracing_subscriber::EnvFilter;

/// Generational wealth-inequality simulation
#[derive(Parser, Debug)]
#[command(name = "inheritance-sim")]
#[command(about = "Simulate how genes, environment, education and mating shape wealth inequality")]
struct Args {
    /// TOML parameter file (missing keys use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of generations to simulate
    #[arg(long, short = 'g', default_value_t = 50)]
    generations: u32,

    /// Agents in the founding generation
    #[arg(long, short = 'n')]
    population: Option<usize>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Weight of genes vs. environment in education (0-1)
    #[arg(long)]
    gene_env_weight: Option<f64>,

    /// Weight of merit vs. inheritance in wealth (0-1)
    #[arg(long)]
    finance_weight: Option<f64>,

    /// Assortative mating strength on genes (0-1)
    #[arg(long)]
    homophily_gene: Option<f64>,

    /// Assortative mating strength on environment (0-1)
    #[arg(long)]
    homophily_env: Option<f64>,

    /// Output format: text, json or csv
    #[arg(long, default_value = "text")]
    format: String,

    /// Write output to this file instead of stdout
    ///
    /// With `--format csv` this file holds the final cohort and the
    /// per-generation series goes to `<stem>_history.csv` beside it.
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "inheritance_sim=debug"
    } else {
        "inheritance_sim=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let params = build_params(&args)?;
    tracing::info!(?params, "Inheritance Sim starting...");

    let mut sim = Simulation::new(params, args.seed)?;
    let text = args.format != "json" && args.format != "csv";

    if text {
        println!("gen  | agents | gini  | mean wealth  | median wealth | corr");
        println!("-----|--------|-------|--------------|---------------|------");
        print_row(&sim.history()[0]);
    }

    sim.run(args.generations, |stats| {
        if text {
            print_row(stats);
        }
        true
    })?;

    let output = sim.output();
    if args.format == "csv" {
        return write_csv(&output, args.output.as_deref());
    }
    let rendered = if text { output.summary() } else { output.to_json() };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            println!("\nOutput written to {}", path.display());
        }
        None => println!("\n{}", rendered),
    }

    Ok(())
}

/// Final cohort and generation series as CSV, to files or stdout
fn write_csv(output: &SimulationOutput, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "inheritance-sim".to_string());
            let history_path = path.with_file_name(format!("{}_history.csv", stem));

            output.write_population_csv(File::create(path)?)?;
            output.write_history_csv(File::create(&history_path)?)?;
            println!(
                "Population written to {}, history to {}",
                path.display(),
                history_path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            output.write_population_csv(stdout.lock())?;
            println!();
            output.write_history_csv(stdout.lock())?;
        }
    }
    Ok(())
}

/// Defaults, then the config file, then individual flags
fn build_params(args: &Args) -> Result<Params> {
    let mut params = match &args.config {
        Some(path) => Params::load(path)?,
        None => Params::default(),
    };

    if let Some(n) = args.population {
        params.population_size = n;
    }
    if let Some(w) = args.gene_env_weight {
        params.gene_env_weight = w;
    }
    if let Some(w) = args.finance_weight {
        params.finance_weight = w;
    }
    if let Some(h) = args.homophily_gene {
        params.homophily.gene = h;
    }
    if let Some(h) = args.homophily_env {
        params.homophily.env = h;
    }

    params.validate()?;
    Ok(params)
}

fn print_row(stats: &inheritance_sim::simulation::GenerationStats) {
    let corr = stats
        .intergenerational_correlation
        .map(|r| format!("{:.3}", r))
        .unwrap_or_else(|| "  -".to_string());
    println!(
        "{:>4} | {:>6} | {:.3} | {:>12.1} | {:>13.1} | {}",
        stats.generation, stats.population, stats.gini, stats.wealth.mean, stats.wealth.median, corr
    );
}
