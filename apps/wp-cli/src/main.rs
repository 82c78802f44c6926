mod error;
mod report;

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wp_turbine::{PowerModel, PowerTable, TurbineError, TurbineModel, TurbineSpecs, speed_range};

use crate::error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "wp-cli")]
#[command(about = "Wind turbine power curve calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a turbine specification sheet
    Specs {
        /// Path to the spec file (.yaml, .yml or .json)
        spec_path: PathBuf,
    },
    /// Tabulate power over a range of wind speeds
    Power {
        /// Path to the spec file (.yaml, .yml or .json)
        spec_path: PathBuf,
        /// Measured power curve CSV; adds a measured column next to the general one
        #[arg(long)]
        curve: Option<PathBuf>,
        /// First wind speed in m/s
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        start: f64,
        /// End of the range in m/s (exclusive)
        #[arg(long, default_value_t = 30.0, allow_negative_numbers = true)]
        stop: f64,
        /// Spacing in m/s
        #[arg(long, default_value_t = 0.1)]
        step: f64,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Evaluate power at specific wind speeds
    At {
        /// Path to the spec file (.yaml, .yml or .json)
        spec_path: PathBuf,
        /// Measured power curve CSV
        #[arg(long)]
        curve: Option<PathBuf>,
        /// Wind speeds in m/s
        #[arg(required = true, allow_negative_numbers = true)]
        speeds: Vec<f64>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Csv,
}

fn main() -> CliResult<()> {
    // Logs go to stderr so CSV on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Specs { spec_path } => cmd_specs(&spec_path),
        Commands::Power {
            spec_path,
            curve,
            start,
            stop,
            step,
            format,
            output,
        } => cmd_power(
            &spec_path,
            curve.as_deref(),
            (start, stop, step),
            format,
            output.as_deref(),
        ),
        Commands::At {
            spec_path,
            curve,
            speeds,
        } => cmd_at(&spec_path, curve.as_deref(), speeds),
    }
}

fn cmd_specs(spec_path: &Path) -> CliResult<()> {
    let specs = wp_project::load_specs(spec_path)?.to_specs();
    print!("{}", report::render_specs(&specs));
    Ok(())
}

fn cmd_power(
    spec_path: &Path,
    curve_path: Option<&Path>,
    (start, stop, step): (f64, f64, f64),
    format: Format,
    output: Option<&Path>,
) -> CliResult<()> {
    let (name, models) = load_models(spec_path, curve_path)?;
    let speeds = speed_range(start, stop, step)?;
    tracing::debug!(points = speeds.len(), models = models.len(), "evaluating power table");

    let refs: Vec<&dyn PowerModel> = models.iter().map(|m| m as &dyn PowerModel).collect();
    let table = PowerTable::build(speeds, &refs);

    let bytes = match format {
        Format::Text => {
            let mut text = String::new();
            if let Some(name) = &name {
                text.push_str(&format!("# {}\n", name));
            }
            text.push_str(&report::render_table(&table));
            text.into_bytes()
        }
        Format::Csv => {
            let mut buf = Vec::new();
            report::write_table_csv(&mut buf, &table)?;
            buf
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &bytes).map_err(|e| CliError::OutputWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        println!("✓ Wrote {} rows to {}", table.len(), path.display());
    } else {
        io::stdout().write_all(&bytes)?;
    }
    Ok(())
}

fn cmd_at(spec_path: &Path, curve_path: Option<&Path>, speeds: Vec<f64>) -> CliResult<()> {
    let (_name, models) = load_models(spec_path, curve_path)?;
    let refs: Vec<&dyn PowerModel> = models.iter().map(|m| m as &dyn PowerModel).collect();
    let table = PowerTable::build(speeds, &refs);
    print!("{}", report::render_table(&table));
    Ok(())
}

/// Build the general model, plus the measured one when a curve is given.
///
/// With a curve, a zero rated speed only drops the general model.
/// The turbine name is split off so columns are labelled by model kind.
fn load_models(
    spec_path: &Path,
    curve_path: Option<&Path>,
) -> CliResult<(Option<String>, Vec<TurbineModel>)> {
    let mut specs: TurbineSpecs = wp_project::load_specs(spec_path)?.to_specs();
    let name = specs.name.take();

    let general = TurbineModel::general(specs.clone());
    let Some(path) = curve_path else {
        return Ok((name, vec![general?]));
    };

    let curve = wp_project::load_power_curve_csv(path)?.to_curve()?;
    let mut models = Vec::with_capacity(2);
    match general {
        Ok(model) => models.push(model),
        Err(err @ TurbineError::DegenerateRatedSpeed { .. }) => {
            tracing::warn!(%err, "skipping general model; measured curve only");
        }
        Err(err) => return Err(err.into()),
    }
    models.push(TurbineModel::measured(specs, curve));
    Ok((name, models))
}
