#![deny(warnings)]

use clap::{Parser, Subcommand};
use gonio::angle::AngleUnit;
use gonio::batch::{convert_all, read_values};
use gonio::config::{check_precision, OutputFormat, Settings};
use gonio::errors::GonioError;
use gonio::logging::init_logging;
use gonio::output::{render_json, render_plain};
use std::path::PathBuf;

/// gonio converts angles between degrees and radians.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print the results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Number of decimal places in plain output.
    #[arg(long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert degrees to radians
    ToRads(Values),
    /// Convert radians to degrees
    ToDegs(Values),
    /// Convert from the given unit into the other one
    Convert {
        /// Unit of the input values (deg, degrees, rad, radians).
        #[arg(long)]
        from: AngleUnit,

        #[command(flatten)]
        values: Values,
    },
}

#[derive(clap::Args, Debug)]
struct Values {
    /// Read additional values from a file (whitespace or comma separated).
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Values to convert. Options go before the values, everything after
    /// the first value is read as a value (so `-inf` works).
    #[arg(allow_hyphen_values = true)]
    values: Vec<f64>,
}

fn run(cli: Cli) -> Result<(), GonioError> {
    let settings = Settings::from_env()?;
    init_logging(&settings.log_filter)?;
    tracing::debug!("settings: {:?}", settings);

    let precision = match cli.precision {
        Some(precision) => Some(check_precision(precision).map_err(|message| {
            GonioError::Config {
                setting: "--precision".to_string(),
                message,
            }
        })?),
        None => settings.precision,
    };

    let (from, input) = match cli.command {
        Command::ToRads(values) => (AngleUnit::Degrees, values),
        Command::ToDegs(values) => (AngleUnit::Radians, values),
        Command::Convert { from, values } => (from, values),
    };

    let mut values = input.values;
    if let Some(file) = &input.file {
        values.extend(read_values(file)?);
    }
    if values.is_empty() {
        return Err(GonioError::Usage("No values to convert".to_string()));
    }

    let conversions = convert_all(&values, from);
    tracing::info!(
        "converted {} values from {} to {}",
        conversions.len(),
        from,
        from.other()
    );

    let format = if cli.json {
        OutputFormat::Json
    } else {
        settings.format
    };
    match format {
        OutputFormat::Plain => print!("{}", render_plain(&conversions, precision)),
        OutputFormat::Json => println!("{}", render_json(&conversions, from)?),
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
