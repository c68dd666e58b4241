use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use firesteel::{MaterialProperties, MaterialPropertyError, StressModel};
use log::info;
use thiserror::Error;

/// Command line interface of the `firesteel` binary.
#[derive(Debug, Parser)]
#[command(
    name = "firesteel",
    version,
    about = "Stress-strain law of structural steel at elevated temperature"
)]
pub struct Cli {
    /// Room-temperature material of every evaluation.
    #[command(flatten)]
    pub material: MaterialArgs,
    /// What to evaluate.
    #[command(subcommand)]
    pub command: Command,
}

/// Room-temperature properties, given directly or read from a JSON file.
#[derive(Debug, Args)]
pub struct MaterialArgs {
    /// JSON file with `proportional_limit`, `yield_strength` and `elastic_modulus`
    /// in pascals. Overrides the individual flags.
    #[arg(long, global = true)]
    pub material: Option<PathBuf>,
    /// Proportional limit at 20 °C in pascals.
    #[arg(long, global = true, default_value_t = 200.0e6)]
    pub fp: f64,
    /// Yield strength at 20 °C in pascals.
    #[arg(long, global = true, default_value_t = 250.0e6)]
    pub fy: f64,
    /// Elastic modulus at 20 °C in pascals.
    #[arg(long, global = true, default_value_t = 210.0e9)]
    pub ea: f64,
}

/// Subcommands of the binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the reduction factors and reduced properties at a temperature.
    Factors {
        /// Temperature in degrees Celsius.
        #[arg(long, allow_hyphen_values = true)]
        temperature: f64,
    },
    /// Evaluate the stress at one strain and temperature.
    Stress {
        /// Dimensionless strain.
        #[arg(long, allow_hyphen_values = true)]
        strain: f64,
        /// Temperature in degrees Celsius.
        #[arg(long, allow_hyphen_values = true)]
        temperature: f64,
        /// Stress-strain law: `basic` or `hardening`.
        #[arg(long, default_value = "basic")]
        model: StressModel,
    },
    /// Sample a stress-strain curve at one temperature.
    Curve {
        /// Temperature in degrees Celsius.
        #[arg(long, allow_hyphen_values = true)]
        temperature: f64,
        /// Stress-strain law: `basic` or `hardening`.
        #[arg(long, default_value = "basic")]
        model: StressModel,
        /// Largest sampled strain.
        #[arg(long, default_value_t = 0.2)]
        max_strain: f64,
        /// Number of evenly spaced samples, both ends included.
        #[arg(long, default_value_t = 41)]
        samples: usize,
        /// Output layout.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

/// Layout of a rendered curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns in megapascals.
    Table,
    /// Comma separated strain and stress in pascals.
    Csv,
    /// JSON array of `{ "strain", "stress" }` objects.
    Json,
}

/// Error returned when the material cannot be resolved.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The material file could not be read.
    #[error("cannot read material file '{path}': {source}")]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The material file is not valid JSON for [`MaterialProperties`].
    #[error("cannot parse material file '{path}': {source}")]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// The properties violate a material invariant.
    #[error("invalid material: {0}")]
    Invalid(#[from] MaterialPropertyError),
}

impl MaterialArgs {
    /// Build validated properties from the file, or from the flags when no file is given.
    pub fn resolve(&self) -> Result<MaterialProperties, ConfigError> {
        let material = match &self.material {
            Some(path) => load_material(path)?,
            None => MaterialProperties::new(self.fp, self.fy, self.ea)?,
        };
        info!(
            "material: fp = {} Pa, fy = {} Pa, Ea = {} Pa",
            material.proportional_limit, material.yield_strength, material.elastic_modulus
        );
        Ok(material)
    }
}

/// Read and validate a JSON material file.
pub fn load_material(path: &Path) -> Result<MaterialProperties, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let material: MaterialProperties =
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    material.validate()?;
    Ok(material)
}
