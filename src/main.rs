//! tapesprocket CLI - Tape sprocket profile generator
//!
//! Computes sprocket profiles from five parameters and exports them as DXF or SVG.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use tapesprocket::{
    export_profile, init_logging, Config, DiameterReport, LengthUnit, ParameterOverrides,
    PathEncoding, SprocketGenerator, VERSION,
};
use tracing::info;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

#[derive(Parser)]
#[command(name = "tapesprocket")]
#[command(about = "Tape sprocket profile generator for CNC and laser cutting", long_about = None)]
#[command(version = VERSION, long_version = LONG_VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a profile and export it (format determined by extension: .dxf, .svg)
    Generate {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
        /// Configuration file (default: platform config directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        overrides: ParameterOverrides,
        /// Multiplier applied to DXF coordinates
        #[arg(long, conflicts_with = "units")]
        scale: Option<f64>,
        /// Unit of DXF coordinates (mm, in)
        #[arg(long)]
        units: Option<LengthUnit>,
        /// Write an explicit L before every SVG path point
        #[arg(long)]
        explicit_lineto: bool,
        /// SVG stroke width (mm)
        #[arg(long)]
        stroke_width: Option<f64>,
    },
    /// Print the diameters of a profile
    Report {
        /// Configuration file (default: platform config directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        overrides: ParameterOverrides,
    },
    /// Write a configuration file with the default settings
    InitConfig {
        /// Output file, .toml or .json (default: platform config directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    match cli.command {
        Commands::Generate {
            output,
            config,
            overrides,
            scale,
            units,
            explicit_lineto,
            stroke_width,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(scale) = scale {
                config.export.dxf_scale = scale;
            }
            if let Some(units) = units {
                config.export.dxf_scale = units.scale_from_mm();
            }
            if explicit_lineto {
                config.export.svg_path_encoding = PathEncoding::Explicit;
            }
            if let Some(width) = stroke_width {
                config.export.svg_stroke_width = width;
            }
            generate(&config, &overrides, &output)?;
        }
        Commands::Report { config, overrides } => {
            let config = load_config(config.as_deref())?;
            let generator = SprocketGenerator::new(overrides.apply(&config.parameters)?)?;
            let profile = generator.generate()?;
            print!("{}", DiameterReport::from(&profile.radii));
        }
        Commands::InitConfig { output } => {
            init_config(output)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(Some(path))
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Config::load(None).context("Failed to load default config"),
    }
}

fn generate(config: &Config, overrides: &ParameterOverrides, output: &Path) -> Result<()> {
    let params = overrides
        .apply(&config.parameters)
        .context("Invalid sprocket parameters")?;
    let generator = SprocketGenerator::new(params)?;
    let profile = generator
        .generate()
        .context("Failed to compute sprocket profile")?;

    let format = export_profile(&profile, output, &config.export)
        .with_context(|| format!("Failed to export {}", output.display()))?;

    println!("Exported {} to {}", format, output.display());
    print!("{}", DiameterReport::from(&profile.radii));
    Ok(())
}

fn init_config(output: Option<PathBuf>) -> Result<()> {
    let path = match output {
        Some(path) => path,
        None => Config::default_path().context("No configuration directory on this platform")?,
    };

    Config::new()
        .save_to_file(&path)
        .with_context(|| format!("Failed to write config {}", path.display()))?;

    info!(path = %path.display(), "Wrote default configuration");
    println!("Wrote {}", path.display());
    Ok(())
}
