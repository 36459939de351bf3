//! LG mode command-line interface.
//!
//! Compute Laguerre-Gaussian mode profiles from flags or TOML job files:
//! ```sh
//! lgmode-cli compute --p 5 --r-max 800 --w0 200
//! lgmode-cli run job.toml
//! lgmode-cli validate job.toml
//! ```

mod config;
mod runner;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ModeConfig, OutputConfig};

#[derive(Parser)]
#[command(name = "lgmode-cli")]
#[command(about = "Radial intensity profiles and extrema of Laguerre-Gaussian modes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a single profile from command-line parameters.
    Compute {
        /// Radial mode index (0–100).
        #[arg(short, long, default_value_t = 5)]
        p: u32,
        /// Maximum radius in micrometres.
        #[arg(long = "r-max", default_value_t = 800.0)]
        r_max_um: f64,
        /// Beam waist in micrometres.
        #[arg(long = "w0", default_value_t = 200.0)]
        w0_um: f64,
        /// Write profile.csv (and JSON with --json) into this directory.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also write profile.json and extrema.json.
        #[arg(long)]
        json: bool,
    },
    /// Run a computation from a TOML configuration file.
    Run {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a configuration file without computing anything.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compute { p, r_max_um, w0_um, output, json } => {
            let mode = ModeConfig { p, r_max_um, w0_um };
            let profile = runner::run_profile(&mode)?;
            runner::print_summary(&profile);

            if let Some(out_dir) = output {
                let settings = OutputConfig {
                    directory: out_dir.display().to_string(),
                    save_profile: true,
                    save_json: json,
                };
                runner::write_outputs(&profile, &settings)?;
            }
            Ok(())
        }
        Commands::Run { config, output } => {
            let job = config::load_config(&config)?;
            println!("Configuration: {}", config.display());

            let profile = runner::run_profile(&job.mode)?;
            runner::print_summary(&profile);

            let mut settings = job.output.clone();
            if let Some(out_dir) = output {
                settings.directory = out_dir.display().to_string();
            }
            runner::write_outputs(&profile, &settings)?;
            Ok(())
        }
        Commands::Validate { config } => {
            let job = config::load_config(&config)?;
            job.mode.to_params()?;
            println!("Configuration is valid: {}", config.display());
            Ok(())
        }
    }
}
