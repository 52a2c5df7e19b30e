use std::path::PathBuf;

use biometria_cli::config::{self, BiometriaConfig};
use biometria_cli::{input, render};
use biometria_core::models::score::MetricAge;
use biometria_core::models::subject::Sex;
use biometria_scoring::CalibrationTable;
use biometria_scoring::error::CalibrationError;
use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "biometria")]
#[command(about = "Biophysical age scoring from calibration tables", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Path to config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a subject's measurements
    Score {
        /// Calibration table (JSON)
        #[arg(short, long)]
        calibration: Option<PathBuf>,
        /// Measurements (JSON object of metric -> value or {high, long, width})
        #[arg(short, long)]
        measurements: PathBuf,
        /// Chronological age in years
        #[arg(long)]
        age: Option<i32>,
        /// Birth date (YYYY-MM-DD), used instead of --age
        #[arg(long)]
        birth_date: Option<jiff::civil::Date>,
        /// Measurement date for --birth-date (defaults to today)
        #[arg(long)]
        on: Option<jiff::civil::Date>,
        /// Resolves a `fat` measurement to the matching calibration key
        #[arg(long, value_enum)]
        sex: Option<SexArg>,
        /// Use athlete body-fat calibration
        #[arg(long)]
        athlete: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Look up a single metric value
    Lookup {
        #[arg(short, long)]
        calibration: Option<PathBuf>,
        metric: String,
        value: f64,
    },
    /// Check a calibration table for overlaps, bad bands and gaps
    Validate {
        #[arg(short, long)]
        calibration: Option<PathBuf>,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective config
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SexArg {
    Male,
    Female,
}

impl From<SexArg> for Sex {
    fn from(value: SexArg) -> Self {
        match value {
            SexArg::Male => Sex::Male,
            SexArg::Female => Sex::Female,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;

    match cli.command {
        Commands::Score {
            calibration,
            measurements,
            age,
            birth_date,
            on,
            sex,
            athlete,
            json,
        } => {
            let table = input::load_calibration(&calibration_path(calibration, &config)?)?;
            let mut inputs = input::load_measurements(&measurements)?;
            input::resolve_fat_alias(&mut inputs, sex.map(Sex::from), athlete);
            let chronological_age = input::subject_age(age, birth_date, on)?;

            let result = table.score_subject(&inputs, chronological_age, &config.scoring);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render::render_text(&result));
            }
        }
        Commands::Lookup {
            calibration,
            metric,
            value,
        } => {
            let table = input::load_calibration(&calibration_path(calibration, &config)?)?;
            match table.resolve_age(&metric, Some(value)) {
                MetricAge::Scored(age) => println!("{age}"),
                MetricAge::Unscorable(reason) => {
                    return Err(eyre::eyre!("{metric} = {value}: {}", reason.describe()));
                }
            }
        }
        Commands::Validate { calibration } => {
            let path = calibration_path(calibration, &config)?;
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| eyre::eyre!("failed to read calibration at {}: {e}", path.display()))?;
            let table = match CalibrationTable::from_json(&contents) {
                Ok(table) => table,
                Err(CalibrationError::Invalid(issues)) => {
                    for issue in &issues {
                        println!("issue: {issue}");
                    }
                    return Err(eyre::eyre!("{} calibration issue(s)", issues.len()));
                }
                Err(e) => return Err(e.into()),
            };
            let gaps = table.coverage_gaps();
            for gap in &gaps {
                println!("gap: {} has no board for ({}, {})", gap.metric_name, gap.from, gap.to);
            }
            println!(
                "ok: {} board(s) across {} metric(s), {} gap(s)",
                table.len(),
                table.metrics().count(),
                gaps.len()
            );
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("# {}", config_path.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    return Err(eyre::eyre!(
                        "config already exists at {} (use --force to overwrite)",
                        config_path.display()
                    ));
                }
                config::save_config(&config_path, &BiometriaConfig::default())?;
                println!("wrote {}", config_path.display());
            }
        },
    }

    Ok(())
}

fn calibration_path(arg: Option<PathBuf>, config: &BiometriaConfig) -> Result<PathBuf> {
    arg.or_else(|| config.calibration_path.clone()).ok_or_else(|| {
        eyre::eyre!("no calibration table given (use --calibration or set calibration_path in config)")
    })
}

fn init_logging(verbose: bool, json: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
