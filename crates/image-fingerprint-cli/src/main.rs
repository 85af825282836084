use clap::{Parser, Subcommand};
use image_fingerprint_core::config::LogLevel;
use image_fingerprint_core::processing::{hash_bytes, read_image_bytes};
use image_fingerprint_core::{logging, Config, Fingerprinter, SimilarityMode};
use log::{error, info, LevelFilter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "image-fingerprint")]
#[command(about = "Compute and compare perceptual image fingerprints")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to rotating files in this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the fingerprints of one or more images as JSON
    Hash {
        /// Image files to fingerprint
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Compare the fingerprints of two images
    Compare {
        first: PathBuf,
        second: PathBuf,

        /// Score hashes over all 64 bits instead of stopping below one half
        #[arg(long)]
        exact: bool,

        /// Override the tag grid resolution
        #[arg(long)]
        tag_space: Option<usize>,
    },

    /// Print the 8x8 hash grid of an image
    Grid { file: PathBuf },

    /// Generate default configuration file
    GenerateConfig {
        /// Path to save configuration file
        #[arg(default_value = "image-fingerprint.json")]
        path: PathBuf,
    },
}

fn init_logging(cli: &Cli, config: &Config) -> Result<(), anyhow::Error> {
    let level = match cli.verbose {
        0 => LevelFilter::from(config.log_level),
        1 => LevelFilter::from(LogLevel::Debug),
        _ => LevelFilter::from(LogLevel::Trace),
    };

    match &cli.log_dir {
        Some(dir) => logging::init_logger(dir, level).map_err(|e| anyhow::anyhow!("{}", e))?,
        None => env_logger::Builder::new()
            .filter_level(level)
            .parse_env(logging::LOG_ENV_VAR)
            .init(),
    }
    Ok(())
}

fn main() -> Result<(), anyhow::Error> {
    // Parse command line arguments
    let cli = Cli::parse();

    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::default()
    };

    init_logging(&cli, &config)?;

    match cli.command {
        Commands::Hash { files } => {
            config.validate()?;
            let fingerprinter = Fingerprinter::new(config);

            let mut failures = 0;
            for path in &files {
                match fingerprinter.fingerprint_file(path) {
                    Ok(fingerprint) => {
                        let line = serde_json::json!({
                            "path": path.display().to_string(),
                            "fingerprint": fingerprint,
                        });
                        println!("{}", line);
                    }
                    Err(e) => {
                        error!("Failed to fingerprint {}: {}", path.display(), e);
                        failures += 1;
                    }
                }
            }

            info!("Fingerprinted {} of {} files", files.len() - failures, files.len());
            if failures > 0 {
                anyhow::bail!("{} file(s) could not be fingerprinted", failures);
            }
            Ok(())
        }

        Commands::Compare {
            first,
            second,
            exact,
            tag_space,
        } => {
            if exact {
                config.similarity_mode = SimilarityMode::Exact;
            }
            if let Some(tag_space) = tag_space {
                config.tag_space = tag_space;
            }
            config.validate()?;

            let fingerprinter = Fingerprinter::new(config);
            let a = fingerprinter.fingerprint_file(&first)?;
            let b = fingerprinter.fingerprint_file(&second)?;
            let comparison = fingerprinter.compare(&a, &b);

            println!("{}", serde_json::to_string_pretty(&comparison)?);
            Ok(())
        }

        Commands::Grid { file } => {
            let bytes = read_image_bytes(&file)?;
            let (_, hashed) = hash_bytes(&bytes)?;

            println!("{}", hashed.hash);
            println!("{}", hashed.hash.grid());
            println!(
                "content rate: {}",
                image_fingerprint_core::utils::round_to(hashed.hash.content_rate(), config.precision)
            );
            Ok(())
        }

        Commands::GenerateConfig { path } => {
            let config = Config::default();
            config.save_to_file(&path)?;
            println!("Configuration file generated at: {}", path.display());
            Ok(())
        }
    }
}
