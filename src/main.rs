use std::path::PathBuf;

use logsift::cleaner::LogCleaner;
use logsift::cli::Cli;
use logsift::config::Config;
use logsift::error::{LogsiftError, Result};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Initialize logging
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "logsift=debug" } else { "logsift=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config)?;

    // CLI flags take precedence over the config file
    if let Some(profile) = cli.profile {
        config.reduction.profile = profile;
    }
    if cli.summary {
        config.summary.enabled = true;
    }

    if cli.show_config {
        let json = serde_json::to_string_pretty(&config).map_err(|e| LogsiftError::Json {
            source: e,
            context: "Failed to serialize config".to_string(),
        })?;
        println!("{}", json);
        return Ok(());
    }

    let cleaner = LogCleaner::from_config(&config)?;

    let input = logsift::io::read_input(cli.input.as_deref())?;
    tracing::info!("Processing {} lines...", input.lines().count());

    let output = cleaner.clean(&input);
    tracing::info!(
        "Kept {} of {} lines ({} noise, {} summarized) in {}ms",
        output.stats.retained(),
        output.stats.input_lines,
        output.stats.noise,
        output.stats.summarized,
        output.stats.processing_time_ms
    );

    logsift::io::write_output(cli.output.as_deref(), &output.text)?;
    if let Some(path) = &cli.output {
        tracing::info!("Cleaned logs written to '{}'", path.display());
    }

    Ok(())
}

fn load_config(config_path: Option<PathBuf>) -> Result<Config> {
    match config_path {
        // An explicitly requested file must exist
        Some(path) => Config::load(&path),
        None => match Config::default_path() {
            Ok(path) if path.exists() => Config::load(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                let mut config = Config::default();
                config.apply_env_overrides();
                logsift::config::ConfigValidator::validate(&config)?;
                Ok(config)
            }
        },
    }
}
