//! Stockroom - An interactive inventory interpreter.

use stockroom::cli::Cli;
use stockroom::config::Config;
use stockroom::error::{Result, StockroomError};
use stockroom::history::{FileHistorySink, HistorySink};
use stockroom::logging;
use stockroom::repl::Repl;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            logging::init_stderr_logging("warn");
            error!("{}: {}", e.category(), e);
            std::process::exit(1);
        }
    };

    match &config.logging.log_file {
        Some(log_file) => {
            logging::init_file_logging(&logging::resolve_log_path(log_file), &config.logging.level)
        }
        None => logging::init_stderr_logging(&config.logging.level),
    }

    match run(&cli, &config).await {
        // A pending stdin read blocks runtime shutdown, so exit directly.
        Ok(()) => std::process::exit(0),
        Err(e) => {
            error!("{}: {}", e.category(), e);
            std::process::exit(1);
        }
    }
}

/// Loads the config file, then applies command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_from_file(&cli.config_path())?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

async fn run(cli: &Cli, config: &Config) -> Result<()> {
    let sink: Option<Box<dyn HistorySink>> = if config.history.enabled {
        info!("Recording history to {}", config.history.path.display());
        Some(Box::new(FileHistorySink::new(config.history.path.clone())))
    } else {
        None
    };

    let mut repl = Repl::new(std::io::stdout(), config, sink);

    if let Some(path) = &cli.script {
        let script = tokio::fs::read_to_string(path).await.map_err(|e| {
            StockroomError::config(format!("Failed to read script {}: {e}", path.display()))
        })?;
        info!("Running script {}", path.display());
        repl.run_script(&script)?;
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    repl.run(stdin).await
}
