use dockergen::cli::{handle_generate, CliArgs};
use dockergen::config::LOG_LEVEL_ENV;
use dockergen::util::{init_logging, parse_level, LoggingConfig};
use dockergen::VERSION;

use clap::Parser;
use std::env;
use tracing::{debug, Level};

const LOG_JSON_ENV: &str = "DOCKERGEN_LOG_JSON";

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("docker-gen v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_generate(&args).await;
    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        let level_str = env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| "info".to_string());
        parse_level(&level_str)
    };

    let use_json = env::var(LOG_JSON_ENV)
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false);

    init_logging(LoggingConfig::with_level(level).json(use_json));
}
