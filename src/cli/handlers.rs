use super::commands::CliArgs;
use super::output::OutputFormatter;
use crate::config::{DockerGenConfig, GeneratorKind};
use crate::detection::{validate_directory, PythonVariant};
use crate::pipeline::{PipelineOptions, PipelineOrchestrator};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Runs one generation pass and returns the process exit code
pub async fn handle_generate(args: &CliArgs) -> i32 {
    let project_dir = args
        .project_directory
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    if let Err(e) = validate_directory(&project_dir) {
        error!("Invalid project directory: {}", e);
        eprintln!("Error: {}", e);
        return 1;
    }

    let config = match build_config(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    debug!("{}", config);

    let generator = match config.create_generator() {
        Ok(generator) => generator,
        Err(e) => {
            error!("Failed to create text generator: {}", e);
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    info!(
        generator = generator.name(),
        model = generator.model_info().as_deref().unwrap_or("-"),
        "Text generator ready"
    );

    let options = PipelineOptions::new(&project_dir)
        .with_python_variant(PythonVariant::parse_lenient(args.python_variant.as_deref()));

    let report = match PipelineOrchestrator::new()
        .execute(&options, generator.as_ref())
        .await
    {
        Ok(report) => report,
        Err(e) => {
            error!("Generation failed: {}", e);
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if args.quiet {
        return 0;
    }

    match OutputFormatter::new(args.format.into()).format(&report) {
        Ok(output) => {
            print!("{}", output);
            0
        }
        Err(e) => {
            error!("Failed to format report: {:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn build_config(args: &CliArgs) -> Result<DockerGenConfig, crate::config::ConfigError> {
    let mut config = DockerGenConfig::load()?;

    if let Some(provider) = args.provider {
        config = config.with_provider(provider);
    }
    if let Some(model) = &args.model {
        config = config.with_model(model.clone());
    }
    if let Some(timeout) = args.timeout {
        config = config.with_request_timeout(timeout);
    }
    if args.offline {
        config = config.with_generator(GeneratorKind::Stub);
    }
    if let Some(level) = &args.log_level {
        config = config.with_log_level(level.clone());
    }

    config.validate()?;
    Ok(config)
}
