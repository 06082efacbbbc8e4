use crate::config::parse_provider;
use clap::{Parser, ValueEnum};
use genai::adapter::AdapterKind;
use std::path::PathBuf;

/// Generate Docker configuration files for a project directory
#[derive(Parser, Debug)]
#[command(
    name = "docker-gen",
    about = "Generate Docker configuration files for a project directory",
    version,
    author,
    long_about = "docker-gen inspects a project directory, detects its framework from marker \
                  files and writes a Dockerfile, docker-compose.yml, .dockerignore and \
                  dockerreadme.md into it. The compose file and README are written by a hosted \
                  text generation service (Groq by default); use --offline to fall back to \
                  built-in defaults.\n\n\
                  Examples:\n  \
                  docker-gen\n  \
                  docker-gen /path/to/project\n  \
                  docker-gen /path/to/project flask\n  \
                  docker-gen --offline --format json ."
)]
pub struct CliArgs {
    #[arg(
        value_name = "PROJECT_DIRECTORY",
        help = "Project directory (defaults to current directory)"
    )]
    pub project_directory: Option<PathBuf>,

    #[arg(
        value_name = "PYTHON_VARIANT",
        help = "Python framework override: flask or django (other values are ignored)"
    )]
    pub python_variant: Option<String>,

    #[arg(
        long,
        value_parser = parse_adapter_kind,
        help = "Text generation provider (groq, openai, anthropic, ollama, gemini, xai)"
    )]
    pub provider: Option<AdapterKind>,

    #[arg(
        short = 'm',
        long,
        value_name = "MODEL",
        help = "Model name to use (provider-specific)"
    )]
    pub model: Option<String>,

    #[arg(long, value_name = "SECONDS", help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(
        long,
        help = "Do not contact a text generation service; use built-in compose and README text"
    )]
    pub offline: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Report format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

fn parse_adapter_kind(s: &str) -> Result<AdapterKind, String> {
    parse_provider(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["docker-gen"]);
        assert!(args.project_directory.is_none());
        assert!(args.python_variant.is_none());
        assert!(args.provider.is_none());
        assert!(args.model.is_none());
        assert!(args.timeout.is_none());
        assert!(!args.offline);
        assert_eq!(args.format, OutputFormatArg::Human);
    }

    #[test]
    fn test_positional_arguments() {
        let args = CliArgs::parse_from(["docker-gen", "/tmp/project", "Flask"]);
        assert_eq!(args.project_directory, Some(PathBuf::from("/tmp/project")));
        assert_eq!(args.python_variant.as_deref(), Some("Flask"));
    }

    #[test]
    fn test_options() {
        let args = CliArgs::parse_from([
            "docker-gen",
            "--provider",
            "claude",
            "--model",
            "claude-3-5-sonnet-latest",
            "--timeout",
            "90",
            "--offline",
            "-f",
            "yaml",
            "-v",
            ".",
        ]);

        assert_eq!(args.provider, Some(AdapterKind::Anthropic));
        assert_eq!(args.model.as_deref(), Some("claude-3-5-sonnet-latest"));
        assert_eq!(args.timeout, Some(90));
        assert!(args.offline);
        assert_eq!(args.format, OutputFormatArg::Yaml);
        assert!(args.verbose);
        assert_eq!(args.project_directory, Some(PathBuf::from(".")));
    }

    #[test]
    fn test_invalid_provider_rejected() {
        let result = CliArgs::try_parse_from(["docker-gen", "--provider", "watson"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = CliArgs::try_parse_from(["docker-gen", "-v", "-q"]);
        assert!(result.is_err());
    }
}
