use clap::{Args, Parser, Subcommand, ValueEnum};
use clap::builder::NonEmptyStringValueParser;
use crate::config::{DEFAULT_API_BASE, DEFAULT_HOST, DEFAULT_PORT};

#[derive(Parser)]
#[command(name = "shadergen", version, about = "Generate GLSL fragment shaders from text prompts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Generate a single shader and print it to stdout
    Generate(GenerateArgs),
}

#[derive(Args, Clone)]
pub struct ApiArgs {
    /// Groq API key
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Completion API base URL
    #[arg(long, env = "GROQ_API_BASE", default_value = DEFAULT_API_BASE, hide = true)]
    pub api_base: String,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Listen address
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Extra origin allowed to call the API (repeatable)
    #[arg(long = "allow-origin")]
    pub allow_origins: Vec<String>,

    #[command(flatten)]
    pub api: ApiArgs,
}

#[derive(Args, Clone)]
pub struct GenerateArgs {
    /// Description of the shader to generate
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub prompt: String,

    #[command(flatten)]
    pub api: ApiArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["shadergen", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host, "0.0.0.0");
                assert_eq!(args.api.api_base, DEFAULT_API_BASE);
                assert!(args.allow_origins.is_empty());
                if std::env::var_os("PORT").is_none() {
                    assert_eq!(args.port, DEFAULT_PORT);
                }
            }
            _ => panic!("expected serve"),
        }
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "shadergen", "-vv", "--log-format", "json", "serve",
            "--port", "3001", "--allow-origin", "https://a.example", "--allow-origin", "https://b.example",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_format, LogFormat::Json);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, 3001);
                assert_eq!(args.allow_origins.len(), 2);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["shadergen", "serve", "--port", "not-a-port"]).is_err());
    }

    #[test]
    fn test_empty_generate_prompt_rejected() {
        let err = Cli::try_parse_from(["shadergen", "generate", ""]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from(["shadergen", "generate", "a pulsing red circle"]).unwrap();
        match cli.command {
            Commands::Generate(args) => assert_eq!(args.prompt, "a pulsing red circle"),
            _ => panic!("expected generate"),
        }
    }
}
