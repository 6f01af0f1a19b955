use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// Output format for printed configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormatArg {
    #[default]
    Json,
    Toml,
}

impl FromStr for OutputFormatArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormatArg::Json),
            "toml" => Ok(OutputFormatArg::Toml),
            _ => Err(format!("Invalid format: {s}. Valid options: json, toml")),
        }
    }
}

impl std::fmt::Display for OutputFormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormatArg::Json => write!(f, "json"),
            OutputFormatArg::Toml => write!(f, "toml"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "deploy-profile")]
pub struct Opt {
    #[arg(
        long = "env-file",
        global = true,
        help = "Environment file to load before reading variables (default: .env)"
    )]
    pub env_file: Option<PathBuf>,
    #[arg(
        long = "no-env-file",
        global = true,
        help = "Only read the process environment"
    )]
    pub no_env_file: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "show", about = "Print the toolchain configuration")]
    Show {
        #[arg(long = "format", default_value_t = OutputFormatArg::Json, help = "json or toml")]
        format: OutputFormatArg,
        #[arg(long = "reveal", help = "Print signing keys instead of masking them")]
        reveal: bool,
    },
    #[command(name = "network", about = "Print one network profile")]
    Network {
        #[arg(help = "Network name (defaults to the default network)")]
        name: Option<String>,
        #[arg(long = "reveal", help = "Print signing keys instead of masking them")]
        reveal: bool,
    },
    #[command(name = "networks", about = "List configured networks")]
    Networks,
    #[command(name = "compiler", about = "Print the target compiler version")]
    Compiler,
    #[command(name = "check", about = "Validate URL, keys and compiler version")]
    Check,
}
