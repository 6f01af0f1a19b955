// Entry point for the deploy-profile CLI: loads the environment file, builds
// the toolchain configuration and prints or checks it
use clap::Parser;
use deploy_profile::{
    load_dotenv, validate, Command, ConfigError, Opt, OutputFormatArg, ToolchainConfig,
    DEFAULT_ENV_FILE,
};
use log::{error, info, warn, LevelFilter};
use std::path::Path;
use std::process;

fn main() {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();

    if let Err(e) = run(opt) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run(opt: Opt) -> Result<(), Box<dyn std::error::Error>> {
    // The environment file has to be applied before the configuration reads
    // the process environment
    if !opt.no_env_file {
        let path = opt
            .env_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_ENV_FILE));
        if let Some(loaded) = load_dotenv(Some(path))? {
            info!("Loaded {}", loaded.display());
        }
    }

    let config = ToolchainConfig::from_env();
    run_command(&config, opt.command)
}

fn run_command(
    config: &ToolchainConfig,
    command: Command,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Show { format, reveal } => {
            let rendered = match format {
                OutputFormatArg::Json => config.to_json(reveal)?,
                OutputFormatArg::Toml => config.to_toml(reveal)?,
            };
            println!("{rendered}");
        }
        Command::Network { name, reveal } => {
            let name = name.unwrap_or_else(|| config.default_network_name().to_string());
            let profile = config
                .network(&name)
                .ok_or_else(|| ConfigError::UnknownNetwork(name.clone()))?;
            let profile = if reveal {
                profile.clone()
            } else {
                profile.redacted()
            };
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        Command::Networks => {
            for name in config.network_names() {
                if name == config.default_network_name() {
                    println!("{name} (default)");
                } else {
                    println!("{name}");
                }
            }
        }
        Command::Compiler => {
            println!("{}", config.compiler_version());
        }
        Command::Check => {
            let issues = validate(config);
            let mut errors = 0;
            for issue in &issues {
                if issue.is_error() {
                    errors += 1;
                    error!("{issue}");
                } else {
                    warn!("{issue}");
                }
            }
            if errors > 0 {
                return Err(ConfigError::Invalid(format!("{errors} error(s) found")).into());
            }
            println!("Configuration OK ({} warning(s))", issues.len());
        }
    }
    Ok(())
}
