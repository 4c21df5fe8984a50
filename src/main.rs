//! Command-line access to the extra device settings
//!
//! # Usage
//!
//! ```bash
//! extractl list
//! extractl get dateMethod
//! extractl set port 8765
//! ```
//!
//! Values given to `set` are parsed as JSON when possible and used as plain
//! strings otherwise. Logs go to stderr; stdout only carries results.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use extractl::{
    cli::{Command, build_registry, init_logging, parse_value, run_command},
    config::{ConfigLoader, default_config_path},
    utils::VERSION,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "extractl")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Configuration file (defaults to <config dir>/extractl/config.toml)
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Show version information
    #[arg(long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every setting with its metadata and current value
    List,
    /// Print the current value of a setting
    Get {
        /// Setting name, e.g. dateMethod
        name: String,
    },
    /// Change the value of a setting
    Set {
        /// Setting name, e.g. port
        name: String,
        /// New value, as JSON or a plain string
        value: String,
    },
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::List => Command::List,
            Commands::Get { name } => Command::Get { name },
            Commands::Set { name, value } => Command::Set {
                name,
                value: parse_value(&value),
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Handle version flag early
    if cli.version {
        println!("{}", VERSION);
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config_path = cli.config.or_else(default_config_path);
    let settings = match ConfigLoader::new().load(config_path.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&settings, cli.verbose);
    debug!("Using settings: {:?}", settings);

    let registry = build_registry(&settings);
    match run_command(&registry, &command.into()) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_command_conversion() {
        let command: Command = Commands::Set {
            name: "port".to_string(),
            value: "8080".to_string(),
        }
        .into();

        assert_eq!(
            command,
            Command::Set {
                name: "port".to_string(),
                value: json!(8080),
            }
        );
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["extractl", "get", "dateHost", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Get { ref name }) if name == "dateHost"));
    }
}
