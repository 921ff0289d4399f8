use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::constants::{
    ENV_CONFIG, ENV_FACTS_BASE_URL, ENV_FACTS_TIMEOUT_SECS, ENV_HOST, ENV_NO_FACTS, ENV_PORT,
};

#[derive(Parser)]
#[command(name = "numlens")]
#[command(version, about = "Number classification API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Server host address
    #[arg(long, short = 'H', global = true, env = ENV_HOST)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, short = 'p', global = true, env = ENV_PORT)]
    pub port: Option<u16>,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Base URL of the number facts provider
    #[arg(long, global = true, env = ENV_FACTS_BASE_URL)]
    pub facts_base_url: Option<String>,

    /// Fact lookup timeout in seconds
    #[arg(long, global = true, env = ENV_FACTS_TIMEOUT_SECS)]
    pub facts_timeout_secs: Option<u64>,

    /// Disable outbound fact lookups (responses use the fallback text)
    #[arg(long, global = true, env = ENV_NO_FACTS)]
    pub no_facts: bool,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Start the server (default command)
    Start,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub config: Option<PathBuf>,
    pub facts_base_url: Option<String>,
    pub facts_timeout_secs: Option<u64>,
    pub no_facts: bool,
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    let cli = Cli::parse();
    let config = CliConfig {
        host: cli.host,
        port: cli.port,
        config: cli.config,
        facts_base_url: cli.facts_base_url,
        facts_timeout_secs: cli.facts_timeout_secs,
        no_facts: cli.no_facts,
    };
    (config, cli.command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "numlens",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--no-facts",
        ])
        .unwrap();
        assert_eq!(cli.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(cli.port, Some(8080));
        assert!(cli.no_facts);
        assert!(cli.command.is_none());
    }
}
