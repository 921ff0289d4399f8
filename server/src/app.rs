//! Core application

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::api::ApiServer;
use crate::core::banner;
use crate::core::cli::{self, CliConfig};
use crate::core::config::AppConfig;
use crate::core::constants::ENV_LOG;
use crate::core::shutdown::ShutdownService;
use crate::domain::facts::{DisabledFacts, FactProvider, NumbersApiClient};

pub struct CoreApp {
    pub shutdown: ShutdownService,
    pub config: AppConfig,
    pub facts: Arc<dyn FactProvider>,
}

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let (cli_config, _command) = cli::parse();

        let app = Self::init(&cli_config)?;
        Self::start_server(app).await
    }

    fn init(cli: &CliConfig) -> Result<Self> {
        let config = AppConfig::load(cli)?;

        let facts: Arc<dyn FactProvider> = if config.facts.enabled {
            Arc::new(NumbersApiClient::new(
                config.facts.base_url.clone(),
                Duration::from_secs(config.facts.timeout_secs),
            )?)
        } else {
            tracing::debug!("Fact lookups disabled by config");
            Arc::new(DisabledFacts)
        };

        let shutdown = ShutdownService::new();

        Ok(Self {
            shutdown,
            config,
            facts,
        })
    }

    fn init_logging() {
        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());

        tracing_subscriber::fmt()
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }

    async fn start_server(app: Self) -> Result<()> {
        // Install signal handlers FIRST (before any blocking calls)
        app.shutdown.install_signal_handlers();

        banner::print_banner(
            &app.config.server.host,
            app.config.server.port,
            app.config.facts.enabled,
            &app.config.facts.base_url,
        );

        let server = ApiServer::new(app);
        server.start().await?;

        tracing::debug!("Shutdown complete");
        Ok(())
    }
}
