use crate::{cli, context, storage::MongoStore};
use anyhow::{Context as AnyhowContext, Result};
use std::io::Write;
use tracing::Instrument;

/// One run of the tool: a configuration and the single command to execute.
/// Decoupled from CLI parsing so the flow can be driven from tests.
pub struct App {
    config: context::Context,
    command: cli::Command,
}

impl App {
    /// Build the App from CLI arguments.
    /// Handles side effects like attaching the log file and prompting for a password.
    pub fn from_cli() -> Result<App> {
        let cli = crate::cli::parse();

        crate::tracing::set_log_file(cli.log_file.as_deref().map(std::path::Path::new))
            .context("opening log file")?;

        let prompted = if cli.ask_pass && cli.uri.is_none() {
            Some(rpassword::prompt_password("Cluster password: ").context("reading password")?)
        } else {
            None
        };

        let ctx = context::Context::from_cli(&cli, prompted)?;
        log_startup_info(&ctx);

        Ok(App::new(ctx, cli.cmd))
    }

    pub fn new(config: context::Context, command: cli::Command) -> Self {
        Self { config, command }
    }

    /// Open the client, run the command, close the client. The client is
    /// closed whether or not the command succeeded; a client that fails its
    /// ping is closed by `MongoStore::connect` itself.
    pub async fn run(&self, out: &mut dyn Write) -> Result<()> {
        let cfg = &self.config.config;
        let uri = cfg.connection_uri()?;
        let store = MongoStore::connect(&uri, &cfg.database, &cfg.collection)
            .await
            .with_context(|| format!("connecting to {}", cfg.describe_target()))?;
        log::info!("🔌 Connected");

        let span = tracing::info_span!("command", name = self.command.label());
        let result = self.command.run(&store, out).instrument(span).await;

        store.close().await;
        result
    }
}

fn log_startup_info(ctx: &context::Context) {
    log::info!("🚀 Starting listings");
    log::info!("🔗 Cluster: {}", ctx.config.describe_target());
    log::info!("📂 Collection: {}", ctx.config.namespace());
    if let Some(path) = ctx.config.log_file.as_deref() {
        log::info!("📝 Log file: {}", path.to_string_lossy());
    }
}

// --- Entry Point ---

pub async fn run() -> Result<()> {
    let app = App::from_cli()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app.run(&mut out).await
}
