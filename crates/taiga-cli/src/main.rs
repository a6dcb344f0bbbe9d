mod cli;

use anyhow::{anyhow, Context};
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use std::rc::Rc;
use std::sync::Arc;
use taiga_api::{ApiExecutor, Executor, HttpApi, TaigaApi};
use taiga_core::AppConfig;
use taiga_domain::Credentials;
use taiga_tui::keybindings::Keys;
use taiga_tui::{App, ProjectDetailController};
use tokio::runtime::Handle;
use tracing_subscriber::EnvFilter;

fn init_tracing() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TAIGA_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "taiga", &mut std::io::stdout());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    let keys = Keys::from_config(&config.keys)?;

    let project_id = cli
        .project
        .ok_or_else(|| anyhow!("--project (or TAIGA_PROJECT) is required"))?;
    let username = cli
        .username
        .or(config.auth.username)
        .ok_or_else(|| anyhow!("--username or [auth] username in the config is required"))?;
    let password = cli
        .password
        .ok_or_else(|| anyhow!("--password (or TAIGA_PASSWORD) is required"))?;
    let base_url = cli
        .host
        .map(|host| host.trim_end_matches('/').to_string())
        .unwrap_or_else(|| config.host.base_url());

    tracing::info!("Connecting to {}", base_url);
    let api = HttpApi::new(base_url)?;
    let session = api
        .login(Credentials::normal(username, password))
        .await
        .context("Login failed")?;
    tracing::info!("Logged in as {}", session.username);

    let project = api
        .project(project_id)
        .await
        .with_context(|| format!("Could not load project {}", project_id))?;

    let api: Arc<dyn TaigaApi> = Arc::new(api);
    let executor: Rc<dyn Executor> = Rc::new(ApiExecutor::new(api, Handle::current()));
    let controller = ProjectDetailController::new(project, executor, keys.clone());

    let mut app = App::new(controller, keys);
    app.run().await?;

    Ok(())
}
