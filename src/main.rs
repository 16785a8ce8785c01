use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::io::AsyncReadExt;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use md2img::application::services::HotlinkNotice;
use md2img::application::{CheckHotlinkUseCase, RewriteResponseUseCase};
use md2img::domain::HotlinkConfig;
use md2img::infrastructure::{
    AppConfig, CliArgs, Command, HotlinkStore, HttpImageProbe, OutputFormat, StorageManager,
};
use md2img::presentation::{ResponseEvent, ResponsePlugin, render_reply};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> (AppConfig, Option<String>) {
    let loaded =
        StorageManager::new().and_then(|storage| storage.load_config(args.config.as_deref()));

    let (mut config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e.to_string())),
    };
    config.merge_with_args(args);
    (config, load_error)
}

async fn read_message(message: Option<String>) -> Result<String> {
    if let Some(message) = message {
        return Ok(message);
    }

    let mut buffer = String::new();
    tokio::io::stdin().read_to_string(&mut buffer).await?;
    Ok(buffer)
}

async fn run_rewrite(
    config: &AppConfig,
    hotlinks: Arc<HotlinkConfig>,
    message: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let probe = Arc::new(HttpImageProbe::new(&config.probe)?);
    let use_case = RewriteResponseUseCase::new(probe, hotlinks)
        .with_notice(HotlinkNotice::new(config.rewrite.notice_template.clone()));
    let plugin = ResponsePlugin::new(Arc::new(use_case));

    let event = ResponseEvent::new(read_message(message).await?);
    if let Some(reply) = plugin.on_response_produced(&event).await {
        let rendered = render_reply(&reply, format)?;
        println!("{}", rendered.trim_end_matches('\n'));
    }

    Ok(())
}

fn run_check(hotlinks: Arc<HotlinkConfig>, urls: &[String]) {
    let use_case = CheckHotlinkUseCase::new(hotlinks);

    for url in urls {
        println!("{url}: {}", use_case.execute(url));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let (config, load_error) = load_config(&args);

    init_logging(&config)?;

    if let Some(error) = load_error {
        warn!(error = %error, "Failed to load configuration, using defaults");
    }

    info!(version = md2img::VERSION, "Starting md2img");

    let hotlinks = Arc::new(HotlinkStore::load_optional(
        config.effective_hotlink_path().as_deref(),
    ));

    match args.command {
        Command::Rewrite { message, format } => {
            run_rewrite(&config, hotlinks, message, format).await
        }
        Command::Check { urls } => {
            run_check(hotlinks, &urls);
            Ok(())
        }
    }
}
