mod click_script;
mod config;
mod headless;
mod interaction;

use anyhow::{Context, Result};
use click_script::ClickScriptPlayer;
use config::DemoConfig;
use headless::HeadlessConfig;
use std::env;
use std::path::PathBuf;
use tracing::info;

const USAGE: &str = "usage: satchel [--config PATH] [--catalog PATH] [--script PATH] [--seed N] [--event-log PATH] [--write-config PATH]";

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting satchel v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1));
    if cli.help {
        println!("{USAGE}");
        return Ok(());
    }

    let demo = match &cli.config {
        Some(path) => DemoConfig::load_from_path(path),
        None => DemoConfig::load(),
    };
    if let Some(path) = &cli.write_config {
        demo.save_to_path(path)
            .with_context(|| format!("failed to write config {}", path.display()))?;
        info!(path = %path.display(), "wrote demo config");
    }

    let catalog_path = cli.catalog.clone().or_else(|| demo.catalog_path.clone());
    let catalog = config::load_catalog(catalog_path.as_deref())?;

    let script = cli
        .script
        .as_deref()
        .map(|path| {
            ClickScriptPlayer::from_path(path)
                .with_context(|| format!("failed to load click script {}", path.display()))
        })
        .transpose()?;

    let summary = headless::run(HeadlessConfig {
        demo,
        catalog,
        script,
        seed: cli.seed,
        event_log: cli.event_log,
    })?;
    print!("{}", summary.render());
    Ok(())
}

#[derive(Debug, Default)]
struct CliOptions {
    config: Option<PathBuf>,
    catalog: Option<PathBuf>,
    script: Option<PathBuf>,
    seed: Option<u64>,
    event_log: Option<PathBuf>,
    write_config: Option<PathBuf>,
    help: bool,
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut opts = CliOptions::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => opts.config = path_arg(&mut args, "--config"),
                "--catalog" => opts.catalog = path_arg(&mut args, "--catalog"),
                "--script" => opts.script = path_arg(&mut args, "--script"),
                "--event-log" => opts.event_log = path_arg(&mut args, "--event-log"),
                "--write-config" => opts.write_config = path_arg(&mut args, "--write-config"),
                "--seed" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u64>() {
                            Ok(value) => opts.seed = Some(value),
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--seed must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--seed requires an integer");
                    }
                }
                "--help" | "-h" => opts.help = true,
                other => tracing::warn!(arg = other, "ignoring unknown argument"),
            }
        }

        opts
    }
}

fn path_arg<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Option<PathBuf> {
    match args.next() {
        Some(path) => Some(PathBuf::from(path)),
        None => {
            tracing::error!("{flag} requires a file path");
            None
        }
    }
}
