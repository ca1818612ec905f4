//! tcgsearch main entry point

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tcgsearch_api::start_server;
use tcgsearch_client::JustTcgClient;
use tcgsearch_config::{Config, ConfigResult};

#[derive(Parser, Debug)]
#[command(name = "tcgsearch")]
#[command(version)]
#[command(about = "A small server-rendered card price search backed by the JustTCG API", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration file and exit
    #[arg(long)]
    print_config: bool,

    /// Override server.port
    #[arg(short, long)]
    port: Option<u16>,
}

fn load_config(args: &Args) -> ConfigResult<Config> {
    let mut config = Config::load_or_default(&args.config)?;
    if let Some(port) = args.port {
        config.server.port = port;
        config.validate()?;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.to_details());
            anyhow::bail!("invalid configuration: {}", e);
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if args.config.exists() {
        log::info!("Config loaded from {}", args.config.display());
    } else {
        log::warn!("Config file {} not found, using defaults", args.config.display());
    }
    log::info!("Upstream: {}", config.upstream.base_url);

    let client = JustTcgClient::new(&config.upstream).context("failed to create upstream client")?;
    start_server(&config, Arc::new(client)).await?;

    Ok(())
}
