/*
[INPUT]:  CLI arguments, YAML configuration file, command params
[OUTPUT]: Decoded MTI response printed as JSON on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or output format
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mti_cli::{CliConfig, load_params};

#[derive(Parser, Debug)]
#[command(name = "mti", version, about = "Send one signed command to the MTI API")]
struct Cli {
    /// Command type, sent uppercased
    command: String,
    #[arg(long = "config", value_name = "PATH")]
    config_path: PathBuf,
    /// Params as inline JSON
    #[arg(long = "params", value_name = "JSON", conflicts_with = "params_file")]
    params: Option<String>,
    /// Params from a YAML or JSON file
    #[arg(long = "params-file", value_name = "PATH")]
    params_file: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = CliConfig::from_file(&args.config_path).context("load config")?;
    info!(
        config_path = %args.config_path.display(),
        company = %config.company,
        endpoint = %config.endpoint,
        "configuration loaded"
    );

    let params = load_params(args.params.as_deref(), args.params_file.as_deref())?;
    let client = config.build_client()?;

    let response = client
        .make_request(&args.command, params)
        .await
        .with_context(|| format!("request {}", args.command.to_uppercase()))?;
    info!(command = %args.command.to_uppercase(), "response decoded");

    let rendered = serde_json::to_string_pretty(&response).context("render response")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
