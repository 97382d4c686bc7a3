//! The more_serverless binary: serve every function handler on one listen address.
//!
use std::path::PathBuf;
use clap::Parser;
use dotenv::dotenv;
use log::*;
use anyhow::Result;
use more_serverless::config::{self, Config, DEFAULT_LISTEN, DEFAULT_SECRETS_DIR};
use more_serverless::server;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Opts {
    /// address and port to listen on (MORE_SERVERLESS_LISTEN)
    #[arg(short, long, value_name = "address:port")]
    listen: Option<String>,
    /// directory with the mounted secrets (MORE_SERVERLESS_SECRETS_DIR)
    #[arg(short, long, value_name = "directory")]
    secrets_dir: Option<String>,
    /// timeout in seconds for the calls to the external systems (MORE_SERVERLESS_TIMEOUT)
    #[arg(short, long, value_name = "seconds")]
    timeout: Option<String>,
    /// add the environment to the JSON responses (MORE_SERVERLESS_EXPOSE_ENVIRONMENT)
    #[arg(long)]
    expose_environment: bool,
}

#[tokio::main]
async fn main() -> Result<()>
{
    dotenv().ok();
    env_logger::init();
    let options = Opts::parse();

    let listen = config::set_option(&options.listen, "MORE_SERVERLESS_LISTEN", DEFAULT_LISTEN);
    let secrets_dir = config::set_option(&options.secrets_dir, "MORE_SERVERLESS_SECRETS_DIR", DEFAULT_SECRETS_DIR);
    let request_timeout = config::set_timeout(&options.timeout)?;
    let expose_environment = config::set_expose_environment(options.expose_environment);

    let config = Config::from_process_environment(PathBuf::from(secrets_dir), request_timeout, expose_environment);
    info!("starting more_serverless {}", env!("CARGO_PKG_VERSION"));
    server::serve(&listen, config).await
}
