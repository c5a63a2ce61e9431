use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mandelbrot_server::app;

#[derive(Parser, Debug)]
#[command(name = "mandelbrot-server")]
#[command(about = "Escape-time Mandelbrot grid render server")]
struct Args {
    /// Listen port, or listen address when a port is also given
    endpoint: Option<String>,

    /// Listen port when an address is given as the first argument
    port: Option<u16>,

    /// Log level filter
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Startup accepts zero, one or two positional arguments: none for the
/// default endpoint, a bare port, or an address and a port.
fn listen_endpoint(args: &Args) -> Result<(String, u16)> {
    match (&args.endpoint, args.port) {
        (None, _) => Ok(("localhost".to_string(), 3000)),
        (Some(port), None) => {
            let port = port
                .parse()
                .with_context(|| format!("invalid port: {}", port))?;
            Ok(("localhost".to_string(), port))
        }
        (Some(address), Some(port)) => Ok((address.clone(), port)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log_level).context("invalid log level")?)
        .init();

    let (address, port) = listen_endpoint(&args)?;
    let listener = tokio::net::TcpListener::bind((address.as_str(), port))
        .await
        .with_context(|| format!("failed to bind {}:{}", address, port))?;

    info!("Listening on endpoint: {}:{}", address, port);

    axum::serve(listener, app()).await?;

    Ok(())
}
