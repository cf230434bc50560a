use balter::prelude::*;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::time::Duration;
use storefront_loadtest::{endpoints, storefront_user};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Load test for the storefront microservices.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Base URL of the storefront gateway.
    #[arg(long, default_value = endpoints::DEFAULT_HOST)]
    host: String,

    /// Steady transaction rate to hold across all simulated users.
    #[arg(long, default_value = "50")]
    tps: NonZeroU32,

    /// How long to run the scenario, e.g. "90s" or "5m".
    #[arg(long, default_value = "60s", value_parser = humantime::parse_duration)]
    duration: Duration,

    /// Ramp load until the gateway starts erroring instead of holding --tps.
    #[arg(long)]
    saturate: bool,

    /// Ramp load until the given error rate (fraction, e.g. 0.05) is reached.
    #[arg(long, conflicts_with = "saturate")]
    error_rate: Option<f64>,

    /// Expose Prometheus metrics on this address.
    #[arg(long)]
    prometheus: Option<SocketAddr>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("storefront_loadtest=info,balter=info")),
        )
        .init();

    if let Some(addr) = cli.prometheus {
        PrometheusBuilder::new()
            .with_http_listener(addr)
            .install()
            .unwrap();
    }

    endpoints::set_base_url(&cli.host);
    info!(host = %cli.host, duration = ?cli.duration, "starting storefront load test");

    if cli.saturate {
        storefront_user().saturate().duration(cli.duration).await;
    } else if let Some(rate) = cli.error_rate {
        storefront_user().error_rate(rate).duration(cli.duration).await;
    } else {
        storefront_user().tps(cli.tps.get()).duration(cli.duration).await;
    }

    info!("load test complete");
}
