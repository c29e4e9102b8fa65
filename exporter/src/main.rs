/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

mod render;

use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use clap::Parser;
use log::{error, info};

use fluentbit_client::{Config, FluentBitClient};
use storage_metrics::Collector;

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Fluent-bit storage exporter
///
/// Polls fluent-bit's internal storage status endpoint on every scrape
/// and republishes the counters as Prometheus gauges.
struct Args {
    /// Host of the fluent-bit HTTP monitoring interface.
    #[clap(long, default_value = "127.0.0.1")]
    fluent_bit_host: String,
    /// Port of the fluent-bit HTTP monitoring interface.
    #[clap(long, default_value_t = 2020)]
    fluent_bit_port: u16,
    /// Port to serve /metrics on.
    #[clap(long, default_value_t = 8080)]
    exporter_port: u16,
    #[clap(long, short, action = clap::ArgAction::Count)]
    /// Increase verbosity. This option can be specified multiple times.
    verbose: u8,
}

type SharedCollector = Arc<Collector<FluentBitClient>>;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = simplelog::TermLogger::init(
        match args.verbose {
            0 => simplelog::LevelFilter::Off,
            1 => simplelog::LevelFilter::Error,
            2 => simplelog::LevelFilter::Warn,
            3 => simplelog::LevelFilter::Info,
            4 => simplelog::LevelFilter::Debug,
            5.. => simplelog::LevelFilter::Trace,
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Error: failed to initialize logging: {}", e);
        process::exit(1);
    }

    let config = Config::new(args.fluent_bit_host, args.fluent_bit_port);
    info!(
        "polling fluent-bit storage status at http://{}:{}",
        config.host, config.port
    );

    let collector: SharedCollector =
        Arc::new(Collector::new(FluentBitClient::new(config)));
    let app = app(collector);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.exporter_port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {addr}: {e}");
            process::exit(1);
        }
    };

    info!("exporter is listening on {addr}");
    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        process::exit(1);
    }
}

fn app(collector: SharedCollector) -> Router {
    Router::new()
        .route("/metrics", get(handle_metrics))
        .with_state(collector)
}

/// One scrape: one fetch, one conversion pass. A failed cycle answers
/// 500 and leaves the process running.
async fn handle_metrics(
    State(collector): State<SharedCollector>,
) -> Response {
    match collector.collect().await {
        Ok(metrics) => match render::exposition(&metrics) {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
                body,
            )
                .into_response(),
            Err(e) => {
                error!("failed to encode metrics: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("failed to encode metrics: {e}\n"),
                )
                    .into_response()
            }
        },
        Err(e) => {
            error!("scrape failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("scrape failed: {e}\n"),
            )
                .into_response()
        }
    }
}
