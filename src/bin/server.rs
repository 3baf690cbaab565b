use std::{
    fs::OpenOptions,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    sync::Arc,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use sneaker_tracker::{
    AppState, TransactionStore, build_router, graceful_shutdown, logging_middleware,
};

/// The web server for tracking sneaker resale transactions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The address to listen on.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    host: IpAddr,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Start with no transactions instead of the placeholder data.
    #[arg(long)]
    empty: bool,

    /// Also write debug logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log every request and response body.
    #[arg(long)]
    log_bodies: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    setup_logging(args.log_file.as_ref());

    let store = if args.empty {
        TransactionStore::new()
    } else {
        TransactionStore::with_placeholder_data()
    };
    if let Ok(count) = store.count() {
        tracing::info!("Starting with {count} transactions");
    }
    let state = AppState::new(store);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(state);
    let router = if args.log_bodies {
        router.layer(middleware::from_fn(logging_middleware))
    } else {
        router
    };
    let router = add_tracing_layer(router);

    let addr = SocketAddr::new(args.host, args.port);
    tracing::info!("HTTP server listening on http://{addr}");

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server stopped with an error: {error}");
        std::process::exit(1);
    }
}

fn setup_logging(log_file: Option<&PathBuf>) {
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    let debug_log = log_file.and_then(|path| {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file))
                    .with_filter(filter::LevelFilter::DEBUG),
            ),
            Err(error) => {
                eprintln!("Could not open log file {}: {error}", path.display());
                None
            }
        }
    });

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(debug_log)
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
