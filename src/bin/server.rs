use std::{
    fs::OpenOptions,
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    process::ExitCode,
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

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use pos_rs::{
    AppState, Catalog, StockReservation, build_router, graceful_shutdown, load_catalog_file,
    logging_middleware, seed_products,
};

/// The web server for the point of sale system.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The address to listen on.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// A JSON file with the products to sell instead of the built-in menu.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// When units in the cart are taken out of stock.
    #[arg(long, value_enum, default_value_t = StockReservation::OnAdd)]
    reserve_stock: StockReservation,

    /// Log the headers and bodies of every request and response.
    #[arg(long)]
    log_requests: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    let products = match &args.catalog {
        Some(path) => match load_catalog_file(path) {
            Ok(products) => products,
            Err(error) => {
                tracing::error!("{error}");
                return ExitCode::FAILURE;
            }
        },
        None => seed_products(),
    };
    tracing::info!(
        "Loaded {} products, stock is reserved {:?}",
        products.len(),
        args.reserve_stock
    );

    let state = AppState::new(Catalog::new(products), args.reserve_stock);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    let router = if args.log_requests {
        router.layer(middleware::from_fn(logging_middleware))
    } else {
        router
    };

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    let addr = SocketAddr::new(args.host, args.port);
    tracing::info!("HTTP server listening on http://{}", addr);

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("server error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    let debug_log = match OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
    {
        Ok(log_file) => Some(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(Arc::new(log_file))
                .with_filter(filter::LevelFilter::DEBUG),
        ),
        Err(error) => {
            eprintln!("Could not create log file, debug logs will not be written: {error}");
            None
        }
    };

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
        // Handlers log their own errors, so 5xx responses are not logged again here.
        .on_failure(());

    router.layer(tracing_layer)
}
