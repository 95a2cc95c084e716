use astra::Server;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use realty_search::catalog::generate_catalog;
use realty_search::config::{Args, Settings};
use realty_search::idx::IdxClient;
use realty_search::router::handle;
use realty_search::state::AppState;
use realty_search::templates;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let settings = Settings::from_args(&args);

    // 1️⃣ Generate the listing catalog once; every request shares it
    let mut rng = match args.catalog_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let catalog = generate_catalog(&mut rng);
    info!(records = catalog.len(), seed = ?args.catalog_seed, "catalog generated");

    // 2️⃣ IDX client, only when an access key is configured
    let idx = if settings.idx_enabled {
        match IdxClient::new(settings.idx.clone()) {
            Ok(client) => Some(client),
            Err(e) => {
                error!(error = %e, "IDX client init failed, continuing with local listings");
                None
            }
        }
    } else {
        warn!("IDX_API_KEY not set, featured listings use the local catalog");
        None
    };

    let state = AppState::new(catalog, settings, idx);

    // 3️⃣ Start the server
    info!(addr = %args.addr, workers = args.workers, "starting server");
    let server = Server::bind(&args.addr).max_workers(args.workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
        std::process::exit(1);
    }

    info!("server shut down cleanly");
}
