use std::process;
use std::sync::Arc;

use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use songs_backend::app;
use songs_backend::config::Config;
use songs_backend::dataset;
use songs_backend::db::{Database, DynStore, SongStore};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_target(false)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{err:#}");
            process::exit(1);
        }
    };

    info!("connecting to MongoDB at {}", config.mongodb_service);
    let database = match Database::connect(&config).await {
        Ok(database) => database,
        Err(err) => {
            error!("Invalid MongoDB connection string: {err:#}");
            process::exit(1);
        }
    };

    // Reseed failures (bad credentials, unreachable store) are logged, not
    // fatal; they surface again on the first request that hits the store.
    match dataset::bundled_songs() {
        Ok(songs) => {
            info!("seeding songs collection with {} records", songs.len());
            if let Err(err) = database.reseed(songs).await {
                error!("Failed to seed songs collection: {err:#}");
            }
        }
        Err(err) => error!("Failed to load bundled songs: {err:#}"),
    }

    let store: DynStore = Arc::new(database);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .unwrap();
    info!("🎵 Songs backend listening on 0.0.0.0:{}", config.port);
    axum::serve(listener, app(store)).await.unwrap();
}
