use std::{io::Error, sync::Arc, time::Duration};

use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing::info;
use tracing_subscriber::EnvFilter;
use twitter_api::{
    config::Config,
    presentation::http::{build_app, endpoints::root::ApiState},
};

#[main]
async fn main() -> Result<(), Error> {
    let config = Config::try_parse().map_err(Error::other)?;
    init_tracing(&config.log_level);

    let server_url = config.server_url();
    info!(data_dir = %config.data_dir.display(), "opening record files");
    let state = ApiState::open(&config.data_dir)
        .await
        .map_err(|err| Error::other(format!("{err:#}")))?;

    let app = build_app(Arc::new(state), server_url.clone());

    info!("Starting server at {server_url}");
    Server::new(TcpListener::bind(format!("{}:{}", config.host, config.port)))
        .run_with_graceful_shutdown(
            app,
            async {
                let _ = tokio::signal::ctrl_c().await;
                info!("shutdown signal received");
            },
            Some(Duration::from_secs(5)),
        )
        .await
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
