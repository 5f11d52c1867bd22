pub mod routes;
pub mod state;

mod cli;

pub use cli::{Args, VERSION};

use std::{net::SocketAddr, sync::Arc};

use color_eyre::eyre;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use notes_service::NoteStore;

use crate::state::AppState;

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = notes_config::load(&args.config)?;
	init_tracing(&config)?;
	let http_addr: SocketAddr = config.service.http_bind.parse()?;
	if config.security.bind_localhost_only && !http_addr.ip().is_loopback() {
		return Err(eyre::eyre!(
			"http_bind must be a loopback address when bind_localhost_only is true."
		));
	}
	let state = AppState::new(Arc::new(NoteStore::new()));
	let app = routes::router(state);

	let http_listener = TcpListener::bind(http_addr).await?;
	tracing::info!(%http_addr, version = VERSION, "HTTP server listening.");
	for (method, path, description) in routes::ENDPOINTS {
		tracing::info!(method, path, description, "Route registered.");
	}

	axum::serve(http_listener, app).with_graceful_shutdown(shutdown_signal()).await?;
	tracing::info!("HTTP server stopped.");
	Ok(())
}

fn init_tracing(config: &notes_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.try_init()
		.map_err(|err| eyre::eyre!("Failed to initialize tracing: {err}"))?;
	Ok(())
}

async fn shutdown_signal() {
	if let Err(err) = tokio::signal::ctrl_c().await {
		tracing::error!(error = %err, "Failed to listen for shutdown signal.");
		std::future::pending::<()>().await;
	}

	tracing::info!("Shutdown signal received.");
}
