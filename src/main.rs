use crate::config::PizzeriaConfig;
use crate::database::sqlite::SqliteRepository;
use crate::database::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub mod config;
mod database;
mod db;
mod domain;
mod error;
mod features;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub restaurants: Arc<dyn RestaurantRepository>,
    pub pizzas: Arc<dyn PizzaRepository>,
    pub restaurant_pizzas: Arc<dyn RestaurantPizzaRepository>,
}

impl AppState {
    // one store backing all three entity types
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: RestaurantRepository + PizzaRepository + RestaurantPizzaRepository + 'static,
    {
        Self {
            restaurants: repo.clone(),
            pizzas: repo.clone(),
            restaurant_pizzas: repo,
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    features::app_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    init_tracing();

    // load centralized config
    let config = PizzeriaConfig::from_env();

    // connect to our db, creating and migrating it as needed
    let pool = db::init_pool(&config).await?;

    let repo = Arc::new(SqliteRepository::new(pool));
    let app = build_app(AppState::from_repository(repo));

    info!("Available routes:");
    for (methods, path) in features::ROUTES {
        info!("  {:<18} {}", methods, path);
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_address))?;
    info!("Server listening on http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pizzeria_server=debug,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "unable to install Ctrl+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "unable to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down...");
}
