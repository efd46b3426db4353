// Pizzeria - storefront and admin core for a single-pizzeria ordering app
// Entry point: logging, data directory resolution, state bootstrap

use pizzeria::app::AppState;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pizzeria=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir = std::env::var("PIZZERIA_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./pizzeria-data"));

    tracing::info!("Starting pizzeria core, data directory {:?}", data_dir);

    let state = AppState::bootstrap(data_dir).await?;

    let menu = state.menu().await;
    let orders = state.orders().await;
    let customers = state.customers().await;
    let featured = if state.featured().await.is_some() {
        "set"
    } else {
        "not set"
    };

    tracing::info!(
        "Ready: {} pizzas on the menu, {} orders, {} customers, pizza of the day {}",
        menu.len(),
        orders.len(),
        customers.len(),
        featured
    );

    Ok(())
}
