//! galerie-web - Public site and back-office for galerie using Leptos + Axum

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod i18n;
pub mod pages;
pub mod storage;

#[cfg(feature = "ssr")]
pub mod proxy;
#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
#[cfg(feature = "ssr")]
pub use proxy::AppState;
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
use galerie_core::GalerieConfig;

/// Run the web server
#[cfg(feature = "ssr")]
pub async fn run(config: &GalerieConfig) -> anyhow::Result<()> {
    use anyhow::Context;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tracing::{info, warn};

    if !config.dist_dir.join("index.html").exists() {
        warn!(
            dist = %config.dist_dir.display(),
            "no index.html in the bundle directory, run `trunk build` in crates/galerie-web first"
        );
    }

    let state = AppState::from_config(config).context("Failed to build the upstream HTTP client")?;
    let router = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(api_origin = %config.api_origin, "Web server listening on http://{}", addr);
    println!("Web server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
