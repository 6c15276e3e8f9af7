//! Google Binom Reporter
//!
//! Serves the dashboard (SSR + hydration) and forwards `/api` calls to the
//! reporting backend.

use binom_reporter::app::App;

#[cfg(feature = "server")]
fn main() {
    use binom_reporter::{config, proxy};
    use tower_http::{compression::CompressionLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging (dx may already have installed a subscriber)
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "binom_reporter=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    tracing::info!("Starting Google Binom Reporter");

    dioxus::serve(|| async move {
        let config = config::load_config()?;
        tracing::info!(?config, "Configuration loaded");

        let state = proxy::ProxyState::new(&config)?;
        tracing::info!(backend = state.backend(), "Forwarding /api to backend");

        Ok(dioxus::server::router(App)
            .merge(proxy::router(state))
            .layer(CompressionLayer::new())
            .layer(TraceLayer::new_for_http()))
    });
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}
