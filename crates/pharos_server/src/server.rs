use crate::writer::{CacheWriter, CacheWriterGuard};
use crate::{api, cors, state::AppState};

use axum::{Router, middleware, routing::get};
use pharos_core::prelude::*;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// The builder for the gateway.
#[derive(Clone, Debug, Default)]
pub struct PharosServer {
    config: PharosConfig,
}

impl PharosServer {
    pub fn new(config: PharosConfig) -> Self {
        Self { config }
    }
}

#[derive(Clone, Debug)]
pub struct PharosConfig {
    /// Key layout of the backing store.
    pub layout: KeyLayout,
    /// Cache-control attached to successful object responses. Versioned
    /// objects are immutable, so the default is maximally aggressive.
    pub cache_control: String,
}

impl Default for PharosConfig {
    fn default() -> Self {
        Self {
            layout: KeyLayout::default(),
            cache_control: "public, max-age=31536000, immutable".to_string(),
        }
    }
}

impl PharosServer {
    /// Builds the router plus the cache-writer guard. The guard must be
    /// drained after the server stops so queued cache writes finish
    /// before teardown.
    pub fn build<S: ObjectStore, C: EdgeCache>(
        self,
        store: S,
        cache: C,
    ) -> (Router, CacheWriterGuard) {
        let (writer, guard) = CacheWriter::spawn(cache.clone());
        let state = AppState {
            store,
            cache,
            config: Arc::new(self.config),
            writer,
        };

        let router = Router::new()
            .route("/health", get(|| async { "OK" }))
            .fallback(get(api::serve::<S, C>))
            .layer(middleware::from_fn(cors::cors_envelope))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        (router, guard)
    }
}
