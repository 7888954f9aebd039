use pharos::prelude::*;
use std::env;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Collaborators
    let store = FileSystemStore::new("./pharos_data");
    let cache = MemoryCache::new();

    // Build App
    let (app, cache_writer) = PharosServer::default().build(store, cache);

    // Serve
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");
    println!("Gateway listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();

    // Let queued cache writes finish before exiting.
    cache_writer.drain().await;
}
