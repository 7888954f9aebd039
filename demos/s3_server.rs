use aws_config::BehaviorVersion;
use pharos::prelude::*;
use std::env;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Config
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let s3_client = aws_sdk_s3::Client::new(&aws_config);

    let bucket_name = env::var("PHAROS_BUCKET").expect("PHAROS_BUCKET env var required");

    // Collaborators
    let store = S3Store::new(s3_client, bucket_name, Some("published/".to_string()));
    let cache = MemoryCache::new();

    // Build
    let (app, cache_writer) = PharosServer::new(PharosConfig::default()).build(store, cache);

    // Serve
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");
    println!("Gateway listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();

    cache_writer.drain().await;
}
