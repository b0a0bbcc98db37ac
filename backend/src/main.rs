use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

#[derive(Debug, clap::Parser)]
struct Args {
    #[clap(long, default_value = "0.0.0.0:3000")]
    listen: String,
    #[clap(
        long,
        env = "BACKEND_API_BASE_URL",
        default_value = "https://0vsr7n9vj1.execute-api.us-east-1.amazonaws.com"
    )]
    upstream: String,
    #[clap(long, default_value = "frontend/dist/")]
    assets: String,
    #[clap(long, default_value_t = 10)]
    default_count: u32,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().contains("backend")
        }));
    tracing::subscriber::set_global_default(registry).unwrap();

    tracing::info!("Starting...");

    let args = <Args as clap::Parser>::parse();

    let state = std::sync::Arc::new(backend::api::ApiState {
        upstream: std::sync::Arc::new(backend::upstream::HttpStatsApi::new(args.upstream.clone())),
        default_count: args.default_count,
    });

    let router = axum::Router::new()
        .nest("/api/", backend::api::router(state))
        .nest_service("/", tower_http::services::ServeDir::new(args.assets.clone()));

    tracing::info!("Listening on {}", args.listen);

    let listener = tokio::net::TcpListener::bind(&args.listen).await.unwrap();
    axum::serve(listener, router).await.unwrap();
}
