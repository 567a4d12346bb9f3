#[tokio::main]
async fn main() {
    if let Err(error) = world_server::frameworks::server::run_with_config().await {
        tracing::error!(%error, "world server exited with error");
    }
}
