#[tokio::main]
async fn main() {
    if let Err(error) = score_server::run().await {
        tracing::error!(%error, "score server exited with error");
    }
}
