use anyhow::Context;
use todo_server::Todo;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Load the optional seed list named by `TODO_SEED`. Absent var → empty
/// store; an unreadable or malformed file is a startup error.
fn load_seed() -> anyhow::Result<Vec<Todo>> {
    let Ok(path) = std::env::var("TODO_SEED") else {
        return Ok(Vec::new());
    };
    let raw =
        std::fs::read_to_string(&path).with_context(|| format!("reading seed file {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing seed file {path}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todo_server=info,tower_http=info")),
        )
        .init();

    let seed = load_seed()?;
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, seed = seed.len(), "listening");
    todo_server::run(listener, seed).await.context("server error")
}
