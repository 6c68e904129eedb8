use pomo::commands::Cli;
use pomo::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        init_logging();
    }
    Cli::menu().await
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pomo=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
