//! word-diary-relay — 単語日記の中継サーバー
//!
//! Usage:
//!   word-diary-relay            Serve the relay until Ctrl-C
//!
//! Configuration comes from the environment; see `RelayConfig::from_env`.
//! Log verbosity follows `RUST_LOG` (default `info`).

use tracing_subscriber::EnvFilter;
use word_diary::relay::{self, RelayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if matches!(
        std::env::args().nth(1).as_deref(),
        Some("version" | "--version" | "-V")
    ) {
        println!("word-diary-relay {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = RelayConfig::from_env()?;
    relay::serve(config).await?;
    Ok(())
}
