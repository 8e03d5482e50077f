//! flix backend binary.
//!
//! Serves the movie catalog API on BIND_ADDR (e.g. 0.0.0.0:8080).
//! JWT_SECRET is required; DB_URL selects Postgres over in-memory stores.
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = flix_server::Config::parse();
    flix_core::log().map_err(|e| anyhow::anyhow!("logging setup failed: {}", e))?;
    flix_core::kys();
    flix_server::run(config).await
}
