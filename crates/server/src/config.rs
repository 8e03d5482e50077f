/// Process configuration. Every flag falls back to an environment variable.
#[derive(clap::Parser)]
#[command(name = "backend", about = "flix movie catalog API")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
    pub bind: String,
    /// Postgres URL. Without one the server runs on in-memory stores.
    #[arg(long, env = "DB_URL")]
    pub database_url: Option<String>,
    /// HS256 signing secret shared by token issuance and verification.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,
    /// Actix worker threads.
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
}
