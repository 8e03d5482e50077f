//! flix HTTP server.
//!
//! Assembles the auth and catalog routes into a single actix-web app.
//! `/`, `/health`, `/login` and `POST /users` are public; everything else
//! passes the bearer-token gate.
//!
//! ## Submodules
//!
//! - [`config`] — Command line and environment configuration
//! - [`stores`] — Postgres or in-memory store selection
//! - [`users`] — Account management routes
pub mod config;
pub mod stores;
pub mod users;

pub use config::Config;
pub use stores::Stores;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use flix_auth::Accounts;
use flix_auth::Crypto;
use flix_auth::Gate;
use flix_auth::Verifier;
use flix_catalog::Catalog;
use std::sync::Arc;

/// Shared application data handed to every worker.
#[derive(Clone)]
pub struct State {
    accounts: web::Data<dyn Accounts>,
    catalog: web::Data<dyn Catalog>,
    crypto: web::Data<Crypto>,
    verifier: web::Data<Verifier>,
    gate: web::Data<Gate>,
}

impl State {
    pub fn new(stores: Stores, crypto: Crypto) -> Self {
        let crypto = Arc::new(crypto);
        Self {
            verifier: web::Data::new(Verifier::new(stores.accounts.clone())),
            gate: web::Data::new(Gate::new(crypto.clone(), stores.accounts.clone())),
            accounts: web::Data::from(stores.accounts),
            catalog: web::Data::from(stores.catalog),
            crypto: web::Data::from(crypto),
        }
    }

    #[rustfmt::skip]
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.accounts.clone())
            .app_data(self.catalog.clone())
            .app_data(self.crypto.clone())
            .app_data(self.verifier.clone())
            .app_data(self.gate.clone())
            .route("/", web::get().to(welcome))
            .route("/health", web::get().to(health))
            .route("/login", web::post().to(flix_auth::login))
            .service(
                web::scope("/users")
                    .route("", web::post().to(flix_auth::register))
                    .route("/{username}", web::get().to(users::profile))
                    .route("/{username}", web::put().to(users::update))
                    .route("/{username}", web::delete().to(users::deregister))
                    .route("/{username}/movies/{movie}", web::post().to(users::favorite))
                    .route("/{username}/movies/{movie}", web::delete().to(users::unfavorite)),
            )
            .service(
                web::scope("/movies")
                    .route("", web::get().to(flix_catalog::handlers::movies))
                    .route("/genre/{name}", web::get().to(flix_catalog::handlers::genre))
                    .route("/directors/{name}", web::get().to(flix_catalog::handlers::director))
                    .route("/{title}", web::get().to(flix_catalog::handlers::movie)),
            );
    }
}

async fn welcome() -> impl Responder {
    HttpResponse::Ok().body("Welcome to my favourite movies!")
}

async fn health(accounts: web::Data<dyn Accounts>) -> impl Responder {
    match accounts
        .ping()
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let crypto = Crypto::new(config.jwt_secret.as_bytes())?;
    let stores = Stores::connect(config.database_url.as_deref()).await?;
    let state = State::new(stores, crypto);
    log::info!("starting flix server on {}", config.bind);
    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .configure(move |cfg| state.configure(cfg))
    })
    .workers(config.workers)
    .bind(&config.bind)?
    .run()
    .await?;
    Ok(())
}
