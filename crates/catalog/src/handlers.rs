//! Catalog routes. Each takes an [`Auth`] so the gate runs first.
use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use flix_auth::Auth;
use flix_auth::StoreError;

fn unavailable(e: StoreError) -> HttpResponse {
    log::error!("catalog lookup failed: {}", e);
    HttpResponse::ServiceUnavailable().body("Service Unavailable")
}

pub async fn movies(_: Auth, catalog: web::Data<dyn Catalog>) -> impl Responder {
    match catalog.movies().await {
        Ok(movies) => HttpResponse::Ok().json(movies),
        Err(e) => unavailable(e),
    }
}

pub async fn movie(
    _: Auth,
    catalog: web::Data<dyn Catalog>,
    title: web::Path<String>,
) -> impl Responder {
    match catalog.movie(&title).await {
        Ok(Some(movie)) => HttpResponse::Ok().json(movie),
        Ok(None) => HttpResponse::NotFound().body(format!("no movie titled {}", title)),
        Err(e) => unavailable(e),
    }
}

pub async fn genre(
    _: Auth,
    catalog: web::Data<dyn Catalog>,
    name: web::Path<String>,
) -> impl Responder {
    match catalog.genre(&name).await {
        Ok(Some(genre)) => HttpResponse::Ok().json(genre),
        Ok(None) => HttpResponse::NotFound().body(format!("no genre named {}", name)),
        Err(e) => unavailable(e),
    }
}

pub async fn director(
    _: Auth,
    catalog: web::Data<dyn Catalog>,
    name: web::Path<String>,
) -> impl Responder {
    match catalog.director(&name).await {
        Ok(Some(director)) => HttpResponse::Ok().json(director),
        Ok(None) => HttpResponse::NotFound().body(format!("no director named {}", name)),
        Err(e) => unavailable(e),
    }
}
