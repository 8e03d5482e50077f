//! Account management routes. A caller may only act on their own account.
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use flix_auth::Account;
use flix_auth::Accounts;
use flix_auth::Auth;
use flix_auth::StoreError;
use flix_auth::UpdateRequest;
use flix_auth::password;
use flix_catalog::Catalog;
use flix_catalog::Movie;
use flix_core::ID;

#[derive(serde::Serialize)]
struct Profile {
    user: Account,
    favorites: Vec<ID<Movie>>,
}

fn forbidden() -> HttpResponse {
    HttpResponse::Forbidden().body("Forbidden")
}

fn unavailable(e: StoreError) -> HttpResponse {
    log::error!("account store failed: {}", e);
    HttpResponse::ServiceUnavailable().body("Service Unavailable")
}

pub async fn profile(
    auth: Auth,
    catalog: web::Data<dyn Catalog>,
    username: web::Path<String>,
) -> impl Responder {
    if !auth.owns(&username) {
        return forbidden();
    }
    match catalog.favorites(auth.user()).await {
        Ok(favorites) => HttpResponse::Ok().json(Profile {
            user: auth.0,
            favorites,
        }),
        Err(e) => unavailable(e),
    }
}

pub async fn update(
    auth: Auth,
    accounts: web::Data<dyn Accounts>,
    username: web::Path<String>,
    req: web::Json<UpdateRequest>,
) -> impl Responder {
    if !auth.owns(&username) {
        return forbidden();
    }
    if let Some(reason) = req.invalid() {
        return HttpResponse::BadRequest().body(reason);
    }
    let req = req.into_inner();
    let hashword = match req.password.as_deref().map(password::hash).transpose() {
        Ok(h) => h,
        Err(e) => {
            log::error!("password hashing failed: {}", e);
            return HttpResponse::InternalServerError().body("update failed");
        }
    };
    let amended = auth.account().amend(req.username, req.email, req.birthday);
    match accounts.update(&amended, hashword.as_ref()).await {
        Ok(true) => {
            log::info!("updated {}", amended.username());
            HttpResponse::Ok().json(amended)
        }
        Ok(false) => HttpResponse::NotFound().body(format!("{} was not found", username)),
        Err(StoreError::Conflict) => HttpResponse::Conflict().body("username already exists"),
        Err(e) => unavailable(e),
    }
}

pub async fn deregister(
    auth: Auth,
    accounts: web::Data<dyn Accounts>,
    catalog: web::Data<dyn Catalog>,
    username: web::Path<String>,
) -> impl Responder {
    if !auth.owns(&username) {
        return forbidden();
    }
    match accounts.delete(auth.user()).await {
        Ok(true) => {
            // the account is gone either way; stale favorites are unreachable
            if let Err(e) = catalog.forget(auth.user()).await {
                log::warn!("favorites of {} outlived the account: {}", username, e);
            }
            log::info!("deregistered {}", username);
            HttpResponse::Ok().body(format!("{} was deregistered", username))
        }
        Ok(false) => HttpResponse::NotFound().body(format!("{} was not found", username)),
        Err(e) => unavailable(e),
    }
}

pub async fn favorite(
    auth: Auth,
    catalog: web::Data<dyn Catalog>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (username, movie) = path.into_inner();
    if !auth.owns(&username) {
        return forbidden();
    }
    let Ok(movie) = movie.parse::<ID<Movie>>() else {
        return HttpResponse::BadRequest().body("movie id must be a UUID");
    };
    match catalog.favorite(auth.user(), movie).await {
        Ok(false) => HttpResponse::NotFound().body(format!("no movie with id {}", movie)),
        Ok(true) => match catalog.favorites(auth.user()).await {
            Ok(favorites) => HttpResponse::Ok().json(favorites),
            Err(e) => unavailable(e),
        },
        Err(e) => unavailable(e),
    }
}

pub async fn unfavorite(
    auth: Auth,
    catalog: web::Data<dyn Catalog>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (username, movie) = path.into_inner();
    if !auth.owns(&username) {
        return forbidden();
    }
    let Ok(movie) = movie.parse::<ID<Movie>>() else {
        return HttpResponse::BadRequest().body("movie id must be a UUID");
    };
    match catalog.unfavorite(auth.user(), movie).await {
        Ok(false) => HttpResponse::NotFound().body(format!("{} is not a favorite", movie)),
        Ok(true) => match catalog.favorites(auth.user()).await {
            Ok(favorites) => HttpResponse::Ok().json(favorites),
            Err(e) => unavailable(e),
        },
        Err(e) => unavailable(e),
    }
}
