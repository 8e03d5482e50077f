use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::ResponseError;
use actix_web::web;
use flix_core::ID;

/// Accepts JSON or url-encoded credentials.
pub type LoginForm = web::Either<web::Json<LoginRequest>, web::Form<LoginRequest>>;

pub async fn login(
    verifier: web::Data<Verifier>,
    crypto: web::Data<Crypto>,
    form: LoginForm,
) -> impl Responder {
    let req = form.into_inner();
    let account = match verifier.verify(&req.username, &req.password).await {
        Ok(account) => account,
        Err(e) => return e.error_response(),
    };
    match crypto.issue(&account) {
        Ok(token) => {
            log::info!("issued token for {}", account.username());
            HttpResponse::Ok().json(AuthResponse {
                user: account,
                token,
            })
        }
        Err(e) => {
            log::error!("token issuance failed: {}", e);
            HttpResponse::InternalServerError().body("token issuance failed")
        }
    }
}

pub async fn register(
    accounts: web::Data<dyn Accounts>,
    req: web::Json<RegisterRequest>,
) -> impl Responder {
    if let Some(reason) = req.invalid() {
        return HttpResponse::BadRequest().body(reason);
    }
    let req = req.into_inner();
    let hashword = match password::hash(&req.password) {
        Ok(h) => h,
        Err(e) => {
            log::error!("password hashing failed: {}", e);
            return HttpResponse::InternalServerError().body("registration failed");
        }
    };
    let account = Account::new(ID::default(), req.username, req.email, req.birthday);
    match accounts.create(&account, &hashword).await {
        Ok(()) => {
            log::info!("registered {}", account.username());
            HttpResponse::Created().json(account)
        }
        Err(StoreError::Conflict) => HttpResponse::Conflict().body("username already exists"),
        Err(e) => {
            log::error!("registration failed: {}", e);
            HttpResponse::ServiceUnavailable().body("Service Unavailable")
        }
    }
}
