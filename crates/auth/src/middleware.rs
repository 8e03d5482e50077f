use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::ResponseError;
use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::web;
use flix_core::ID;
use flix_core::Unique;
use std::future::Future;
use std::pin::Pin;

/// Extractor for authenticated requests.
/// Runs the [`Gate`] against the `Authorization` header.
pub struct Auth(pub Account);

impl Auth {
    pub fn account(&self) -> &Account {
        &self.0
    }
    pub fn user(&self) -> ID<Account> {
        self.0.id()
    }
    /// Whether the request acts on the caller's own account.
    pub fn owns(&self, username: &str) -> bool {
        self.0.username() == username
    }
}

impl FromRequest for Auth {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let gate = req.app_data::<web::Data<Gate>>().cloned();
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .map(|h| h.to_str().map(str::to_owned));
        Box::pin(async move {
            let gate = gate.ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("token gate not configured")
            })?;
            let header = match header {
                None => None,
                Some(Ok(value)) => Some(value),
                Some(Err(_)) => return Err(GateError::Invalid.into()),
            };
            gate.verify(header.as_deref())
                .await
                .map(Auth)
                .map_err(actix_web::Error::from)
        })
    }
}

/// Gate failures leak nothing beyond the status line.
impl ResponseError for GateError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).body(status.canonical_reason().unwrap_or_default())
    }
}

/// Login failures share one generic message whatever the cause.
impl ResponseError for CredentialError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownOrBadPassword => StatusCode::BAD_REQUEST,
            Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
    fn error_response(&self) -> HttpResponse {
        match self {
            Self::UnknownOrBadPassword => HttpResponse::BadRequest()
                .json(serde_json::json!({ "message": "Incorrect username or password." })),
            Self::StoreUnavailable(_) => {
                HttpResponse::ServiceUnavailable().body("Service Unavailable")
            }
        }
    }
}
