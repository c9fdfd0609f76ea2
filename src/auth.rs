use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use serde_json::json;

/// Identity of the dashboard user attached to the current session cookie.
///
/// Extraction fails with a `401 Unauthorized` JSON body when the request
/// carries no valid session identity.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    /// Database identifier of the signed-in user.
    pub id: i32,
}

fn unauthorized(message: &str) -> actix_web::Error {
    let response = HttpResponse::Unauthorized().json(json!({
        "error": "unauthorized",
        "message": message,
    }));
    InternalError::from_response(message.to_string(), response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity = Identity::from_request(req, payload).into_inner();

        let result = match identity {
            Ok(identity) => match identity.id() {
                Ok(raw) => raw
                    .parse::<i32>()
                    .map(|id| AuthenticatedUser { id })
                    .map_err(|_| unauthorized("session identity is malformed")),
                Err(_) => Err(unauthorized("session identity is unavailable")),
            },
            Err(_) => Err(unauthorized("authentication required")),
        };

        ready(result)
    }
}
