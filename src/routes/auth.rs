use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use serde_json::json;

use crate::config::AppConfig;
use crate::domain::user::User;
use crate::forms::auth::LoginForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::auth as auth_service;

#[post("/auth/login")]
pub async fn login(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    config: web::Data<AppConfig>,
    web::Json(form): web::Json<LoginForm>,
) -> impl Responder {
    match auth_service::login(repo.get_ref(), form, config.admin_open_id.as_deref()) {
        Ok(user) => {
            if let Err(err) = Identity::login(&req.extensions(), user.id.to_string()) {
                log::error!("Failed to establish session identity: {err}");
                return HttpResponse::InternalServerError().finish();
            }
            HttpResponse::Ok().json(user)
        }
        Err(err) => error_response("Failed to log in", err),
    }
}

/// Current user, or `null` when the request carries no valid session.
#[get("/auth/me")]
pub async fn me(identity: Option<Identity>, repo: web::Data<DieselRepository>) -> impl Responder {
    let user_id = identity
        .and_then(|identity| identity.id().ok())
        .and_then(|raw| raw.parse::<i32>().ok());

    let Some(user_id) = user_id else {
        return HttpResponse::Ok().json(Option::<User>::None);
    };

    match auth_service::current_user(repo.get_ref(), user_id) {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(err) => error_response("Failed to load current user", err),
    }
}

#[post("/auth/logout")]
pub async fn logout(identity: Option<Identity>) -> impl Responder {
    if let Some(identity) = identity {
        identity.logout();
    }
    HttpResponse::Ok().json(json!({ "success": true }))
}
