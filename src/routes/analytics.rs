use actix_web::{HttpResponse, Responder, get, web};

use crate::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::analytics as analytics_service;
use crate::services::analytics::AnalyticsQuery;

#[get("/analytics")]
pub async fn list_metrics(
    params: web::Query<AnalyticsQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match analytics_service::list_metrics(repo.get_ref(), &user, params.0) {
        Ok(metrics) => HttpResponse::Ok().json(metrics),
        Err(err) => error_response("Failed to load analytics", err),
    }
}

#[get("/analytics/dashboard")]
pub async fn dashboard_stats(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match analytics_service::dashboard_stats(repo.get_ref(), &user) {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(err) => error_response("Failed to compute dashboard stats", err),
    }
}
