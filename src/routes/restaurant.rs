use actix_web::{HttpResponse, Responder, get, patch, post, web};

use crate::auth::AuthenticatedUser;
use crate::forms::restaurant::{CreateRestaurantForm, UpdateRestaurantForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::restaurant as restaurant_service;

/// The acting user's restaurant profile, or `null` before onboarding.
#[get("/restaurant")]
pub async fn get_restaurant(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match restaurant_service::get_restaurant(repo.get_ref(), &user) {
        Ok(restaurant) => HttpResponse::Ok().json(restaurant),
        Err(err) => error_response("Failed to load restaurant", err),
    }
}

#[post("/restaurant")]
pub async fn create_restaurant(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateRestaurantForm>,
) -> impl Responder {
    match restaurant_service::create_restaurant(repo.get_ref(), &user, form) {
        Ok(restaurant) => HttpResponse::Created().json(restaurant),
        Err(err) => error_response("Failed to create restaurant", err),
    }
}

#[patch("/restaurant")]
pub async fn update_restaurant(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateRestaurantForm>,
) -> impl Responder {
    match restaurant_service::update_restaurant(repo.get_ref(), &user, form) {
        Ok(restaurant) => HttpResponse::Ok().json(restaurant),
        Err(err) => error_response("Failed to update restaurant", err),
    }
}
