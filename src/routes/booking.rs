use actix_web::{HttpResponse, Responder, get, post, web};

use crate::auth::AuthenticatedUser;
use crate::forms::booking::{CreateBookingForm, UpdateBookingStatusForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::booking as booking_service;
use crate::services::booking::BookingsQuery;

#[get("/bookings")]
pub async fn list_bookings(
    params: web::Query<BookingsQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match booking_service::list_bookings(repo.get_ref(), &user, params.0) {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(err) => error_response("Failed to list bookings", err),
    }
}

/// Public endpoint: anonymous customers request a table here.
#[post("/bookings")]
pub async fn create_booking(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateBookingForm>,
) -> impl Responder {
    match booking_service::create_booking(repo.get_ref(), form) {
        Ok(booking) => HttpResponse::Created().json(booking),
        Err(err) => error_response("Failed to create booking", err),
    }
}

#[post("/bookings/{booking_id}/status")]
pub async fn update_booking_status(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateBookingStatusForm>,
) -> impl Responder {
    let booking_id = path.into_inner();

    match booking_service::update_booking_status(repo.get_ref(), &user, booking_id, form) {
        Ok(booking) => HttpResponse::Ok().json(booking),
        Err(err) => error_response("Failed to update booking status", err),
    }
}
