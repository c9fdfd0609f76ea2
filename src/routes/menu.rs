use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, delete, get, patch, post, web};
use serde_json::json;

use crate::auth::AuthenticatedUser;
use crate::forms::menu::{AddMenuItemForm, EditMenuItemForm, UploadMenuForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::menu as menu_service;
use crate::services::menu::MenuQuery;

#[get("/menu")]
pub async fn list_menu(
    params: web::Query<MenuQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match menu_service::list_menu(repo.get_ref(), &user, params.0) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response("Failed to list menu", err),
    }
}

#[post("/menu")]
pub async fn add_menu_item(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddMenuItemForm>,
) -> impl Responder {
    match menu_service::create_menu_item(repo.get_ref(), &user, form) {
        Ok(item) => HttpResponse::Created().json(item),
        Err(err) => error_response("Failed to add menu item", err),
    }
}

#[patch("/menu/{item_id}")]
pub async fn edit_menu_item(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<EditMenuItemForm>,
) -> impl Responder {
    let item_id = path.into_inner();

    match menu_service::modify_menu_item(repo.get_ref(), &user, item_id, form) {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(err) => error_response("Failed to edit menu item", err),
    }
}

#[delete("/menu/{item_id}")]
pub async fn delete_menu_item(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let item_id = path.into_inner();

    match menu_service::remove_menu_item(repo.get_ref(), &user, item_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response("Failed to delete menu item", err),
    }
}

#[post("/menu/upload")]
pub async fn upload_menu(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    MultipartForm(mut form): MultipartForm<UploadMenuForm>,
) -> impl Responder {
    match menu_service::import_menu_items(repo.get_ref(), &user, &mut form) {
        Ok(imported) => HttpResponse::Ok().json(json!({ "imported": imported })),
        Err(err) => error_response("Failed to import menu", err),
    }
}
