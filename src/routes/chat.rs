use actix_web::{HttpResponse, Responder, get, post, web};
use tera::Tera;

use crate::auth::AuthenticatedUser;
use crate::forms::chat::SendMessageForm;
use crate::llm::ChatCompletion;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::chat as chat_service;
use crate::services::chat::{ConversationsQuery, HistoryQuery};

/// Public endpoint: one customer turn with the assistant.
#[post("/chat/message")]
pub async fn send_message(
    repo: web::Data<DieselRepository>,
    llm: web::Data<dyn ChatCompletion>,
    tera: web::Data<Tera>,
    web::Json(form): web::Json<SendMessageForm>,
) -> impl Responder {
    match chat_service::send_message(repo.get_ref(), llm.get_ref(), tera.get_ref(), form).await {
        Ok(reply) => HttpResponse::Ok().json(reply),
        Err(err) => error_response("Failed to process chat message", err),
    }
}

/// Public endpoint: full history for one session, empty when unknown.
#[get("/chat/history")]
pub async fn get_history(
    params: web::Query<HistoryQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match chat_service::get_history(repo.get_ref(), params.0) {
        Ok(messages) => HttpResponse::Ok().json(messages),
        Err(err) => error_response("Failed to load chat history", err),
    }
}

#[get("/chat/conversations")]
pub async fn list_conversations(
    params: web::Query<ConversationsQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match chat_service::list_conversations(repo.get_ref(), &user, params.0) {
        Ok(conversations) => HttpResponse::Ok().json(conversations),
        Err(err) => error_response("Failed to list conversations", err),
    }
}
