use std::env;
use std::sync::Arc;

use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;
use tera::Tera;

use ristoai::config::AppConfig;
use ristoai::db::establish_connection_pool;
use ristoai::llm::{ChatCompletion, LlmConfig, OpenAiChatClient};
use ristoai::repository::DieselRepository;
use ristoai::routes::analytics::{dashboard_stats, list_metrics};
use ristoai::routes::auth::{login, logout, me};
use ristoai::routes::booking::{create_booking, list_bookings, update_booking_status};
use ristoai::routes::chat::{get_history, list_conversations, send_message};
use ristoai::routes::menu::{
    add_menu_item, delete_menu_item, edit_menu_item, list_menu, upload_menu,
};
use ristoai::routes::restaurant::{create_restaurant, get_restaurant, update_restaurant};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let secret_key = match env::var("SECRET_KEY") {
        Ok(key) => Key::from(key.as_bytes()),
        Err(_) => Key::generate(),
    };

    let repo = match env::var("DATABASE_URL") {
        Ok(database_url) => match establish_connection_pool(&database_url) {
            Ok(pool) => DieselRepository::new(pool),
            Err(e) => {
                log::error!("Failed to establish database connection: {e}");
                std::process::exit(1);
            }
        },
        Err(_) => {
            log::warn!(
                "DATABASE_URL not set; reads degrade to empty results and writes will fail"
            );
            DieselRepository::disconnected()
        }
    };

    let llm_config = LlmConfig {
        base_url: env::var("LLM_BASE_URL").unwrap_or("https://api.openai.com".to_string()),
        api_key: env::var("LLM_API_KEY").ok(),
        model: env::var("LLM_MODEL").unwrap_or("gpt-4o-mini".to_string()),
    };
    let llm: Arc<dyn ChatCompletion> = match OpenAiChatClient::new(llm_config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            log::error!("Failed to build chat completion client: {e}");
            std::process::exit(1);
        }
    };
    let llm_data = web::Data::from(llm);

    let app_config = AppConfig {
        admin_open_id: env::var("ADMIN_OPEN_ID").ok(),
    };

    let tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    HttpServer::new(move || {
        App::new()
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api/v1")
                    .service(login)
                    .service(me)
                    .service(logout)
                    .service(get_restaurant)
                    .service(create_restaurant)
                    .service(update_restaurant)
                    .service(list_menu)
                    .service(add_menu_item)
                    .service(edit_menu_item)
                    .service(delete_menu_item)
                    .service(upload_menu)
                    .service(list_bookings)
                    .service(create_booking)
                    .service(update_booking_status)
                    .service(send_message)
                    .service(get_history)
                    .service(list_conversations)
                    .service(list_metrics)
                    .service(dashboard_stats),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(app_config.clone()))
            .app_data(llm_data.clone())
    })
    .bind((address, port))?
    .run()
    .await
}
