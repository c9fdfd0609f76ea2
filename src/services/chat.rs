use serde::{Deserialize, Serialize};
use tera::Tera;

use crate::auth::AuthenticatedUser;
use crate::domain::chat::{
    ChatConversation, ChatMessage, ChatMessageListQuery, ConversationListQuery,
    ConversationStatus, MessageRole, NewChatConversation, NewChatMessage,
};
use crate::domain::menu_item::{MenuItem, MenuItemListQuery};
use crate::forms::chat::SendMessageForm;
use crate::llm::{ChatCompletion, PromptMessage};
use crate::repository::{ChatReader, ChatWriter, MenuItemReader, RestaurantReader};
use crate::services::{ServiceError, ServiceResult, owned_restaurant};

/// Tera template rendered into the assistant's system prompt.
pub const SYSTEM_PROMPT_TEMPLATE: &str = "chat/system_prompt.txt";

/// Reply substituted when the model produces no usable text.
pub const ASSISTANT_FALLBACK_REPLY: &str = "Mi dispiace, non ho capito. Puoi ripetere?";

/// Number of trailing messages forwarded to the model per turn.
const HISTORY_WINDOW: usize = 10;

/// Reply returned to the anonymous customer.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    /// Assistant reply text.
    pub message: String,
    /// Conversation the exchange was recorded in.
    pub conversation_id: i32,
}

/// Query parameters accepted by the public history endpoint.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Client-generated session token.
    pub session_id: String,
}

/// Query parameters accepted by the owner conversation listing.
#[derive(Debug, Default, Deserialize)]
pub struct ConversationsQuery {
    /// Optional status filter.
    pub status: Option<ConversationStatus>,
}

#[derive(Debug, Serialize)]
struct MenuPromptLine {
    name: String,
    price: String,
    description: String,
}

/// Render an integer amount of cents as a two-decimal currency string.
pub fn format_price(price_cents: i32) -> String {
    format!("{:.2}", price_cents as f64 / 100.0)
}

/// Render the system prompt from the live menu.
///
/// An empty menu still yields the full persona and instruction block with
/// an empty item list.
pub fn render_system_prompt(tera: &Tera, menu: &[MenuItem]) -> ServiceResult<String> {
    let lines: Vec<MenuPromptLine> = menu
        .iter()
        .map(|item| MenuPromptLine {
            name: item.name.clone(),
            price: format_price(item.price_cents),
            description: item
                .description
                .clone()
                .unwrap_or_else(|| "Nessuna descrizione".to_string()),
        })
        .collect();

    let mut context = tera::Context::new();
    context.insert("menu", &lines);

    tera.render(SYSTEM_PROMPT_TEMPLATE, &context)
        .map_err(|err| ServiceError::Internal(format!("failed to render system prompt: {err}")))
}

/// Record a customer message, consult the model and record its reply.
///
/// The conversation is resolved through an insert-or-get on the unique
/// session identifier, so near-simultaneous first messages for one session
/// still end up in a single conversation.
pub async fn send_message<R, L>(
    repo: &R,
    llm: &L,
    tera: &Tera,
    form: SendMessageForm,
) -> ServiceResult<ChatReply>
where
    R: RestaurantReader + ChatReader + ChatWriter + MenuItemReader + ?Sized,
    L: ChatCompletion + ?Sized,
{
    let request = form
        .into_chat_request()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_restaurant_by_id(request.restaurant_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let conversation = repo.find_or_create_conversation(&NewChatConversation::new(
        request.restaurant_id,
        request.session_id.as_str(),
    ))?;

    repo.create_message(&NewChatMessage::new(
        conversation.id,
        MessageRole::User,
        request.message.as_str(),
    ))?;

    let history = repo.list_messages(
        ChatMessageListQuery::new(conversation.id).last(HISTORY_WINDOW),
    )?;

    let menu = repo.list_menu_items(MenuItemListQuery::new(request.restaurant_id))?;
    let system_prompt = render_system_prompt(tera, &menu)?;

    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(PromptMessage::new(MessageRole::System, system_prompt));
    messages.extend(
        history
            .into_iter()
            .map(|message| PromptMessage::new(message.role, message.content)),
    );

    let reply = llm
        .complete(messages)
        .await?
        .unwrap_or_else(|| ASSISTANT_FALLBACK_REPLY.to_string());

    let saved = repo.create_message(&NewChatMessage::new(
        conversation.id,
        MessageRole::Assistant,
        reply.as_str(),
    ))?;

    Ok(ChatReply {
        message: saved.content,
        conversation_id: conversation.id,
    })
}

/// Load the full history for a session; unknown sessions yield an empty
/// list rather than an error.
pub fn get_history<R>(repo: &R, query: HistoryQuery) -> ServiceResult<Vec<ChatMessage>>
where
    R: ChatReader + ?Sized,
{
    let Some(conversation) = repo.get_conversation_by_session_id(&query.session_id)? else {
        return Ok(Vec::new());
    };

    repo.list_messages(ChatMessageListQuery::new(conversation.id))
        .map_err(ServiceError::from)
}

/// List conversations of the acting user's restaurant, most recent first.
pub fn list_conversations<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: ConversationsQuery,
) -> ServiceResult<Vec<ChatConversation>>
where
    R: RestaurantReader + ChatReader + ?Sized,
{
    let restaurant = owned_restaurant(repo, user)?;

    let mut list_query = ConversationListQuery::new(restaurant.id);
    if let Some(status) = query.status {
        list_query = list_query.status(status);
    }

    repo.list_conversations(list_query)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{NaiveDate, NaiveDateTime};
    use mockall::mock;

    use crate::domain::restaurant::Restaurant;
    use crate::llm::LlmError;
    use crate::repository::mock::MockChatStore;

    mock! {
        Llm {}

        #[async_trait]
        impl ChatCompletion for Llm {
            async fn complete(
                &self,
                messages: Vec<PromptMessage>,
            ) -> Result<Option<String>, LlmError>;
        }
    }

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 2)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .unwrap_or_default()
    }

    fn test_tera() -> Tera {
        Tera::new("templates/**/*").expect("templates should load")
    }

    fn sample_restaurant(id: i32) -> Restaurant {
        Restaurant {
            id,
            user_id: 1,
            name: "Trattoria da Carla".to_string(),
            description: None,
            address: None,
            phone: None,
            email: None,
            opening_hours: None,
            cuisine: None,
            logo_url: None,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    fn sample_conversation(id: i32, restaurant_id: i32, session_id: &str) -> ChatConversation {
        ChatConversation {
            id,
            restaurant_id,
            customer_name: None,
            customer_email: None,
            session_id: session_id.to_string(),
            status: ConversationStatus::Active,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    fn sample_message(id: i32, conversation_id: i32, role: MessageRole, content: &str) -> ChatMessage {
        ChatMessage {
            id,
            conversation_id,
            role,
            content: content.to_string(),
            created_at: fixed_datetime(),
        }
    }

    fn sample_menu_item(name: &str, price_cents: i32, description: Option<&str>) -> MenuItem {
        MenuItem {
            id: 1,
            restaurant_id: 3,
            name: name.to_string(),
            description: description.map(str::to_string),
            category: None,
            price_cents,
            image_url: None,
            available: true,
            allergens: Vec::new(),
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    fn send_form(session_id: &str) -> SendMessageForm {
        SendMessageForm {
            session_id: session_id.to_string(),
            message: "Avete tavoli liberi stasera?".to_string(),
            restaurant_id: 3,
        }
    }

    #[test]
    fn prices_render_with_two_decimals() {
        assert_eq!(format_price(1400), "14.00");
        assert_eq!(format_price(950), "9.50");
        assert_eq!(format_price(5), "0.05");
        assert_eq!(format_price(0), "0.00");
    }

    #[test]
    fn system_prompt_lists_menu_items() {
        let tera = test_tera();
        let menu = vec![
            sample_menu_item("Spaghetti alla Carbonara", 1400, Some("Uova, guanciale, pecorino")),
            sample_menu_item("Tiramisù", 650, None),
        ];

        let prompt = render_system_prompt(&tera, &menu).expect("prompt renders");

        assert!(prompt.contains("RistoAI"));
        assert!(
            prompt.contains("- Spaghetti alla Carbonara (€14.00): Uova, guanciale, pecorino")
        );
        assert!(prompt.contains("- Tiramisù (€6.50): Nessuna descrizione"));
    }

    #[test]
    fn system_prompt_keeps_persona_for_empty_menu() {
        let tera = test_tera();

        let prompt = render_system_prompt(&tera, &[]).expect("prompt renders");

        assert!(prompt.contains("RistoAI"));
        assert!(prompt.contains("Menu disponibile:"));
        assert!(!prompt.contains("(€"));
    }

    #[actix_web::test]
    async fn send_message_bounds_history_and_returns_reply() {
        let mut repo = MockChatStore::new();
        let mut llm = MockLlm::new();
        let tera = test_tera();

        repo.expect_get_restaurant_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_restaurant(id))));

        repo.expect_find_or_create_conversation()
            .times(1)
            .withf(|new_conversation| {
                assert_eq!(new_conversation.restaurant_id, 3);
                assert_eq!(new_conversation.session_id, "sess-1");
                assert_eq!(new_conversation.status, ConversationStatus::Active);
                true
            })
            .returning(|new_conversation| {
                Ok(sample_conversation(
                    42,
                    new_conversation.restaurant_id,
                    &new_conversation.session_id,
                ))
            });

        repo.expect_create_message()
            .times(2)
            .returning(|new_message| {
                Ok(sample_message(
                    1,
                    new_message.conversation_id,
                    new_message.role,
                    &new_message.content,
                ))
            });

        repo.expect_list_messages()
            .times(1)
            .withf(|query| {
                assert_eq!(query.conversation_id, 42);
                assert_eq!(query.last, Some(10));
                true
            })
            .returning(|query| {
                Ok(vec![sample_message(
                    1,
                    query.conversation_id,
                    MessageRole::User,
                    "Avete tavoli liberi stasera?",
                )])
            });

        repo.expect_list_menu_items()
            .times(1)
            .returning(|_| Ok(vec![sample_menu_item("Tiramisù", 650, None)]));

        llm.expect_complete()
            .times(1)
            .withf(|messages| {
                assert!(messages.len() <= 11);
                assert_eq!(messages[0].role, MessageRole::System);
                assert!(messages[0].content.contains("Tiramisù"));
                assert_eq!(messages[1].role, MessageRole::User);
                true
            })
            .returning(|_| Ok(Some("Certo! Per quante persone?".to_string())));

        let reply = send_message(&repo, &llm, &tera, send_form("sess-1"))
            .await
            .expect("send succeeds");

        assert_eq!(reply.message, "Certo! Per quante persone?");
        assert_eq!(reply.conversation_id, 42);
    }

    #[actix_web::test]
    async fn send_message_falls_back_when_model_returns_nothing() {
        let mut repo = MockChatStore::new();
        let mut llm = MockLlm::new();
        let tera = test_tera();

        repo.expect_get_restaurant_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_restaurant(id))));

        repo.expect_find_or_create_conversation()
            .times(1)
            .returning(|new_conversation| {
                Ok(sample_conversation(
                    42,
                    new_conversation.restaurant_id,
                    &new_conversation.session_id,
                ))
            });

        repo.expect_list_messages().times(1).returning(|_| Ok(Vec::new()));
        repo.expect_list_menu_items().times(1).returning(|_| Ok(Vec::new()));

        repo.expect_create_message()
            .times(2)
            .returning(|new_message| {
                Ok(sample_message(
                    1,
                    new_message.conversation_id,
                    new_message.role,
                    &new_message.content,
                ))
            });

        llm.expect_complete().times(1).returning(|_| Ok(None));

        let reply = send_message(&repo, &llm, &tera, send_form("sess-2"))
            .await
            .expect("send succeeds with empty menu");

        assert_eq!(reply.message, ASSISTANT_FALLBACK_REPLY);
    }

    #[actix_web::test]
    async fn send_message_rejects_unknown_restaurant() {
        let mut repo = MockChatStore::new();
        let llm = MockLlm::new();
        let tera = test_tera();

        repo.expect_get_restaurant_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = send_message(&repo, &llm, &tera, send_form("sess-3")).await;
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn get_history_returns_empty_for_unknown_session() {
        let mut repo = MockChatStore::new();

        repo.expect_get_conversation_by_session_id()
            .times(1)
            .returning(|_| Ok(None));

        let history = get_history(
            &repo,
            HistoryQuery {
                session_id: "missing".to_string(),
            },
        )
        .expect("history succeeds");

        assert!(history.is_empty());
    }
}
