use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::chat::{
    ChatConversation as DomainChatConversation, ChatMessage as DomainChatMessage,
    NewChatConversation as DomainNewChatConversation, NewChatMessage as DomainNewChatMessage,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::chat_conversations)]
pub struct ChatConversation {
    pub id: i32,
    pub restaurant_id: i32,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub session_id: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::chat_conversations)]
pub struct NewChatConversation<'a> {
    pub restaurant_id: i32,
    pub session_id: &'a str,
    pub status: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::chat_messages)]
#[diesel(belongs_to(ChatConversation, foreign_key = conversation_id))]
pub struct ChatMessage {
    pub id: i32,
    pub conversation_id: i32,
    pub role: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::chat_messages)]
pub struct NewChatMessage<'a> {
    pub conversation_id: i32,
    pub role: &'a str,
    pub content: &'a str,
}

impl From<ChatConversation> for DomainChatConversation {
    fn from(value: ChatConversation) -> Self {
        Self {
            id: value.id,
            restaurant_id: value.restaurant_id,
            customer_name: value.customer_name,
            customer_email: value.customer_email,
            session_id: value.session_id,
            status: value.status.as_str().into(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewChatConversation> for NewChatConversation<'a> {
    fn from(value: &'a DomainNewChatConversation) -> Self {
        Self {
            restaurant_id: value.restaurant_id,
            session_id: value.session_id.as_str(),
            status: value.status.into(),
            updated_at: value.updated_at,
        }
    }
}

impl From<ChatMessage> for DomainChatMessage {
    fn from(value: ChatMessage) -> Self {
        Self {
            id: value.id,
            conversation_id: value.conversation_id,
            role: value.role.as_str().into(),
            content: value.content,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewChatMessage> for NewChatMessage<'a> {
    fn from(value: &'a DomainNewChatMessage) -> Self {
        Self {
            conversation_id: value.conversation_id,
            role: value.role.into(),
            content: value.content.as_str(),
        }
    }
}
