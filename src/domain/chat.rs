use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle states for a customer conversation.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    /// The conversation can still receive messages.
    Active,
    /// The conversation has been archived by the owner.
    Closed,
}

impl Default for ConversationStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl ConversationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }
}

impl From<ConversationStatus> for &'static str {
    fn from(value: ConversationStatus) -> Self {
        value.as_str()
    }
}

impl From<&str> for ConversationStatus {
    fn from(value: &str) -> Self {
        match value {
            "closed" => Self::Closed,
            _ => Self::Active,
        }
    }
}

/// Author of a chat message.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// The anonymous customer.
    User,
    /// The language-model assistant.
    Assistant,
    /// Instruction messages composed by this service.
    System,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

impl From<MessageRole> for &'static str {
    fn from(value: MessageRole) -> Self {
        value.as_str()
    }
}

impl From<&str> for MessageRole {
    fn from(value: &str) -> Self {
        match value {
            "assistant" => Self::Assistant,
            "system" => Self::System,
            _ => Self::User,
        }
    }
}

/// Domain representation of one anonymous customer conversation.
///
/// The session identifier is the sole correlation key between a browser
/// session and its message history; it is unique across restaurants.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatConversation {
    /// Unique identifier of the conversation.
    pub id: i32,
    /// Restaurant the conversation belongs to.
    pub restaurant_id: i32,
    /// Customer name, if the assistant collected one.
    pub customer_name: Option<String>,
    /// Customer e-mail, if the assistant collected one.
    pub customer_email: Option<String>,
    /// Client-generated opaque session token.
    pub session_id: String,
    /// Current lifecycle status.
    pub status: ConversationStatus,
    /// Timestamp for when the conversation was created.
    pub created_at: NaiveDateTime,
    /// Timestamp of the most recent activity.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new conversation.
#[derive(Debug, Clone)]
pub struct NewChatConversation {
    /// Restaurant the conversation belongs to.
    pub restaurant_id: i32,
    /// Client-generated opaque session token.
    pub session_id: String,
    /// Initial lifecycle status.
    pub status: ConversationStatus,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewChatConversation {
    /// Build an active conversation payload for the given session.
    pub fn new(restaurant_id: i32, session_id: impl Into<String>) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            restaurant_id,
            session_id: session_id.into(),
            status: ConversationStatus::Active,
            updated_at: now,
        }
    }
}

/// Query definition used to list conversations for a restaurant.
#[derive(Debug, Clone)]
pub struct ConversationListQuery {
    /// Owning restaurant identifier.
    pub restaurant_id: i32,
    /// Optional status filter.
    pub status: Option<ConversationStatus>,
}

impl ConversationListQuery {
    /// Construct a query that targets all conversations of `restaurant_id`.
    pub fn new(restaurant_id: i32) -> Self {
        Self {
            restaurant_id,
            status: None,
        }
    }

    /// Filter the results by the provided status.
    pub fn status(mut self, status: ConversationStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Domain representation of one message inside a conversation.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    /// Unique identifier of the message.
    pub id: i32,
    /// Conversation the message belongs to.
    pub conversation_id: i32,
    /// Author of the message.
    pub role: MessageRole,
    /// Message text.
    pub content: String,
    /// Timestamp for when the message was appended.
    pub created_at: NaiveDateTime,
}

/// Payload required to append a message to a conversation.
#[derive(Debug, Clone)]
pub struct NewChatMessage {
    /// Conversation the message belongs to.
    pub conversation_id: i32,
    /// Author of the message.
    pub role: MessageRole,
    /// Message text.
    pub content: String,
}

impl NewChatMessage {
    pub fn new(conversation_id: i32, role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            conversation_id,
            role,
            content: content.into(),
        }
    }
}

/// Query definition used to load messages of one conversation in
/// chronological order.
#[derive(Debug, Clone)]
pub struct ChatMessageListQuery {
    /// Owning conversation identifier.
    pub conversation_id: i32,
    /// When set, only the `n` most recent messages are returned.
    pub last: Option<usize>,
}

impl ChatMessageListQuery {
    /// Construct a query that targets the full history of a conversation.
    pub fn new(conversation_id: i32) -> Self {
        Self {
            conversation_id,
            last: None,
        }
    }

    /// Bound the results to the `n` most recent messages.
    pub fn last(mut self, n: usize) -> Self {
        self.last = Some(n);
        self
    }
}
