use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Maximum allowed length for a client session token.
const SESSION_ID_MAX_LEN: usize = 255;
const SESSION_ID_MAX_LEN_VALIDATOR: u64 = SESSION_ID_MAX_LEN as u64;

/// Maximum allowed length for one customer message.
const MESSAGE_MAX_LEN: usize = 4000;
const MESSAGE_MAX_LEN_VALIDATOR: u64 = MESSAGE_MAX_LEN as u64;

/// Result type returned by the chat form helpers.
pub type ChatFormResult<T> = Result<T, ChatFormError>;

/// Errors that can occur while processing the chat payload.
#[derive(Debug, Error)]
pub enum ChatFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided session token is empty after trimming.
    #[error("session id cannot be empty")]
    EmptySessionId,
    /// The provided message is empty after sanitization.
    #[error("message cannot be empty")]
    EmptyMessage,
}

/// Payload submitted by an anonymous customer talking to the assistant.
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageForm {
    /// Client-generated opaque session token.
    #[validate(length(min = 1, max = SESSION_ID_MAX_LEN_VALIDATOR))]
    pub session_id: String,
    /// Message text typed by the customer.
    #[validate(length(min = 1, max = MESSAGE_MAX_LEN_VALIDATOR))]
    pub message: String,
    /// Restaurant the customer is talking to.
    #[validate(range(min = 1))]
    pub restaurant_id: i32,
}

/// Sanitized chat request handed to the orchestration service.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
    pub restaurant_id: i32,
}

impl SendMessageForm {
    /// Validates and sanitizes the payload into a [`ChatRequest`].
    pub fn into_chat_request(self) -> ChatFormResult<ChatRequest> {
        self.validate()?;

        let session_id = self.session_id.trim().to_string();
        if session_id.is_empty() {
            return Err(ChatFormError::EmptySessionId);
        }

        let message = sanitize_message(&self.message);
        if message.is_empty() {
            return Err(ChatFormError::EmptyMessage);
        }

        Ok(ChatRequest {
            session_id,
            message,
            restaurant_id: self.restaurant_id,
        })
    }
}

/// Collapse runs of spaces per line while keeping intentional line breaks.
fn sanitize_message(input: &str) -> String {
    let lines: Vec<String> = input
        .trim()
        .lines()
        .map(|line| {
            let mut sanitized = String::with_capacity(line.len());
            let mut previous_whitespace = false;
            for ch in line.trim().chars() {
                if ch.is_whitespace() {
                    if !previous_whitespace {
                        sanitized.push(' ');
                        previous_whitespace = true;
                    }
                } else if ch.is_control() {
                    continue;
                } else {
                    sanitized.push(ch);
                    previous_whitespace = false;
                }
            }
            sanitized
        })
        .collect();

    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_form_sanitizes_message() {
        let form = SendMessageForm {
            session_id: "  sess-1  ".to_string(),
            message: "  Avete   tavoli\nliberi stasera?  ".to_string(),
            restaurant_id: 3,
        };

        let request = form.into_chat_request().expect("conversion succeeds");

        assert_eq!(request.session_id, "sess-1");
        assert_eq!(request.message, "Avete tavoli\nliberi stasera?");
        assert_eq!(request.restaurant_id, 3);
    }

    #[test]
    fn send_form_rejects_blank_message() {
        let form = SendMessageForm {
            session_id: "sess-1".to_string(),
            message: "   ".to_string(),
            restaurant_id: 3,
        };

        let result = form.into_chat_request();
        assert!(matches!(result, Err(ChatFormError::EmptyMessage)));
    }
}
