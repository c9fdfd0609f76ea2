use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::user::UpsertUser;

/// Maximum allowed length for an external identity token.
const OPEN_ID_MAX_LEN: usize = 64;
const OPEN_ID_MAX_LEN_VALIDATOR: u64 = OPEN_ID_MAX_LEN as u64;

/// Maximum allowed length for a login-method label.
const LOGIN_METHOD_MAX_LEN_VALIDATOR: u64 = 64;

/// Result type returned by the auth form helpers.
pub type AuthFormResult<T> = Result<T, AuthFormError>;

/// Errors that can occur while processing the login payload.
#[derive(Debug, Error)]
pub enum AuthFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided identity token is empty after trimming.
    #[error("identity token cannot be empty")]
    EmptyOpenId,
}

/// Payload submitted when establishing a dashboard session.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    /// Opaque identity token issued by the external provider.
    #[validate(length(min = 1, max = OPEN_ID_MAX_LEN_VALIDATOR))]
    pub open_id: String,
    /// Optional display name reported by the provider.
    #[validate(length(max = 255))]
    pub name: Option<String>,
    /// Optional e-mail reported by the provider.
    #[validate(email)]
    pub email: Option<String>,
    /// Optional label of the login method used.
    #[validate(length(max = LOGIN_METHOD_MAX_LEN_VALIDATOR))]
    pub login_method: Option<String>,
}

impl LoginForm {
    /// Validates and sanitizes the payload into a domain `UpsertUser`.
    pub fn into_upsert_user(self) -> AuthFormResult<UpsertUser> {
        self.validate()?;

        let open_id = self.open_id.trim().to_string();
        if open_id.is_empty() {
            return Err(AuthFormError::EmptyOpenId);
        }

        let mut upsert = UpsertUser::new(open_id);

        if let Some(name) = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            upsert = upsert.with_name(name);
        }

        if let Some(email) = self
            .email
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            upsert = upsert.with_email(email.to_lowercase());
        }

        if let Some(login_method) = self
            .login_method
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            upsert = upsert.with_login_method(login_method);
        }

        Ok(upsert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_form_normalizes_email() {
        let form = LoginForm {
            open_id: "  user-1  ".to_string(),
            name: Some("Carla".to_string()),
            email: Some("Carla@Example.COM".to_string()),
            login_method: None,
        };

        let upsert = form.into_upsert_user().expect("conversion succeeds");

        assert_eq!(upsert.open_id, "user-1");
        assert_eq!(upsert.email.as_deref(), Some("carla@example.com"));
        assert!(upsert.role.is_none());
    }

    #[test]
    fn login_form_rejects_blank_open_id() {
        let form = LoginForm {
            open_id: "   ".to_string(),
            name: None,
            email: None,
            login_method: None,
        };

        let result = form.into_upsert_user();
        assert!(matches!(result, Err(AuthFormError::EmptyOpenId)));
    }
}
