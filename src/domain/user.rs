use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Access level granted to a dashboard user.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Regular restaurant owner account.
    User,
    /// Platform administrator.
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::User
    }
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl From<UserRole> for &'static str {
    fn from(value: UserRole) -> Self {
        value.as_str()
    }
}

impl From<&str> for UserRole {
    fn from(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            _ => Self::User,
        }
    }
}

/// Domain representation of an authenticated principal.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    /// Unique identifier of the user.
    pub id: i32,
    /// Opaque identifier issued by the external identity provider.
    pub open_id: String,
    /// Optional display name from the identity provider.
    pub name: Option<String>,
    /// Optional e-mail address from the identity provider.
    pub email: Option<String>,
    /// Name of the login method that produced this identity.
    pub login_method: Option<String>,
    /// Access level of the account.
    pub role: UserRole,
    /// Timestamp for when the user record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the user record.
    pub updated_at: NaiveDateTime,
    /// Timestamp for the most recent sign-in.
    pub last_signed_in: NaiveDateTime,
}

/// Payload applied when inserting or refreshing a user keyed by `open_id`.
#[derive(Debug, Clone)]
pub struct UpsertUser {
    /// Opaque identifier issued by the external identity provider.
    pub open_id: String,
    /// Optional display name update.
    pub name: Option<String>,
    /// Optional e-mail update.
    pub email: Option<String>,
    /// Optional login-method update.
    pub login_method: Option<String>,
    /// Optional role override; `None` leaves an existing role untouched.
    pub role: Option<UserRole>,
    /// Sign-in timestamp recorded for this upsert.
    pub last_signed_in: NaiveDateTime,
}

impl UpsertUser {
    /// Build an upsert payload for the given external identity.
    pub fn new(open_id: impl Into<String>) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            open_id: open_id.into(),
            name: None,
            email: None,
            login_method: None,
            role: None,
            last_signed_in: now,
        }
    }

    /// Attach a display name to the payload.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach an e-mail address to the payload.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Attach the login method that produced this identity.
    pub fn with_login_method(mut self, login_method: impl Into<String>) -> Self {
        self.login_method = Some(login_method.into());
        self
    }

    /// Override the stored role.
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }
}
