use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::user::{UpsertUser as DomainUpsertUser, User as DomainUser, UserRole};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: i32,
    pub open_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub login_method: Option<String>,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub last_signed_in: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub open_id: &'a str,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub login_method: Option<&'a str>,
    pub role: Option<&'a str>,
    pub last_signed_in: NaiveDateTime,
}

/// Changeset applied on upsert conflicts; unset fields keep their stored
/// values, the sign-in timestamp is always refreshed.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::users)]
pub struct RefreshUser<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub login_method: Option<&'a str>,
    pub role: Option<&'a str>,
    pub last_signed_in: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<User> for DomainUser {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            open_id: value.open_id,
            name: value.name,
            email: value.email,
            login_method: value.login_method,
            role: UserRole::from(value.role.as_str()),
            created_at: value.created_at,
            updated_at: value.updated_at,
            last_signed_in: value.last_signed_in,
        }
    }
}

impl<'a> From<&'a DomainUpsertUser> for NewUser<'a> {
    fn from(value: &'a DomainUpsertUser) -> Self {
        Self {
            open_id: value.open_id.as_str(),
            name: value.name.as_deref(),
            email: value.email.as_deref(),
            login_method: value.login_method.as_deref(),
            role: value.role.map(|role| role.as_str()),
            last_signed_in: value.last_signed_in,
        }
    }
}

impl<'a> From<&'a DomainUpsertUser> for RefreshUser<'a> {
    fn from(value: &'a DomainUpsertUser) -> Self {
        Self {
            name: value.name.as_deref(),
            email: value.email.as_deref(),
            login_method: value.login_method.as_deref(),
            role: value.role.map(|role| role.as_str()),
            last_signed_in: value.last_signed_in,
            updated_at: value.last_signed_in,
        }
    }
}
