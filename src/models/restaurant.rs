use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::restaurant::{
    NewRestaurant as DomainNewRestaurant, Restaurant as DomainRestaurant,
    UpdateRestaurant as DomainUpdateRestaurant,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::restaurants)]
pub struct Restaurant {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub opening_hours: Option<String>,
    pub cuisine: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::restaurants)]
pub struct NewRestaurant<'a> {
    pub user_id: i32,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub address: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub opening_hours: Option<&'a str>,
    pub cuisine: Option<&'a str>,
    pub logo_url: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::restaurants)]
pub struct UpdateRestaurant<'a> {
    pub name: Option<&'a str>,
    pub description: Option<Option<&'a str>>,
    pub address: Option<Option<&'a str>>,
    pub phone: Option<Option<&'a str>>,
    pub email: Option<Option<&'a str>>,
    pub opening_hours: Option<Option<&'a str>>,
    pub cuisine: Option<Option<&'a str>>,
    pub logo_url: Option<Option<&'a str>>,
    pub updated_at: NaiveDateTime,
}

impl From<Restaurant> for DomainRestaurant {
    fn from(value: Restaurant) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            name: value.name,
            description: value.description,
            address: value.address,
            phone: value.phone,
            email: value.email,
            opening_hours: value.opening_hours,
            cuisine: value.cuisine,
            logo_url: value.logo_url,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewRestaurant> for NewRestaurant<'a> {
    fn from(value: &'a DomainNewRestaurant) -> Self {
        Self {
            user_id: value.user_id,
            name: value.name.as_str(),
            description: value.description.as_deref(),
            address: value.address.as_deref(),
            phone: value.phone.as_deref(),
            email: value.email.as_deref(),
            opening_hours: value.opening_hours.as_deref(),
            cuisine: value.cuisine.as_deref(),
            logo_url: value.logo_url.as_deref(),
            updated_at: value.updated_at,
        }
    }
}

fn as_nested_deref(value: &Option<Option<String>>) -> Option<Option<&str>> {
    value
        .as_ref()
        .map(|inner| inner.as_ref().map(String::as_str))
}

impl<'a> From<&'a DomainUpdateRestaurant> for UpdateRestaurant<'a> {
    fn from(value: &'a DomainUpdateRestaurant) -> Self {
        Self {
            name: value.name.as_deref(),
            description: as_nested_deref(&value.description),
            address: as_nested_deref(&value.address),
            phone: as_nested_deref(&value.phone),
            email: as_nested_deref(&value.email),
            opening_hours: as_nested_deref(&value.opening_hours),
            cuisine: as_nested_deref(&value.cuisine),
            logo_url: as_nested_deref(&value.logo_url),
            updated_at: value.updated_at,
        }
    }
}
