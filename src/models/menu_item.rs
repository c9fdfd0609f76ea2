use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::menu_item::{
    MenuItem as DomainMenuItem, NewMenuItem as DomainNewMenuItem,
    UpdateMenuItem as DomainUpdateMenuItem,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::menu_items)]
pub struct MenuItem {
    pub id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price_cents: i32,
    pub image_url: Option<String>,
    pub available: bool,
    pub allergens: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::menu_items)]
pub struct NewMenuItem<'a> {
    pub restaurant_id: i32,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
    pub price_cents: i32,
    pub image_url: Option<&'a str>,
    pub available: bool,
    pub allergens: Option<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::menu_items)]
pub struct UpdateMenuItem<'a> {
    pub name: Option<&'a str>,
    pub description: Option<Option<&'a str>>,
    pub category: Option<Option<&'a str>>,
    pub price_cents: Option<i32>,
    pub image_url: Option<Option<&'a str>>,
    pub available: Option<bool>,
    pub allergens: Option<Option<String>>,
    pub updated_at: NaiveDateTime,
}

/// Allergen lists are stored as a JSON array in a nullable text column;
/// `NULL` and the empty array are equivalent.
fn encode_allergens(allergens: &[String]) -> Option<String> {
    if allergens.is_empty() {
        return None;
    }
    serde_json::to_string(allergens).ok()
}

fn decode_allergens(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|value| serde_json::from_str(value).ok())
        .unwrap_or_default()
}

impl From<MenuItem> for DomainMenuItem {
    fn from(value: MenuItem) -> Self {
        Self {
            id: value.id,
            restaurant_id: value.restaurant_id,
            name: value.name,
            description: value.description,
            category: value.category,
            price_cents: value.price_cents,
            image_url: value.image_url,
            available: value.available,
            allergens: decode_allergens(value.allergens.as_deref()),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewMenuItem> for NewMenuItem<'a> {
    fn from(value: &'a DomainNewMenuItem) -> Self {
        Self {
            restaurant_id: value.restaurant_id,
            name: value.name.as_str(),
            description: value.description.as_deref(),
            category: value.category.as_deref(),
            price_cents: value.price_cents,
            image_url: value.image_url.as_deref(),
            available: value.available,
            allergens: encode_allergens(&value.allergens),
            updated_at: value.updated_at,
        }
    }
}

fn as_nested_deref(value: &Option<Option<String>>) -> Option<Option<&str>> {
    value
        .as_ref()
        .map(|inner| inner.as_ref().map(String::as_str))
}

impl<'a> From<&'a DomainUpdateMenuItem> for UpdateMenuItem<'a> {
    fn from(value: &'a DomainUpdateMenuItem) -> Self {
        Self {
            name: value.name.as_deref(),
            description: as_nested_deref(&value.description),
            category: as_nested_deref(&value.category),
            price_cents: value.price_cents,
            image_url: as_nested_deref(&value.image_url),
            available: value.available,
            allergens: value
                .allergens
                .as_ref()
                .map(|allergens| encode_allergens(allergens)),
            updated_at: value.updated_at,
        }
    }
}
