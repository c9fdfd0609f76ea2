use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::restaurant::{NewRestaurant, UpdateRestaurant};

/// Maximum allowed length for a restaurant name.
const NAME_MAX_LEN: usize = 255;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Maximum allowed length for a phone number.
const PHONE_MAX_LEN_VALIDATOR: u64 = 50;

/// Maximum allowed length for a cuisine label.
const CUISINE_MAX_LEN_VALIDATOR: u64 = 100;

/// Result type returned by the restaurant form helpers.
pub type RestaurantFormResult<T> = Result<T, RestaurantFormError>;

/// Errors that can occur while processing restaurant forms.
#[derive(Debug, Error)]
pub enum RestaurantFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("restaurant name cannot be empty")]
    EmptyName,
}

/// Payload submitted when creating the owner's restaurant profile.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRestaurantForm {
    /// Display name entered by the owner.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Optional street address.
    pub address: Option<String>,
    /// Optional contact phone number.
    #[validate(length(max = PHONE_MAX_LEN_VALIDATOR))]
    pub phone: Option<String>,
    /// Optional contact e-mail address.
    #[validate(email)]
    pub email: Option<String>,
    /// Opaque serialized weekly schedule.
    pub opening_hours: Option<String>,
    /// Optional cuisine label.
    #[validate(length(max = CUISINE_MAX_LEN_VALIDATOR))]
    pub cuisine: Option<String>,
    /// Optional logo image URL.
    #[validate(url)]
    pub logo_url: Option<String>,
}

impl CreateRestaurantForm {
    /// Validates and sanitizes the payload into a domain `NewRestaurant`.
    pub fn into_new_restaurant(self, user_id: i32) -> RestaurantFormResult<NewRestaurant> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(RestaurantFormError::EmptyName);
        }

        let mut new_restaurant = NewRestaurant::new(user_id, sanitized_name);

        if let Some(description) = nonempty_multiline(self.description.as_deref()) {
            new_restaurant = new_restaurant.with_description(description);
        }
        if let Some(address) = nonempty_inline(self.address.as_deref()) {
            new_restaurant = new_restaurant.with_address(address);
        }
        if let Some(phone) = nonempty_inline(self.phone.as_deref()) {
            new_restaurant = new_restaurant.with_phone(phone);
        }
        if let Some(email) = nonempty_inline(self.email.as_deref()) {
            new_restaurant = new_restaurant.with_email(email.to_lowercase());
        }
        if let Some(opening_hours) = self
            .opening_hours
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            new_restaurant = new_restaurant.with_opening_hours(opening_hours);
        }
        if let Some(cuisine) = nonempty_inline(self.cuisine.as_deref()) {
            new_restaurant = new_restaurant.with_cuisine(cuisine);
        }
        if let Some(logo_url) = nonempty_inline(self.logo_url.as_deref()) {
            new_restaurant = new_restaurant.with_logo_url(logo_url);
        }

        Ok(new_restaurant)
    }
}

/// Payload submitted when updating the owner's restaurant profile.
///
/// Absent fields stay unchanged; an empty string clears the stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRestaurantForm {
    /// Identifier of the restaurant to update.
    #[validate(range(min = 1))]
    pub id: i32,
    /// Optional new name.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    #[validate(length(max = PHONE_MAX_LEN_VALIDATOR))]
    pub phone: Option<String>,
    pub email: Option<String>,
    pub opening_hours: Option<String>,
    #[validate(length(max = CUISINE_MAX_LEN_VALIDATOR))]
    pub cuisine: Option<String>,
    pub logo_url: Option<String>,
}

impl UpdateRestaurantForm {
    /// Validates and sanitizes the payload into an id plus domain patch.
    pub fn into_update_restaurant(self) -> RestaurantFormResult<(i32, UpdateRestaurant)> {
        self.validate()?;

        let mut updates = UpdateRestaurant::new();

        if let Some(name) = self.name {
            let sanitized = sanitize_inline_text(&name);
            if sanitized.is_empty() {
                return Err(RestaurantFormError::EmptyName);
            }
            updates = updates.name(sanitized);
        }

        if let Some(description) = self.description {
            updates = updates.description(nonempty_multiline(Some(&description)));
        }
        if let Some(address) = self.address {
            updates = updates.address(nonempty_inline(Some(&address)));
        }
        if let Some(phone) = self.phone {
            updates = updates.phone(nonempty_inline(Some(&phone)));
        }
        if let Some(email) = self.email {
            updates = updates.email(nonempty_inline(Some(&email)).map(|value| value.to_lowercase()));
        }
        if let Some(opening_hours) = self.opening_hours {
            let trimmed = opening_hours.trim();
            updates = updates.opening_hours(if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            });
        }
        if let Some(cuisine) = self.cuisine {
            updates = updates.cuisine(nonempty_inline(Some(&cuisine)));
        }
        if let Some(logo_url) = self.logo_url {
            updates = updates.logo_url(nonempty_inline(Some(&logo_url)));
        }

        Ok((self.id, updates))
    }
}

fn nonempty_inline(value: Option<&str>) -> Option<String> {
    value
        .map(sanitize_inline_text)
        .filter(|sanitized| !sanitized.is_empty())
}

fn nonempty_multiline(value: Option<&str>) -> Option<String> {
    value
        .map(sanitize_multiline_text)
        .filter(|sanitized| !sanitized.is_empty())
}

fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
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
}

fn sanitize_multiline_text(input: &str) -> String {
    let mut lines: Vec<String> = input.lines().map(sanitize_inline_text).collect();

    while matches!(lines.first(), Some(line) if line.is_empty()) {
        lines.remove(0);
    }

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}
