use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a restaurant profile owned by one user.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Restaurant {
    /// Unique identifier of the restaurant.
    pub id: i32,
    /// Identifier of the owning user.
    pub user_id: i32,
    /// Display name of the restaurant.
    pub name: String,
    /// Optional longer description shown to customers.
    pub description: Option<String>,
    /// Optional street address.
    pub address: Option<String>,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Optional contact e-mail address.
    pub email: Option<String>,
    /// Opaque serialized weekly schedule.
    pub opening_hours: Option<String>,
    /// Optional cuisine label.
    pub cuisine: Option<String>,
    /// Optional logo image URL.
    pub logo_url: Option<String>,
    /// Timestamp for when the restaurant record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the restaurant record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new restaurant for a user.
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    /// Identifier of the owning user.
    pub user_id: i32,
    /// Display name of the restaurant.
    pub name: String,
    /// Optional longer description shown to customers.
    pub description: Option<String>,
    /// Optional street address.
    pub address: Option<String>,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Optional contact e-mail address.
    pub email: Option<String>,
    /// Opaque serialized weekly schedule.
    pub opening_hours: Option<String>,
    /// Optional cuisine label.
    pub cuisine: Option<String>,
    /// Optional logo image URL.
    pub logo_url: Option<String>,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewRestaurant {
    /// Build a new restaurant payload with the supplied owner and name.
    pub fn new(user_id: i32, name: impl Into<String>) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            user_id,
            name: name.into(),
            description: None,
            address: None,
            phone: None,
            email: None,
            opening_hours: None,
            cuisine: None,
            logo_url: None,
            updated_at: now,
        }
    }

    /// Attach a description to the payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a street address to the payload.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Attach a contact phone number to the payload.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Attach a contact e-mail address to the payload.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Attach a serialized opening-hours schedule to the payload.
    pub fn with_opening_hours(mut self, opening_hours: impl Into<String>) -> Self {
        self.opening_hours = Some(opening_hours.into());
        self
    }

    /// Attach a cuisine label to the payload.
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Attach a logo URL to the payload.
    pub fn with_logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }
}

/// Patch data applied when updating an existing restaurant.
///
/// Outer `None` means "leave unchanged"; `Some(None)` clears a stored value.
#[derive(Debug, Clone)]
pub struct UpdateRestaurant {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub opening_hours: Option<Option<String>>,
    pub cuisine: Option<Option<String>>,
    pub logo_url: Option<Option<String>>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateRestaurant {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateRestaurant {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            name: None,
            description: None,
            address: None,
            phone: None,
            email: None,
            opening_hours: None,
            cuisine: None,
            logo_url: None,
            updated_at: now,
        }
    }

    /// Update the restaurant name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Update the description, using `None` to clear an existing value.
    pub fn description(mut self, description: Option<impl Into<String>>) -> Self {
        self.description = Some(description.map(|value| value.into()));
        self
    }

    /// Update the street address, using `None` to clear an existing value.
    pub fn address(mut self, address: Option<impl Into<String>>) -> Self {
        self.address = Some(address.map(|value| value.into()));
        self
    }

    /// Update the phone number, using `None` to clear an existing value.
    pub fn phone(mut self, phone: Option<impl Into<String>>) -> Self {
        self.phone = Some(phone.map(|value| value.into()));
        self
    }

    /// Update the e-mail address, using `None` to clear an existing value.
    pub fn email(mut self, email: Option<impl Into<String>>) -> Self {
        self.email = Some(email.map(|value| value.into()));
        self
    }

    /// Update the schedule, using `None` to clear an existing value.
    pub fn opening_hours(mut self, opening_hours: Option<impl Into<String>>) -> Self {
        self.opening_hours = Some(opening_hours.map(|value| value.into()));
        self
    }

    /// Update the cuisine label, using `None` to clear an existing value.
    pub fn cuisine(mut self, cuisine: Option<impl Into<String>>) -> Self {
        self.cuisine = Some(cuisine.map(|value| value.into()));
        self
    }

    /// Update the logo URL, using `None` to clear an existing value.
    pub fn logo_url(mut self, logo_url: Option<impl Into<String>>) -> Self {
        self.logo_url = Some(logo_url.map(|value| value.into()));
        self
    }
}
