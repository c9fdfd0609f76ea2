use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a dish on a restaurant's menu.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MenuItem {
    /// Unique identifier of the menu item.
    pub id: i32,
    /// Owning restaurant identifier.
    pub restaurant_id: i32,
    /// Display name of the dish.
    pub name: String,
    /// Optional longer description shown to customers.
    pub description: Option<String>,
    /// Optional menu section, e.g. "Antipasti" or "Dolci".
    pub category: Option<String>,
    /// Price in the smallest currency unit; never negative.
    pub price_cents: i32,
    /// Optional dish photo URL.
    pub image_url: Option<String>,
    /// Whether the dish can currently be ordered.
    pub available: bool,
    /// Allergen labels attached to the dish.
    pub allergens: Vec<String>,
    /// Timestamp for when the menu item was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the menu item.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new menu item.
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    /// Owning restaurant identifier.
    pub restaurant_id: i32,
    /// Display name of the dish.
    pub name: String,
    /// Optional longer description shown to customers.
    pub description: Option<String>,
    /// Optional menu section.
    pub category: Option<String>,
    /// Price in the smallest currency unit; never negative.
    pub price_cents: i32,
    /// Optional dish photo URL.
    pub image_url: Option<String>,
    /// Whether the dish can currently be ordered.
    pub available: bool,
    /// Allergen labels attached to the dish.
    pub allergens: Vec<String>,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewMenuItem {
    /// Build a new, available menu item with the supplied name and price.
    pub fn new(restaurant_id: i32, name: impl Into<String>, price_cents: i32) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            restaurant_id,
            name: name.into(),
            description: None,
            category: None,
            price_cents,
            image_url: None,
            available: true,
            allergens: Vec::new(),
            updated_at: now,
        }
    }

    /// Attach a description to the payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a menu section to the payload.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Attach a dish photo URL to the payload.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Override the default availability flag.
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Attach allergen labels to the payload.
    pub fn with_allergens(mut self, allergens: Vec<String>) -> Self {
        self.allergens = allergens;
        self
    }
}

/// Patch data applied when updating an existing menu item.
///
/// Outer `None` means "leave unchanged"; `Some(None)` clears a stored value.
#[derive(Debug, Clone)]
pub struct UpdateMenuItem {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub price_cents: Option<i32>,
    pub image_url: Option<Option<String>>,
    pub available: Option<bool>,
    pub allergens: Option<Vec<String>>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateMenuItem {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateMenuItem {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            name: None,
            description: None,
            category: None,
            price_cents: None,
            image_url: None,
            available: None,
            allergens: None,
            updated_at: now,
        }
    }

    /// Update the dish name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Update the description, using `None` to clear an existing value.
    pub fn description(mut self, description: Option<impl Into<String>>) -> Self {
        self.description = Some(description.map(|value| value.into()));
        self
    }

    /// Update the menu section, using `None` to clear an existing value.
    pub fn category(mut self, category: Option<impl Into<String>>) -> Self {
        self.category = Some(category.map(|value| value.into()));
        self
    }

    /// Update the price.
    pub fn price_cents(mut self, price_cents: i32) -> Self {
        self.price_cents = Some(price_cents);
        self
    }

    /// Update the photo URL, using `None` to clear an existing value.
    pub fn image_url(mut self, image_url: Option<impl Into<String>>) -> Self {
        self.image_url = Some(image_url.map(|value| value.into()));
        self
    }

    /// Toggle whether the dish can be ordered.
    pub fn available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    /// Replace the allergen labels.
    pub fn allergens(mut self, allergens: Vec<String>) -> Self {
        self.allergens = Some(allergens);
        self
    }
}

/// Query definition used to list menu items for a restaurant.
#[derive(Debug, Clone)]
pub struct MenuItemListQuery {
    /// Owning restaurant identifier.
    pub restaurant_id: i32,
    /// Optional exact category filter.
    pub category: Option<String>,
    /// Whether unavailable dishes should be excluded.
    pub available_only: bool,
}

impl MenuItemListQuery {
    /// Construct a query that targets all menu items of `restaurant_id`.
    pub fn new(restaurant_id: i32) -> Self {
        Self {
            restaurant_id,
            category: None,
            available_only: false,
        }
    }

    /// Filter the results by an exact category match.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Exclude dishes currently marked unavailable.
    pub fn available_only(mut self) -> Self {
        self.available_only = true;
        self
    }
}
