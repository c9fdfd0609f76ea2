use serde::Deserialize;

use crate::auth::AuthenticatedUser;
use crate::domain::menu_item::{MenuItem, MenuItemListQuery};
use crate::forms::menu::{AddMenuItemForm, EditMenuItemForm, UploadMenuForm};
use crate::repository::{MenuItemReader, MenuItemWriter, RestaurantReader};
use crate::services::{ServiceError, ServiceResult, owned_restaurant};

/// Query parameters accepted by the menu listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    /// Optional exact category filter.
    pub category: Option<String>,
    /// When true, only dishes currently marked available are returned.
    #[serde(default)]
    pub available: bool,
}

/// List the menu of the acting user's restaurant.
pub fn list_menu<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: MenuQuery,
) -> ServiceResult<Vec<MenuItem>>
where
    R: RestaurantReader + MenuItemReader + ?Sized,
{
    let restaurant = owned_restaurant(repo, user)?;

    let mut list_query = MenuItemListQuery::new(restaurant.id);
    if let Some(category) = query.category {
        list_query = list_query.category(category);
    }
    if query.available {
        list_query = list_query.available_only();
    }

    repo.list_menu_items(list_query).map_err(ServiceError::from)
}

/// Add a dish to the acting user's menu.
pub fn create_menu_item<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddMenuItemForm,
) -> ServiceResult<MenuItem>
where
    R: RestaurantReader + MenuItemWriter + ?Sized,
{
    let restaurant = owned_restaurant(repo, user)?;

    let new_item = form
        .into_new_menu_item(restaurant.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_menu_item(&new_item).map_err(ServiceError::from)
}

/// Apply a partial update to one dish of the acting user's menu.
pub fn modify_menu_item<R>(
    repo: &R,
    user: &AuthenticatedUser,
    item_id: i32,
    form: EditMenuItemForm,
) -> ServiceResult<MenuItem>
where
    R: RestaurantReader + MenuItemWriter + ?Sized,
{
    let restaurant = owned_restaurant(repo, user)?;

    let updates = form
        .into_update_menu_item()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_menu_item(item_id, restaurant.id, &updates)
        .map_err(ServiceError::from)
}

/// Remove a dish from the acting user's menu.
pub fn remove_menu_item<R>(
    repo: &R,
    user: &AuthenticatedUser,
    item_id: i32,
) -> ServiceResult<()>
where
    R: RestaurantReader + MenuItemWriter + ?Sized,
{
    let restaurant = owned_restaurant(repo, user)?;

    repo.delete_menu_item(item_id, restaurant.id)
        .map_err(ServiceError::from)
}

/// Import dishes from an uploaded CSV file into the acting user's menu.
pub fn import_menu_items<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &mut UploadMenuForm,
) -> ServiceResult<usize>
where
    R: RestaurantReader + MenuItemWriter + ?Sized,
{
    let restaurant = owned_restaurant(repo, user)?;

    let new_items = form
        .into_new_menu_items(restaurant.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_menu_items(&new_items)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::restaurant::Restaurant;
    use crate::repository::mock::MockMenuStore;

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .and_then(|date| date.and_hms_opt(9, 0, 0))
            .unwrap_or_default()
    }

    fn sample_restaurant(id: i32, user_id: i32) -> Restaurant {
        Restaurant {
            id,
            user_id,
            name: "Trattoria da Carla".to_string(),
            description: None,
            address: None,
            phone: None,
            email: None,
            opening_hours: None,
            cuisine: None,
            logo_url: None,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    #[test]
    fn list_menu_requires_a_restaurant() {
        let mut repo = MockMenuStore::new();
        let user = AuthenticatedUser { id: 4 };

        repo.expect_get_restaurant_by_user_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = list_menu(&repo, &user, MenuQuery::default());
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn list_menu_scopes_query_to_owned_restaurant() {
        let mut repo = MockMenuStore::new();
        let user = AuthenticatedUser { id: 4 };

        repo.expect_get_restaurant_by_user_id()
            .times(1)
            .returning(|user_id| Ok(Some(sample_restaurant(9, user_id))));

        repo.expect_list_menu_items()
            .times(1)
            .withf(|query| {
                assert_eq!(query.restaurant_id, 9);
                assert_eq!(query.category.as_deref(), Some("Dolci"));
                assert!(query.available_only);
                true
            })
            .returning(|_| Ok(Vec::new()));

        let query = MenuQuery {
            category: Some("Dolci".to_string()),
            available: true,
        };

        let items = list_menu(&repo, &user, query).expect("listing succeeds");
        assert!(items.is_empty());
    }

    #[test]
    fn modify_menu_item_scopes_update_to_owned_restaurant() {
        let mut repo = MockMenuStore::new();
        let user = AuthenticatedUser { id: 4 };

        repo.expect_get_restaurant_by_user_id()
            .times(1)
            .returning(|user_id| Ok(Some(sample_restaurant(9, user_id))));

        repo.expect_update_menu_item()
            .times(1)
            .withf(|item_id, restaurant_id, updates| {
                assert_eq!(*item_id, 31);
                assert_eq!(*restaurant_id, 9);
                assert_eq!(updates.price_cents, Some(1550));
                true
            })
            .returning(|item_id, restaurant_id, _| {
                Ok(MenuItem {
                    id: item_id,
                    restaurant_id,
                    name: "Tiramisù".to_string(),
                    description: None,
                    category: Some("Dolci".to_string()),
                    price_cents: 1550,
                    image_url: None,
                    available: true,
                    allergens: Vec::new(),
                    created_at: fixed_datetime(),
                    updated_at: fixed_datetime(),
                })
            });

        let form = EditMenuItemForm {
            name: None,
            description: None,
            category: None,
            price_cents: Some(1550),
            image_url: None,
            available: None,
            allergens: None,
        };

        let item = modify_menu_item(&repo, &user, 31, form).expect("update succeeds");
        assert_eq!(item.price_cents, 1550);
    }
}
