use crate::auth::AuthenticatedUser;
use crate::domain::restaurant::Restaurant;
use crate::forms::restaurant::{CreateRestaurantForm, UpdateRestaurantForm};
use crate::repository::{RestaurantReader, RestaurantWriter};
use crate::services::{ServiceError, ServiceResult, owned_restaurant};

/// Load the acting user's restaurant profile, if one exists.
pub fn get_restaurant<R>(
    repo: &R,
    user: &AuthenticatedUser,
) -> ServiceResult<Option<Restaurant>>
where
    R: RestaurantReader + ?Sized,
{
    repo.get_restaurant_by_user_id(user.id)
        .map_err(ServiceError::from)
}

/// Create the acting user's restaurant; each owner gets exactly one.
pub fn create_restaurant<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: CreateRestaurantForm,
) -> ServiceResult<Restaurant>
where
    R: RestaurantReader + RestaurantWriter + ?Sized,
{
    if repo.get_restaurant_by_user_id(user.id)?.is_some() {
        return Err(ServiceError::Conflict);
    }

    let new_restaurant = form
        .into_new_restaurant(user.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_restaurant(&new_restaurant)
        .map_err(ServiceError::from)
}

/// Apply a partial update to the acting user's restaurant.
///
/// The referenced id must match the restaurant the user owns; anything
/// else is rejected before any write happens.
pub fn update_restaurant<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: UpdateRestaurantForm,
) -> ServiceResult<Restaurant>
where
    R: RestaurantReader + RestaurantWriter + ?Sized,
{
    let (restaurant_id, updates) = form
        .into_update_restaurant()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let owned = owned_restaurant(repo, user)?;
    if owned.id != restaurant_id {
        return Err(ServiceError::Forbidden);
    }

    repo.update_restaurant(restaurant_id, user.id, &updates)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::repository::mock::MockRestaurantStore;

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
            cuisine: Some("italiana".to_string()),
            logo_url: None,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    #[test]
    fn create_restaurant_rejects_second_restaurant() {
        let mut repo = MockRestaurantStore::new();
        let user = AuthenticatedUser { id: 5 };

        repo.expect_get_restaurant_by_user_id()
            .times(1)
            .returning(|user_id| Ok(Some(sample_restaurant(11, user_id))));

        let form = CreateRestaurantForm {
            name: "Another".to_string(),
            description: None,
            address: None,
            phone: None,
            email: None,
            opening_hours: None,
            cuisine: None,
            logo_url: None,
        };

        let result = create_restaurant(&repo, &user, form);
        assert!(matches!(result, Err(ServiceError::Conflict)));
    }

    #[test]
    fn update_restaurant_rejects_foreign_restaurant() {
        let mut repo = MockRestaurantStore::new();
        let user = AuthenticatedUser { id: 5 };

        repo.expect_get_restaurant_by_user_id()
            .times(1)
            .returning(|user_id| Ok(Some(sample_restaurant(11, user_id))));
        // No update expectation: a forbidden request must not reach the
        // writer at all.

        let form = UpdateRestaurantForm {
            id: 99,
            name: Some("Hijacked".to_string()),
            description: None,
            address: None,
            phone: None,
            email: None,
            opening_hours: None,
            cuisine: None,
            logo_url: None,
        };

        let result = update_restaurant(&repo, &user, form);
        assert!(matches!(result, Err(ServiceError::Forbidden)));
    }

    #[test]
    fn update_restaurant_requires_an_existing_restaurant() {
        let mut repo = MockRestaurantStore::new();
        let user = AuthenticatedUser { id: 5 };

        repo.expect_get_restaurant_by_user_id()
            .times(1)
            .returning(|_| Ok(None));

        let form = UpdateRestaurantForm {
            id: 1,
            name: Some("Ghost".to_string()),
            description: None,
            address: None,
            phone: None,
            email: None,
            opening_hours: None,
            cuisine: None,
            logo_url: None,
        };

        let result = update_restaurant(&repo, &user, form);
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
