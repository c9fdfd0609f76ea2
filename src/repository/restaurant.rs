use diesel::prelude::*;

use crate::domain::restaurant::{
    NewRestaurant as DomainNewRestaurant, Restaurant as DomainRestaurant,
    UpdateRestaurant as DomainUpdateRestaurant,
};
use crate::models::restaurant::{
    NewRestaurant as DbNewRestaurant, Restaurant as DbRestaurant,
    UpdateRestaurant as DbUpdateRestaurant,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, RestaurantReader, RestaurantWriter};

impl RestaurantReader for DieselRepository {
    fn get_restaurant_by_id(&self, id: i32) -> RepositoryResult<Option<DomainRestaurant>> {
        use crate::schema::restaurants;

        let Some(mut conn) = self.read_conn()? else {
            return Ok(None);
        };

        let restaurant = restaurants::table
            .filter(restaurants::id.eq(id))
            .first::<DbRestaurant>(&mut conn)
            .optional()?;

        Ok(restaurant.map(Into::into))
    }

    fn get_restaurant_by_user_id(
        &self,
        user_id: i32,
    ) -> RepositoryResult<Option<DomainRestaurant>> {
        use crate::schema::restaurants;

        let Some(mut conn) = self.read_conn()? else {
            return Ok(None);
        };

        let restaurant = restaurants::table
            .filter(restaurants::user_id.eq(user_id))
            .first::<DbRestaurant>(&mut conn)
            .optional()?;

        Ok(restaurant.map(Into::into))
    }
}

impl RestaurantWriter for DieselRepository {
    fn create_restaurant(
        &self,
        new_restaurant: &DomainNewRestaurant,
    ) -> RepositoryResult<DomainRestaurant> {
        use crate::schema::restaurants;

        let mut conn = self.write_conn()?;

        let created = diesel::insert_into(restaurants::table)
            .values(&DbNewRestaurant::from(new_restaurant))
            .get_result::<DbRestaurant>(&mut conn)?;

        Ok(created.into())
    }

    fn update_restaurant(
        &self,
        restaurant_id: i32,
        user_id: i32,
        updates: &DomainUpdateRestaurant,
    ) -> RepositoryResult<DomainRestaurant> {
        use crate::schema::restaurants;

        let mut conn = self.write_conn()?;

        let target = restaurants::table
            .filter(restaurants::id.eq(restaurant_id))
            .filter(restaurants::user_id.eq(user_id));

        let updated = diesel::update(target)
            .set(&DbUpdateRestaurant::from(updates))
            .get_result::<DbRestaurant>(&mut conn)?;

        Ok(updated.into())
    }
}
