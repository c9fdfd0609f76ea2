use diesel::prelude::*;

use crate::domain::menu_item::{
    MenuItem as DomainMenuItem, MenuItemListQuery, NewMenuItem as DomainNewMenuItem,
    UpdateMenuItem as DomainUpdateMenuItem,
};
use crate::models::menu_item::{
    MenuItem as DbMenuItem, NewMenuItem as DbNewMenuItem, UpdateMenuItem as DbUpdateMenuItem,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, MenuItemReader, MenuItemWriter};

impl MenuItemReader for DieselRepository {
    fn get_menu_item_by_id(
        &self,
        id: i32,
        restaurant_id: i32,
    ) -> RepositoryResult<Option<DomainMenuItem>> {
        use crate::schema::menu_items;

        let Some(mut conn) = self.read_conn()? else {
            return Ok(None);
        };

        let item = menu_items::table
            .filter(menu_items::id.eq(id))
            .filter(menu_items::restaurant_id.eq(restaurant_id))
            .first::<DbMenuItem>(&mut conn)
            .optional()?;

        Ok(item.map(Into::into))
    }

    fn list_menu_items(&self, query: MenuItemListQuery) -> RepositoryResult<Vec<DomainMenuItem>> {
        use crate::schema::menu_items;

        let Some(mut conn) = self.read_conn()? else {
            return Ok(Vec::new());
        };

        let mut items = menu_items::table
            .filter(menu_items::restaurant_id.eq(query.restaurant_id))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category) = query.category.as_ref() {
            items = items.filter(menu_items::category.eq(category));
        }

        if query.available_only {
            items = items.filter(menu_items::available.eq(true));
        }

        let rows = items
            .order((menu_items::category.asc(), menu_items::name.asc()))
            .load::<DbMenuItem>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl MenuItemWriter for DieselRepository {
    fn create_menu_item(&self, new_item: &DomainNewMenuItem) -> RepositoryResult<DomainMenuItem> {
        use crate::schema::menu_items;

        let mut conn = self.write_conn()?;

        let created = diesel::insert_into(menu_items::table)
            .values(&DbNewMenuItem::from(new_item))
            .get_result::<DbMenuItem>(&mut conn)?;

        Ok(created.into())
    }

    fn create_menu_items(&self, new_items: &[DomainNewMenuItem]) -> RepositoryResult<usize> {
        use crate::schema::menu_items;

        let mut conn = self.write_conn()?;

        let rows: Vec<DbNewMenuItem> = new_items.iter().map(Into::into).collect();
        let inserted = diesel::insert_into(menu_items::table)
            .values(&rows)
            .execute(&mut conn)?;

        Ok(inserted)
    }

    fn update_menu_item(
        &self,
        item_id: i32,
        restaurant_id: i32,
        updates: &DomainUpdateMenuItem,
    ) -> RepositoryResult<DomainMenuItem> {
        use crate::schema::menu_items;

        let mut conn = self.write_conn()?;

        let target = menu_items::table
            .filter(menu_items::id.eq(item_id))
            .filter(menu_items::restaurant_id.eq(restaurant_id));

        let updated = diesel::update(target)
            .set(&DbUpdateMenuItem::from(updates))
            .get_result::<DbMenuItem>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_menu_item(&self, item_id: i32, restaurant_id: i32) -> RepositoryResult<()> {
        use crate::schema::menu_items;

        let mut conn = self.write_conn()?;

        let target = menu_items::table
            .filter(menu_items::id.eq(item_id))
            .filter(menu_items::restaurant_id.eq(restaurant_id));

        let deleted = diesel::delete(target).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
