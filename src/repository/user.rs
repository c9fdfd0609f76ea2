use diesel::prelude::*;

use crate::domain::user::{UpsertUser as DomainUpsertUser, User as DomainUser};
use crate::models::user::{NewUser as DbNewUser, RefreshUser as DbRefreshUser, User as DbUser};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, UserReader, UserWriter};

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::users;

        let Some(mut conn) = self.read_conn()? else {
            return Ok(None);
        };

        let user = users::table
            .filter(users::id.eq(id))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }

    fn get_user_by_open_id(&self, open_id: &str) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::users;

        let Some(mut conn) = self.read_conn()? else {
            return Ok(None);
        };

        let user = users::table
            .filter(users::open_id.eq(open_id))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }
}

impl UserWriter for DieselRepository {
    fn upsert_user(&self, user: &DomainUpsertUser) -> RepositoryResult<DomainUser> {
        use crate::schema::users;

        let mut conn = self.write_conn()?;

        diesel::insert_into(users::table)
            .values(&DbNewUser::from(user))
            .on_conflict(users::open_id)
            .do_update()
            .set(&DbRefreshUser::from(user))
            .execute(&mut conn)?;

        let row = users::table
            .filter(users::open_id.eq(user.open_id.as_str()))
            .first::<DbUser>(&mut conn)?;

        Ok(row.into())
    }
}
