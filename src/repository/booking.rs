use diesel::prelude::*;

use crate::domain::booking::{
    Booking as DomainBooking, BookingListQuery, NewBooking as DomainNewBooking,
    UpdateBooking as DomainUpdateBooking,
};
use crate::models::booking::{
    Booking as DbBooking, NewBooking as DbNewBooking, UpdateBooking as DbUpdateBooking,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{BookingReader, BookingWriter, DieselRepository};

impl BookingReader for DieselRepository {
    fn get_booking_by_id(
        &self,
        id: i32,
        restaurant_id: i32,
    ) -> RepositoryResult<Option<DomainBooking>> {
        use crate::schema::bookings;

        let Some(mut conn) = self.read_conn()? else {
            return Ok(None);
        };

        let booking = bookings::table
            .filter(bookings::id.eq(id))
            .filter(bookings::restaurant_id.eq(restaurant_id))
            .first::<DbBooking>(&mut conn)
            .optional()?;

        Ok(booking.map(Into::into))
    }

    fn list_bookings(&self, query: BookingListQuery) -> RepositoryResult<Vec<DomainBooking>> {
        use crate::schema::bookings;

        let Some(mut conn) = self.read_conn()? else {
            return Ok(Vec::new());
        };

        let mut items = bookings::table
            .filter(bookings::restaurant_id.eq(query.restaurant_id))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(status) = query.status {
            items = items.filter(bookings::status.eq(status.as_str()));
        }

        let rows = items
            .order(bookings::booking_date.desc())
            .load::<DbBooking>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl BookingWriter for DieselRepository {
    fn create_booking(&self, new_booking: &DomainNewBooking) -> RepositoryResult<DomainBooking> {
        use crate::schema::bookings;

        let mut conn = self.write_conn()?;

        let created = diesel::insert_into(bookings::table)
            .values(&DbNewBooking::from(new_booking))
            .get_result::<DbBooking>(&mut conn)?;

        Ok(created.into())
    }

    fn update_booking(
        &self,
        booking_id: i32,
        restaurant_id: i32,
        updates: &DomainUpdateBooking,
    ) -> RepositoryResult<DomainBooking> {
        use crate::schema::bookings;

        let mut conn = self.write_conn()?;

        let target = bookings::table
            .filter(bookings::id.eq(booking_id))
            .filter(bookings::restaurant_id.eq(restaurant_id));

        let updated = diesel::update(target)
            .set(&DbUpdateBooking::from(updates))
            .get_result::<DbBooking>(&mut conn)?;

        Ok(updated.into())
    }
}
