use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::booking::{
    Booking as DomainBooking, NewBooking as DomainNewBooking,
    UpdateBooking as DomainUpdateBooking,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::bookings)]
pub struct Booking {
    pub id: i32,
    pub restaurant_id: i32,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: String,
    pub booking_date: NaiveDateTime,
    pub number_of_guests: i32,
    pub special_requests: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::bookings)]
pub struct NewBooking<'a> {
    pub restaurant_id: i32,
    pub customer_name: &'a str,
    pub customer_email: Option<&'a str>,
    pub customer_phone: &'a str,
    pub booking_date: NaiveDateTime,
    pub number_of_guests: i32,
    pub special_requests: Option<&'a str>,
    pub status: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::bookings)]
pub struct UpdateBooking<'a> {
    pub status: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Booking> for DomainBooking {
    fn from(value: Booking) -> Self {
        Self {
            id: value.id,
            restaurant_id: value.restaurant_id,
            customer_name: value.customer_name,
            customer_email: value.customer_email,
            customer_phone: value.customer_phone,
            booking_date: value.booking_date,
            number_of_guests: value.number_of_guests,
            special_requests: value.special_requests,
            status: value.status.as_str().into(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewBooking> for NewBooking<'a> {
    fn from(value: &'a DomainNewBooking) -> Self {
        Self {
            restaurant_id: value.restaurant_id,
            customer_name: value.customer_name.as_str(),
            customer_email: value.customer_email.as_deref(),
            customer_phone: value.customer_phone.as_str(),
            booking_date: value.booking_date,
            number_of_guests: value.number_of_guests,
            special_requests: value.special_requests.as_deref(),
            status: value.status.into(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateBooking> for UpdateBooking<'a> {
    fn from(value: &'a DomainUpdateBooking) -> Self {
        Self {
            status: value.status.map(|status| status.into()),
            updated_at: value.updated_at,
        }
    }
}
