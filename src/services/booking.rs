use serde::Deserialize;

use crate::auth::AuthenticatedUser;
use crate::domain::booking::{Booking, BookingListQuery, BookingStatus, UpdateBooking};
use crate::forms::booking::{CreateBookingForm, UpdateBookingStatusForm};
use crate::repository::{BookingReader, BookingWriter, RestaurantReader};
use crate::services::{ServiceError, ServiceResult, owned_restaurant};

/// Query parameters accepted by the bookings listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct BookingsQuery {
    /// Optional status filter.
    pub status: Option<BookingStatus>,
}

/// List bookings of the acting user's restaurant, most imminent first.
pub fn list_bookings<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: BookingsQuery,
) -> ServiceResult<Vec<Booking>>
where
    R: RestaurantReader + BookingReader + ?Sized,
{
    let restaurant = owned_restaurant(repo, user)?;

    let mut list_query = BookingListQuery::new(restaurant.id);
    if let Some(status) = query.status {
        list_query = list_query.status(status);
    }

    repo.list_bookings(list_query).map_err(ServiceError::from)
}

/// Record a booking request from an anonymous customer.
///
/// The referenced restaurant must exist; the booking always starts out
/// pending no matter what the caller supplied.
pub fn create_booking<R>(repo: &R, form: CreateBookingForm) -> ServiceResult<Booking>
where
    R: RestaurantReader + BookingWriter + ?Sized,
{
    let new_booking = form
        .into_new_booking()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo
        .get_restaurant_by_id(new_booking.restaurant_id)?
        .is_none()
    {
        return Err(ServiceError::NotFound);
    }

    repo.create_booking(&new_booking).map_err(ServiceError::from)
}

/// Move a booking of the acting user's restaurant to a new status.
///
/// Transitions only go forward; anything else is rejected before any
/// write happens.
pub fn update_booking_status<R>(
    repo: &R,
    user: &AuthenticatedUser,
    booking_id: i32,
    form: UpdateBookingStatusForm,
) -> ServiceResult<Booking>
where
    R: RestaurantReader + BookingReader + BookingWriter + ?Sized,
{
    let restaurant = owned_restaurant(repo, user)?;

    let booking = repo
        .get_booking_by_id(booking_id, restaurant.id)?
        .ok_or(ServiceError::NotFound)?;

    if !booking.status.can_transition_to(form.status) {
        return Err(ServiceError::Form(format!(
            "booking cannot move from {} to {}",
            booking.status.as_str(),
            form.status.as_str()
        )));
    }

    let updates = UpdateBooking::new().status(form.status);
    repo.update_booking(booking_id, restaurant.id, &updates)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::restaurant::Restaurant;
    use crate::repository::mock::MockBookingStore;

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 12)
            .and_then(|date| date.and_hms_opt(19, 30, 0))
            .unwrap_or_default()
    }

    fn sample_restaurant(id: i32, user_id: i32) -> Restaurant {
        Restaurant {
            id,
            user_id,
            name: "Osteria del Porto".to_string(),
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

    fn sample_booking(id: i32, restaurant_id: i32, status: BookingStatus) -> Booking {
        Booking {
            id,
            restaurant_id,
            customer_name: "Maria Rossi".to_string(),
            customer_email: None,
            customer_phone: "+39 333 1234567".to_string(),
            booking_date: fixed_datetime(),
            number_of_guests: 4,
            special_requests: None,
            status,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    fn booking_form() -> CreateBookingForm {
        CreateBookingForm {
            restaurant_id: 3,
            customer_name: "Maria Rossi".to_string(),
            customer_email: None,
            customer_phone: "+39 333 1234567".to_string(),
            booking_date: fixed_datetime(),
            number_of_guests: 4,
            special_requests: None,
        }
    }

    #[test]
    fn create_booking_always_persists_pending() {
        let mut repo = MockBookingStore::new();

        repo.expect_get_restaurant_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_restaurant(id, 1))));

        repo.expect_create_booking()
            .times(1)
            .withf(|new_booking| new_booking.status == BookingStatus::Pending)
            .returning(|new_booking| {
                Ok(sample_booking(
                    77,
                    new_booking.restaurant_id,
                    new_booking.status,
                ))
            });

        let booking = create_booking(&repo, booking_form()).expect("booking succeeds");
        assert_eq!(booking.status, BookingStatus::Pending);
    }

    #[test]
    fn create_booking_rejects_unknown_restaurant() {
        let mut repo = MockBookingStore::new();

        repo.expect_get_restaurant_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = create_booking(&repo, booking_form());
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn update_booking_status_rejects_backward_transition() {
        let mut repo = MockBookingStore::new();
        let user = AuthenticatedUser { id: 1 };

        repo.expect_get_restaurant_by_user_id()
            .times(1)
            .returning(|user_id| Ok(Some(sample_restaurant(3, user_id))));

        repo.expect_get_booking_by_id()
            .times(1)
            .returning(|id, restaurant_id| {
                Ok(Some(sample_booking(
                    id,
                    restaurant_id,
                    BookingStatus::Completed,
                )))
            });
        // No update expectation: illegal transitions must not reach the
        // writer.

        let form = UpdateBookingStatusForm {
            status: BookingStatus::Pending,
        };

        let result = update_booking_status(&repo, &user, 77, form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn update_booking_status_confirms_pending_booking() {
        let mut repo = MockBookingStore::new();
        let user = AuthenticatedUser { id: 1 };

        repo.expect_get_restaurant_by_user_id()
            .times(1)
            .returning(|user_id| Ok(Some(sample_restaurant(3, user_id))));

        repo.expect_get_booking_by_id()
            .times(1)
            .returning(|id, restaurant_id| {
                Ok(Some(sample_booking(
                    id,
                    restaurant_id,
                    BookingStatus::Pending,
                )))
            });

        repo.expect_update_booking()
            .times(1)
            .withf(|booking_id, restaurant_id, updates| {
                assert_eq!(*booking_id, 77);
                assert_eq!(*restaurant_id, 3);
                assert_eq!(updates.status, Some(BookingStatus::Confirmed));
                true
            })
            .returning(|booking_id, restaurant_id, _| {
                Ok(sample_booking(
                    booking_id,
                    restaurant_id,
                    BookingStatus::Confirmed,
                ))
            });

        let form = UpdateBookingStatusForm {
            status: BookingStatus::Confirmed,
        };

        let booking =
            update_booking_status(&repo, &user, 77, form).expect("transition succeeds");
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }
}
