use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::booking::{BookingStatus, NewBooking};

/// Maximum allowed length for a customer name.
const NAME_MAX_LEN: usize = 255;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Maximum allowed length for a phone number.
const PHONE_MAX_LEN_VALIDATOR: u64 = 50;

/// Largest party size accepted without talking to the restaurant first.
const MAX_GUESTS: i32 = 50;

/// Result type returned by the booking form helpers.
pub type BookingFormResult<T> = Result<T, BookingFormError>;

/// Errors that can occur while processing booking forms.
#[derive(Debug, Error)]
pub enum BookingFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided customer name is empty after sanitization.
    #[error("customer name cannot be empty")]
    EmptyCustomerName,
    /// The provided phone number is empty after sanitization.
    #[error("customer phone cannot be empty")]
    EmptyCustomerPhone,
}

/// Payload submitted by an anonymous customer requesting a table.
///
/// There is no status field: whatever the caller might claim, a new
/// booking always starts out pending.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingForm {
    /// Restaurant the booking is made at.
    #[validate(range(min = 1))]
    pub restaurant_id: i32,
    /// Name supplied by the customer.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub customer_name: String,
    /// Optional e-mail supplied by the customer.
    #[validate(email)]
    pub customer_email: Option<String>,
    /// Phone number supplied by the customer.
    #[validate(length(min = 1, max = PHONE_MAX_LEN_VALIDATOR))]
    pub customer_phone: String,
    /// Requested date and time of the visit.
    pub booking_date: NaiveDateTime,
    /// Size of the party.
    #[validate(range(min = 1, max = MAX_GUESTS))]
    pub number_of_guests: i32,
    /// Optional free-form requests from the customer.
    pub special_requests: Option<String>,
}

impl CreateBookingForm {
    /// Validates and sanitizes the payload into a domain `NewBooking`.
    pub fn into_new_booking(self) -> BookingFormResult<NewBooking> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.customer_name);
        if sanitized_name.is_empty() {
            return Err(BookingFormError::EmptyCustomerName);
        }

        let sanitized_phone = sanitize_inline_text(&self.customer_phone);
        if sanitized_phone.is_empty() {
            return Err(BookingFormError::EmptyCustomerPhone);
        }

        let mut new_booking = NewBooking::new(
            self.restaurant_id,
            sanitized_name,
            sanitized_phone,
            self.booking_date,
            self.number_of_guests,
        );

        if let Some(email) = self
            .customer_email
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            new_booking = new_booking.with_customer_email(email.to_lowercase());
        }

        if let Some(special_requests) = self
            .special_requests
            .as_deref()
            .map(sanitize_inline_text)
            .filter(|value| !value.is_empty())
        {
            new_booking = new_booking.with_special_requests(special_requests);
        }

        Ok(new_booking)
    }
}

/// Payload submitted by the owner when transitioning a booking.
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusForm {
    /// Target lifecycle status.
    pub status: BookingStatus,
}

fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}
