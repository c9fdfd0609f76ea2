use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle states for a table booking.
///
/// Transitions only move forward: a pending booking is confirmed or
/// cancelled, a confirmed booking is completed or cancelled, and the
/// terminal states never change again.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Submitted by a customer, awaiting a decision by the owner.
    Pending,
    /// Accepted by the owner.
    Confirmed,
    /// Rejected or withdrawn; terminal.
    Cancelled,
    /// The party was served; terminal.
    Completed,
}

impl Default for BookingStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Whether moving from `self` to `next` is a legal forward transition.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed)
                | (Self::Pending, Self::Cancelled)
                | (Self::Confirmed, Self::Completed)
                | (Self::Confirmed, Self::Cancelled)
        )
    }
}

impl From<BookingStatus> for &'static str {
    fn from(value: BookingStatus) -> Self {
        value.as_str()
    }
}

impl From<&str> for BookingStatus {
    fn from(value: &str) -> Self {
        match value {
            "confirmed" => Self::Confirmed,
            "cancelled" => Self::Cancelled,
            "completed" => Self::Completed,
            _ => Self::Pending,
        }
    }
}

/// Domain representation of a table booking request.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Booking {
    /// Unique identifier of the booking.
    pub id: i32,
    /// Restaurant the booking was made at.
    pub restaurant_id: i32,
    /// Name supplied by the customer.
    pub customer_name: String,
    /// Optional e-mail supplied by the customer.
    pub customer_email: Option<String>,
    /// Phone number supplied by the customer.
    pub customer_phone: String,
    /// Requested date and time of the visit.
    pub booking_date: NaiveDateTime,
    /// Size of the party.
    pub number_of_guests: i32,
    /// Optional free-form requests from the customer.
    pub special_requests: Option<String>,
    /// Current lifecycle status.
    pub status: BookingStatus,
    /// Timestamp for when the booking was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the booking.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new booking.
///
/// There is deliberately no way to pick a status here: every new booking
/// starts out pending.
#[derive(Debug, Clone)]
pub struct NewBooking {
    /// Restaurant the booking is made at.
    pub restaurant_id: i32,
    /// Name supplied by the customer.
    pub customer_name: String,
    /// Optional e-mail supplied by the customer.
    pub customer_email: Option<String>,
    /// Phone number supplied by the customer.
    pub customer_phone: String,
    /// Requested date and time of the visit.
    pub booking_date: NaiveDateTime,
    /// Size of the party.
    pub number_of_guests: i32,
    /// Optional free-form requests from the customer.
    pub special_requests: Option<String>,
    /// Initial lifecycle status; always pending.
    pub status: BookingStatus,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewBooking {
    /// Build a pending booking payload with the supplied details.
    pub fn new(
        restaurant_id: i32,
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        booking_date: NaiveDateTime,
        number_of_guests: i32,
    ) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            restaurant_id,
            customer_name: customer_name.into(),
            customer_email: None,
            customer_phone: customer_phone.into(),
            booking_date,
            number_of_guests,
            special_requests: None,
            status: BookingStatus::Pending,
            updated_at: now,
        }
    }

    /// Attach a customer e-mail address to the payload.
    pub fn with_customer_email(mut self, customer_email: impl Into<String>) -> Self {
        self.customer_email = Some(customer_email.into());
        self
    }

    /// Attach free-form customer requests to the payload.
    pub fn with_special_requests(mut self, special_requests: impl Into<String>) -> Self {
        self.special_requests = Some(special_requests.into());
        self
    }
}

/// Patch data applied when updating an existing booking.
#[derive(Debug, Clone)]
pub struct UpdateBooking {
    /// Optional status update.
    pub status: Option<BookingStatus>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateBooking {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateBooking {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            status: None,
            updated_at: now,
        }
    }

    /// Update the booking status.
    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Query definition used to list bookings for a restaurant.
#[derive(Debug, Clone)]
pub struct BookingListQuery {
    /// Owning restaurant identifier.
    pub restaurant_id: i32,
    /// Optional status filter.
    pub status: Option<BookingStatus>,
}

impl BookingListQuery {
    /// Construct a query that targets all bookings of `restaurant_id`.
    pub fn new(restaurant_id: i32) -> Self {
        Self {
            restaurant_id,
            status: None,
        }
    }

    /// Filter the results by the provided status.
    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = Some(status);
        self
    }
}
