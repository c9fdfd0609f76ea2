use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::auth::AuthenticatedUser;
use crate::domain::analytics::{AnalyticsListQuery, AnalyticsMetric};
use crate::domain::booking::{BookingListQuery, BookingStatus};
use crate::domain::chat::{ConversationListQuery, ConversationStatus};
use crate::domain::menu_item::MenuItemListQuery;
use crate::repository::{AnalyticsReader, BookingReader, ChatReader, MenuItemReader, RestaurantReader};
use crate::services::{ServiceError, ServiceResult, owned_restaurant};

/// Query parameters accepted by the ranged analytics endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    /// Optional inclusive lower bound on the metric date.
    pub start: Option<NaiveDateTime>,
    /// Optional inclusive upper bound on the metric date.
    pub end: Option<NaiveDateTime>,
}

/// Booking counters shown on the dashboard.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct BookingStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
}

/// Conversation counters shown on the dashboard.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ConversationStats {
    pub total: usize,
    pub active: usize,
}

/// Menu counters shown on the dashboard.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MenuStats {
    pub total: usize,
    pub available: usize,
}

/// Aggregated counters for the owner dashboard.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub bookings: BookingStats,
    pub conversations: ConversationStats,
    pub menu: MenuStats,
}

/// List recorded metrics of the acting user's restaurant, most recent
/// first, optionally bounded to a date range.
pub fn list_metrics<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: AnalyticsQuery,
) -> ServiceResult<Vec<AnalyticsMetric>>
where
    R: RestaurantReader + AnalyticsReader + ?Sized,
{
    let restaurant = owned_restaurant(repo, user)?;

    let mut list_query = AnalyticsListQuery::new(restaurant.id);
    if let Some(start) = query.start {
        list_query = list_query.starting(start);
    }
    if let Some(end) = query.end {
        list_query = list_query.ending(end);
    }

    repo.list_metrics(list_query).map_err(ServiceError::from)
}

/// Compute the dashboard counters from the restaurant's collections.
///
/// The lists involved stay small, so counting happens here rather than in
/// the database.
pub fn dashboard_stats<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<DashboardStats>
where
    R: RestaurantReader + BookingReader + ChatReader + MenuItemReader + ?Sized,
{
    let restaurant = owned_restaurant(repo, user)?;

    let bookings = repo.list_bookings(BookingListQuery::new(restaurant.id))?;
    let conversations = repo.list_conversations(ConversationListQuery::new(restaurant.id))?;
    let menu_items = repo.list_menu_items(MenuItemListQuery::new(restaurant.id))?;

    let pending = bookings
        .iter()
        .filter(|booking| booking.status == BookingStatus::Pending)
        .count();
    let confirmed = bookings
        .iter()
        .filter(|booking| booking.status == BookingStatus::Confirmed)
        .count();
    let active = conversations
        .iter()
        .filter(|conversation| conversation.status == ConversationStatus::Active)
        .count();
    let available = menu_items.iter().filter(|item| item.available).count();

    Ok(DashboardStats {
        bookings: BookingStats {
            total: bookings.len(),
            pending,
            confirmed,
        },
        conversations: ConversationStats {
            total: conversations.len(),
            active,
        },
        menu: MenuStats {
            total: menu_items.len(),
            available,
        },
    })
}
