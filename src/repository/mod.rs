use crate::db::{DbConnection, DbPool};
use crate::domain::analytics::{AnalyticsListQuery, AnalyticsMetric, NewAnalyticsMetric};
use crate::domain::booking::{Booking, BookingListQuery, NewBooking, UpdateBooking};
use crate::domain::chat::{
    ChatConversation, ChatMessage, ChatMessageListQuery, ConversationListQuery,
    NewChatConversation, NewChatMessage,
};
use crate::domain::menu_item::{MenuItem, MenuItemListQuery, NewMenuItem, UpdateMenuItem};
use crate::domain::restaurant::{NewRestaurant, Restaurant, UpdateRestaurant};
use crate::domain::user::{UpsertUser, User};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod analytics;
pub mod booking;
pub mod chat;
pub mod errors;
pub mod menu_item;
pub mod restaurant;
pub mod user;

#[cfg(test)]
pub mod mock;

/// Diesel-backed persistence gateway wrapping an r2d2 pool.
///
/// The handle is explicitly constructed and injected; it may also be built
/// without a pool, in which case reads degrade to empty results and writes
/// fail with [`RepositoryError::Unavailable`].
#[derive(Clone)]
pub struct DieselRepository {
    pool: Option<DbPool>, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a repository with no backing store configured.
    pub fn disconnected() -> Self {
        Self { pool: None }
    }

    /// Whether a backing store is configured.
    pub fn is_connected(&self) -> bool {
        self.pool.is_some()
    }

    /// Connection for read paths; `None` when no store is configured.
    fn read_conn(&self) -> RepositoryResult<Option<DbConnection>> {
        match &self.pool {
            Some(pool) => Ok(Some(pool.get()?)),
            None => Ok(None),
        }
    }

    /// Connection for write paths; errors when no store is configured.
    fn write_conn(&self) -> RepositoryResult<DbConnection> {
        match &self.pool {
            Some(pool) => Ok(pool.get()?),
            None => Err(RepositoryError::Unavailable),
        }
    }
}

/// Read-only operations over user records.
pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    fn get_user_by_open_id(&self, open_id: &str) -> RepositoryResult<Option<User>>;
}

/// Write operations over user records.
pub trait UserWriter {
    fn upsert_user(&self, user: &UpsertUser) -> RepositoryResult<User>;
}

/// Read-only operations over restaurant records.
pub trait RestaurantReader {
    fn get_restaurant_by_id(&self, id: i32) -> RepositoryResult<Option<Restaurant>>;
    fn get_restaurant_by_user_id(&self, user_id: i32) -> RepositoryResult<Option<Restaurant>>;
}

/// Write operations over restaurant records.
pub trait RestaurantWriter {
    fn create_restaurant(&self, new_restaurant: &NewRestaurant) -> RepositoryResult<Restaurant>;
    fn update_restaurant(
        &self,
        restaurant_id: i32,
        user_id: i32,
        updates: &UpdateRestaurant,
    ) -> RepositoryResult<Restaurant>;
}

/// Read-only operations over menu items.
pub trait MenuItemReader {
    fn get_menu_item_by_id(
        &self,
        id: i32,
        restaurant_id: i32,
    ) -> RepositoryResult<Option<MenuItem>>;
    fn list_menu_items(&self, query: MenuItemListQuery) -> RepositoryResult<Vec<MenuItem>>;
}

/// Write operations over menu items.
pub trait MenuItemWriter {
    fn create_menu_item(&self, new_item: &NewMenuItem) -> RepositoryResult<MenuItem>;
    fn create_menu_items(&self, new_items: &[NewMenuItem]) -> RepositoryResult<usize>;
    fn update_menu_item(
        &self,
        item_id: i32,
        restaurant_id: i32,
        updates: &UpdateMenuItem,
    ) -> RepositoryResult<MenuItem>;
    fn delete_menu_item(&self, item_id: i32, restaurant_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over bookings.
pub trait BookingReader {
    fn get_booking_by_id(&self, id: i32, restaurant_id: i32) -> RepositoryResult<Option<Booking>>;
    fn list_bookings(&self, query: BookingListQuery) -> RepositoryResult<Vec<Booking>>;
}

/// Write operations over bookings.
pub trait BookingWriter {
    fn create_booking(&self, new_booking: &NewBooking) -> RepositoryResult<Booking>;
    fn update_booking(
        &self,
        booking_id: i32,
        restaurant_id: i32,
        updates: &UpdateBooking,
    ) -> RepositoryResult<Booking>;
}

/// Read-only operations over conversations and their messages.
pub trait ChatReader {
    fn get_conversation_by_session_id(
        &self,
        session_id: &str,
    ) -> RepositoryResult<Option<ChatConversation>>;
    fn list_conversations(
        &self,
        query: ConversationListQuery,
    ) -> RepositoryResult<Vec<ChatConversation>>;
    fn list_messages(&self, query: ChatMessageListQuery) -> RepositoryResult<Vec<ChatMessage>>;
}

/// Write operations over conversations and their messages.
pub trait ChatWriter {
    /// Insert-or-get keyed by the unique session identifier, so concurrent
    /// first messages for one session converge on a single conversation.
    fn find_or_create_conversation(
        &self,
        new_conversation: &NewChatConversation,
    ) -> RepositoryResult<ChatConversation>;
    fn create_message(&self, new_message: &NewChatMessage) -> RepositoryResult<ChatMessage>;
}

/// Read-only operations over analytics data points.
pub trait AnalyticsReader {
    fn list_metrics(&self, query: AnalyticsListQuery) -> RepositoryResult<Vec<AnalyticsMetric>>;
}

/// Write operations over analytics data points.
pub trait AnalyticsWriter {
    fn create_metric(&self, new_metric: &NewAnalyticsMetric) -> RepositoryResult<AnalyticsMetric>;
}
