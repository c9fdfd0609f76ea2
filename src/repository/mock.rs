use mockall::mock;

use super::{
    AnalyticsReader, AnalyticsWriter, BookingReader, BookingWriter, ChatReader, ChatWriter,
    MenuItemReader, MenuItemWriter, RestaurantReader, RestaurantWriter, UserReader, UserWriter,
};
use crate::domain::analytics::{AnalyticsListQuery, AnalyticsMetric, NewAnalyticsMetric};
use crate::domain::booking::{Booking, BookingListQuery, NewBooking, UpdateBooking};
use crate::domain::chat::{
    ChatConversation, ChatMessage, ChatMessageListQuery, ConversationListQuery,
    NewChatConversation, NewChatMessage,
};
use crate::domain::menu_item::{MenuItem, MenuItemListQuery, NewMenuItem, UpdateMenuItem};
use crate::domain::restaurant::{NewRestaurant, Restaurant, UpdateRestaurant};
use crate::domain::user::{UpsertUser, User};
use crate::repository::errors::RepositoryResult;

mock! {
    pub UserStore {}

    impl UserReader for UserStore {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_open_id(&self, open_id: &str) -> RepositoryResult<Option<User>>;
    }

    impl UserWriter for UserStore {
        fn upsert_user(&self, user: &UpsertUser) -> RepositoryResult<User>;
    }
}

mock! {
    pub RestaurantStore {}

    impl RestaurantReader for RestaurantStore {
        fn get_restaurant_by_id(&self, id: i32) -> RepositoryResult<Option<Restaurant>>;
        fn get_restaurant_by_user_id(&self, user_id: i32) -> RepositoryResult<Option<Restaurant>>;
    }

    impl RestaurantWriter for RestaurantStore {
        fn create_restaurant(&self, new_restaurant: &NewRestaurant) -> RepositoryResult<Restaurant>;
        fn update_restaurant(&self, restaurant_id: i32, user_id: i32, updates: &UpdateRestaurant) -> RepositoryResult<Restaurant>;
    }
}

mock! {
    pub MenuStore {}

    impl RestaurantReader for MenuStore {
        fn get_restaurant_by_id(&self, id: i32) -> RepositoryResult<Option<Restaurant>>;
        fn get_restaurant_by_user_id(&self, user_id: i32) -> RepositoryResult<Option<Restaurant>>;
    }

    impl MenuItemReader for MenuStore {
        fn get_menu_item_by_id(&self, id: i32, restaurant_id: i32) -> RepositoryResult<Option<MenuItem>>;
        fn list_menu_items(&self, query: MenuItemListQuery) -> RepositoryResult<Vec<MenuItem>>;
    }

    impl MenuItemWriter for MenuStore {
        fn create_menu_item(&self, new_item: &NewMenuItem) -> RepositoryResult<MenuItem>;
        fn create_menu_items(&self, new_items: &[NewMenuItem]) -> RepositoryResult<usize>;
        fn update_menu_item(&self, item_id: i32, restaurant_id: i32, updates: &UpdateMenuItem) -> RepositoryResult<MenuItem>;
        fn delete_menu_item(&self, item_id: i32, restaurant_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub BookingStore {}

    impl RestaurantReader for BookingStore {
        fn get_restaurant_by_id(&self, id: i32) -> RepositoryResult<Option<Restaurant>>;
        fn get_restaurant_by_user_id(&self, user_id: i32) -> RepositoryResult<Option<Restaurant>>;
    }

    impl BookingReader for BookingStore {
        fn get_booking_by_id(&self, id: i32, restaurant_id: i32) -> RepositoryResult<Option<Booking>>;
        fn list_bookings(&self, query: BookingListQuery) -> RepositoryResult<Vec<Booking>>;
    }

    impl BookingWriter for BookingStore {
        fn create_booking(&self, new_booking: &NewBooking) -> RepositoryResult<Booking>;
        fn update_booking(&self, booking_id: i32, restaurant_id: i32, updates: &UpdateBooking) -> RepositoryResult<Booking>;
    }
}

mock! {
    pub ChatStore {}

    impl RestaurantReader for ChatStore {
        fn get_restaurant_by_id(&self, id: i32) -> RepositoryResult<Option<Restaurant>>;
        fn get_restaurant_by_user_id(&self, user_id: i32) -> RepositoryResult<Option<Restaurant>>;
    }

    impl MenuItemReader for ChatStore {
        fn get_menu_item_by_id(&self, id: i32, restaurant_id: i32) -> RepositoryResult<Option<MenuItem>>;
        fn list_menu_items(&self, query: MenuItemListQuery) -> RepositoryResult<Vec<MenuItem>>;
    }

    impl ChatReader for ChatStore {
        fn get_conversation_by_session_id(&self, session_id: &str) -> RepositoryResult<Option<ChatConversation>>;
        fn list_conversations(&self, query: ConversationListQuery) -> RepositoryResult<Vec<ChatConversation>>;
        fn list_messages(&self, query: ChatMessageListQuery) -> RepositoryResult<Vec<ChatMessage>>;
    }

    impl ChatWriter for ChatStore {
        fn find_or_create_conversation(&self, new_conversation: &NewChatConversation) -> RepositoryResult<ChatConversation>;
        fn create_message(&self, new_message: &NewChatMessage) -> RepositoryResult<ChatMessage>;
    }
}

mock! {
    pub AnalyticsStore {}

    impl RestaurantReader for AnalyticsStore {
        fn get_restaurant_by_id(&self, id: i32) -> RepositoryResult<Option<Restaurant>>;
        fn get_restaurant_by_user_id(&self, user_id: i32) -> RepositoryResult<Option<Restaurant>>;
    }

    impl AnalyticsReader for AnalyticsStore {
        fn list_metrics(&self, query: AnalyticsListQuery) -> RepositoryResult<Vec<AnalyticsMetric>>;
    }

    impl AnalyticsWriter for AnalyticsStore {
        fn create_metric(&self, new_metric: &NewAnalyticsMetric) -> RepositoryResult<AnalyticsMetric>;
    }

    impl BookingReader for AnalyticsStore {
        fn get_booking_by_id(&self, id: i32, restaurant_id: i32) -> RepositoryResult<Option<Booking>>;
        fn list_bookings(&self, query: BookingListQuery) -> RepositoryResult<Vec<Booking>>;
    }

    impl ChatReader for AnalyticsStore {
        fn get_conversation_by_session_id(&self, session_id: &str) -> RepositoryResult<Option<ChatConversation>>;
        fn list_conversations(&self, query: ConversationListQuery) -> RepositoryResult<Vec<ChatConversation>>;
        fn list_messages(&self, query: ChatMessageListQuery) -> RepositoryResult<Vec<ChatMessage>>;
    }

    impl MenuItemReader for AnalyticsStore {
        fn get_menu_item_by_id(&self, id: i32, restaurant_id: i32) -> RepositoryResult<Option<MenuItem>>;
        fn list_menu_items(&self, query: MenuItemListQuery) -> RepositoryResult<Vec<MenuItem>>;
    }
}
