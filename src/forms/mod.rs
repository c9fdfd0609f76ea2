pub mod auth;
pub mod booking;
pub mod chat;
pub mod menu;
pub mod restaurant;
