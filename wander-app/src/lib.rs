pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod chat;
pub mod state;
pub mod view;

pub use state::AppState;
