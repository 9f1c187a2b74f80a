pub mod models;
pub mod service;

pub use models::{Booking, BookingStatus, PaymentDraft, PaymentMethod};
pub use service::{BookingError, BookingService};
