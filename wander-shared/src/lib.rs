pub mod currency;
pub mod models;
pub mod pii;

pub use currency::format_inr;
pub use pii::Masked;
