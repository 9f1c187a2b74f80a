pub mod models;
pub mod service;

pub use models::{NewAccount, Session, UserAccount};
pub use service::{AuthError, SessionService};
