use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use wander_core::store::{
    read_json_or_default, write_json, KeyValueStore, ACTIVE_SESSION_KEY, USER_ACCOUNTS_KEY,
};
use wander_core::CoreError;

use crate::models::{NewAccount, Session, UserAccount};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Email already registered. Please login.")]
    DuplicateEmail(String),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Store(#[from] CoreError),
}

/// Owns the current-user identity. The in-memory session is seeded once from
/// the store at open and every mutation writes through before returning, so
/// the two never diverge.
pub struct SessionService {
    store: Arc<dyn KeyValueStore>,
    current: Mutex<Option<Session>>,
}

impl SessionService {
    pub async fn open(store: Arc<dyn KeyValueStore>) -> Result<Self, AuthError> {
        let persisted: Option<Session> =
            read_json_or_default(store.as_ref(), ACTIVE_SESSION_KEY).await?;
        if let Some(session) = &persisted {
            info!("Resuming session for {}", session.email);
        }
        Ok(Self {
            store,
            current: Mutex::new(persisted),
        })
    }

    /// Register a new account and sign it in. Fails when the email is
    /// already taken; the existing account is left untouched.
    pub async fn sign_up(&self, form: NewAccount) -> Result<Session, AuthError> {
        let mut accounts: Vec<UserAccount> =
            read_json_or_default(self.store.as_ref(), USER_ACCOUNTS_KEY).await?;

        if accounts.iter().any(|account| account.email == form.email) {
            return Err(AuthError::DuplicateEmail(form.email));
        }

        let account = UserAccount::from(form);
        let session = account.session();
        accounts.push(account);
        write_json(self.store.as_ref(), USER_ACCOUNTS_KEY, &accounts).await?;

        self.activate(session.clone()).await?;
        info!("Account created for {}", session.email);
        Ok(session)
    }

    /// Exact match on email and password, case-sensitive, no normalization.
    pub async fn log_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let accounts: Vec<UserAccount> =
            read_json_or_default(self.store.as_ref(), USER_ACCOUNTS_KEY).await?;

        let account = accounts
            .iter()
            .find(|account| account.email == email && account.password.0 == password)
            .ok_or(AuthError::InvalidCredentials)?;

        let session = account.session();
        self.activate(session.clone()).await?;
        info!("Session opened for {}", session.email);
        Ok(session)
    }

    /// Clears the active session. A logout with no session is a no-op.
    pub async fn log_out(&self) -> Result<(), AuthError> {
        let mut current = self.current.lock().await;
        if let Some(session) = current.take() {
            self.store.remove(ACTIVE_SESSION_KEY).await?;
            info!("Session closed for {}", session.email);
        }
        Ok(())
    }

    pub async fn current_session(&self) -> Option<Session> {
        self.current.lock().await.clone()
    }

    async fn activate(&self, session: Session) -> Result<(), AuthError> {
        write_json(self.store.as_ref(), ACTIVE_SESSION_KEY, &Some(session.clone())).await?;
        *self.current.lock().await = Some(session);
        Ok(())
    }
}
