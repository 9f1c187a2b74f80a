use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

use wander_booking::BookingService;
use wander_catalog::Catalog;
use wander_chat::Responder;
use wander_core::store::KeyValueStore;
use wander_session::SessionService;
use wander_shared::models::events::BookingConfirmedEvent;
use wander_store::Config;

/// Everything the handlers need, built once at startup and passed
/// explicitly. The session cache inside `SessionService` is seeded from the
/// store here; no other state outlives a handler call.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub sessions: Arc<SessionService>,
    pub bookings: Arc<BookingService>,
    pub responder: Arc<Responder>,
    pub events_tx: broadcast::Sender<BookingConfirmedEvent>,
    pub chat_reply_delay: Duration,
}

impl AppState {
    pub async fn initialize(
        store: Arc<dyn KeyValueStore>,
        config: &Config,
    ) -> anyhow::Result<Self> {
        let catalog = Arc::new(Catalog::with_default_packages());
        let sessions = Arc::new(SessionService::open(store.clone()).await?);
        let bookings = Arc::new(BookingService::new(
            store,
            config.business_rules.max_travelers,
        ));
        let price_bounds = catalog.price_bounds().unwrap_or((0, 0));
        let responder = Arc::new(Responder::new(price_bounds));
        let (events_tx, _) = broadcast::channel(100);

        Ok(Self {
            catalog,
            sessions,
            bookings,
            responder,
            events_tx,
            chat_reply_delay: Duration::from_millis(config.chat.reply_delay_ms),
        })
    }
}
