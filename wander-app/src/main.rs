use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wander_app::{auth, bookings, catalog, chat, AppState};
use wander_app::view::TracingView;
use wander_booking::PaymentMethod;
use wander_core::store::KeyValueStore;
use wander_core::view::View;
use wander_session::NewAccount;
use wander_store::FileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wander_app=debug,wander_session=info,wander_booking=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = wander_store::Config::load().expect("Failed to load config");
    tracing::info!("Opening store at {}", config.store.path);

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.store.path).await?);
    let state = AppState::initialize(store, &config).await?;

    let mut events = state.events_tx.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            tracing::info!(
                "Booking event: {} confirmed {} ({})",
                event.owner_email, event.destination, event.total
            );
        }
    });

    let view = Arc::new(TracingView);

    // A scripted walk through the catalog, signup, booking and chat flows.
    catalog::show_catalog(&state, view.as_ref());
    catalog::show_package(&state, view.as_ref(), 1);

    // Booking before signing in: the flow must stop at the auth prompt.
    let _ = bookings::begin_booking(&state, view.as_ref(), 1).await;

    if state.sessions.current_session().await.is_none() {
        auth::sign_up(
            &state,
            view.as_ref(),
            NewAccount {
                name: "Asha Rao".to_string(),
                email: "asha@example.in".to_string(),
                phone: "9876543210".to_string(),
                password: "wander123".to_string(),
            },
        )
        .await;
        // A store from a previous run already has this account.
        if state.sessions.current_session().await.is_none() {
            auth::log_in(&state, view.as_ref(), "asha@example.in", "wander123").await;
        }
    }

    if let Some(draft) = bookings::begin_booking(&state, view.as_ref(), 1).await {
        let draft = bookings::set_travelers(&state, view.as_ref(), draft, 3);
        bookings::submit_payment(&state, view.as_ref(), &draft, PaymentMethod::GooglePay).await;
    }

    auth::show_profile(&state, view.as_ref()).await;

    let replies = [
        chat::send_chat_message(&state, view.clone() as Arc<dyn View>, "hello").await,
        chat::send_chat_message(&state, view.clone() as Arc<dyn View>, "What is the price for Goa?").await,
        chat::send_chat_message(&state, view.clone() as Arc<dyn View>, "book a trip").await,
    ];
    for reply in replies {
        let _ = reply.await;
    }

    Ok(())
}
