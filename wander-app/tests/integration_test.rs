use std::sync::Arc;

use wander_app::{auth, bookings, catalog, chat, AppState};
use wander_booking::PaymentMethod;
use wander_core::store::KeyValueStore;
use wander_core::view::{RecordingView, View, ViewEvent};
use wander_session::NewAccount;
use wander_store::app_config::{BusinessRules, ChatConfig, Config, StoreConfig};
use wander_store::{FileStore, MemoryStore};

fn test_config() -> Config {
    Config {
        store: StoreConfig {
            path: "unused-in-tests".to_string(),
        },
        business_rules: BusinessRules { max_travelers: 15 },
        chat: ChatConfig { reply_delay_ms: 10 },
    }
}

async fn test_state() -> AppState {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    AppState::initialize(store, &test_config()).await.unwrap()
}

fn asha() -> NewAccount {
    NewAccount {
        name: "Asha Rao".to_string(),
        email: "asha@example.in".to_string(),
        phone: "9876543210".to_string(),
        password: "wander123".to_string(),
    }
}

#[tokio::test]
async fn test_catalog_browsing_filter_search_and_detail() {
    let state = test_state().await;
    let view = RecordingView::new();

    catalog::show_category(&state, &view, wander_catalog::PackageCategory::Beach);
    catalog::search_catalog(&state, &view, "manali");
    catalog::show_package(&state, &view, 3);
    catalog::show_package(&state, &view, 99);

    let events = view.events();
    assert_eq!(
        events[0],
        ViewEvent::Listed(vec![
            "Goa Beach Paradise".to_string(),
            "Andaman Islands".to_string(),
        ])
    );
    assert_eq!(
        events[1],
        ViewEvent::Listed(vec!["Manali Mountain Retreat".to_string()])
    );
    assert_eq!(events[2], ViewEvent::Detailed("Jaipur Cultural Tour".to_string()));
    assert!(matches!(
        &events[3],
        ViewEvent::Errored { context, message }
            if context == "catalog" && message.contains("99")
    ));
}

#[tokio::test]
async fn test_booking_flow_stops_at_auth_prompt_when_signed_out() {
    let state = test_state().await;
    let view = RecordingView::new();

    let draft = bookings::begin_booking(&state, &view, 1).await;
    assert!(draft.is_none());
    assert!(view.auth_prompted());
    assert!(view
        .notifications()
        .contains(&"Please login or sign up to book a trip".to_string()));

    // The abandoned attempt left no booking behind.
    let stored = state.bookings.bookings_for("asha@example.in").await.unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn test_signup_book_and_profile_flow() {
    let state = test_state().await;
    let view = RecordingView::new();

    catalog::show_catalog(&state, &view);
    auth::sign_up(&state, &view, asha()).await;

    let draft = bookings::begin_booking(&state, &view, 1).await.unwrap();
    let draft = bookings::set_travelers(&state, &view, draft, 3);
    assert_eq!(draft.total(), 45000);

    let mut events = state.events_tx.subscribe();
    assert!(bookings::submit_payment(&state, &view, &draft, PaymentMethod::GooglePay).await);

    let event = events.recv().await.unwrap();
    assert_eq!(event.destination, "Goa Beach Paradise");
    assert_eq!(event.total, 45000);
    assert_eq!(event.owner_email, "asha@example.in");

    auth::show_profile(&state, &view).await;
    let listings: Vec<Vec<String>> = view
        .events()
        .into_iter()
        .filter_map(|event| match event {
            ViewEvent::Listed(titles) => Some(titles),
            _ => None,
        })
        .collect();
    // First listing is the catalog, last is the profile's booking history.
    assert_eq!(listings.first().unwrap().len(), 6);
    assert_eq!(listings.last().unwrap(), &vec!["Goa Beach Paradise".to_string()]);
}

#[tokio::test]
async fn test_out_of_bounds_traveler_count_keeps_draft() {
    let state = test_state().await;
    let view = RecordingView::new();

    auth::sign_up(&state, &view, asha()).await;
    let draft = bookings::begin_booking(&state, &view, 2).await.unwrap();
    let draft = bookings::set_travelers(&state, &view, draft, 40);

    assert_eq!(draft.traveler_count, 1);
    assert!(view.events().iter().any(|event| matches!(
        event,
        ViewEvent::Errored { context, .. } if context == "payment"
    )));
}

#[tokio::test]
async fn test_duplicate_signup_renders_error_and_keeps_session_flow_working() {
    let state = test_state().await;
    let view = RecordingView::new();

    auth::sign_up(&state, &view, asha()).await;
    auth::log_out(&state, &view).await;
    auth::sign_up(&state, &view, asha()).await;

    assert!(view.events().iter().any(|event| matches!(
        event,
        ViewEvent::Errored { context, message }
            if context == "signup" && message.contains("already registered")
    )));

    auth::log_in(&state, &view, "asha@example.in", "wander123").await;
    assert!(view
        .notifications()
        .contains(&"Welcome back, Asha Rao!".to_string()));
}

#[tokio::test]
async fn test_chat_replies_arrive_via_view_and_respect_session() {
    let state = test_state().await;
    let view = Arc::new(RecordingView::new());

    let reply = chat::send_chat_message(
        &state,
        view.clone() as Arc<dyn View>,
        "I want to book a trip",
    )
    .await;
    reply.await.unwrap();
    assert!(view.notifications().last().unwrap().contains("please sign up or login first"));

    auth::sign_up(&state, view.as_ref(), asha()).await;
    let reply = chat::send_chat_message(
        &state,
        view.clone() as Arc<dyn View>,
        "I want to book a trip",
    )
    .await;
    reply.await.unwrap();
    assert!(view.notifications().last().unwrap().contains("Browse our destinations"));
}

#[tokio::test]
async fn test_bookings_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config();

    {
        let store: Arc<dyn KeyValueStore> =
            Arc::new(FileStore::open(dir.path()).await.unwrap());
        let state = AppState::initialize(store, &config).await.unwrap();
        let view = RecordingView::new();

        auth::sign_up(&state, &view, asha()).await;
        let draft = bookings::begin_booking(&state, &view, 4).await.unwrap();
        bookings::submit_payment(&state, &view, &draft, PaymentMethod::Card).await;
        auth::log_out(&state, &view).await;
    }

    // A fresh process over the same store: no session, bookings intact.
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(dir.path()).await.unwrap());
    let state = AppState::initialize(store, &config).await.unwrap();
    assert!(state.sessions.current_session().await.is_none());

    let bookings = state.bookings.bookings_for("asha@example.in").await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].destination, "Kerala Backwaters");
}
