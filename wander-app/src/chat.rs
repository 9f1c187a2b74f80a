use std::sync::Arc;

use wander_chat::reply_later;
use wander_core::view::View;

use crate::state::AppState;

/// Queue a bot reply for the given message. The reply arrives via
/// `View::notify` after the configured typing delay; a second message sent
/// before then is answered independently, with no ordering guarantee.
pub async fn send_chat_message(
    state: &AppState,
    view: Arc<dyn View>,
    message: &str,
) -> tokio::task::JoinHandle<()> {
    let session = state.sessions.current_session().await;
    reply_later(
        state.responder.clone(),
        view,
        message.to_string(),
        session,
        state.chat_reply_delay,
    )
}
