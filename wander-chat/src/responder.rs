use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use wander_core::view::View;
use wander_session::Session;
use wander_shared::format_inr;

use crate::rules::{default_rules, BotReply, BotRule};

const FALLBACK: &str =
    "I can help you with destination info, pricing, bookings, and payments. What would you like to know?";

/// First-match keyword classifier. Deterministic, side-effect free; the only
/// state it consults is session presence and the static price bounds.
pub struct Responder {
    rules: Vec<BotRule>,
    price_bounds: (u32, u32),
}

impl Responder {
    pub fn new(price_bounds: (u32, u32)) -> Self {
        Self {
            rules: default_rules(),
            price_bounds,
        }
    }

    pub fn with_rules(rules: Vec<BotRule>, price_bounds: (u32, u32)) -> Self {
        Self { rules, price_bounds }
    }

    pub fn respond(&self, utterance: &str, session: Option<&Session>) -> String {
        let normalized = utterance.to_lowercase();
        for rule in &self.rules {
            if rule.matches(&normalized) {
                debug!("Utterance matched rule {}", rule.name);
                return self.render(&rule.reply, session);
            }
        }
        FALLBACK.to_string()
    }

    fn render(&self, reply: &BotReply, session: Option<&Session>) -> String {
        match reply {
            BotReply::Text(text) => text.clone(),
            BotReply::PriceRange => {
                let (min, max) = self.price_bounds;
                format!(
                    "Our packages range from {} to {} depending on the destination and \
                     duration. Would you like to know about a specific destination?",
                    format_inr(min),
                    format_inr(max)
                )
            }
            BotReply::SessionGated {
                signed_in,
                signed_out,
            } => {
                if session.is_some() {
                    signed_in.clone()
                } else {
                    signed_out.clone()
                }
            }
        }
    }
}

/// Deliver the reply after a simulated typing delay. Fire-and-forget: no
/// cancellation, and replies to back-to-back messages may land out of send
/// order. The handle is returned for callers that want to await delivery.
pub fn reply_later(
    responder: Arc<Responder>,
    view: Arc<dyn View>,
    utterance: String,
    session: Option<Session>,
    delay: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let reply = responder.respond(&utterance, session.as_ref());
        view.notify(&reply);
    })
}
