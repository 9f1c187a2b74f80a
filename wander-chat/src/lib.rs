pub mod responder;
pub mod rules;

pub use responder::{reply_later, Responder};
pub use rules::{default_rules, BotReply, BotRule};
