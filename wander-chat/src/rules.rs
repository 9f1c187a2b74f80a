use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a matched rule answers with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BotReply {
    /// Fixed text.
    Text(String),
    /// The price-range pitch, rendered from the catalog bounds.
    PriceRange,
    /// Depends on whether someone is signed in.
    SessionGated {
        signed_in: String,
        signed_out: String,
    },
}

/// One keyword-set -> reply rule. Rules are evaluated strictly in list
/// order and are not mutually exclusive; the first hit wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotRule {
    pub id: Uuid,
    pub name: String,
    pub keywords: Vec<String>,
    pub reply: BotReply,
}

impl BotRule {
    fn new(name: &str, keywords: &[&str], reply: BotReply) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            reply,
        }
    }

    /// Substring match against an already-lowercased utterance.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|keyword| normalized.contains(keyword))
    }
}

/// The canonical rule order. Reordering changes behavior: an utterance
/// mentioning both price and Goa must get the price answer.
pub fn default_rules() -> Vec<BotRule> {
    vec![
        BotRule::new("pricing", &["price", "cost"], BotReply::PriceRange),
        BotRule::new(
            "goa-pitch",
            &["goa", "beach"],
            BotReply::Text(
                "Our Goa Beach Paradise package is ₹15,000 for 5 days/4 nights. It includes \
                 hotel, meals, airport transfers, and water sports! Would you like to book?"
                    .to_string(),
            ),
        ),
        BotRule::new(
            "manali-pitch",
            &["manali", "mountain"],
            BotReply::Text(
                "Manali Mountain Retreat is ₹18,000 for 6 days/5 nights with paragliding \
                 included! Perfect for adventure lovers."
                    .to_string(),
            ),
        ),
        BotRule::new(
            "booking",
            &["book", "reserve"],
            BotReply::SessionGated {
                signed_in: "Great! Browse our destinations above and click \"View Details\" \
                            on any package to book."
                    .to_string(),
                signed_out: "To book a trip, please sign up or login first. Click the Sign In \
                             button in the navigation bar."
                    .to_string(),
            },
        ),
        BotRule::new(
            "payments",
            &["payment", "pay"],
            BotReply::Text(
                "We accept Google Pay, Paytm, and Credit/Debit Cards. Payment is secure and \
                 instant!"
                    .to_string(),
            ),
        ),
        BotRule::new(
            "cancellation",
            &["cancel", "refund"],
            BotReply::Text(
                "Cancellations are free up to 7 days before departure. After that, a 30% \
                 charge applies. Full refunds for cancellations 15+ days before departure."
                    .to_string(),
            ),
        ),
        BotRule::new(
            "group-size",
            &["group", "people"],
            BotReply::Text(
                "Most of our packages accommodate 2-15 people. Perfect for families, friends, \
                 or solo travelers!"
                    .to_string(),
            ),
        ),
        BotRule::new(
            "greeting",
            &["hello", "hi"],
            BotReply::Text("Hello! How can I help you plan your perfect trip today?".to_string()),
        ),
        BotRule::new(
            "thanks",
            &["thank"],
            BotReply::Text("You're welcome! Have a great trip! 🌟".to_string()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order_is_canonical() {
        let names: Vec<String> = default_rules().into_iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "pricing",
                "goa-pitch",
                "manali-pitch",
                "booking",
                "payments",
                "cancellation",
                "group-size",
                "greeting",
                "thanks",
            ]
        );
    }

    #[test]
    fn test_keyword_matching_is_substring_based() {
        let rules = default_rules();
        let pricing = &rules[0];
        assert!(pricing.matches("what does it cost?"));
        assert!(pricing.matches("pricey pricelist"));
        assert!(!pricing.matches("goa please"));
    }
}
