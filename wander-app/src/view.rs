use tracing::{info, warn};

use wander_core::view::{CardModel, DetailModel, View};

/// Renders everything through structured logging; the demo binary's stand-in
/// for real markup.
pub struct TracingView;

impl View for TracingView {
    fn render_list(&self, items: &[CardModel]) {
        info!("Listing {} items", items.len());
        for item in items {
            info!("  [{}] {} — {}", item.key, item.title, item.lines.join(" | "));
        }
    }

    fn render_detail(&self, item: &DetailModel) {
        info!("=== {} ===", item.title);
        for section in &item.sections {
            info!("{}:", section.heading);
            for line in &section.items {
                info!("  - {}", line);
            }
        }
    }

    fn render_error(&self, context: &str, message: &str) {
        warn!("[{}] {}", context, message);
    }

    fn prompt_authentication(&self) {
        info!("Please sign in or create an account to continue");
    }

    fn notify(&self, message: &str) {
        info!("{}", message);
    }
}
