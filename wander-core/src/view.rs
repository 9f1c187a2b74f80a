use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// One entry in a rendered listing: a package card, a booking row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardModel {
    pub key: String,
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailSection {
    pub heading: String,
    pub items: Vec<String>,
}

/// A full detail screen: title plus ordered sections. The View owns how
/// sections become markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailModel {
    pub title: String,
    pub sections: Vec<DetailSection>,
}

/// Rendering capability consumed by the services. Implementations own all
/// markup and styling; the core only describes outcomes.
pub trait View: Send + Sync {
    fn render_list(&self, items: &[CardModel]);

    fn render_detail(&self, item: &DetailModel);

    fn render_error(&self, context: &str, message: &str);

    fn prompt_authentication(&self);

    fn notify(&self, message: &str);
}

/// What a `RecordingView` captured, for assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Listed(Vec<String>),
    Detailed(String),
    Errored { context: String, message: String },
    AuthPrompted,
    Notified(String),
}

/// In-memory View that records every call it receives.
#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().expect("view log poisoned").clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ViewEvent::Notified(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn auth_prompted(&self) -> bool {
        self.events()
            .iter()
            .any(|event| *event == ViewEvent::AuthPrompted)
    }

    fn record(&self, event: ViewEvent) {
        self.events.lock().expect("view log poisoned").push(event);
    }
}

impl View for RecordingView {
    fn render_list(&self, items: &[CardModel]) {
        let titles = items.iter().map(|item| item.title.clone()).collect();
        self.record(ViewEvent::Listed(titles));
    }

    fn render_detail(&self, item: &DetailModel) {
        self.record(ViewEvent::Detailed(item.title.clone()));
    }

    fn render_error(&self, context: &str, message: &str) {
        self.record(ViewEvent::Errored {
            context: context.to_string(),
            message: message.to_string(),
        });
    }

    fn prompt_authentication(&self) {
        self.record(ViewEvent::AuthPrompted);
    }

    fn notify(&self, message: &str) {
        self.record(ViewEvent::Notified(message.to_string()));
    }
}
