use wander_core::view::{CardModel, DetailModel, DetailSection, View};
use wander_session::NewAccount;

use crate::state::AppState;

pub async fn sign_up(state: &AppState, view: &dyn View, form: NewAccount) {
    match state.sessions.sign_up(form).await {
        Ok(session) => {
            view.notify(&format!(
                "Account created successfully! Welcome, {}!",
                session.name
            ));
        }
        Err(e) => view.render_error("signup", &e.to_string()),
    }
}

pub async fn log_in(state: &AppState, view: &dyn View, email: &str, password: &str) {
    match state.sessions.log_in(email, password).await {
        Ok(session) => view.notify(&format!("Welcome back, {}!", session.name)),
        Err(e) => view.render_error("login", &e.to_string()),
    }
}

pub async fn log_out(state: &AppState, view: &dyn View) {
    match state.sessions.log_out().await {
        Ok(()) => view.notify("Logged out successfully"),
        Err(e) => view.render_error("logout", &e.to_string()),
    }
}

/// Profile screen: identity plus booking history. Signed-out visitors get
/// the authentication prompt instead.
pub async fn show_profile(state: &AppState, view: &dyn View) {
    let Some(session) = state.sessions.current_session().await else {
        view.prompt_authentication();
        return;
    };

    view.render_detail(&DetailModel {
        title: session.name.clone(),
        sections: vec![DetailSection {
            heading: "Profile".to_string(),
            items: vec![
                format!("Email: {}", session.email),
                format!("Phone: {}", session.phone),
            ],
        }],
    });

    match state.bookings.bookings_for(&session.email).await {
        Ok(bookings) if bookings.is_empty() => {
            view.notify("No bookings yet. Start exploring destinations!");
        }
        Ok(bookings) => {
            let cards: Vec<CardModel> = bookings.iter().map(CardModel::from).collect();
            view.render_list(&cards);
        }
        Err(e) => view.render_error("profile", &e.to_string()),
    }
}
