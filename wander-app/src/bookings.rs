use wander_booking::{BookingError, PaymentDraft, PaymentMethod};
use wander_core::view::{DetailModel, DetailSection, View};
use wander_shared::format_inr;

use crate::state::AppState;

fn render_summary(view: &dyn View, draft: &PaymentDraft) {
    view.render_detail(&DetailModel {
        title: "Booking Summary".to_string(),
        sections: vec![DetailSection {
            heading: "Payment".to_string(),
            items: vec![
                format!("Destination: {}", draft.destination),
                format!("Duration: {}", draft.duration),
                format!("Price per person: {}", format_inr(draft.unit_price)),
                format!("Travelers: {}", draft.traveler_count),
                format!("Total Amount: {}", format_inr(draft.total())),
            ],
        }],
    });
}

/// Start the purchase flow for a package. Returns the draft the payment
/// screen keeps hold of, or None when the flow must not proceed.
pub async fn begin_booking(
    state: &AppState,
    view: &dyn View,
    package_id: u32,
) -> Option<PaymentDraft> {
    let package = match state.catalog.find(package_id) {
        Ok(package) => package,
        Err(e) => {
            view.render_error("booking", &e.to_string());
            return None;
        }
    };

    let session = state.sessions.current_session().await;
    match state.bookings.initiate(package, session.as_ref()) {
        Ok(draft) => {
            render_summary(view, &draft);
            Some(draft)
        }
        Err(BookingError::AuthenticationRequired) => {
            view.prompt_authentication();
            view.notify("Please login or sign up to book a trip");
            None
        }
        Err(e) => {
            view.render_error("booking", &e.to_string());
            None
        }
    }
}

/// Re-price for a new head count; an out-of-bounds count shows an error and
/// keeps the draft as it was.
pub fn set_travelers(
    state: &AppState,
    view: &dyn View,
    draft: PaymentDraft,
    count: u32,
) -> PaymentDraft {
    match state.bookings.update_traveler_count(draft.clone(), count) {
        Ok(updated) => {
            render_summary(view, &updated);
            updated
        }
        Err(e) => {
            view.render_error("payment", &e.to_string());
            draft
        }
    }
}

/// Complete payment: persist the booking, announce it, broadcast the event.
pub async fn submit_payment(
    state: &AppState,
    view: &dyn View,
    draft: &PaymentDraft,
    method: PaymentMethod,
) -> bool {
    let Some(session) = state.sessions.current_session().await else {
        // Unreachable through begin_booking; guard the contract anyway.
        view.prompt_authentication();
        return false;
    };

    match state.bookings.confirm(draft, &session, method).await {
        Ok(booking) => {
            let _ = state.events_tx.send((&booking).into());
            view.notify(&format!(
                "Booking confirmed! {} for {} travelers, {} paid via {}.",
                booking.destination,
                booking.travelers,
                format_inr(booking.total),
                booking.payment_method
            ));
            true
        }
        Err(e) => {
            view.render_error("payment", &e.to_string());
            false
        }
    }
}
