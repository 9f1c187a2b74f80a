use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use wander_catalog::TripPackage;
use wander_core::store::{read_json_or_default, write_json, KeyValueStore, BOOKINGS_KEY};
use wander_core::CoreError;
use wander_session::Session;
use wander_shared::models::events::BookingConfirmedEvent;

use crate::models::{Booking, BookingStatus, PaymentDraft, PaymentMethod};

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Please login or sign up to book a trip")]
    AuthenticationRequired,
    #[error("Traveler count must be between 1 and {max}, got {given}")]
    InvalidTravelerCount { given: u32, max: u32 },
    #[error(transparent)]
    Store(#[from] CoreError),
}

/// Walks a purchase through Selecting -> Paying -> Confirmed. There is no
/// cancelled or failed terminal state; an abandoned draft leaves the store
/// untouched.
pub struct BookingService {
    store: Arc<dyn KeyValueStore>,
    max_travelers: u32,
    last_issued_id: Mutex<i64>,
}

impl BookingService {
    pub fn new(store: Arc<dyn KeyValueStore>, max_travelers: u32) -> Self {
        Self {
            store,
            max_travelers,
            last_issued_id: Mutex::new(0),
        }
    }

    /// Start a purchase. Requires an active session; the caller must prompt
    /// authentication and stop when this fails.
    pub fn initiate(
        &self,
        package: &TripPackage,
        session: Option<&Session>,
    ) -> Result<PaymentDraft, BookingError> {
        if session.is_none() {
            return Err(BookingError::AuthenticationRequired);
        }
        Ok(PaymentDraft::for_package(package))
    }

    /// Re-price the draft for a new head count. Pure; rejects counts outside
    /// [1, max_travelers].
    pub fn update_traveler_count(
        &self,
        draft: PaymentDraft,
        count: u32,
    ) -> Result<PaymentDraft, BookingError> {
        if count < 1 || count > self.max_travelers {
            return Err(BookingError::InvalidTravelerCount {
                given: count,
                max: self.max_travelers,
            });
        }
        Ok(PaymentDraft {
            traveler_count: count,
            ..draft
        })
    }

    /// Complete the payment step: stamp id, date and owner, append to the
    /// booking list and persist it. Only reachable with a live session.
    pub async fn confirm(
        &self,
        draft: &PaymentDraft,
        session: &Session,
        method: PaymentMethod,
    ) -> Result<Booking, BookingError> {
        let booking = Booking {
            id: self.next_booking_id().await,
            destination: draft.destination.clone(),
            travelers: draft.traveler_count,
            total: draft.total(),
            payment_method: method,
            created_at: Utc::now(),
            status: BookingStatus::Confirmed,
            owner_email: session.email.clone(),
        };

        let mut bookings: Vec<Booking> =
            read_json_or_default(self.store.as_ref(), BOOKINGS_KEY).await?;
        bookings.push(booking.clone());
        write_json(self.store.as_ref(), BOOKINGS_KEY, &bookings).await?;

        info!(
            "Booking {} confirmed: {} x{} = {}",
            booking.id, booking.destination, booking.travelers, booking.total
        );
        Ok(booking)
    }

    /// The given owner's bookings, in creation order. A snapshot of the
    /// store, not a live feed.
    pub async fn bookings_for(&self, email: &str) -> Result<Vec<Booking>, BookingError> {
        let bookings: Vec<Booking> =
            read_json_or_default(self.store.as_ref(), BOOKINGS_KEY).await?;
        Ok(bookings
            .into_iter()
            .filter(|booking| booking.owner_email == email)
            .collect())
    }

    /// Millisecond timestamp, bumped past the last issued value so two
    /// confirms in the same millisecond still get distinct ids.
    async fn next_booking_id(&self) -> i64 {
        let mut last = self.last_issued_id.lock().await;
        let now = Utc::now().timestamp_millis();
        let id = if now > *last { now } else { *last + 1 };
        *last = id;
        id
    }
}

impl From<&Booking> for BookingConfirmedEvent {
    fn from(booking: &Booking) -> Self {
        BookingConfirmedEvent {
            booking_id: booking.id,
            destination: booking.destination.clone(),
            owner_email: booking.owner_email.clone(),
            total: booking.total,
            confirmed_at: booking.created_at.timestamp_millis(),
        }
    }
}
