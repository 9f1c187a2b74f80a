use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use wander_catalog::TripPackage;
use wander_core::view::CardModel;
use wander_shared::format_inr;

/// A completed flow always lands here; an abandoned one leaves no record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
}

/// The payment options offered at checkout. Recorded on the booking, never
/// charged against a real processor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    GooglePay,
    Paytm,
    Card,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::GooglePay => "Google Pay",
            PaymentMethod::Paytm => "Paytm",
            PaymentMethod::Card => "Credit/Debit Card",
        };
        write!(f, "{}", label)
    }
}

/// An in-progress selection: Selecting/Paying state of the flow. Pure value,
/// no store side effects until confirmed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDraft {
    pub package_id: u32,
    pub destination: String,
    pub duration: String,
    /// Per-person price captured from the package at initiation.
    pub unit_price: u32,
    pub traveler_count: u32,
}

impl PaymentDraft {
    pub fn for_package(package: &TripPackage) -> Self {
        Self {
            package_id: package.id,
            destination: package.name.clone(),
            duration: package.duration.clone(),
            unit_price: package.price,
            traveler_count: 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.unit_price * self.traveler_count
    }
}

/// A confirmed purchase. Never mutated or deleted once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Time-derived, strictly increasing within the process.
    pub id: i64,
    pub destination: String,
    pub travelers: u32,
    pub total: u32,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
    pub status: BookingStatus,
    pub owner_email: String,
}

impl From<&Booking> for CardModel {
    fn from(booking: &Booking) -> Self {
        CardModel {
            key: booking.id.to_string(),
            title: booking.destination.clone(),
            lines: vec![
                format!("Travelers: {}", booking.travelers),
                format!("Total: {}", format_inr(booking.total)),
                format!("Paid via: {}", booking.payment_method),
                format!("Booking Date: {}", booking.created_at.format("%d/%m/%Y")),
                "Status: Confirmed".to_string(),
            ],
        }
    }
}
