/// Broadcast when a payment completes and the booking is persisted.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct BookingConfirmedEvent {
    pub booking_id: i64,
    pub destination: String,
    pub owner_email: String,
    pub total: u32,
    pub confirmed_at: i64,
}
