//! Booking domain entity

use chrono::{DateTime, Utc};

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    /// Created, awaiting payment confirmation
    Pending,
    /// Payment confirmed
    Paid,
    /// Cancelled by passenger or operator; the seat is released
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "paid" => Self::Paid,
            "cancelled" => Self::Cancelled,
            _ => Self::Pending,
        }
    }

    /// Strict parse for caller-supplied input; `from_str` is for stored
    /// values and falls back to pending.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "paid" => Some(Self::Paid),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Whether a booking in this status holds its seat.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Pending | Self::Paid)
    }

    /// Allowed operator/state-machine transitions.
    ///
    /// `paid -> pending` is the one path that never exists; a paid booking
    /// can only be cancelled. Writing the same status again is a no-op and
    /// handled before this check.
    pub fn can_transition_to(&self, target: BookingStatus) -> bool {
        match (self, target) {
            (Self::Pending, Self::Paid) => true,
            (Self::Pending, Self::Cancelled) => true,
            (Self::Cancelled, Self::Pending) => true,
            (Self::Paid, Self::Cancelled) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One passenger's reservation of one (bus, seat) pair.
///
/// `amount` is fixed from the destination price at creation time and is
/// never recomputed, even if the destination price changes later.
#[derive(Debug, Clone)]
pub struct Booking {
    /// UUIDv4, also used as the payment gateway client reference
    pub id: String,
    pub full_name: String,
    pub passenger_class: Option<String>,
    pub email: Option<String>,
    pub phone: String,
    pub emergency_contact: Option<String>,
    pub bus_id: i32,
    pub seat_number: i32,
    pub destination_id: i32,
    pub pickup_point_id: i32,
    pub referral_id: Option<i32>,
    /// Amount charged, in minor currency units
    pub amount: i64,
    pub status: BookingStatus,
    /// Gateway transaction reference, set when payment is confirmed
    pub payment_reference: Option<String>,
    pub receipt_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Passenger and trip details for a new booking.
#[derive(Debug, Clone)]
pub struct BookingDetails {
    pub full_name: String,
    pub passenger_class: Option<String>,
    pub email: Option<String>,
    pub phone: String,
    pub emergency_contact: Option<String>,
    pub pickup_point_id: i32,
    pub destination_id: i32,
    pub referral_id: Option<i32>,
}

impl Booking {
    pub fn new(bus_id: i32, seat_number: i32, details: BookingDetails, amount: i64) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            full_name: details.full_name,
            passenger_class: details.passenger_class,
            email: details.email,
            phone: details.phone,
            emergency_contact: details.emergency_contact,
            bus_id,
            seat_number,
            destination_id: details.destination_id,
            pickup_point_id: details.pickup_point_id,
            referral_id: details.referral_id,
            amount,
            status: BookingStatus::Pending,
            payment_reference: None,
            receipt_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Confirm payment, recording the gateway reference and receipt.
    pub fn mark_paid(&mut self, payment_reference: String, receipt_url: Option<String>) {
        self.status = BookingStatus::Paid;
        self.payment_reference = Some(payment_reference);
        if receipt_url.is_some() {
            self.receipt_url = receipt_url;
        }
        self.updated_at = Utc::now();
    }

    /// Operator-confirmed payment; no gateway reference to record.
    pub fn confirm_paid(&mut self) {
        self.status = BookingStatus::Paid;
        self.updated_at = Utc::now();
    }

    /// Record gateway metadata without a lifecycle change (unrecognized
    /// provider status).
    pub fn record_payment_metadata(&mut self, payment_reference: String, receipt_url: Option<String>) {
        self.payment_reference = Some(payment_reference);
        if receipt_url.is_some() {
            self.receipt_url = receipt_url;
        }
        self.updated_at = Utc::now();
    }

    /// Cancel this booking, releasing the seat.
    pub fn cancel(&mut self) {
        self.status = BookingStatus::Cancelled;
        self.updated_at = Utc::now();
    }

    /// Administrative restore of a cancelled booking back to pending.
    pub fn restore(&mut self) {
        self.status = BookingStatus::Pending;
        self.updated_at = Utc::now();
    }

    /// Whether this booking currently holds its seat.
    pub fn is_live(&self) -> bool {
        self.status.is_live()
    }

    /// Short reference for SMS / receipts (first segment of the UUID).
    pub fn short_reference(&self) -> &str {
        self.id.split('-').next().unwrap_or(&self.id)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_details() -> BookingDetails {
        BookingDetails {
            full_name: "Ama Mensah".to_string(),
            passenger_class: Some("Level 200".to_string()),
            email: Some("ama@example.com".to_string()),
            phone: "+233200000001".to_string(),
            emergency_contact: None,
            pickup_point_id: 1,
            destination_id: 1,
            referral_id: None,
        }
    }

    fn sample_booking() -> Booking {
        Booking::new(1, 5, sample_details(), 15000)
    }

    #[test]
    fn new_booking_is_pending() {
        let b = sample_booking();
        assert_eq!(b.status, BookingStatus::Pending);
        assert!(b.is_live());
        assert_eq!(b.amount, 15000);
        assert!(b.payment_reference.is_none());
    }

    #[test]
    fn mark_paid_sets_reference_and_receipt() {
        let mut b = sample_booking();
        b.mark_paid("TXN-42".to_string(), Some("https://pay.example/r/42".to_string()));
        assert_eq!(b.status, BookingStatus::Paid);
        assert_eq!(b.payment_reference.as_deref(), Some("TXN-42"));
        assert_eq!(b.receipt_url.as_deref(), Some("https://pay.example/r/42"));
        assert!(b.is_live());
    }

    #[test]
    fn metadata_only_keeps_status_pending() {
        let mut b = sample_booking();
        b.record_payment_metadata("TXN-43".to_string(), None);
        assert_eq!(b.status, BookingStatus::Pending);
        assert_eq!(b.payment_reference.as_deref(), Some("TXN-43"));
    }

    #[test]
    fn cancel_releases_seat() {
        let mut b = sample_booking();
        b.cancel();
        assert_eq!(b.status, BookingStatus::Cancelled);
        assert!(!b.is_live());
    }

    #[test]
    fn restore_returns_to_pending() {
        let mut b = sample_booking();
        b.cancel();
        b.restore();
        assert_eq!(b.status, BookingStatus::Pending);
        assert!(b.is_live());
    }

    #[test]
    fn paid_never_goes_back_to_pending() {
        assert!(!BookingStatus::Paid.can_transition_to(BookingStatus::Pending));
        assert!(BookingStatus::Paid.can_transition_to(BookingStatus::Cancelled));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Paid));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
        assert!(BookingStatus::Cancelled.can_transition_to(BookingStatus::Pending));
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Paid));
    }

    #[test]
    fn status_roundtrip() {
        for status in [BookingStatus::Pending, BookingStatus::Paid, BookingStatus::Cancelled] {
            assert_eq!(BookingStatus::from_str(status.as_str()), status);
        }
        // unknown stored value falls back to pending
        assert_eq!(BookingStatus::from_str("refunded"), BookingStatus::Pending);
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        assert_eq!(BookingStatus::parse("paid"), Some(BookingStatus::Paid));
        assert_eq!(BookingStatus::parse("refunded"), None);
        assert_eq!(BookingStatus::parse("Paid"), None);
    }

    #[test]
    fn short_reference_is_uuid_prefix() {
        let b = sample_booking();
        assert_eq!(b.short_reference().len(), 8);
        assert!(b.id.starts_with(b.short_reference()));
    }
}
