//! Booking error types.

use domain::TicketError;
use thiserror::Error;

/// Errors that can occur while purchasing tickets.
#[derive(Debug, Error)]
pub enum BookingError {
    /// The purchase failed validation; no service was called.
    #[error("Purchase rejected: {0}")]
    Rejected(#[from] TicketError),

    /// Seat reservation service error.
    #[error("Seat reservation service error: {0}")]
    SeatReservationService(String),

    /// Payment service error.
    #[error("Payment service error: {0}")]
    PaymentService(String),
}

impl BookingError {
    /// Returns true if the caller's request was at fault.
    pub fn is_rejection(&self) -> bool {
        matches!(self, BookingError::Rejected(_))
    }

    /// Returns the rejection reason, if this is a rejection.
    pub fn rejection(&self) -> Option<&TicketError> {
        match self {
            BookingError::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

/// Convenience type alias for booking results.
pub type Result<T> = std::result::Result<T, BookingError>;
