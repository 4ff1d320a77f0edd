//! Domain error types.

use thiserror::Error;

/// Reasons a ticket purchase is rejected.
///
/// Every variant is a caller error: it is reported before any seat is
/// reserved or any payment is taken, and it is never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    /// Account id is not a positive integer.
    #[error("Invalid account id: {0} (must be a positive integer)")]
    InvalidAccount(String),

    /// A request element is not a ticket request.
    #[error("Invalid ticket request: {0}")]
    InvalidRequestType(String),

    /// Unknown ticket category.
    #[error("Invalid ticket category: {0} (expected ADULT, CHILD or INFANT)")]
    InvalidCategory(String),

    /// Quantity is not a positive integer.
    #[error("Invalid ticket quantity: {0} (must be a positive integer)")]
    InvalidQuantity(String),

    /// The batch holds no tickets at all.
    #[error("No tickets requested")]
    NoTicketsRequested,

    /// The batch exceeds the per-purchase cap.
    #[error("Too many tickets: {requested} requested, at most {max} per purchase")]
    TooManyTickets { requested: u64, max: u32 },

    /// Child or infant tickets without an adult ticket.
    #[error("Child and infant tickets cannot be purchased without an adult ticket")]
    AdultRequired,
}

impl TicketError {
    /// Returns a stable reason code for this rejection.
    pub fn reason_code(&self) -> &'static str {
        match self {
            TicketError::InvalidAccount(_) => "INVALID_ACCOUNT",
            TicketError::InvalidRequestType(_) => "INVALID_REQUEST_TYPE",
            TicketError::InvalidCategory(_) => "INVALID_CATEGORY",
            TicketError::InvalidQuantity(_) => "INVALID_QUANTITY",
            TicketError::NoTicketsRequested => "NO_TICKETS_REQUESTED",
            TicketError::TooManyTickets { .. } => "TOO_MANY_TICKETS",
            TicketError::AdultRequired => "ADULT_REQUIRED",
        }
    }
}
