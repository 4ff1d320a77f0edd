//! External service traits and in-memory implementations.

pub mod payment;
pub mod seat_reservation;

pub use payment::{InMemoryPaymentService, Payment, TicketPaymentService};
pub use seat_reservation::{InMemorySeatReservationService, SeatReservation, SeatReservationService};
