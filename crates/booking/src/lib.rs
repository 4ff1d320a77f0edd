//! Ticket purchase orchestration.
//!
//! This crate connects the purchase rules in `domain` to the two external
//! services a purchase needs:
//! 1. Reserve seats
//! 2. Take payment
//!
//! Both calls happen only after the whole purchase has been validated. There
//! is no compensation: if payment fails, the seat reservation stands.

pub mod error;
pub mod services;
pub mod ticket_service;

pub use error::BookingError;
pub use services::{
    InMemoryPaymentService, InMemorySeatReservationService, Payment, SeatReservation,
    SeatReservationService, TicketPaymentService,
};
pub use ticket_service::TicketService;
