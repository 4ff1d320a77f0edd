//! Domain layer for ticket purchases.
//!
//! This crate provides the pure purchase rules:
//! - TicketCategory with its fixed price and seat eligibility
//! - TicketRequest and AccountId value objects, validated on construction
//! - evaluate_purchase, which validates a batch and derives seats and cost
//!
//! Nothing here performs I/O; dispatching to seat reservation and payment
//! lives in the `booking` crate.

pub mod error;
pub mod ticket;

pub use error::TicketError;
pub use ticket::{
    AccountId, MAX_TICKETS_PER_PURCHASE, PurchaseResult, TicketCategory, TicketRequest,
    TicketTally, evaluate_parsed_purchase, evaluate_purchase,
};
