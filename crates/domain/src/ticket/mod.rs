//! Ticket requests and purchase rules.

mod purchase;
mod value_objects;

pub use purchase::{
    MAX_TICKETS_PER_PURCHASE, PurchaseResult, TicketTally, evaluate_parsed_purchase,
    evaluate_purchase,
};
pub use value_objects::{AccountId, TicketCategory, TicketRequest};
