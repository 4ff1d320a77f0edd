//! Purchase validation and pricing.
//!
//! A batch of ticket requests is validated as a whole before anything is
//! priced. Rules are checked in a fixed order and the first failure wins:
//!
//! 1. the batch holds between 1 and [`MAX_TICKETS_PER_PURCHASE`] tickets
//! 2. the account id is positive
//! 3. child and infant tickets come with at least one adult ticket
//!
//! An empty or oversized batch is therefore rejected the same way whatever
//! the account.

use serde::{Deserialize, Serialize};

use crate::error::TicketError;

use super::value_objects::{AccountId, TicketCategory, TicketRequest};

/// Maximum number of tickets, infants included, in a single purchase.
pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// Seats and cost derived from a valid purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PurchaseResult {
    /// Seats to reserve. Infants are not counted.
    pub total_seats: u32,

    /// Amount to charge.
    pub total_cost: u32,
}

/// Per-category ticket counts for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicketTally {
    pub adults: u64,
    pub children: u64,
    pub infants: u64,
}

impl TicketTally {
    /// Sums the quantities of a batch by category.
    pub fn from_requests(requests: &[TicketRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut tally, request| {
            let quantity = u64::from(request.quantity());
            match request.category() {
                TicketCategory::Adult => tally.adults += quantity,
                TicketCategory::Child => tally.children += quantity,
                TicketCategory::Infant => tally.infants += quantity,
            }
            tally
        })
    }

    /// Total tickets across all categories.
    pub fn total(&self) -> u64 {
        self.adults + self.children + self.infants
    }

    /// Number of tickets of the given category.
    pub fn count(&self, category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Adult => self.adults,
            TicketCategory::Child => self.children,
            TicketCategory::Infant => self.infants,
        }
    }
}

/// Validates a purchase and derives its seats and cost.
///
/// Returns the validated account id alongside the result so callers can
/// dispatch without re-checking it.
pub fn evaluate_purchase(
    account_id: i64,
    requests: &[TicketRequest],
) -> Result<(AccountId, PurchaseResult), TicketError> {
    evaluate_parsed_purchase(AccountId::try_from(account_id), requests)
}

/// Like [`evaluate_purchase`], for callers that parse the account id
/// themselves. A failed parse is reported in rule order, after the batch size.
#[tracing::instrument(skip(account_id, requests), fields(request_count = requests.len()))]
pub fn evaluate_parsed_purchase(
    account_id: Result<AccountId, TicketError>,
    requests: &[TicketRequest],
) -> Result<(AccountId, PurchaseResult), TicketError> {
    let tally = TicketTally::from_requests(requests);

    check_ticket_count(&tally)?;
    let account_id = account_id?;
    check_adult_present(&tally)?;

    let result = price(requests);
    tracing::debug!(
        %account_id,
        total_seats = result.total_seats,
        total_cost = result.total_cost,
        "purchase evaluated"
    );
    Ok((account_id, result))
}

fn check_ticket_count(tally: &TicketTally) -> Result<(), TicketError> {
    let requested = tally.total();
    if requested == 0 {
        return Err(TicketError::NoTicketsRequested);
    }
    if requested > u64::from(MAX_TICKETS_PER_PURCHASE) {
        return Err(TicketError::TooManyTickets {
            requested,
            max: MAX_TICKETS_PER_PURCHASE,
        });
    }
    Ok(())
}

fn check_adult_present(tally: &TicketTally) -> Result<(), TicketError> {
    if tally.adults == 0 && (tally.children > 0 || tally.infants > 0) {
        return Err(TicketError::AdultRequired);
    }
    Ok(())
}

// The batch holds at most MAX_TICKETS_PER_PURCHASE tickets here, so the
// totals fit in u32.
fn price(requests: &[TicketRequest]) -> PurchaseResult {
    let (seats, cost) = requests.iter().fold((0u64, 0u64), |(seats, cost), request| {
        (seats + u64::from(request.seats()), cost + request.cost())
    });
    PurchaseResult {
        total_seats: u32::try_from(seats).unwrap_or(u32::MAX),
        total_cost: u32::try_from(cost).unwrap_or(u32::MAX),
    }
}
