//! Seat reservation service trait and in-memory implementation.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use domain::AccountId;

use crate::error::BookingError;

/// A seat reservation made for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatReservation {
    /// The account the seats are held for.
    pub account_id: AccountId,
    /// Number of seats reserved.
    pub number_of_seats: u32,
}

/// Trait for seat reservation operations.
///
/// Implementations own seat inventory and must serialize concurrent
/// reservations against it themselves.
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    /// Reserves seats for an account.
    async fn reserve_seat(
        &self,
        account_id: AccountId,
        number_of_seats: u32,
    ) -> Result<(), BookingError>;
}

#[derive(Debug, Default)]
struct InMemorySeatState {
    reservations: Vec<SeatReservation>,
    fail_on_reserve: bool,
}

/// In-memory seat reservation service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemorySeatReservationService {
    state: Arc<RwLock<InMemorySeatState>>,
}

impl InMemorySeatReservationService {
    /// Creates a new in-memory seat reservation service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the service to fail on subsequent reserve calls.
    pub fn set_fail_on_reserve(&self, fail: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .fail_on_reserve = fail;
    }

    /// Returns the number of reservations made.
    pub fn reservation_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .reservations
            .len()
    }

    /// Returns all reservations in the order they were made.
    pub fn reservations(&self) -> Vec<SeatReservation> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .reservations
            .clone()
    }
}

#[async_trait]
impl SeatReservationService for InMemorySeatReservationService {
    async fn reserve_seat(
        &self,
        account_id: AccountId,
        number_of_seats: u32,
    ) -> Result<(), BookingError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if state.fail_on_reserve {
            return Err(BookingError::SeatReservationService(
                "Seat booking unavailable".to_string(),
            ));
        }

        state.reservations.push(SeatReservation {
            account_id,
            number_of_seats,
        });
        Ok(())
    }
}
