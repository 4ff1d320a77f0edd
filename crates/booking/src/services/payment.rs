//! Payment service trait and in-memory implementation.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use domain::AccountId;

use crate::error::BookingError;

/// A payment taken from an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payment {
    /// The account charged.
    pub account_id: AccountId,
    /// Amount charged.
    pub amount: u32,
}

/// Trait for ticket payment operations.
#[async_trait]
pub trait TicketPaymentService: Send + Sync {
    /// Charges an account.
    async fn make_payment(&self, account_id: AccountId, amount: u32) -> Result<(), BookingError>;
}

#[derive(Debug, Default)]
struct InMemoryPaymentState {
    payments: Vec<Payment>,
    fail_on_payment: bool,
}

/// In-memory payment service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentService {
    state: Arc<RwLock<InMemoryPaymentState>>,
}

impl InMemoryPaymentService {
    /// Creates a new in-memory payment service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the service to fail on subsequent payment calls.
    pub fn set_fail_on_payment(&self, fail: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .fail_on_payment = fail;
    }

    /// Returns the number of payments taken.
    pub fn payment_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .payments
            .len()
    }

    /// Returns all payments in the order they were taken.
    pub fn payments(&self) -> Vec<Payment> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .payments
            .clone()
    }

    /// Returns the sum of all payments taken.
    pub fn total_collected(&self) -> u64 {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .payments
            .iter()
            .map(|p| u64::from(p.amount))
            .sum()
    }
}

#[async_trait]
impl TicketPaymentService for InMemoryPaymentService {
    async fn make_payment(&self, account_id: AccountId, amount: u32) -> Result<(), BookingError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if state.fail_on_payment {
            return Err(BookingError::PaymentService("Payment declined".to_string()));
        }

        state.payments.push(Payment { account_id, amount });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_make_payment_records_payment() {
        let service = InMemoryPaymentService::new();
        let account_id = AccountId::new(3).unwrap();

        service.make_payment(account_id, 30).await.unwrap();

        assert_eq!(service.payment_count(), 1);
        assert_eq!(
            service.payments(),
            vec![Payment {
                account_id,
                amount: 30
            }]
        );
    }

    #[tokio::test]
    async fn test_fail_on_payment() {
        let service = InMemoryPaymentService::new();
        service.set_fail_on_payment(true);

        let result = service.make_payment(AccountId::new(1).unwrap(), 20).await;
        assert!(matches!(result, Err(BookingError::PaymentService(_))));
        assert_eq!(service.payment_count(), 0);
    }

    #[tokio::test]
    async fn test_total_collected() {
        let service = InMemoryPaymentService::new();
        let account_id = AccountId::new(1).unwrap();

        service.make_payment(account_id, 20).await.unwrap();
        service.make_payment(account_id, 100).await.unwrap();
        service.make_payment(account_id, 0).await.unwrap();

        assert_eq!(service.payment_count(), 3);
        assert_eq!(service.total_collected(), 120);
    }
}
