//! Ticket purchasing over seat reservation and payment services.

use domain::{
    AccountId, PurchaseResult, TicketCategory, TicketError, TicketRequest, TicketTally,
    evaluate_parsed_purchase,
};

use crate::error::BookingError;
use crate::services::payment::TicketPaymentService;
use crate::services::seat_reservation::SeatReservationService;

/// Validates ticket purchases and dispatches them to external services.
///
/// A purchase is validated as a whole before any service is called. Once it
/// passes, seats are reserved and then payment is taken, each exactly once.
/// A failing service call is returned as-is; earlier calls are not undone.
pub struct TicketService<R, P>
where
    R: SeatReservationService,
    P: TicketPaymentService,
{
    seat_reservation: R,
    payment: P,
}

impl<R, P> TicketService<R, P>
where
    R: SeatReservationService,
    P: TicketPaymentService,
{
    /// Creates a new ticket service.
    pub fn new(seat_reservation: R, payment: P) -> Self {
        Self {
            seat_reservation,
            payment,
        }
    }

    /// Purchases tickets for an account.
    ///
    /// Returns the seats reserved and the amount charged.
    pub async fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketRequest],
    ) -> Result<PurchaseResult, BookingError> {
        self.purchase_parsed_tickets(AccountId::try_from(account_id), requests)
            .await
    }

    /// Purchases tickets for an account id the caller has already parsed.
    ///
    /// A parse failure is only reported once the batch size has been checked.
    #[tracing::instrument(skip(self, account_id, requests), fields(request_count = requests.len()))]
    pub async fn purchase_parsed_tickets(
        &self,
        account_id: Result<AccountId, TicketError>,
        requests: &[TicketRequest],
    ) -> Result<PurchaseResult, BookingError> {
        metrics::counter!("ticket_purchases_total").increment(1);
        let started = std::time::Instant::now();

        let outcome = self.purchase(account_id, requests).await;

        let label = match &outcome {
            Ok(_) => "completed",
            Err(err) if err.is_rejection() => "rejected",
            Err(_) => "failed",
        };
        metrics::histogram!("ticket_purchase_duration_seconds", "outcome" => label)
            .record(started.elapsed().as_secs_f64());
        outcome
    }

    async fn purchase(
        &self,
        account_id: Result<AccountId, TicketError>,
        requests: &[TicketRequest],
    ) -> Result<PurchaseResult, BookingError> {
        let (account_id, result) = match evaluate_parsed_purchase(account_id, requests) {
            Ok(evaluated) => evaluated,
            Err(err) => {
                record_rejection(&err);
                return Err(err.into());
            }
        };

        if let Err(err) = self
            .seat_reservation
            .reserve_seat(account_id, result.total_seats)
            .await
        {
            record_dispatch_failure("seat_reservation", &err);
            return Err(err);
        }

        if let Err(err) = self
            .payment
            .make_payment(account_id, result.total_cost)
            .await
        {
            record_dispatch_failure("payment", &err);
            return Err(err);
        }

        record_tickets_sold(&TicketTally::from_requests(requests));
        tracing::info!(
            %account_id,
            total_seats = result.total_seats,
            total_cost = result.total_cost,
            "tickets purchased"
        );

        Ok(result)
    }
}

fn record_rejection(err: &TicketError) {
    let reason = err.reason_code();
    metrics::counter!("ticket_purchases_rejected_total", "reason" => reason).increment(1);
    tracing::warn!(reason, error = %err, "purchase rejected");
}

fn record_dispatch_failure(collaborator: &'static str, err: &BookingError) {
    metrics::counter!(
        "ticket_purchase_dispatch_failures_total",
        "collaborator" => collaborator
    )
    .increment(1);
    tracing::error!(collaborator, error = %err, "purchase dispatch failed");
}

fn record_tickets_sold(tally: &TicketTally) {
    for category in TicketCategory::ALL {
        let sold = tally.count(category);
        if sold > 0 {
            metrics::counter!("tickets_sold_total", "category" => category.as_str())
                .increment(sold);
        }
    }
}
