//! Ticket purchase endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use booking::{InMemoryPaymentService, InMemorySeatReservationService, TicketService};
use domain::{AccountId, PurchaseResult, TicketCategory, TicketError, TicketRequest};
use serde_json::Value;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub ticket_service: TicketService<InMemorySeatReservationService, InMemoryPaymentService>,
    pub seat_reservation: InMemorySeatReservationService,
    pub payment: InMemoryPaymentService,
}

/// POST /purchases: validate a ticket purchase and dispatch it.
///
/// The body is read as untyped JSON so each malformed field maps to its own
/// rejection reason instead of a generic deserialization failure. A malformed
/// account id is held back until the batch size has been checked.
#[tracing::instrument(skip(state, body))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<PurchaseResult>, ApiError> {
    let requests = parse_ticket_requests(body.get("ticket_requests"))?;
    let account_id = parse_account_id(body.get("account_id")).and_then(AccountId::try_from);

    let result = state
        .ticket_service
        .purchase_parsed_tickets(account_id, &requests)
        .await?;

    Ok(Json(result))
}

fn parse_account_id(value: Option<&Value>) -> Result<i64, TicketError> {
    value
        .and_then(Value::as_i64)
        .ok_or_else(|| TicketError::InvalidAccount(describe(value)))
}

fn parse_ticket_requests(value: Option<&Value>) -> Result<Vec<TicketRequest>, TicketError> {
    match value {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(parse_ticket_request).collect(),
        Some(other) => Err(TicketError::InvalidRequestType(format!(
            "expected a list of ticket requests, got {other}"
        ))),
    }
}

fn parse_ticket_request(value: &Value) -> Result<TicketRequest, TicketError> {
    let fields = value
        .as_object()
        .ok_or_else(|| TicketError::InvalidRequestType(value.to_string()))?;

    let category = fields
        .get("category")
        .and_then(Value::as_str)
        .ok_or_else(|| TicketError::InvalidCategory(describe(fields.get("category"))))?;

    match fields.get("quantity").and_then(Value::as_i64) {
        Some(quantity) => TicketRequest::parse(category, quantity),
        None => {
            category.parse::<TicketCategory>()?;
            Err(TicketError::InvalidQuantity(describe(fields.get("quantity"))))
        }
    }
}

fn describe(value: Option<&Value>) -> String {
    value.map_or_else(|| "missing".to_string(), Value::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_account_id() {
        assert_eq!(parse_account_id(Some(&json!(6))), Ok(6));
        assert_eq!(parse_account_id(Some(&json!(-4))), Ok(-4));

        for value in [json!(null), json!(true), json!("test"), json!([]), json!({}), json!(1.5)] {
            assert!(matches!(
                parse_account_id(Some(&value)),
                Err(TicketError::InvalidAccount(_))
            ));
        }
        assert_eq!(
            parse_account_id(None),
            Err(TicketError::InvalidAccount("missing".to_string()))
        );
    }

    #[test]
    fn test_parse_ticket_request() {
        let request = parse_ticket_request(&json!({ "category": "CHILD", "quantity": 2 })).unwrap();
        assert_eq!(request.category(), TicketCategory::Child);
        assert_eq!(request.quantity(), 2);
    }

    #[test]
    fn test_non_object_request_is_wrong_type() {
        for value in [json!(null), json!("ADULT"), json!(1), json!(["ADULT", 1])] {
            assert!(matches!(
                parse_ticket_request(&value),
                Err(TicketError::InvalidRequestType(_))
            ));
        }
    }

    #[test]
    fn test_invalid_categories() {
        for category in [
            json!(null),
            json!(true),
            json!([]),
            json!({}),
            json!(0),
            json!(1),
            json!("test"),
            json!("CHLD"),
            json!(""),
        ] {
            let value = json!({ "category": category, "quantity": 1 });
            assert!(
                matches!(
                    parse_ticket_request(&value),
                    Err(TicketError::InvalidCategory(_))
                ),
                "{value}"
            );
        }

        assert!(matches!(
            parse_ticket_request(&json!({ "quantity": 1 })),
            Err(TicketError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_invalid_quantities() {
        for quantity in [
            json!(null),
            json!(true),
            json!([]),
            json!({}),
            json!(0),
            json!(-14),
            json!("test"),
            json!(""),
            json!(2.5),
        ] {
            let value = json!({ "category": "ADULT", "quantity": quantity });
            assert!(
                matches!(
                    parse_ticket_request(&value),
                    Err(TicketError::InvalidQuantity(_))
                ),
                "{value}"
            );
        }

        assert!(matches!(
            parse_ticket_request(&json!({ "category": "ADULT" })),
            Err(TicketError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_category_checked_before_quantity() {
        let value = json!({ "category": "CHLD", "quantity": "test" });
        assert!(matches!(
            parse_ticket_request(&value),
            Err(TicketError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_missing_requests_is_empty() {
        assert_eq!(parse_ticket_requests(None), Ok(Vec::new()));
    }

    #[test]
    fn test_non_list_requests_is_wrong_type() {
        assert!(matches!(
            parse_ticket_requests(Some(&json!({ "category": "ADULT", "quantity": 1 }))),
            Err(TicketError::InvalidRequestType(_))
        ));
    }
}
