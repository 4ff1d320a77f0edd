//! Value objects for the ticket domain.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TicketError;

/// Category of an admission ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    /// All categories, in display order.
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Adult,
        TicketCategory::Child,
        TicketCategory::Infant,
    ];

    /// Price of a single ticket of this category.
    pub fn unit_price(&self) -> u32 {
        match self {
            TicketCategory::Adult => 20,
            TicketCategory::Child => 10,
            TicketCategory::Infant => 0,
        }
    }

    /// Returns true if a ticket of this category needs its own seat.
    ///
    /// Infants sit on an adult's lap.
    pub fn occupies_seat(&self) -> bool {
        match self {
            TicketCategory::Adult | TicketCategory::Child => true,
            TicketCategory::Infant => false,
        }
    }

    /// Returns the category name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::Adult => "ADULT",
            TicketCategory::Child => "CHILD",
            TicketCategory::Infant => "INFANT",
        }
    }
}

impl std::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketCategory {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(TicketCategory::Adult),
            "CHILD" => Ok(TicketCategory::Child),
            "INFANT" => Ok(TicketCategory::Infant),
            other => Err(TicketError::InvalidCategory(format!("{other:?}"))),
        }
    }
}

/// Identifier of the purchasing account. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(u64);

impl AccountId {
    /// Validates a raw account id.
    pub fn new(raw: i64) -> Result<Self, TicketError> {
        u64::try_from(raw)
            .ok()
            .filter(|id| *id >= 1)
            .map(Self)
            .ok_or_else(|| TicketError::InvalidAccount(raw.to_string()))
    }

    /// Returns the underlying id.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for AccountId {
    type Error = TicketError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

/// A request for a number of tickets of one category.
///
/// Only constructible with a positive quantity, and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TicketRequest {
    category: TicketCategory,
    quantity: u32,
}

impl TicketRequest {
    /// Creates a ticket request.
    pub fn new(category: TicketCategory, quantity: u32) -> Result<Self, TicketError> {
        if quantity == 0 {
            return Err(TicketError::InvalidQuantity(quantity.to_string()));
        }
        Ok(Self { category, quantity })
    }

    /// Creates a ticket request from unvalidated input.
    ///
    /// The category is checked before the quantity.
    pub fn parse(category: &str, quantity: i64) -> Result<Self, TicketError> {
        let category: TicketCategory = category.parse()?;
        let quantity = u32::try_from(quantity)
            .map_err(|_| TicketError::InvalidQuantity(quantity.to_string()))?;
        Self::new(category, quantity)
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Seats needed for this request.
    pub fn seats(&self) -> u32 {
        if self.category.occupies_seat() {
            self.quantity
        } else {
            0
        }
    }

    /// Total price of this request, widened so large quantities cannot overflow.
    pub fn cost(&self) -> u64 {
        u64::from(self.quantity) * u64::from(self.category.unit_price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_exact_names() {
        assert_eq!("ADULT".parse::<TicketCategory>(), Ok(TicketCategory::Adult));
        assert_eq!("CHILD".parse::<TicketCategory>(), Ok(TicketCategory::Child));
        assert_eq!("INFANT".parse::<TicketCategory>(), Ok(TicketCategory::Infant));
    }

    #[test]
    fn test_category_rejects_unknown_names() {
        for raw in ["", "test", "CHLD", "adult", "Adult", " ADULT", "SENIOR"] {
            let err = raw.parse::<TicketCategory>().unwrap_err();
            assert!(matches!(err, TicketError::InvalidCategory(_)), "{raw}");
        }
    }

    #[test]
    fn test_category_display_roundtrips_through_from_str() {
        for category in TicketCategory::ALL {
            assert_eq!(category.to_string().parse::<TicketCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_category_pricing() {
        assert_eq!(TicketCategory::Adult.unit_price(), 20);
        assert_eq!(TicketCategory::Child.unit_price(), 10);
        assert_eq!(TicketCategory::Infant.unit_price(), 0);
    }

    #[test]
    fn test_only_infants_have_no_seat() {
        assert!(TicketCategory::Adult.occupies_seat());
        assert!(TicketCategory::Child.occupies_seat());
        assert!(!TicketCategory::Infant.occupies_seat());
    }

    #[test]
    fn test_category_serializes_uppercase() {
        let json = serde_json::to_string(&TicketCategory::Infant).unwrap();
        assert_eq!(json, "\"INFANT\"");
    }

    #[test]
    fn test_account_id_accepts_positive() {
        for raw in [1, 3, 6, 191, i64::MAX] {
            let id = AccountId::new(raw).unwrap();
            assert_eq!(id.as_u64(), raw as u64);
        }
    }

    #[test]
    fn test_account_id_rejects_zero_and_negative() {
        for raw in [0, -1, -4, i64::MIN] {
            assert_eq!(
                AccountId::new(raw),
                Err(TicketError::InvalidAccount(raw.to_string()))
            );
            assert_eq!(AccountId::try_from(raw), AccountId::new(raw));
        }
    }

    #[test]
    fn test_ticket_request_accessors() {
        let request = TicketRequest::new(TicketCategory::Child, 4).unwrap();
        assert_eq!(request.category(), TicketCategory::Child);
        assert_eq!(request.quantity(), 4);
    }

    #[test]
    fn test_ticket_request_rejects_zero_quantity() {
        assert_eq!(
            TicketRequest::new(TicketCategory::Adult, 0),
            Err(TicketError::InvalidQuantity("0".to_string()))
        );
    }

    #[test]
    fn test_ticket_request_parse() {
        let request = TicketRequest::parse("ADULT", 8).unwrap();
        assert_eq!(request.category(), TicketCategory::Adult);
        assert_eq!(request.quantity(), 8);

        assert!(matches!(
            TicketRequest::parse("ADULT", -14),
            Err(TicketError::InvalidQuantity(_))
        ));
        assert!(matches!(
            TicketRequest::parse("ADULT", i64::from(u32::MAX) + 1),
            Err(TicketError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_ticket_request_parse_checks_category_first() {
        assert!(matches!(
            TicketRequest::parse("CHLD", 0),
            Err(TicketError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_infant_request_needs_no_seats_and_is_free() {
        let request = TicketRequest::new(TicketCategory::Infant, 3).unwrap();
        assert_eq!(request.seats(), 0);
        assert_eq!(request.cost(), 0);
    }

    #[test]
    fn test_request_cost_does_not_overflow() {
        let request = TicketRequest::new(TicketCategory::Adult, u32::MAX).unwrap();
        assert_eq!(request.cost(), u64::from(u32::MAX) * 20);
    }
}
