//! Order types.

use crate::catalog::Price;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Customer name used for orders placed from the admin view.
pub const DEFAULT_CUSTOMER_NAME: &str = "Store Admin";

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// The customer placing the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
}

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub items: Vec<OrderItem>,
    pub customer: Customer,
}

impl OrderRequest {
    /// Build a single-item order.
    ///
    /// `quantity` is clamped to at least 1.
    pub fn single(product_id: impl Into<ProductId>, quantity: u32, customer: impl Into<String>) -> Self {
        Self {
            items: vec![OrderItem {
                product_id: product_id.into(),
                quantity: quantity.max(1),
            }],
            customer: Customer {
                name: customer.into(),
            },
        }
    }

    /// Check the request before it goes on the wire.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.items.is_empty() {
            return Err(CommerceError::EmptyOrder);
        }
        if let Some(item) = self.items.iter().find(|i| i.quantity == 0) {
            return Err(CommerceError::InvalidQuantity {
                product_id: item.product_id.get(),
                quantity: item.quantity,
            });
        }
        if self.customer.name.trim().is_empty() {
            return Err(CommerceError::MissingCustomer);
        }
        Ok(())
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

/// Parse a quantity input field.
///
/// Reads an optional sign and the leading digits after trimming, so `"2.7"`
/// gives 2 and `"3 units"` gives 3. Empty or non-numeric input gives 1.
/// The result is never below 1.
pub fn parse_quantity(raw: &str) -> u32 {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if digits.is_empty() || negative {
        return 1;
    }

    match digits.parse::<u64>() {
        Ok(n) => n.clamp(1, u64::from(u32::MAX)) as u32,
        // Too many digits for u64.
        Err(_) => u32::MAX,
    }
}

/// Order as echoed back by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OrderSummary {
    /// Number or numeric string, like a product price.
    #[serde(default)]
    pub total: Option<Price>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of a successful `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OrderResponse {
    #[serde(default)]
    pub order: Option<OrderSummary>,
}

/// Outcome of a successful order submission.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderResult {
    /// Order total, when the backend reported one.
    pub total: Option<Price>,
}

impl OrderResult {
    /// Total with two decimals, or a dash when unknown.
    pub fn total_display(&self) -> String {
        match &self.total {
            Some(total) => total.display(),
            None => "—".to_string(),
        }
    }
}

impl From<OrderResponse> for OrderResult {
    fn from(resp: OrderResponse) -> Self {
        Self {
            total: resp.order.and_then(|o| o.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity_clamps_to_one() {
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-4"), 1);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("   "), 1);
    }

    #[test]
    fn test_parse_quantity_reads_leading_integer() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("2.7"), 2);
        assert_eq!(parse_quantity("5 caixas"), 5);
        assert_eq!(parse_quantity("+6"), 6);
    }

    #[test]
    fn test_parse_quantity_non_numeric_defaults_to_one() {
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("x3"), 1);
    }

    #[test]
    fn test_parse_quantity_saturates() {
        assert_eq!(parse_quantity("99999999999"), u32::MAX);
        assert_eq!(parse_quantity("999999999999999999999999"), u32::MAX);
    }

    #[test]
    fn test_single_order_wire_shape() {
        let order = OrderRequest::single(1, 2, DEFAULT_CUSTOMER_NAME);
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": [{ "product_id": 1, "quantity": 2 }],
                "customer": { "name": "Store Admin" }
            })
        );
        assert_eq!(order.total_quantity(), 2);
    }

    #[test]
    fn test_single_order_clamps_zero_quantity() {
        let order = OrderRequest::single(9, 0, "Admin");
        assert_eq!(order.items[0].quantity, 1);
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_orders() {
        let mut order = OrderRequest::single(1, 1, "Admin");
        order.items[0].quantity = 0;
        assert_eq!(
            order.validate(),
            Err(CommerceError::InvalidQuantity {
                product_id: 1,
                quantity: 0
            })
        );

        let order = OrderRequest::single(1, 1, "  ");
        assert_eq!(order.validate(), Err(CommerceError::MissingCustomer));

        let order = OrderRequest {
            items: Vec::new(),
            customer: Customer {
                name: "Admin".into(),
            },
        };
        assert_eq!(order.validate(), Err(CommerceError::EmptyOrder));
    }

    #[test]
    fn test_order_response_total() {
        let resp: OrderResponse =
            serde_json::from_str(r#"{"order":{"id":10,"total":11.0,"status":"pending"}}"#).unwrap();
        let result = OrderResult::from(resp);
        assert_eq!(result.total, Some(Price::Amount(11.0)));
        assert_eq!(result.total_display(), "11.00");
    }

    #[test]
    fn test_order_response_string_total() {
        let resp: OrderResponse =
            serde_json::from_str(r#"{"order":{"id":10,"total":"11.5","status":"pending"}}"#)
                .unwrap();
        let result = OrderResult::from(resp);
        assert_eq!(result.total, Some(Price::Text("11.5".into())));
        assert_eq!(result.total_display(), "11.50");

        let resp: OrderResponse =
            serde_json::from_str(r#"{"order":{"total":"a combinar"}}"#).unwrap();
        assert_eq!(OrderResult::from(resp).total_display(), "a combinar");
    }

    #[test]
    fn test_order_response_null_total() {
        let resp: OrderResponse = serde_json::from_str(r#"{"order":{"total":null}}"#).unwrap();
        assert_eq!(OrderResult::from(resp).total_display(), "—");
    }

    #[test]
    fn test_order_response_without_total() {
        let resp: OrderResponse = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        let result = OrderResult::from(resp);
        assert_eq!(result.total, None);
        assert_eq!(result.total_display(), "—");
    }
}
