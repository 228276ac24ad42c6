use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use utoipa::ToSchema;
use uuid::Uuid;

/// A single line item within an [Order]. `line_total` is supplied by the
/// caller alongside `quantity` and `unit_price`; the server stores it as-is.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct OrderItem {
    pub name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// A purchase order placed by an owner. `total` is the caller-supplied
/// aggregate and is never recomputed from `items`; the wire field `owner`
/// carries the owner id.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub owner: Uuid,
    pub date: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_total_serializes_with_two_decimal_places() {
        let order = Order {
            id: Uuid::new_v4(),
            owner: Uuid::new_v4(),
            date: Utc::now(),
            items: vec![OrderItem {
                name: "Vacina".to_string(),
                quantity: 1,
                unit_price: Decimal::from_str("100.00").unwrap(),
                line_total: Decimal::from_str("100.00").unwrap(),
            }],
            total: Decimal::from_str("100.00").unwrap(),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["total"], serde_json::json!("100.00"));
        assert_eq!(json["items"][0]["unit_price"], serde_json::json!("100.00"));
    }

    #[test]
    fn test_items_deserialize_from_numbers_or_strings() {
        let item: OrderItem = serde_json::from_str(
            r#"{"name": "Vacina", "quantity": 1, "unit_price": 100.0, "line_total": "100.00"}"#,
        )
        .unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.unit_price, Decimal::from_str("100").unwrap());
        assert_eq!(item.line_total, Decimal::from_str("100.00").unwrap());
    }
}
