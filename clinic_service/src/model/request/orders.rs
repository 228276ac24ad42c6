use clinic_db_client::orders::create::NewOrder;
use models_clinic::{OrderItem, ValidationErrors, validate};
use rust_decimal::Decimal;
use utoipa::ToSchema;
use uuid::Uuid;

use super::pets::invalid_pk;

#[derive(serde::Serialize, serde::Deserialize, Debug, ToSchema)]
pub struct OrderItemRequest {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub unit_price: Option<Decimal>,
    #[schema(value_type = Option<String>)]
    pub line_total: Option<Decimal>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, ToSchema)]
pub struct CreateOrderRequest {
    /// Id of the [Owner](models_clinic::Owner) placing the order
    pub owner: Option<String>,
    /// Defaults to the empty list when omitted
    pub items: Option<Vec<OrderItemRequest>>,
    /// Caller-supplied aggregate; stored as-is, never recomputed from items
    #[schema(value_type = Option<String>)]
    pub total: Option<Decimal>,
    pub notes: Option<String>,
}

fn item_money(
    errors: &mut ValidationErrors,
    item_number: usize,
    field: &str,
    value: Option<Decimal>,
) -> Option<Decimal> {
    let Some(value) = value else {
        errors.add("items", format!("Item {item_number}: {field} is required."));
        return None;
    };

    let mut scratch = ValidationErrors::default();
    match validate::checked_money(&mut scratch, field, value) {
        Some(value) => Some(value),
        None => {
            for message in scratch.messages(field) {
                errors.add("items", format!("Item {item_number}: {field}: {message}"));
            }
            None
        }
    }
}

impl CreateOrderRequest {
    pub fn validate(self) -> Result<NewOrder, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let owner_id = match validate::required_string(&mut errors, "owner", self.owner) {
            Some(raw) => match Uuid::parse_str(&raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.add("owner", invalid_pk(&raw));
                    None
                }
            },
            None => None,
        };

        let mut items = Vec::new();
        for (index, item) in self.items.unwrap_or_default().into_iter().enumerate() {
            let item_number = index + 1;

            let name = match item.name {
                Some(name) if !name.is_empty() => Some(name),
                _ => {
                    errors.add("items", format!("Item {item_number}: name is required."));
                    None
                }
            };

            let quantity = match item.quantity {
                Some(quantity) if quantity >= 1 => Some(quantity),
                Some(_) => {
                    errors.add(
                        "items",
                        format!("Item {item_number}: quantity must be at least 1."),
                    );
                    None
                }
                None => {
                    errors.add("items", format!("Item {item_number}: quantity is required."));
                    None
                }
            };

            let unit_price = item_money(&mut errors, item_number, "unit_price", item.unit_price);
            let line_total = item_money(&mut errors, item_number, "line_total", item.line_total);

            if let (Some(name), Some(quantity), Some(unit_price), Some(line_total)) =
                (name, quantity, unit_price, line_total)
            {
                items.push(OrderItem {
                    name,
                    quantity,
                    unit_price,
                    line_total,
                });
            }
        }

        let total = validate::checked_money(
            &mut errors,
            "total",
            self.total.unwrap_or(Decimal::ZERO),
        );

        match (owner_id, total) {
            (Some(owner_id), Some(total)) if errors.is_empty() => Ok(NewOrder {
                owner_id,
                items,
                total,
                notes: self.notes,
            }),
            _ => Err(errors),
        }
    }
}
