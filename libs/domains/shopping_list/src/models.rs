use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::error::ItemError;

/// A shopping-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, assigned at creation and never reused
    pub id: u64,
    /// Item name
    pub item_name: String,
    /// Price of a single unit
    pub unit_price: f64,
    /// Quantity to buy; fractional amounts like 1.5 kg are allowed
    pub qty: f64,
    /// Whether the item has been bought
    pub is_purchased: bool,
}

/// DTO for adding an item
///
/// Every field is optional on the wire so a missing field surfaces as a
/// validation error instead of a body parse error. Numbers may also arrive as
/// numeric strings, which is what HTML form fields submit.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    #[validate(required, length(min = 1))]
    pub item_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    #[validate(required, custom(function = "validate_amount"))]
    pub unit_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    #[validate(required, custom(function = "validate_amount"))]
    pub qty: Option<f64>,
}

/// DTO for editing an item. Empty or zero values leave the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    pub item_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub unit_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub qty: Option<f64>,
}

/// DTO for marking an item purchased
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetPurchased {
    pub is_purchased: Option<bool>,
}

/// Fully validated input for a new item
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub item_name: String,
    pub unit_price: f64,
    pub qty: f64,
}

impl TryFrom<CreateItem> for NewItem {
    type Error = ItemError;

    fn try_from(input: CreateItem) -> Result<Self, Self::Error> {
        match (input.item_name, input.unit_price, input.qty) {
            (Some(item_name), Some(unit_price), Some(qty))
                if !item_name.is_empty() && is_set_amount(unit_price) && is_set_amount(qty) =>
            {
                Ok(Self {
                    item_name,
                    unit_price,
                    qty,
                })
            }
            _ => Err(ItemError::missing_fields()),
        }
    }
}

impl Item {
    /// Create an unpurchased item with the given id
    pub fn new(id: u64, input: NewItem) -> Self {
        Self {
            id,
            item_name: input.item_name,
            unit_price: input.unit_price,
            qty: input.qty,
            is_purchased: false,
        }
    }

    /// Overwrite every field the update actually supplies
    pub fn apply_update(&mut self, update: UpdateItem) {
        if let Some(item_name) = update.item_name.filter(|n| !n.is_empty()) {
            self.item_name = item_name;
        }
        if let Some(unit_price) = update.unit_price.filter(|p| is_set_amount(*p)) {
            self.unit_price = unit_price;
        }
        if let Some(qty) = update.qty.filter(|q| is_set_amount(*q)) {
            self.qty = qty;
        }
    }
}

/// The list every process starts with
pub fn seed_items() -> Vec<Item> {
    [
        (1, "Sugar", 40.0, 2.0),
        (2, "Chocolate", 40.0, 5.0),
        (3, "Guitar", 1500.0, 1.0),
        (4, "Oil", 40.0, 1.0),
    ]
    .into_iter()
    .map(|(id, item_name, unit_price, qty)| Item {
        id,
        item_name: item_name.to_string(),
        unit_price,
        qty,
        is_purchased: false,
    })
    .collect()
}

/// Prices and quantities count as given when finite and non-zero
fn is_set_amount(amount: f64) -> bool {
    amount.is_finite() && amount != 0.0
}

fn validate_amount(amount: f64) -> Result<(), ValidationError> {
    if !is_set_amount(amount) {
        return Err(ValidationError::new("zero_or_not_a_number"));
    }
    Ok(())
}

/// Deserializers that accept a JSON number or a numeric string.
///
/// A blank string counts as absent.
mod lenient {
    use serde::{Deserialize, Deserializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub(super) fn number<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Number(n)) => Ok(Some(n)),
            Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(Raw::Text(s)) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("'{}' is not a number", s))),
        }
    }
}
