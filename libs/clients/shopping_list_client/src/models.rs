use serde::{Deserialize, Serialize};

/// An item as the API returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,
    pub item_name: String,
    pub unit_price: f64,
    pub qty: f64,
    pub is_purchased: bool,
}

/// Body for adding or editing an item
///
/// Fields left as `None` are omitted; on edit that keeps the server value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<f64>,
}

impl ItemDraft {
    pub fn new(item_name: impl Into<String>, unit_price: f64, qty: f64) -> Self {
        Self {
            item_name: Some(item_name.into()),
            unit_price: Some(unit_price),
            qty: Some(qty),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PurchasedFlag {
    pub is_purchased: bool,
}

/// `{ success: "y" | "n", data?, message? }`
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: String,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.success == "y"
    }
}
