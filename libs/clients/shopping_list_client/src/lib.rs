//! Shopping list API client
//!
//! Wraps the items endpoints in typed calls and keeps a local mirror of the
//! list that follows the server after each successful call.
//!
//! ```rust,no_run
//! use shopping_list_client::{ItemDraft, ShoppingListClient};
//!
//! # async fn run() -> Result<(), shopping_list_client::ClientError> {
//! let mut client = ShoppingListClient::default();
//! client.fetch_items().await?;
//! client.add_item(&ItemDraft::new("Milk", 30.0, 2.0)).await?;
//! client.mark_purchased(1).await?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use cache::ItemCache;
pub use client::ShoppingListClient;
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use error::{ClientError, ClientResult};
pub use models::{Item, ItemDraft};
