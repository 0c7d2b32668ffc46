//! Application state shared by the route builders.

use domain_shopping_list::InMemoryItemRepository;

use crate::config::Config;

/// Cloned into each route builder; the repository clone shares one list.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub items: InMemoryItemRepository,
}

impl AppState {
    /// State holding the four seed items
    pub fn seeded(config: Config) -> Self {
        Self {
            config,
            items: InMemoryItemRepository::seeded(),
        }
    }
}
