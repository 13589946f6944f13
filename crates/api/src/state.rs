use std::sync::Arc;

use redpen_core::ledger::DecisionLedger;
use redpen_core::store::{ArticleStore, UserStore};
use redpen_core::workflow::EditorialService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Editorial workflow operations, including the decision ledger.
    pub editorial: Arc<EditorialService>,
    /// User accounts, used by registration and login.
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    /// Wire the service and a fresh decision ledger over the given stores.
    pub fn new(
        config: ServerConfig,
        articles: Arc<dyn ArticleStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        let editorial = EditorialService::new(
            articles,
            Arc::clone(&users),
            Arc::new(DecisionLedger::new()),
        );
        Self {
            config: Arc::new(config),
            editorial: Arc::new(editorial),
            users,
        }
    }
}
