//! Shared application state.
//!
//! The store is opened and migrated once at startup and injected here —
//! handlers borrow it through the mutex for the duration of one statement.

use roi_core::store::RoiStore;
use std::sync::Mutex;

pub struct AppState {
    pub store: Mutex<RoiStore>,
    /// How many records GET /api/history returns.
    pub history_limit: u32,
}

impl AppState {
    pub fn new(store: RoiStore, history_limit: u32) -> Self {
        Self {
            store: Mutex::new(store),
            history_limit,
        }
    }
}
