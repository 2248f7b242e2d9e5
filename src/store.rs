//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every update is
//! a whole-value replacement of one collection; the synchronizers never edit
//! a collection in place, which is what keeps the store from diverging from
//! server state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{BlacklistState, DeviceRecord, EntityRecord, IntegrationEntry, WhitelistState};

/// The four authoritative collections (entities and devices arrive together
/// from the backend but render as separate tables).
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Integrations selected for exposure
    pub integrations: Vec<IntegrationEntry>,
    /// Suppressed entity/device IDs
    pub blacklist: BlacklistState,
    /// Force-included entity IDs
    pub whitelist: WhitelistState,
    /// Entity snapshot from the last ingest or load
    pub entities: Vec<EntityRecord>,
    /// Device snapshot from the last ingest or load
    pub devices: Vec<DeviceRecord>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
