//! Collection Synchronizers
//!
//! One synchronizer per server-side collection. A load replaces the store's
//! copy wholesale; a mutation that succeeds is always followed by an awaited
//! reload of the same collection, so the store never carries a locally
//! synthesized value. A mutation that fails leaves the store at its
//! last-known-good state and surfaces the cause as an error toast.

use leptos::prelude::*;

use crate::api::{ApiError, CuratorApi};
use crate::models::{AvailableIntegration, TargetType};
use crate::store::{AppStateStoreFields, AppStore};
use crate::toast::{Severity, Toasts, ERROR_TIMEOUT_MS, STICKY};

#[derive(Clone, Copy)]
pub struct Synchronizers<A> {
    api: A,
    store: AppStore,
    toasts: Toasts,
}

impl<A: CuratorApi> Synchronizers<A> {
    pub fn new(api: A, store: AppStore, toasts: Toasts) -> Self {
        Self { api, store, toasts }
    }

    fn load_failed(&self, what: &str, err: &ApiError) {
        self.toasts
            .error(format!("Failed to load {}: {}", what, err), ERROR_TIMEOUT_MS);
    }

    // ========================
    // Integrations
    // ========================

    pub async fn load_integrations(&self) {
        match self.api.selected_integrations().await {
            Ok(list) => *self.store.integrations().write() = list,
            Err(err) => self.load_failed("integrations", &err),
        }
    }

    /// One-shot candidate fetch for the add-integration modal. Not stored;
    /// the error is re-raised so the modal does not open on failure.
    pub async fn available_integrations(&self) -> Result<Vec<AvailableIntegration>, ApiError> {
        self.api.available_integrations().await.inspect_err(|err| {
            self.load_failed("available integrations", err);
        })
    }

    pub async fn add_integration(&self, entry_id: &str) -> bool {
        match self.api.select_integration(entry_id).await {
            Ok(()) => {
                self.toasts.info("Integration added");
                self.load_integrations().await;
                true
            }
            Err(err) => {
                self.toasts
                    .error(format!("Failed to add integration: {}", err), ERROR_TIMEOUT_MS);
                false
            }
        }
    }

    pub async fn remove_integration(&self, entry_id: &str) -> bool {
        match self.api.deselect_integration(entry_id).await {
            Ok(()) => {
                self.toasts.info("Integration removed");
                self.load_integrations().await;
                true
            }
            Err(err) => {
                self.toasts.error(
                    format!("Failed to remove integration: {}", err),
                    ERROR_TIMEOUT_MS,
                );
                false
            }
        }
    }

    // ========================
    // Blacklist
    // ========================

    pub async fn load_blacklist(&self) {
        match self.api.fetch_blacklist().await {
            Ok(blacklist) => *self.store.blacklist().write() = blacklist,
            Err(err) => self.load_failed("blacklist", &err),
        }
    }

    pub async fn add_blacklist(&self, target: TargetType, target_id: &str) -> bool {
        match self.api.add_blacklist_entry(target, target_id).await {
            Ok(()) => {
                self.toasts.info("Blacklist entry added");
                self.load_blacklist().await;
                true
            }
            Err(err) => {
                self.toasts.error(
                    format!("Failed to add blacklist entry: {}", err),
                    ERROR_TIMEOUT_MS,
                );
                false
            }
        }
    }

    pub async fn remove_blacklist(&self, target: TargetType, target_id: &str) -> bool {
        match self.api.remove_blacklist_entry(target, target_id).await {
            Ok(()) => {
                self.toasts.info("Blacklist entry removed");
                self.load_blacklist().await;
                true
            }
            Err(err) => {
                self.toasts.error(
                    format!("Failed to remove blacklist entry: {}", err),
                    ERROR_TIMEOUT_MS,
                );
                false
            }
        }
    }

    // ========================
    // Whitelist
    // ========================

    pub async fn load_whitelist(&self) {
        match self.api.fetch_whitelist().await {
            Ok(whitelist) => *self.store.whitelist().write() = whitelist,
            Err(err) => self.load_failed("whitelist", &err),
        }
    }

    pub async fn add_whitelist(&self, entity_id: &str) -> bool {
        match self.api.add_whitelist_entry(entity_id).await {
            Ok(()) => {
                self.toasts.info("Whitelist entry added");
                self.load_whitelist().await;
                true
            }
            Err(err) => {
                self.toasts.error(
                    format!("Failed to add whitelist entry: {}", err),
                    ERROR_TIMEOUT_MS,
                );
                false
            }
        }
    }

    pub async fn remove_whitelist(&self, entity_id: &str) -> bool {
        match self.api.remove_whitelist_entry(entity_id).await {
            Ok(()) => {
                self.toasts.info("Whitelist entry removed");
                self.load_whitelist().await;
                true
            }
            Err(err) => {
                self.toasts.error(
                    format!("Failed to remove whitelist entry: {}", err),
                    ERROR_TIMEOUT_MS,
                );
                false
            }
        }
    }

    // ========================
    // Entities & Devices
    // ========================

    pub async fn load_entities(&self) {
        match self.api.fetch_entities().await {
            Ok(snapshot) => {
                *self.store.entities().write() = snapshot.entities;
                *self.store.devices().write() = snapshot.devices;
            }
            Err(err) => self.load_failed("entities", &err),
        }
    }

    /// Trigger a fresh pull from Home Assistant. The response already
    /// carries the new snapshot, so no follow-up load is needed.
    pub async fn ingest(&self) {
        self.toasts
            .show("Ingesting entities from Home Assistant…", Severity::Info, STICKY);
        match self.api.ingest_entities().await {
            Ok(snapshot) => {
                let done = format!(
                    "Ingest complete: {} entities, {} devices",
                    snapshot.entities.len(),
                    snapshot.devices.len()
                );
                *self.store.entities().write() = snapshot.entities;
                *self.store.devices().write() = snapshot.devices;
                self.toasts.info(done);
            }
            Err(err) => {
                self.toasts
                    .error(format!("Entity ingest failed: {}", err), ERROR_TIMEOUT_MS);
            }
        }
    }
}

/// Trimmed form value, if non-empty.
pub fn required_field(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
pub type AppSync = Synchronizers<crate::http::HttpApi>;

/// Get the synchronizers from context
#[cfg(target_arch = "wasm32")]
pub fn use_sync() -> AppSync {
    expect_context::<AppSync>()
}
