//! UI Components
//!
//! Pure projections from the store plus the handlers that drive the
//! synchronizers.

mod add_integration_modal;
mod blacklist_panel;
mod entities_panel;
mod integrations_panel;
mod toast_host;
mod whitelist_panel;

pub use add_integration_modal::AddIntegrationModal;
pub use blacklist_panel::BlacklistPanel;
pub use entities_panel::EntitiesPanel;
pub use integrations_panel::IntegrationsPanel;
pub use toast_host::ToastHost;
pub use whitelist_panel::WhitelistPanel;
