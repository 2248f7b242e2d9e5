//! Curator Console App
//!
//! Root component: provides the store, toast channel and synchronizers via
//! context, then kicks off the four initial loads concurrently. Each panel
//! renders as soon as its own load resolves; a failure in one load never
//! blocks the others.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{
    BlacklistPanel, EntitiesPanel, IntegrationsPanel, ToastHost, WhitelistPanel,
};
use crate::http::HttpApi;
use crate::store::AppState;
use crate::sync::Synchronizers;
use crate::toast::Toasts;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let toasts = Toasts::new();
    let sync = Synchronizers::new(HttpApi, store, toasts);

    provide_context(store);
    provide_context(toasts);
    provide_context(sync);

    web_sys::console::log_1(&"[APP] starting initial loads".into());
    spawn_local(async move { sync.load_integrations().await });
    spawn_local(async move { sync.load_blacklist().await });
    spawn_local(async move { sync.load_whitelist().await });
    spawn_local(async move { sync.load_entities().await });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Home Assistant Exposure Curator"</h1>
            </header>
            <ToastHost />
            <main class="panels">
                <IntegrationsPanel />
                <BlacklistPanel />
                <WhitelistPanel />
                <EntitiesPanel />
            </main>
        </div>
    }
}
