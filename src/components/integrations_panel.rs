//! Integrations Panel Component
//!
//! Table of integrations selected for exposure, with the add-integration
//! modal workflow.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::AddIntegrationModal;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync::use_sync;

#[component]
pub fn IntegrationsPanel() -> impl IntoView {
    let sync = use_sync();
    let store = use_app_store();
    let (show_modal, set_show_modal) = signal(false);

    view! {
        <section class="panel integrations-panel">
            <header class="panel-header">
                <h2>"Selected integrations"</h2>
                <button class="add-btn" on:click=move |_| set_show_modal.set(true)>
                    "Add integration"
                </button>
            </header>
            <table>
                <thead>
                    <tr><th>"Title"</th><th>"Domain"</th><th>"Entry ID"</th><th></th></tr>
                </thead>
                <tbody>
                    {move || {
                        let integrations = store.integrations().get();
                        if integrations.is_empty() {
                            view! {
                                <tr class="empty-row">
                                    <td colspan="4">"No integrations selected"</td>
                                </tr>
                            }.into_any()
                        } else {
                            integrations.into_iter().map(|entry| {
                                let remove_id = entry.entry_id.clone();
                                view! {
                                    <tr data-entry-id=entry.entry_id.clone()>
                                        <td>{entry.title.clone().unwrap_or_else(|| "—".to_string())}</td>
                                        <td>{entry.domain.clone().unwrap_or_default()}</td>
                                        <td class="mono">{entry.entry_id.clone()}</td>
                                        <td>
                                            <button
                                                class="remove-btn"
                                                on:click=move |_| {
                                                    let entry_id = remove_id.clone();
                                                    spawn_local(async move {
                                                        sync.remove_integration(&entry_id).await;
                                                    });
                                                }
                                            >
                                                "×"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }
                    }}
                </tbody>
            </table>
            <AddIntegrationModal show=show_modal set_show=set_show_modal />
        </section>
    }
}
