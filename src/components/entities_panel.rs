//! Entities Panel Component
//!
//! Read-only entity and device tables from the last ingest/load, with the
//! ingest trigger. Counts are derived from collection length at render time.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync::use_sync;

#[component]
pub fn EntitiesPanel() -> impl IntoView {
    let sync = use_sync();
    let store = use_app_store();
    let (ingesting, set_ingesting) = signal(false);

    let on_ingest = move |_| {
        if ingesting.get() {
            return;
        }
        set_ingesting.set(true);
        spawn_local(async move {
            sync.ingest().await;
            set_ingesting.set(false);
        });
    };

    view! {
        <section class="panel entities-panel">
            <header class="panel-header">
                <h2>"Entities & devices"</h2>
                <span class="count">
                    {move || format!(
                        "{} entities, {} devices",
                        store.entities().get().len(),
                        store.devices().get().len(),
                    )}
                </span>
                <button class="ingest-btn" disabled=move || ingesting.get() on:click=on_ingest>
                    "Ingest from Home Assistant"
                </button>
            </header>

            <table>
                <thead>
                    <tr><th>"Entity ID"</th><th>"Name"</th><th>"State"</th><th>"Area"</th></tr>
                </thead>
                <tbody>
                    {move || {
                        let entities = store.entities().get();
                        if entities.is_empty() {
                            view! {
                                <tr class="empty-row"><td colspan="4">"No entities stored"</td></tr>
                            }.into_any()
                        } else {
                            entities.into_iter().map(|entity| view! {
                                <tr data-entity-id=entity.entity_id.clone()>
                                    <td class="mono">{entity.entity_id.clone()}</td>
                                    <td>{entity.display_name().to_string()}</td>
                                    <td>{entity.state.clone().unwrap_or_default()}</td>
                                    <td>{entity.area_id.clone().unwrap_or_default()}</td>
                                </tr>
                            }).collect_view().into_any()
                        }
                    }}
                </tbody>
            </table>

            <table>
                <thead>
                    <tr><th>"Device"</th><th>"Manufacturer"</th><th>"Model"</th><th>"Area"</th></tr>
                </thead>
                <tbody>
                    {move || {
                        let devices = store.devices().get();
                        if devices.is_empty() {
                            view! {
                                <tr class="empty-row"><td colspan="4">"No devices stored"</td></tr>
                            }.into_any()
                        } else {
                            devices.into_iter().map(|device| view! {
                                <tr data-device-id=device.id.clone()>
                                    <td>{device.display_name().to_string()}</td>
                                    <td>{device.manufacturer.clone().unwrap_or_default()}</td>
                                    <td>{device.model.clone().unwrap_or_default()}</td>
                                    <td>{device.area_id.clone().unwrap_or_default()}</td>
                                </tr>
                            }).collect_view().into_any()
                        }
                    }}
                </tbody>
            </table>
        </section>
    }
}
