//! Blacklist Panel Component
//!
//! Add form (target type + ID) and combined entity/device table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::TargetType;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync::{required_field, use_sync};
use crate::toast::{use_toasts, VALIDATION_TIMEOUT_MS};

#[component]
pub fn BlacklistPanel() -> impl IntoView {
    let sync = use_sync();
    let store = use_app_store();
    let toasts = use_toasts();

    let (target_type, set_target_type) = signal(String::from("entity"));
    let (target_id, set_target_id) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = required_field(&target_id.get()) else {
            toasts.error("Target ID is required", VALIDATION_TIMEOUT_MS);
            return;
        };
        // The select only offers the two valid values.
        let Some(target) = TargetType::parse(&target_type.get()) else {
            return;
        };
        spawn_local(async move {
            if sync.add_blacklist(target, &id).await {
                set_target_id.set(String::new());
            }
        });
    };

    view! {
        <section class="panel blacklist-panel">
            <h2>"Blacklist"</h2>
            <form class="entry-form" on:submit=on_submit>
                <select
                    prop:value=move || target_type.get()
                    on:change=move |ev| set_target_type.set(event_target_value(&ev))
                >
                    <option value="entity">"Entity"</option>
                    <option value="device">"Device"</option>
                </select>
                <input
                    type="text"
                    placeholder="entity or device ID..."
                    prop:value=move || target_id.get()
                    on:input=move |ev| set_target_id.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </form>
            <table>
                <thead>
                    <tr><th>"Type"</th><th>"ID"</th><th></th></tr>
                </thead>
                <tbody>
                    {move || {
                        let blacklist = store.blacklist().get();
                        let rows: Vec<(TargetType, String)> = blacklist
                            .entities
                            .iter()
                            .map(|id| (TargetType::Entity, id.clone()))
                            .chain(
                                blacklist
                                    .devices
                                    .iter()
                                    .map(|id| (TargetType::Device, id.clone())),
                            )
                            .collect();
                        if rows.is_empty() {
                            view! {
                                <tr class="empty-row"><td colspan="3">"Blacklist is empty"</td></tr>
                            }.into_any()
                        } else {
                            rows.into_iter().map(|(target, id)| {
                                let remove_id = id.clone();
                                view! {
                                    <tr data-target-type=target.as_str() data-target-id=id.clone()>
                                        <td>{target.as_str()}</td>
                                        <td class="mono">{id.clone()}</td>
                                        <td>
                                            <button
                                                class="remove-btn"
                                                on:click=move |_| {
                                                    let id = remove_id.clone();
                                                    spawn_local(async move {
                                                        sync.remove_blacklist(target, &id).await;
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
        </section>
    }
}
