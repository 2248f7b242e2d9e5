//! Whitelist Panel Component
//!
//! Add form and table of force-included entity IDs.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync::{required_field, use_sync};
use crate::toast::{use_toasts, VALIDATION_TIMEOUT_MS};

#[component]
pub fn WhitelistPanel() -> impl IntoView {
    let sync = use_sync();
    let store = use_app_store();
    let toasts = use_toasts();

    let (entity_id, set_entity_id) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = required_field(&entity_id.get()) else {
            toasts.error("Entity ID is required", VALIDATION_TIMEOUT_MS);
            return;
        };
        spawn_local(async move {
            if sync.add_whitelist(&id).await {
                set_entity_id.set(String::new());
            }
        });
    };

    view! {
        <section class="panel whitelist-panel">
            <h2>"Whitelist"</h2>
            <form class="entry-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="entity ID, e.g. sensor.kitchen_temp"
                    prop:value=move || entity_id.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_entity_id.set(input.value());
                    }
                />
                <button type="submit">"Add"</button>
            </form>
            <table>
                <thead>
                    <tr><th>"Entity ID"</th><th></th></tr>
                </thead>
                <tbody>
                    {move || {
                        let whitelist = store.whitelist().get();
                        if whitelist.entities.is_empty() {
                            view! {
                                <tr class="empty-row">
                                    <td colspan="2">"No entities whitelisted"</td>
                                </tr>
                            }.into_any()
                        } else {
                            whitelist.entities.into_iter().map(|id| {
                                let remove_id = id.clone();
                                view! {
                                    <tr data-entity-id=id.clone()>
                                        <td class="mono">{id.clone()}</td>
                                        <td>
                                            <button
                                                class="remove-btn"
                                                on:click=move |_| {
                                                    let id = remove_id.clone();
                                                    spawn_local(async move {
                                                        sync.remove_whitelist(&id).await;
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
