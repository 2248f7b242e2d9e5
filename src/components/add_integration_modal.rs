//! Add Integration Modal Component
//!
//! Two-step workflow: opening fetches the candidate list fresh from Home
//! Assistant; confirming validates the selection and activates the entry.
//! A failed candidate fetch closes the modal; a failed add leaves it open
//! with the error toast visible.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::AvailableIntegration;
use crate::sync::use_sync;
use crate::toast::{use_toasts, VALIDATION_TIMEOUT_MS};

#[component]
pub fn AddIntegrationModal(show: ReadSignal<bool>, set_show: WriteSignal<bool>) -> impl IntoView {
    let sync = use_sync();
    let toasts = use_toasts();

    // Candidate list is transient modal state, never stored.
    let (available, set_available) = signal(Vec::<AvailableIntegration>::new());
    let (loading, set_loading) = signal(false);
    let (selected, set_selected) = signal(String::new());

    // Fetch candidates fresh every time the modal opens.
    Effect::new(move |_| {
        if !show.get() {
            return;
        }
        set_available.set(Vec::new());
        set_selected.set(String::new());
        set_loading.set(true);
        spawn_local(async move {
            match sync.available_integrations().await {
                Ok(list) => set_available.set(list),
                // Error toast already shown; the modal does not stay open
                // without a candidate list.
                Err(_) => set_show.set(false),
            }
            set_loading.set(false);
        });
    });

    let on_confirm = move |_| {
        let entry_id = selected.get();
        if entry_id.is_empty() {
            toasts.error("Select an integration first", VALIDATION_TIMEOUT_MS);
            return;
        }
        spawn_local(async move {
            if sync.add_integration(&entry_id).await {
                set_show.set(false);
            }
        });
    };

    view! {
        {move || show.get().then(|| view! {
            <div class="modal-backdrop">
                <div class="modal">
                    <h3>"Add integration"</h3>
                    {move || if loading.get() {
                        view! { <p class="modal-hint">"Loading available integrations…"</p> }.into_any()
                    } else {
                        view! {
                            <select
                                class="integration-select"
                                disabled=move || available.get().is_empty()
                                on:change=move |ev| set_selected.set(event_target_value(&ev))
                            >
                                {move || {
                                    let list = available.get();
                                    if list.is_empty() {
                                        view! {
                                            <option value="" disabled selected>"No integrations found"</option>
                                        }.into_any()
                                    } else {
                                        view! {
                                            <option value="" disabled selected>"Select an integration…"</option>
                                            {list.into_iter().map(|integration| view! {
                                                <option value=integration.entry_id.clone()>
                                                    {integration.label()}
                                                </option>
                                            }).collect_view()}
                                        }.into_any()
                                    }
                                }}
                            </select>
                        }.into_any()
                    }}
                    <footer class="modal-actions">
                        <button class="cancel-btn" on:click=move |_| set_show.set(false)>
                            "Cancel"
                        </button>
                        <button class="confirm-btn" on:click=on_confirm>"Add"</button>
                    </footer>
                </div>
            </div>
        })}
    }
}
