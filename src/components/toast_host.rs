//! Toast Host Component
//!
//! Renders the single toast slot with severity styling and a manual dismiss.

use leptos::prelude::*;

use crate::toast::{use_toasts, Severity};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        {move || toasts.message().map(|toast| {
            let class = match toast.severity {
                Severity::Info => "toast info",
                Severity::Error => "toast error",
            };
            view! {
                <div class=class role="status">
                    <span class="toast-text">{toast.message}</span>
                    <button class="toast-close" on:click=move |_| toasts.hide()>"×"</button>
                </div>
            }
        })}
    }
}
