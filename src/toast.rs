//! Status Toast Channel
//!
//! Single-slot, auto-expiring status surface. A newer message always
//! pre-empts the one on screen; there is no queue. A zero timeout keeps the
//! message up until it is replaced or dismissed (used while an ingest is in
//! flight).

use leptos::prelude::*;

pub const INFO_TIMEOUT_MS: u32 = 5_000;
pub const ERROR_TIMEOUT_MS: u32 = 7_000;
pub const VALIDATION_TIMEOUT_MS: u32 = 4_000;
/// Keep the message up until replaced or hidden.
pub const STICKY: u32 = 0;

/// Presentation only; timing is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
}

/// The single toast slot, provided via context.
#[derive(Clone, Copy)]
pub struct Toasts {
    current: RwSignal<Option<Toast>>,
    /// Bumped on every show; an expiring timer only hides its own epoch,
    /// so a newer message cancels an older message's pending auto-hide.
    epoch: RwSignal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            epoch: RwSignal::new(0),
        }
    }

    /// Current toast, tracked (re-renders the host on change).
    pub fn message(&self) -> Option<Toast> {
        self.current.get()
    }

    pub fn show(&self, message: impl Into<String>, severity: Severity, timeout_ms: u32) {
        let epoch = self.epoch.get_untracked() + 1;
        self.epoch.set(epoch);
        self.current.set(Some(Toast {
            message: message.into(),
            severity,
        }));
        if timeout_ms > 0 {
            schedule_hide(*self, epoch, timeout_ms);
        }
    }

    /// Confirmation message with the default timeout.
    pub fn info(&self, message: impl Into<String>) {
        self.show(message, Severity::Info, INFO_TIMEOUT_MS);
    }

    pub fn error(&self, message: impl Into<String>, timeout_ms: u32) {
        self.show(message, Severity::Error, timeout_ms);
    }

    pub fn hide(&self) {
        self.current.set(None);
    }

    fn hide_if_current(&self, epoch: u64) {
        if self.epoch.get_untracked() == epoch {
            self.current.set(None);
        }
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the toast channel from context
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[cfg(target_arch = "wasm32")]
fn schedule_hide(toasts: Toasts, epoch: u64, timeout_ms: u32) {
    use gloo_timers::future::TimeoutFuture;
    leptos::task::spawn_local(async move {
        TimeoutFuture::new(timeout_ms).await;
        toasts.hide_if_current(epoch);
    });
}

// Native builds only exist for `cargo test`; expiry is exercised through
// `hide_if_current` directly.
#[cfg(not(target_arch = "wasm32"))]
fn schedule_hide(_toasts: Toasts, _epoch: u64, _timeout_ms: u32) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_visible_message() {
        let toasts = Toasts::new();
        toasts.show("first", Severity::Error, ERROR_TIMEOUT_MS);
        toasts.show("second", Severity::Info, INFO_TIMEOUT_MS);

        let toast = toasts.message().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.severity, Severity::Info);
    }

    #[test]
    fn test_hide_clears_slot() {
        let toasts = Toasts::new();
        toasts.info("done");
        toasts.hide();
        assert_eq!(toasts.message(), None);
    }

    #[test]
    fn test_stale_expiry_does_not_hide_newer_message() {
        let toasts = Toasts::new();
        toasts.show("old", Severity::Info, INFO_TIMEOUT_MS);
        let stale_epoch = toasts.epoch.get_untracked();
        toasts.show("new", Severity::Info, INFO_TIMEOUT_MS);

        // The old message's timer fires after the replacement.
        toasts.hide_if_current(stale_epoch);
        assert_eq!(toasts.message().unwrap().message, "new");

        // The new message's own timer still works.
        toasts.hide_if_current(toasts.epoch.get_untracked());
        assert_eq!(toasts.message(), None);
    }

    #[test]
    fn test_sticky_message_persists_until_replaced() {
        let toasts = Toasts::new();
        toasts.show("Ingesting…", Severity::Info, STICKY);
        assert_eq!(toasts.message().unwrap().message, "Ingesting…");

        toasts.info("Ingest complete");
        assert_eq!(toasts.message().unwrap().message, "Ingest complete");
    }
}
