//! Transient success/error banners.
//!
//! A banner clears itself after `banner.clear_after_secs`. Showing a new
//! banner cancels the pending clear of the previous one, and the timer task
//! belongs to the component that owns the handle, so it dies with it.

use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use rooms::InventoryConfig;

use crate::platform;
use crate::use_config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

/// The banner on screen plus a ticket per `show`, so a clear scheduled for
/// an older banner never removes a newer one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BannerState {
    current: Option<Banner>,
    ticket: u64,
}

impl BannerState {
    /// Put up a banner, returning the ticket its scheduled clear must present.
    pub fn show(&mut self, kind: BannerKind, message: String) -> u64 {
        self.ticket += 1;
        self.current = Some(Banner { kind, message });
        self.ticket
    }

    /// Clear the banner if it is still the one `ticket` was issued for.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.ticket || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Banner> {
        self.current.as_ref()
    }
}

pub(crate) fn clear_after(config: &InventoryConfig) -> Duration {
    Duration::from_secs(config.banner.clear_after_secs)
}

#[derive(Clone, Copy)]
pub struct BannerHandle {
    state: Signal<BannerState>,
    timer: Signal<Option<Task>>,
    clear_after: Duration,
}

pub fn use_banner() -> BannerHandle {
    let config = use_config();
    let state = use_signal(BannerState::default);
    let timer = use_signal(|| None);
    BannerHandle {
        state,
        timer,
        clear_after: clear_after(&config),
    }
}

impl BannerHandle {
    pub fn success(&mut self, message: impl Into<String>) {
        self.show(BannerKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(BannerKind::Error, message.into());
    }

    pub fn clear(&mut self) {
        self.cancel_timer();
        self.state.write().clear();
    }

    pub fn current(&self) -> Option<Banner> {
        self.state.read().current().cloned()
    }

    fn cancel_timer(&mut self) {
        if let Some(task) = self.timer.write().take() {
            task.cancel();
        }
    }

    fn show(&mut self, kind: BannerKind, message: String) {
        self.cancel_timer();
        let ticket = self.state.write().show(kind, message);

        let mut state = self.state;
        let mut timer = self.timer;
        let clear_after = self.clear_after;
        let task = spawn(async move {
            platform::sleep(clear_after).await;
            if state.write().expire(ticket) {
                timer.set(None);
            }
        });
        self.timer.set(Some(task));
    }
}

#[component]
pub fn BannerView(banner: Option<Banner>) -> Element {
    let Some(banner) = banner else {
        return rsx! {};
    };
    let class = match banner.kind {
        BannerKind::Success => "banner banner--success",
        BannerKind::Error => "banner banner--error",
    };
    rsx! {
        div {
            class: "{class}",
            role: "alert",
            "{banner.message}"
        }
    }
}
