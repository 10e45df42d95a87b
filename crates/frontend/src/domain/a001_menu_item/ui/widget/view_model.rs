//! Menu item widget - View Model
//!
//! Wraps the headless [`WidgetState`] in a signal and owns the async side
//! of the widget: the generation request and the copy-notice timers.

use crate::domain::a001_menu_item::api::{HttpItemDetailsClient, ItemDetailsClient};
use crate::domain::a001_menu_item::copy_notice::{CopyNoticeTimers, NoticeScheduler};
use crate::domain::a001_menu_item::state::WidgetState;
use crate::shared::clipboard::copy_to_clipboard;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Таймеры браузера через gloo
struct BrowserScheduler;

impl NoticeScheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

#[derive(Clone, Copy)]
pub struct MenuItemWidgetVm {
    pub state: RwSignal<WidgetState>,
    // Таймеры живут, пока жив владелец компонента; при его уничтожении
    // StoredValue дропается, а Drop у Timeout снимает таймер.
    copy_timers: StoredValue<CopyNoticeTimers<Timeout>, LocalStorage>,
}

impl MenuItemWidgetVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(WidgetState::new()),
            copy_timers: StoredValue::new_local(CopyNoticeTimers::new()),
        }
    }

    pub fn set_item_name(&self, text: String) {
        self.state.update(|s| s.set_item_name(text));
    }

    pub fn toggle_model(&self) {
        self.state.update(|s| s.toggle_model());
    }

    pub fn submit(&self) {
        self.submit_with(HttpItemDetailsClient::new());
    }

    /// Submit through any client. A response that arrives after a newer
    /// submission started is dropped.
    pub fn submit_with<C>(&self, client: C)
    where
        C: ItemDetailsClient + 'static,
    {
        let Some(ticket) = self.state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        let state = self.state;
        spawn_local(async move {
            let outcome = client.generate(&ticket.request).await;
            if let Err(failure) = &outcome {
                log::error!("Error generating content: {:?}", failure);
            }

            match state.try_update(|s| s.finish(&ticket, outcome)) {
                Some(true) => {}
                Some(false) => log::debug!("Discarded stale response #{}", ticket.seq()),
                None => log::debug!("Widget disposed before response #{}", ticket.seq()),
            }
        });
    }

    /// Copy text and show the notice for two seconds. Earlier notice
    /// timers keep running.
    pub fn copy(&self, text: String) {
        copy_to_clipboard(&text);
        self.state.update(|s| s.notify_copied());

        let state = self.state;
        self.copy_timers.update_value(|timers| {
            timers.start(&BrowserScheduler, move || {
                state.try_update(|s| s.expire_copy_notice());
            });
        });
    }
}

impl Default for MenuItemWidgetVm {
    fn default() -> Self {
        Self::new()
    }
}
