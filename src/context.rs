//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::ValidationError;
use crate::models::{Messages, PageUrls};
use crate::navigation::{self, Navigation};

/// How long a notification stays on screen
const NOTICE_TIMEOUT_MS: u32 = 6_000;

/// Inline error notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub text: String,
}

impl Notice {
    /// Notice for a failed selection precondition
    pub fn validation(id: u32, error: ValidationError, messages: &Messages) -> Self {
        Self {
            id,
            text: error.message(messages),
        }
    }

    /// Every notice is rendered as an error message
    pub fn class(&self) -> &'static str {
        "ui negative message"
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page dimmer shown - read
    pub busy: ReadSignal<bool>,
    /// Page dimmer shown - write
    set_busy: WriteSignal<bool>,
    /// Visible notifications - read
    pub notices: ReadSignal<Vec<Notice>>,
    /// Visible notifications - write
    set_notices: WriteSignal<Vec<Notice>>,
    next_notice_id: StoredValue<u32>,
    urls: StoredValue<PageUrls>,
    messages: StoredValue<Messages>,
}

impl AppContext {
    pub fn new(
        busy: (ReadSignal<bool>, WriteSignal<bool>),
        notices: (ReadSignal<Vec<Notice>>, WriteSignal<Vec<Notice>>),
        urls: PageUrls,
        messages: Messages,
    ) -> Self {
        Self {
            busy: busy.0,
            set_busy: busy.1,
            notices: notices.0,
            set_notices: notices.1,
            next_notice_id: StoredValue::new(0),
            urls: StoredValue::new(urls),
            messages: StoredValue::new(messages),
        }
    }

    /// Show or hide the page dimmer
    pub fn set_busy(&self, busy: bool) {
        self.set_busy.set(busy);
    }

    pub fn urls(&self) -> PageUrls {
        self.urls.get_value()
    }

    pub fn notify_error(&self, text: impl Into<String>) {
        let text = text.into();
        self.push(|id| Notice { id, text });
    }

    pub fn notify_validation(&self, error: ValidationError) {
        let messages = self.messages;
        self.push(|id| messages.with_value(|messages| Notice::validation(id, error, messages)));
    }

    pub fn dismiss(&self, id: u32) {
        self.set_notices.update(|notices| notices.retain(|n| n.id != id));
    }

    /// Navigate away; failure is reported as a notification
    pub fn navigate(&self, target: Navigation) {
        log::debug!("[NAV] {:?}", target);
        if let Err(e) = navigation::navigate(&target) {
            log::error!("[NAV] {:?} failed: {}", target, e);
            self.notify_error(format!("Navigation failed: {}", e));
        }
    }

    fn push(&self, build: impl FnOnce(u32) -> Notice) {
        let id = self.next_notice_id.get_value();
        self.next_notice_id.set_value(id.wrapping_add(1));
        let notice = build(id);
        self.set_notices.update(|notices| notices.push(notice));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            ctx.dismiss(id);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_notice_is_an_error() {
        let messages = Messages::default();
        let notice = Notice::validation(7, ValidationError::NoJobsToDownload, &messages);
        assert_eq!(notice.id, 7);
        assert_eq!(notice.text, messages.no_jobs_to_download);
        assert_eq!(notice.class(), "ui negative message");
    }
}
