//! Transient success/failure messages.
//!
//! The list core reports through [`NotificationSink`]; the app provides the
//! signal-backed [`Notifications`] context and renders it with
//! [`NotificationHost`].

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

pub const MAX_NOTICES: usize = 5;
pub const AUTO_DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    fn modifier(self) -> &'static str {
        match self {
            NoticeKind::Success => "toast--success",
            NoticeKind::Error => "toast--error",
            NoticeKind::Info => "toast--info",
        }
    }

    fn icon_name(self) -> &'static str {
        match self {
            NoticeKind::Success => "check",
            NoticeKind::Error => "alert-circle",
            NoticeKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Bounded queue of visible notices, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeQueue {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeQueue {
    /// Appends a notice and drops the oldest ones beyond [`MAX_NOTICES`].
    pub fn push(&mut self, kind: NoticeKind, text: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.notices.push(Notice { id, kind, text });
        if self.notices.len() > MAX_NOTICES {
            let overflow = self.notices.len() - MAX_NOTICES;
            self.notices.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        before != self.notices.len()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

/// Receiver of user-facing outcome messages.
pub trait NotificationSink {
    fn notify(&self, kind: NoticeKind, text: String);

    fn success(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Success, text.into());
    }

    fn error(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Error, text.into());
    }

    fn info(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Info, text.into());
    }
}

/// Notices shared through Leptos context.
#[derive(Clone, Copy)]
pub struct Notifications {
    queue: RwSignal<NoticeQueue>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::default()),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    pub fn current(&self) -> Vec<Notice> {
        self.queue.with(|q| q.notices().to_vec())
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for Notifications {
    fn notify(&self, kind: NoticeKind, text: String) {
        match kind {
            NoticeKind::Error => log::warn!("notice: {}", text),
            _ => log::debug!("notice: {}", text),
        }
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, text));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            this.dismiss(id);
        });
    }
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications context not found")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toast-stack">
            <For
                each=move || notifications.current()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div class=format!("toast {}", notice.kind.modifier())>
                            {icon(notice.kind.icon_name())}
                            <span class="toast__text">{notice.text.clone()}</span>
                            <button
                                class="toast__close"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_newest_five() {
        let mut queue = NoticeQueue::default();
        for i in 0..7 {
            queue.push(NoticeKind::Info, format!("n{}", i));
        }
        let texts: Vec<_> = queue.notices().iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["n2", "n3", "n4", "n5", "n6"]);
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut queue = NoticeQueue::default();
        let a = queue.push(NoticeKind::Success, "Category deleted".into());
        let b = queue.push(NoticeKind::Error, "Request failed with status 500".into());
        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.notices().len(), 1);
        assert_eq!(queue.notices()[0].id, b);
    }

    #[test]
    fn test_ids_are_unique_after_eviction() {
        let mut queue = NoticeQueue::default();
        let ids: Vec<u64> = (0..8)
            .map(|_| queue.push(NoticeKind::Info, String::new()))
            .collect();
        let mut sorted = ids.clone();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len());
    }
}
