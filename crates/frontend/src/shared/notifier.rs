//! User-facing notifications
//!
//! Screens report through [`Notifier`]; the page renders the current notice
//! with [`NoticeBar`].

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

pub trait Notifier {
    fn error(&self, title: &str, message: &str);
    fn success(&self, message: &str);
}

impl<T: Notifier> Notifier for Rc<T> {
    fn error(&self, title: &str, message: &str) {
        (**self).error(title, message)
    }

    fn success(&self, message: &str) {
        (**self).success(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: Option<String>,
    pub message: String,
}

/// Notifier that keeps the latest notice in a signal
#[derive(Clone, Copy)]
pub struct SignalNotifier {
    pub notice: RwSignal<Option<Notice>>,
    success_timeout_ms: u32,
}

impl SignalNotifier {
    pub fn new(success_timeout_ms: u32) -> Self {
        Self {
            notice: RwSignal::new(None),
            success_timeout_ms,
        }
    }

    pub fn dismiss(&self) {
        self.notice.set(None);
    }
}

impl Notifier for SignalNotifier {
    fn error(&self, title: &str, message: &str) {
        log::error!("{}: {}", title, message);
        self.notice.set(Some(Notice {
            kind: NoticeKind::Error,
            title: Some(title.to_string()),
            message: message.to_string(),
        }));
    }

    fn success(&self, message: &str) {
        log::info!("{}", message);
        let notice = Notice {
            kind: NoticeKind::Success,
            title: None,
            message: message.to_string(),
        };
        self.notice.set(Some(notice.clone()));

        let signal = self.notice;
        let timeout = self.success_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            // A newer notice stays visible.
            if signal.get_untracked().as_ref() == Some(&notice) {
                signal.set(None);
            }
        });
    }
}

#[component]
pub fn NoticeBar(notifier: SignalNotifier) -> impl IntoView {
    view! {
        {move || notifier.notice.get().map(|notice| {
            let intent = match notice.kind {
                NoticeKind::Error => MessageBarIntent::Error,
                NoticeKind::Success => MessageBarIntent::Success,
            };
            view! {
                <div style="width: 100%; margin-bottom: var(--spacing-md);">
                    <MessageBar intent=intent>
                        <div style="display: flex; align-items: flex-start; gap: var(--spacing-sm); width: 100%;">
                            <div style="flex: 1; white-space: pre-line;">
                                {notice.title.map(|t| view! { <strong>{t}": "</strong> })}
                                {notice.message}
                            </div>
                            <Button
                                appearance=ButtonAppearance::Transparent
                                size=ButtonSize::Small
                                on_click=move |_| notifier.dismiss()
                            >
                                "×"
                            </Button>
                        </div>
                    </MessageBar>
                </div>
            }
        })}
    }
}
