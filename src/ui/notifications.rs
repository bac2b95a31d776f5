//! Toast notifications
//!
//! Shows acknowledgment messages in the top-right corner of the page and
//! dismisses them after a delay.

use leptos::prelude::*;
use std::collections::VecDeque;

use crate::core::{Notification, NotificationKind};

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 4;

/// Notification item with unique ID for tracking
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationItem {
    pub id: u64,
    pub notification: Notification,
}

/// Notifications container component
#[component]
pub fn NotificationsContainer(manager: NotificationManager) -> impl IntoView {
    let notifications = manager.notifications();

    view! {
        <div class="fixed top-20 right-4 z-[60] flex flex-col gap-2 max-w-sm" aria-live="polite">
            <For
                each=move || notifications.get()
                key=|item| item.id
                children=move |item| view! { <Toast item=item manager=manager /> }
            />
        </div>
    }
}

#[component]
fn Toast(item: NotificationItem, manager: NotificationManager) -> impl IntoView {
    let id = item.id;
    let (is_exiting, _set_is_exiting) = signal(false);

    // Auto-dismiss if specified
    if let Some(_ms) = item.notification.auto_dismiss_ms {
        #[cfg(feature = "hydrate")]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                _set_is_exiting.set(true);
                // Wait for exit animation
                TimeoutFuture::new(300).await;
                manager.dismiss(id);
            });
        }
    }

    let (accent_class, icon_path) = match item.notification.kind {
        NotificationKind::Success => (
            "bg-emerald-500/10 border-emerald-500/30 text-emerald-300",
            "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
        NotificationKind::Info => (
            "bg-indigo-500/10 border-indigo-500/30 text-indigo-300",
            "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
    };

    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-lg border backdrop-blur-md shadow-lg transition-all duration-300 {}",
        accent_class
    );

    view! {
        <div
            class=container_class
            role="status"
            style=move || if is_exiting.get() { "opacity: 0; transform: translateX(1rem);" } else { "opacity: 1; transform: translateX(0);" }
        >
            <svg class="w-5 h-5 flex-shrink-0" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path />
            </svg>
            <div class="flex-1 min-w-0">
                <h4 class="text-sm font-medium text-white">{item.notification.title}</h4>
                <p class="text-sm text-white/80 mt-0.5 break-words">{item.notification.message}</p>
            </div>
            <button
                class="text-white/50 hover:text-white transition-colors"
                aria-label="Dismiss notification"
                on:click=move |_| manager.dismiss(id)
            >
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                </svg>
            </button>
        </div>
    }
}

/// Handle to the toast stack
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the notifications signal for the container
    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    /// Add a notification, dropping the oldest beyond the limit
    pub fn notify(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.notifications.update(|n| {
            n.push_back(NotificationItem { id, notification });

            while n.len() > MAX_NOTIFICATIONS {
                n.pop_front();
            }
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.notifications.update(|n| n.retain(|i| i.id != id));
    }

    /// Create a callback for use with other components
    pub fn callback(&self) -> Callback<Notification> {
        let this = *self;
        Callback::new(move |notification: Notification| this.notify(notification))
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_assigns_increasing_ids() {
        Owner::new().with(|| {
            let manager = NotificationManager::new();
            manager.notify(Notification::info("a", "1"));
            manager.callback().run(Notification::success("b", "2"));

            let items = manager.notifications().get_untracked();
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].id, 0);
            assert_eq!(items[1].id, 1);
            assert_eq!(items[1].notification.message, "2");
        });
    }

    #[test]
    fn test_oldest_dropped_beyond_limit() {
        Owner::new().with(|| {
            let manager = NotificationManager::new();
            for i in 0..(MAX_NOTIFICATIONS + 2) {
                manager.notify(Notification::info("t", i.to_string()));
            }
            let items = manager.notifications().get_untracked();
            assert_eq!(items.len(), MAX_NOTIFICATIONS);
            assert_eq!(items.front().map(|i| i.id), Some(2));
        });
    }

    #[test]
    fn test_dismiss_removes_by_id() {
        Owner::new().with(|| {
            let manager = NotificationManager::new();
            manager.notify(Notification::info("a", "1"));
            manager.notify(Notification::info("b", "2"));
            manager.dismiss(0);

            let items = manager.notifications().get_untracked();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, 1);
        });
    }
}
