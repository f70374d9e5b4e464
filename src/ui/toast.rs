//! Transient toast notifications.
//!
//! Fire-and-forget `success`/`error` messages surfaced in a fixed corner of
//! the page. The manager is provided as a context at the app root so any
//! component can raise a toast without threading props.

use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of toasts to show at once
const MAX_TOASTS: usize = 5;

/// How long a toast stays up before dismissing itself, in milliseconds
const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Toast with a unique ID for dismissal tracking
#[derive(Clone, Debug)]
pub struct ToastItem {
    id: u64,
    toast: Toast,
}

/// Handle for raising toasts. Cheap to copy; all state lives in signals.
#[derive(Clone, Copy)]
pub struct ToastManager {
    items: RwSignal<VecDeque<ToastItem>>,
    next_id: RwSignal<u64>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    fn push(&self, toast: Toast) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.items.update(|items| {
            items.push_back(ToastItem { id, toast });

            // Drop the oldest once we exceed the cap
            while items.len() > MAX_TOASTS {
                items.pop_front();
            }
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Toast {
            kind: ToastKind::Success,
            message: message.into(),
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Toast {
            kind: ToastKind::Error,
            message: message.into(),
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(Toast {
            kind: ToastKind::Info,
            message: message.into(),
        });
    }

    pub fn clear(&self) {
        self.items.set(VecDeque::new());
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the toast manager to the component tree
pub fn provide_toasts() -> ToastManager {
    let manager = ToastManager::new();
    provide_context(manager);
    manager
}

/// Get the toast manager from the component tree
pub fn use_toasts() -> ToastManager {
    expect_context::<ToastManager>()
}

/// Toast container component. Place once at the app root.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let manager = use_toasts();
    let items = manager.items;

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            {move || {
                items.get().into_iter().map(|item| {
                    view! {
                        <ToastCard item=item items=items />
                    }
                }).collect_view()
            }}
        </div>
    }
}

/// Single toast card with auto-dismiss and a close button
#[component]
fn ToastCard(item: ToastItem, items: RwSignal<VecDeque<ToastItem>>) -> impl IntoView {
    let id = item.id;

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            items.update(|current| {
                current.retain(|i| i.id != id);
            });
        });
    }

    let (card_class, icon_path) = match item.toast.kind {
        ToastKind::Success => (
            "bg-green-500/10 border-green-500/30 text-green-700",
            "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
        ToastKind::Error => (
            "bg-red-500/10 border-red-500/30 text-red-700",
            "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
        ToastKind::Info => (
            "bg-blue-500/10 border-blue-500/30 text-blue-700",
            "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
    };

    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-lg border shadow-lg transition-all duration-300 {}",
        card_class
    );

    view! {
        <div class=container_class role="status">
            <svg class="w-5 h-5 shrink-0" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path />
            </svg>
            <p class="flex-1 min-w-0 text-sm">{item.toast.message.clone()}</p>
            <button
                class="opacity-60 hover:opacity-100 transition-opacity"
                on:click=move |_| {
                    items.update(|current| {
                        current.retain(|i| i.id != id);
                    });
                }
            >
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                </svg>
            </button>
        </div>
    }
}
