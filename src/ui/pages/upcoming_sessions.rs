//! Upcoming sessions page component.
//!
//! The authenticated landing view after a successful login.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::routes;
use crate::ui::auth::{SessionState, use_session_context};

/// Upcoming sessions page component
#[component]
pub fn UpcomingSessionsPage() -> impl IntoView {
    let session = use_session_context();

    // Signed-out visitors are sent to the login form. The transient
    // Loading state is left alone so the probe can finish first.
    Effect::new(move |_| {
        if session.state.get() == SessionState::SignedOut {
            let navigate = use_navigate();
            navigate(routes::LOGIN, Default::default());
        }
    });

    view! {
        <main class="flex-1 max-w-3xl mx-auto w-full p-6">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-bold text-theme-primary">"Upcoming Sessions"</h2>
                <A
                    href=routes::CREATE_SESSION
                    attr:class="px-4 py-2 bg-accent-primary hover:bg-accent-primary-hover text-white text-sm font-medium rounded-lg transition-colors"
                >
                    "Create a Session"
                </A>
            </div>

            <div class="bg-theme-primary border border-theme rounded-xl p-8 text-center">
                <p class="text-theme-secondary">
                    "No upcoming sessions yet. Create one to get started."
                </p>
            </div>
        </main>
    }
}
