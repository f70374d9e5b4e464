//! Create session page component.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::routes;
use crate::ui::auth::{SessionState, use_session_context};

/// Create session page component
#[component]
pub fn CreateSessionPage() -> impl IntoView {
    let session = use_session_context();

    Effect::new(move |_| {
        if session.state.get() == SessionState::SignedOut {
            let navigate = use_navigate();
            navigate(routes::LOGIN, Default::default());
        }
    });

    view! {
        <main class="flex-1 max-w-3xl mx-auto w-full p-6">
            <h2 class="text-2xl font-bold text-theme-primary mb-6">"Create a Session"</h2>

            <div class="bg-theme-primary border border-theme rounded-xl p-8 text-center">
                <p class="text-theme-secondary">
                    "Session planning is coming soon."
                </p>
            </div>
        </main>
    }
}
