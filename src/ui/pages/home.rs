//! Landing page component.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::routes;
use crate::ui::auth::use_session_context;

/// Landing page component
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session_context();

    view! {
        <main class="flex-1 flex items-center justify-center p-4">
            <div class="text-center max-w-xl">
                <h1 class="text-4xl font-bold text-theme-primary mb-4">
                    "Plan your study sessions"
                </h1>
                <p class="text-theme-secondary mb-8">
                    "Keep track of upcoming study sessions, create new ones, and never
                     miss a revision slot again."
                </p>
                <div class="flex items-center justify-center gap-4">
                    {move || {
                        if session.is_signed_in() {
                            view! {
                                <A
                                    href=routes::UPCOMING_SESSIONS
                                    attr:class="px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
                                >
                                    "Upcoming Sessions"
                                </A>
                            }.into_any()
                        } else {
                            view! {
                                <A
                                    href=routes::LOGIN
                                    attr:class="px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
                                >
                                    "Login"
                                </A>
                                <A
                                    href=routes::SIGNUP
                                    attr:class="px-6 py-3 border border-theme text-theme-primary hover:bg-theme-secondary font-medium rounded-lg transition-colors"
                                >
                                    "SignUp"
                                </A>
                            }.into_any()
                        }
                    }}
                </div>
            </div>
        </main>
    }
}
