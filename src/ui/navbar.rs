//! Top navigation bar, gated by session state.
//!
//! Shows Login/SignUp links to signed-out visitors, and the study-session
//! links plus the signed-in email and a Logout action otherwise.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::core::flow::SessionProvider;
use crate::core::routes;
use crate::ui::auth::{SessionState, use_session_context};
use crate::ui::toast::use_toasts;

/// Navigation bar component
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session_context();
    let toasts = use_toasts();

    // Handle logout
    let handle_logout = move |_| {
        toasts.success("Logged out successfully");
        spawn_local(async move {
            session.sign_out().await;
        });
    };

    let link_class = "px-3 py-1.5 text-sm font-medium text-white/80 hover:text-white transition-colors";

    view! {
        <nav class="bg-accent-primary shadow">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <A
                        href=routes::HOME
                        attr:class="text-lg font-bold text-white hover:opacity-80 transition-opacity"
                    >
                        "Study Planner Inc."
                    </A>

                    // Session-gated links
                    <div class="flex items-center gap-2">
                        {move || match session.state.get() {
                            SessionState::Loading => {
                                // Skeleton while the provider probe resolves
                                view! {
                                    <div class="w-24 h-4 rounded bg-white/30 animate-pulse"></div>
                                }.into_any()
                            }
                            SessionState::SignedOut => {
                                view! {
                                    <A href=routes::LOGIN attr:class=link_class>"Login"</A>
                                    <A href=routes::SIGNUP attr:class=link_class>"SignUp"</A>
                                }.into_any()
                            }
                            SessionState::SignedIn(email) => {
                                view! {
                                    <A href=routes::UPCOMING_SESSIONS attr:class=link_class>
                                        "Upcoming Sessions"
                                    </A>
                                    <A href=routes::CREATE_SESSION attr:class=link_class>
                                        "Create a Session"
                                    </A>
                                    <A href=routes::HOME attr:class=link_class>{email}</A>
                                    <button class=link_class on:click=handle_logout>
                                        "Logout"
                                    </button>
                                }.into_any()
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}
