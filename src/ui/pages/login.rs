//! Login page component.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::auth::FormMode;
use crate::core::routes;
use crate::ui::auth::{AuthForm, SessionState, use_session_context};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session_context();

    // Already signed in: go straight to the planner
    Effect::new(move |_| {
        if matches!(session.state.get(), SessionState::SignedIn(_)) {
            let navigate = use_navigate();
            navigate(routes::UPCOMING_SESSIONS, Default::default());
        }
    });

    view! {
        <main class="flex-1 flex items-center justify-center p-4">
            <AuthForm
                mode=FormMode::Login
                title="Login"
                prompt="Don't have an account? "
                switch_href=routes::SIGNUP
                switch_label="SignUp"
            />
        </main>
    }
}
