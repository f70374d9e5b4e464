//! Two-mode authentication form.
//!
//! One component renders both the signup and the login form; the mode is
//! fixed at construction time and selects which external operation a valid
//! submission performs. The branch logic itself lives in
//! [`crate::core::flow`]; this component wires it to signals, toasts, and
//! the router.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::context::{HttpSignupApi, use_session_context};
use crate::core::auth::{Credentials, FieldValidity, FormMode};
use crate::core::flow::{SubmitOutcome, SubmitPhase, run_submission};
use crate::ui::spinner::LoadingSpinner;
use crate::ui::toast::use_toasts;

/// Auth form component
#[component]
pub fn AuthForm(
    /// Selects the signup or login branch
    mode: FormMode,
    /// Heading shown above the fields
    #[prop(into)]
    title: String,
    /// Question shown next to the switch link
    #[prop(into)]
    prompt: String,
    /// Route of the opposite form
    #[prop(into)]
    switch_href: String,
    /// Label of the switch link
    #[prop(into)]
    switch_label: String,
) -> impl IntoView {
    let session = use_session_context();
    let toasts = use_toasts();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Validation flags, rederived on every attempt
    let validity = RwSignal::new(FieldValidity::default());

    // True strictly while a valid submission is in flight
    let is_loading = RwSignal::new(false);

    let form_view = move || {
        // Clone the owned text props into fresh locals each render so the
        // surrounding closure only borrows its captures and stays
        // re-runnable (`Fn`); component children move these locals in.
        let title = title.clone();
        let prompt = prompt.clone();
        let switch_href = switch_href.clone();
        let switch_label = switch_label.clone();

        // Handle form submission. Built fresh on each render so the closure
        // that wraps the form stays re-runnable (`FnMut`).
        let on_submit = move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            // Credentials are built fresh per attempt and dropped with it
            let credentials = Credentials::new(email.get(), password.get());
            let navigate = use_navigate();

            spawn_local(async move {
                let signup_api = HttpSignupApi::default();

                let outcome = run_submission(mode, credentials, &signup_api, &session, |phase| {
                    match phase {
                        // A new attempt starts from clean flags, so a stale
                        // flag from the previous attempt cannot linger
                        SubmitPhase::Validating => validity.set(FieldValidity::default()),
                        SubmitPhase::Loading => is_loading.set(true),
                        SubmitPhase::Done(_) => is_loading.set(false),
                        SubmitPhase::Idle => {}
                    }
                })
                .await;

                match outcome {
                    SubmitOutcome::Rejected(fields) => validity.set(fields),
                    SubmitOutcome::Success {
                        message,
                        destination,
                    } => {
                        toasts.success(message);
                        if let Some(to) = destination {
                            navigate(to, Default::default());
                        }
                    }
                    SubmitOutcome::Failure {
                        message,
                        destination,
                    } => {
                        toasts.error(message);
                        if let Some(to) = destination {
                            navigate(to, Default::default());
                        }
                    }
                }
            });
        };

        view! {
            <form on:submit=on_submit class="space-y-6">
                // Header
                <h3 class="text-center text-2xl font-bold text-theme-primary">
                    {title.clone()}
                </h3>

                // Email field
                <div>
                    <label for="email" class="block text-sm font-medium text-theme-primary mb-1">
                        "Email"
                    </label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        autocomplete="email"
                        placeholder="Enter email"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                               text-theme-primary placeholder-theme-tertiary
                               focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                               transition-colors"
                        class:border-red-500=move || validity.get().email_invalid
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            validity.update(|v| v.email_invalid = false);
                        }
                    />
                    {move || {
                        validity.get().email_invalid.then(|| view! {
                            <p class="mt-1 text-sm text-red-500">
                                "Please enter a valid email address"
                            </p>
                        })
                    }}
                </div>

                // Password field
                <div>
                    <label for="password" class="block text-sm font-medium text-theme-primary mb-1">
                        "Password"
                    </label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        autocomplete="on"
                        placeholder="Enter password"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                               text-theme-primary placeholder-theme-tertiary
                               focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                               transition-colors"
                        class:border-red-500=move || validity.get().password_invalid
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            validity.update(|v| v.password_invalid = false);
                        }
                    />
                    {move || {
                        validity.get().password_invalid.then(|| view! {
                            <p class="mt-1 text-sm text-red-500">
                                "Password should be of at least 6 characters"
                            </p>
                        })
                    }}
                </div>

                // Submit button
                <button
                    type="submit"
                    class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                           text-white font-medium rounded-lg
                           focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-accent-primary
                           transition-colors"
                >
                    "Submit"
                </button>

                // Switch link to the opposite form
                <p class="text-end text-sm text-theme-secondary my-2">
                    {prompt.clone()}
                    <A
                        href=switch_href.clone()
                        attr:class="text-accent-primary hover:text-accent-primary-hover font-medium"
                    >
                        {switch_label.clone()}
                    </A>
                </p>
            </form>
        }
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
            {move || {
                if is_loading.get() {
                    view! { <LoadingSpinner message="Submitting...".to_string() /> }.into_any()
                } else {
                    form_view().into_any()
                }
            }}
        </div>
    }
}
