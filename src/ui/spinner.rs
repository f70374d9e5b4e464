use leptos::prelude::*;

/// Loading spinner shown while a submission is in flight.
#[component]
pub fn LoadingSpinner(
    /// Optional loading message
    #[prop(default = String::new())]
    message: String,
) -> impl IntoView {
    view! {
        <div class="spinner-container spinner-centered">
            <div class="spinner spinner-circle spinner-md" role="status" aria-live="polite">
                <div class="spinner-circle-inner"></div>
                <span class="sr-only">"Loading..."</span>
            </div>
            {(!message.is_empty()).then(|| view! {
                <div class="spinner-label">{message.clone()}</div>
            })}
        </div>
    }
}
