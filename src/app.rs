use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::auth::provide_session_context;
use crate::ui::pages::{
    CreateSessionPage, HomePage, LoginPage, NotFoundPage, SignupPage, UpcomingSessionsPage,
};
use crate::ui::{Navbar, ToastContainer, provide_toasts};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Session state and toasts are app-wide contexts
    let _session = provide_session_context();
    let _toasts = provide_toasts();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/study-planner.css"/>

        // sets the document title
        <Title text="Study Planner"/>

        <Router>
            <div class="min-h-screen flex flex-col bg-theme-secondary">
                <Navbar/>
                <ToastContainer/>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/signup") view=SignupPage/>
                    <Route path=path!("/upcoming-sessions") view=UpcomingSessionsPage/>
                    <Route path=path!("/create-session") view=CreateSessionPage/>
                </Routes>
            </div>
        </Router>
    }
}
