//! Session context for the external auth provider.
//!
//! This module provides a reactive session context that:
//! - Tracks whether a provider session exists and the signed-in email
//! - Implements the submission flow's `SessionProvider` capability over
//!   the provider's HTTP endpoints
//! - Probes the provider once after hydration to restore session state
//!
//! The provider session itself (cookie, token, whatever it uses) stays
//! opaque; only ok/error verdicts and the user's email are consumed.

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};

use crate::core::auth::Credentials;
use crate::core::flow::{ProviderError, SessionProvider, SignInResult, SignupApi, SignupError};

/// What the app knows about the provider session.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// Asking the provider whether a session exists (right after hydration)
    #[default]
    Loading,
    SignedOut,
    /// A session exists for this email
    SignedIn(String),
}

/// Session context providing session state and provider operations
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current session state
    pub state: RwSignal<SessionState>,
}

impl SessionContext {
    /// Check if a provider session is established
    pub fn is_signed_in(&self) -> bool {
        matches!(self.state.get(), SessionState::SignedIn(_))
    }

    /// Email of the signed-in user (if any)
    pub fn email(&self) -> Option<String> {
        match self.state.get() {
            SessionState::SignedIn(email) => Some(email),
            _ => None,
        }
    }
}

/// Provide the session context to the component tree
pub fn provide_session_context() -> SessionContext {
    // Start signed-out on both server and client to avoid hydration mismatch
    let state = RwSignal::new(SessionState::SignedOut);
    let ctx = SessionContext { state };

    // Ask the provider who we are after hydration (client-side only)
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            state.set(SessionState::Loading);

            spawn_local(async move {
                match fetch_session().await {
                    Ok(Some(email)) => state.set(SessionState::SignedIn(email)),
                    Ok(None) => state.set(SessionState::SignedOut),
                    Err(_) => state.set(SessionState::SignedOut),
                }
            });
        });
    }

    provide_context(ctx);
    ctx
}

/// Get the session context from the component tree
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Sign-in request sent to the provider. `redirect: false` tells the
/// provider that navigation stays with us.
#[derive(Debug, Serialize)]
#[allow(dead_code)]
struct SignInRequest<'a> {
    provider: &'static str,
    email: &'a str,
    password: &'a str,
    redirect: bool,
}

/// Provider sign-in reply
#[derive(Debug, Deserialize, Default)]
#[allow(dead_code)]
struct SignInResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Provider session introspection reply
#[derive(Debug, Deserialize, Default)]
#[allow(dead_code)]
struct SessionResponse {
    #[serde(default)]
    user: Option<SessionUser>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct SessionUser {
    email: String,
}

/// Error body the signup endpoint may attach to a non-success status
#[derive(Debug, Deserialize, Default)]
#[allow(dead_code)]
struct SignupErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Client for the remote "create account" endpoint.
#[derive(Debug, Clone, Default)]
pub struct HttpSignupApi {
    base: String,
}

impl HttpSignupApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[cfg(not(feature = "ssr"))]
impl SignupApi for HttpSignupApi {
    async fn create_account(&self, credentials: &Credentials) -> Result<(), SignupError> {
        let url = format!("{}/api/signup", self.base);

        let resp = post_json(&url, credentials, false)
            .await
            .map_err(SignupError::Transport)?;
        let body = response_json(&resp)
            .await
            .map_err(SignupError::Transport)?;

        if resp.ok() {
            // Whatever the server attached, we only log it
            leptos::logging::log!("signup response: {:?}", body);
            Ok(())
        } else {
            let parsed: SignupErrorBody =
                serde_wasm_bindgen::from_value(body).unwrap_or_default();
            Err(SignupError::Rejected {
                message: parsed.error,
            })
        }
    }
}

#[cfg(feature = "ssr")]
impl SignupApi for HttpSignupApi {
    async fn create_account(&self, _credentials: &Credentials) -> Result<(), SignupError> {
        Err(SignupError::Transport(
            "Signup not available on server".to_string(),
        ))
    }
}

#[cfg(not(feature = "ssr"))]
impl SessionProvider for SessionContext {
    async fn sign_in(&self, credentials: &Credentials) -> Result<SignInResult, ProviderError> {
        let request = SignInRequest {
            provider: "credentials",
            email: &credentials.email,
            password: &credentials.password,
            redirect: false,
        };

        let resp = post_json("/api/auth/signin", &request, true)
            .await
            .map_err(ProviderError)?;
        let body = response_json(&resp).await.map_err(ProviderError)?;

        let parsed: SignInResponse =
            serde_wasm_bindgen::from_value(body).map_err(|e| ProviderError(e.to_string()))?;

        if parsed.ok && parsed.error.is_none() {
            self.state
                .set(SessionState::SignedIn(credentials.email.clone()));
        }

        Ok(SignInResult {
            ok: parsed.ok,
            error: parsed.error,
        })
    }

    async fn sign_out(&self) {
        // Best effort: clear local state even if the provider call fails
        let _ = post_json("/api/auth/signout", &serde_json::json!({}), true).await;
        self.state.set(SessionState::SignedOut);
    }
}

#[cfg(feature = "ssr")]
impl SessionProvider for SessionContext {
    async fn sign_in(&self, _credentials: &Credentials) -> Result<SignInResult, ProviderError> {
        Err(ProviderError(
            "Sign in not available on server".to_string(),
        ))
    }

    async fn sign_out(&self) {}
}

/// Ask the provider whether a session exists
#[cfg(not(feature = "ssr"))]
async fn fetch_session() -> Result<Option<String>, String> {
    let resp = get_json("/api/auth/session").await?;

    if !resp.ok() {
        return Ok(None);
    }

    let body = response_json(&resp).await?;
    let parsed: SessionResponse = serde_wasm_bindgen::from_value(body).unwrap_or_default();

    Ok(parsed.user.map(|user| user.email))
}

#[cfg(not(feature = "ssr"))]
async fn post_json(
    url: &str,
    body: &impl Serialize,
    with_credentials: bool,
) -> Result<web_sys::Response, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestCredentials, RequestInit, Response};

    let window = web_sys::window().ok_or("No window")?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    if with_credentials {
        opts.set_credentials(RequestCredentials::SameOrigin);
    }
    opts.set_body(
        &serde_json::to_string(body)
            .map_err(|e| e.to_string())?
            .into(),
    );

    let req = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;

    req.headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|e| format!("{:?}", e))?;

    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{:?}", e))?;

    Ok(resp)
}

#[cfg(not(feature = "ssr"))]
async fn get_json(url: &str) -> Result<web_sys::Response, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestCredentials, RequestInit, Response};

    let window = web_sys::window().ok_or("No window")?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_credentials(RequestCredentials::SameOrigin);

    let req = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|e| format!("{:?}", e))?;

    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{:?}", e))?;

    Ok(resp)
}

#[cfg(not(feature = "ssr"))]
async fn response_json(resp: &web_sys::Response) -> Result<wasm_bindgen::JsValue, String> {
    use wasm_bindgen_futures::JsFuture;

    JsFuture::from(resp.json().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))
}
