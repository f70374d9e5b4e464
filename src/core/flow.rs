//! Authentication submission flow.
//!
//! This module drives one form submission from validation to its terminal
//! outcome as an explicit state machine: `Idle -> Validating -> Loading ->
//! Done(outcome)`, with `Loading` skipped entirely when validation rejects
//! the attempt. The two external operations (remote signup call, session
//! provider sign-in) sit behind capability traits so the flow can be
//! exercised in tests without a browser or a real provider.
//!
//! All failures are terminal for the attempt; the caller must resubmit.

use thiserror::Error;

use super::auth::{Credentials, FieldValidity, FormMode, validate};
use super::routes;

/// Notification text for a completed signup.
pub const SIGNUP_SUCCESS: &str = "Sign up successful!";

/// Notification text for a completed login.
pub const LOGIN_SUCCESS: &str = "Login successful! 🎉";

/// Shown when the signup endpoint rejects without an explanation of its own.
pub const FALLBACK_SIGNUP_ERROR: &str = "Invalid Credentials!";

/// Shown when the provider reply carries neither `ok` nor an error message.
pub const SIGN_IN_INCOMPLETE: &str = "Sign in failed. Please try again.";

/// Failure reported by the remote "create account" endpoint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignupError {
    /// The server answered with a non-success status. `message` carries the
    /// server's own wording when the response body included one.
    #[error("{}", .message.as_deref().unwrap_or(FALLBACK_SIGNUP_ERROR))]
    Rejected { message: Option<String> },
    /// The request never produced a server verdict (network failure,
    /// malformed response, and the like).
    #[error("{0}")]
    Transport(String),
}

/// Provider sign-in verdict, opaque beyond ok/error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInResult {
    pub ok: bool,
    pub error: Option<String>,
}

/// The session provider call itself failed before yielding a verdict.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct ProviderError(pub String);

/// Remote "create account" endpoint.
pub trait SignupApi {
    async fn create_account(&self, credentials: &Credentials) -> Result<(), SignupError>;
}

/// External system issuing authenticated identity. The flow only consumes
/// the ok/error shape of its answers; session internals stay opaque.
pub trait SessionProvider {
    /// Sign in with credentials. Navigation stays with the caller; the
    /// provider must not redirect on its own.
    async fn sign_in(&self, credentials: &Credentials) -> Result<SignInResult, ProviderError>;

    /// End the current session. Fire-and-forget; local state is cleared
    /// whether or not the provider acknowledged.
    async fn sign_out(&self);
}

/// Terminal result of one submission attempt. Drives the notification text
/// and the navigation target.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Local validation refused the attempt; nothing left the browser.
    Rejected(FieldValidity),
    Success {
        message: String,
        destination: Option<&'static str>,
    },
    Failure {
        message: String,
        destination: Option<&'static str>,
    },
}

/// Submission lifecycle, reported through the `on_phase` callback of
/// [`run_submission`] so the form can mirror it into its own signals.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Loading,
    Done(SubmitOutcome),
}

/// Drive one submission attempt from validation to its terminal outcome.
///
/// Exactly one of the two collaborators is consulted, selected by `mode`.
/// Every exit path ends in a `Done` emission: collaborator failures are
/// converted into a `Failure` outcome here, so `Loading` can never be left
/// dangling.
pub async fn run_submission<S, P>(
    mode: FormMode,
    credentials: Credentials,
    signup_api: &S,
    provider: &P,
    mut on_phase: impl FnMut(SubmitPhase),
) -> SubmitOutcome
where
    S: SignupApi,
    P: SessionProvider,
{
    on_phase(SubmitPhase::Validating);
    let validity = validate(&credentials);
    if !validity.is_valid() {
        let outcome = SubmitOutcome::Rejected(validity);
        on_phase(SubmitPhase::Done(outcome.clone()));
        return outcome;
    }

    on_phase(SubmitPhase::Loading);
    let outcome = match mode {
        FormMode::SignUp => sign_up(&credentials, signup_api).await,
        FormMode::Login => log_in(&credentials, provider).await,
    };
    on_phase(SubmitPhase::Done(outcome.clone()));
    outcome
}

async fn sign_up<S: SignupApi>(credentials: &Credentials, api: &S) -> SubmitOutcome {
    match api.create_account(credentials).await {
        Ok(()) => SubmitOutcome::Success {
            message: SIGNUP_SUCCESS.to_string(),
            destination: Some(routes::LOGIN),
        },
        // A failed signup keeps the visitor on the signup page so the form
        // can be corrected and resubmitted.
        Err(err) => SubmitOutcome::Failure {
            message: err.to_string(),
            destination: Some(routes::SIGNUP),
        },
    }
}

async fn log_in<P: SessionProvider>(credentials: &Credentials, provider: &P) -> SubmitOutcome {
    match provider.sign_in(credentials).await {
        Ok(SignInResult {
            error: Some(message),
            ..
        }) => SubmitOutcome::Failure {
            message,
            destination: None,
        },
        Ok(SignInResult { ok: true, .. }) => SubmitOutcome::Success {
            message: LOGIN_SUCCESS.to_string(),
            destination: Some(routes::UPCOMING_SESSIONS),
        },
        // Neither ok nor an error string: treat as a provider fault rather
        // than resolving the attempt silently.
        Ok(SignInResult { ok: false, .. }) => SubmitOutcome::Failure {
            message: SIGN_IN_INCOMPLETE.to_string(),
            destination: None,
        },
        Err(err) => SubmitOutcome::Failure {
            message: err.0,
            destination: None,
        },
    }
}
