//! Authentication UI module.
//!
//! This module provides the auth form component and the session context
//! for the Study Planner frontend.

mod auth_form;
mod context;

pub use auth_form::AuthForm;
pub use context::{
    HttpSignupApi, SessionContext, SessionState, provide_session_context, use_session_context,
};
