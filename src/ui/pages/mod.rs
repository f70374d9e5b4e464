//! Application pages module.
//!
//! This module contains all the page components for the application:
//! - Home (landing)
//! - Login page
//! - Signup page
//! - Upcoming sessions (authenticated landing view)
//! - Create session
//! - Not found (404)

mod create_session;
mod home;
mod login;
mod not_found;
mod signup;
mod upcoming_sessions;

pub use create_session::CreateSessionPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;
pub use upcoming_sessions::UpcomingSessionsPage;
