//! Route identifiers shared by the submission flow and the router.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";
pub const UPCOMING_SESSIONS: &str = "/upcoming-sessions";
pub const CREATE_SESSION: &str = "/create-session";
