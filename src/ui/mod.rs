pub mod auth;
pub mod navbar;
pub mod pages;
pub mod spinner;
pub mod toast;

pub use navbar::Navbar;
pub use spinner::LoadingSpinner;
pub use toast::{ToastContainer, provide_toasts, use_toasts};
