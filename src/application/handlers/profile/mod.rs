//! Profile handlers.

mod ensure_profile;

pub use ensure_profile::EnsureProfileHandler;
