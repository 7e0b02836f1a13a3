pub mod health;
pub use self::health::health;

pub mod signin;
pub use self::signin::signin;

pub mod register;
pub use self::register::register;

pub mod profile;
pub use self::profile::profile;

pub mod score;
pub use self::score::score;

// common functions for the handlers

/// Emails are matched case-insensitively everywhere: normalize once,
/// at the boundary.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
