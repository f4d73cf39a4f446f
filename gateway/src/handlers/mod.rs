//! HTTP route handlers.

pub mod info;
pub mod login;
pub mod sum;

pub use info::info;
pub use login::login;
pub use sum::sum;
