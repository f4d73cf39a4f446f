//! Authentication library for the gateway services.
//!
//! This crate provides JWT-based bearer token utilities.

mod jwt;
mod claims;

pub use jwt::{encode_token, decode_token, JwtConfig};
pub use claims::Claims;
