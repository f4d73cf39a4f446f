//! Gateway library.
//!
//! Exposes the gateway wiring as a library so the HTTP surface can be
//! driven in-process by the integration tests.

pub mod config;
pub mod credentials;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod upstream;

pub use config::GatewayConfig;
pub use credentials::{CredentialChecker, StaticCredentialChecker};
pub use error::ApiError;
pub use routes::create_router;
pub use state::{AppState, TOKEN_TTL_SECS};
pub use upstream::{
    HttpNumbersService, MockNumbersService, NumbersPayload, NumbersService, UpstreamError,
};
