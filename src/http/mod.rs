//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → limits.rs (concurrency permits)
//!     → cors.rs (preflight, allow-list)
//!     → form.rs (parse & validate operands)
//!     → handlers.rs (compute, format)
//!     → error.rs (422 / rejection bodies)
//! ```

pub mod cors;
pub mod error;
pub mod form;
pub mod handlers;
pub mod limits;
pub mod request;
pub mod server;

pub use error::{ApiError, FieldError, FieldErrorKind};
pub use form::Operands;
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
