//! Calculator HTTP service library.
//!
//! Two form-encoded endpoints, `POST /add/` and `POST /subtract/`, returning
//! a JSON envelope whose `result` is rendered by [`format::Formatter`].

// Core
pub mod calc;
pub mod format;
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use calc::{Operation, OperationResult};
pub use config::ServiceConfig;
pub use format::{format_number, Formatter, NotationRule};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
