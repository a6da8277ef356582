//! Arithmetic operations and the response envelope.
//!
//! # Data Flow
//! ```text
//! Operands (validated f64 pair)
//!     → operation.rs (apply addition / subtraction)
//!     → format (render the result)
//!     → result.rs (OperationResult envelope, serialized once)
//! ```

pub mod operation;
pub mod result;

pub use operation::Operation;
pub use result::OperationResult;
