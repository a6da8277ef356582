//! Number formatting subsystem.
//!
//! # Data Flow
//! ```text
//! computed f64
//!     → formatter.rs (fixed-point render, trailing-zero strip)
//!     → notation.rs (decide fixed vs scientific)
//!     → FormattedResult (String)
//! ```
//!
//! # Design Decisions
//! - Pure functions only: no state, no locking
//! - Notation rule is chosen once from config and never changes at runtime
//! - Non-finite values render as literals so every endpoint stays total

pub mod formatter;
pub mod notation;

pub use formatter::{format_number, Formatter};
pub use notation::NotationRule;
