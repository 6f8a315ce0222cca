//! Diagnostic system for delegation errors and warnings.
//!
//! Every diagnostic carries:
//! - An error code for searchability
//! - A message (what went wrong)
//! - A primary span (where it went wrong)
//! - Secondary labels, notes and suggestions (why, and how to fix)
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] is type-level proof that at least one error was
//! emitted. It can only be obtained from a [`DiagnosticQueue`], so a unit
//! report that claims failure has to have reported it.
//!
//! ```text
//! let guarantee = queue.emit_error(diagnostic);
//! fn run_unit(..) -> Result<Output, ErrorGuaranteed> { ... }
//! ```

mod diagnostic;
mod error_code;
mod guarantee;
mod queue;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{too_many_errors, DiagnosticConfig, DiagnosticQueue};
