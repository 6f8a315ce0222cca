//! Error codes for delegation diagnostics.
//!
//! Each code is a unique identifier (e.g. `E1003`). Used for lookups in
//! documentation and for filtering in tests.

use std::fmt;

/// Error codes for all delegation diagnostics.
///
/// Format: `E####` for errors, `W####` for warnings:
/// - E1xxx: delegation errors
/// - W1xxx: delegation warnings
/// - E9xxx: internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Delegation Errors (E1xxx)
    /// Delegating method already has a body
    E1001,
    /// Delegating method carries a conflicting mapping directive
    E1002,
    /// No compatible delegate found
    E1003,

    // Delegation Warnings (W1xxx)
    /// Delegate resolved within the same mapper unit
    W1001,
    /// More than one compatible delegate; first one wins
    W1002,

    // Internal Errors (E9xxx)
    /// Internal error (illegal method lifecycle transition)
    E9001,
    /// Too many errors
    E9002,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::W1001,
        ErrorCode::W1002,
        ErrorCode::E9001,
        ErrorCode::E9002,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::W1001 => "W1001",
            ErrorCode::W1002 => "W1002",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// One-line description of the code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "delegating method must be abstract",
            ErrorCode::E1002 => "delegating method carries a conflicting mapping directive",
            ErrorCode::E1003 => "no delegate found",
            ErrorCode::W1001 => "delegate resolved within the same mapper",
            ErrorCode::W1002 => "ambiguous delegate",
            ErrorCode::E9001 => "internal error",
            ErrorCode::E9002 => "too many errors",
        }
    }

    /// Check if this is a delegation error (E1xxx range).
    pub fn is_delegation_error(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003)
    }

    /// Check if this is an internal error (E9xxx range).
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001 | ErrorCode::E9002)
    }

    /// Check if this is a warning code (Wxxx range).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W1001 | ErrorCode::W1002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code string like `"E1003"` or `"w1001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
