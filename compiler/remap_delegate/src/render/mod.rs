//! Delegation call synthesis.
//!
//! The rendered call is the whole body of the delegating method:
//!
//! ```text
//! addressMapper.toAddressDto( address )   // cross-unit
//! toDto( person )                         // same unit
//! create(  )                              // no arguments
//! ```

use std::fmt;

use remap_ir::{Method, Name, StringLookup};

use crate::MethodReference;

/// Rendered in place of a call when there is no reference.
pub const NO_DELEGATE_PLACEHOLDER: &str = "/* no delegate call found */";

/// Render the delegation call expression.
///
/// `call_site` holds the argument names in order; for a generated method
/// these are the delegating method's parameter names.
pub fn render_call(
    reference: Option<&MethodReference>,
    call_site: &[Name],
    interner: &dyn StringLookup,
) -> String {
    let Some(reference) = reference else {
        return NO_DELEGATE_PLACEHOLDER.to_owned();
    };

    let mut out = String::new();
    if let Some(variable) = reference.access_variable() {
        out.push_str(interner.lookup(variable));
        out.push('.');
    }
    out.push_str(interner.lookup(reference.target_name));
    out.push_str("( ");
    for (i, arg) in call_site.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(interner.lookup(*arg));
    }
    out.push_str(" )");
    out
}

/// The generated body of a delegating method: a single statement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DelegationBody {
    /// `return <call>;`
    Return(String),
    /// `<call>;` for `void` methods.
    Statement(String),
}

impl DelegationBody {
    /// Wrap a rendered call for `method`.
    pub fn for_method(method: &Method, call: String) -> Self {
        if method.return_type.is_void() {
            DelegationBody::Statement(call)
        } else {
            DelegationBody::Return(call)
        }
    }

    /// The call expression without the statement syntax.
    pub fn call(&self) -> &str {
        match self {
            DelegationBody::Return(call) | DelegationBody::Statement(call) => call,
        }
    }
}

impl fmt::Display for DelegationBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelegationBody::Return(call) => write!(f, "return {call};"),
            DelegationBody::Statement(call) => write!(f, "{call};"),
        }
    }
}
