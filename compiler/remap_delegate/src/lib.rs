//! Delegate resolution for delegating mapper methods.
//!
//! A delegating method is an abstract conversion method whose body is a
//! single call to an existing method, found either in
//! one of the mapper units its own unit uses or in its own unit.
//!
//! # Pipeline
//!
//! For each delegating method, in declaration order:
//!
//! 1. [`validate`]: the method must be abstract and carry no conflicting
//!    mapping directive.
//! 2. [`CandidateResolver::resolve`]: used units first (declaration order,
//!    public methods only), then the declaring unit (no delegating methods,
//!    never the method itself).
//! 3. [`build`]: bind each target parameter to the delegating method's
//!    parameter at the same position.
//! 4. [`render_call`]: `accessVariable.target( a, b )`.
//!
//! [`DelegationPass`] drives the pipeline over a unit or a whole model,
//! tracks each method through a [`Lifecycle`], and reports problems through
//! a [`DiagnosticQueue`](remap_diagnostic::DiagnosticQueue).
//!
//! # Tracing
//!
//! Set `RUST_LOG=remap_delegate=debug` and call [`init_tracing`] to see
//! candidate acceptance and lifecycle transitions.

mod config;
mod lifecycle;
mod pass;
mod problem;
mod qualifier;
mod reference;
mod render;
mod resolve;
mod signature;
mod validate;

pub use config::{AmbiguityPolicy, DelegationConfig, QualifierMatching};
pub use lifecycle::{Lifecycle, MethodState, TransitionError};
pub use pass::{DelegationOutput, DelegationPass, GeneratedMethod, MethodOutcome, UnitReport};
pub use problem::DelegationProblem;
pub use qualifier::Qualifier;
pub use reference::{build, MethodReference, Owner, ParameterBinding};
pub use render::{render_call, DelegationBody, NO_DELEGATE_PLACEHOLDER};
pub use resolve::{Candidate, CandidateResolver, Resolution};
pub use signature::compatible;
pub use validate::validate;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for delegate resolution.
///
/// Call this once at startup. Does nothing unless `RUST_LOG` is set, so
/// the pass stays silent in normal runs. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
