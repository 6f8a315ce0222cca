//! The delegation pass: drives every delegating method of a unit (or of a
//! whole model) through validation, resolution and call synthesis.
//!
//! Failure granularity:
//! - a rejected method (E1001, E1002) is skipped; the rest of the unit is
//!   still generated
//! - a missing delegate (E1003) or an internal error aborts the unit: no
//!   generated method of it is kept, but every remaining delegating method
//!   is still checked so its own diagnostics are reported
//!
//! Non-delegating methods are left alone.

use rustc_hash::FxHashSet;

use remap_diagnostic::{Diagnostic, DiagnosticQueue, ErrorGuaranteed};
use remap_ir::{MapperModel, Method, MethodId, Span, StringInterner, TypeRef, UnitId};

use crate::{
    render_call, validate, AmbiguityPolicy, CandidateResolver, DelegationBody, DelegationConfig,
    DelegationProblem, Lifecycle, MethodReference, MethodState, Owner, Qualifier, TransitionError,
};

/// A successfully generated delegating method.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeneratedMethod {
    pub method: MethodId,
    pub reference: MethodReference,
    pub body: DelegationBody,
    /// Emit an override marker on the generated method.
    pub overrides: bool,
    /// Types the emitter must import: parameter types, the return type, and
    /// the owning unit's type for cross-unit calls. First-use order.
    pub required_types: Vec<TypeRef>,
}

/// The final lifecycle state of one delegating method.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodOutcome {
    pub method: MethodId,
    pub state: MethodState,
}

/// The result of running the pass over one unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnitReport {
    pub unit: UnitId,
    /// Generated methods, in declaration order. Empty if aborted.
    pub generated: Vec<GeneratedMethod>,
    /// One entry per delegating method, in declaration order.
    pub outcomes: Vec<MethodOutcome>,
    /// Set when the unit's generation was abandoned.
    pub aborted: Option<ErrorGuaranteed>,
}

impl UnitReport {
    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }

    /// Final state of a delegating method of this unit.
    pub fn outcome(&self, method: MethodId) -> Option<MethodState> {
        self.outcomes
            .iter()
            .find(|o| o.method == method)
            .map(|o| o.state)
    }

    pub fn generated_for(&self, method: MethodId) -> Option<&GeneratedMethod> {
        self.generated.iter().find(|g| g.method == method)
    }
}

/// Everything a whole-model run produced.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DelegationOutput {
    /// One report per unit, in declaration order.
    pub reports: Vec<UnitReport>,
    /// Sorted diagnostics from every unit.
    pub diagnostics: Vec<Diagnostic>,
}

impl DelegationOutput {
    pub fn report(&self, unit: UnitId) -> Option<&UnitReport> {
        self.reports.iter().find(|r| r.unit == unit)
    }

    /// Check if any errors were emitted and get proof if so.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.diagnostics.iter().filter(|d| d.is_error()).count())
    }
}

/// How one method's run ended.
enum Step {
    Generated(GeneratedMethod),
    /// Validation failed; the unit carries on.
    Rejected,
    /// The unit must be abandoned.
    Fatal(ErrorGuaranteed),
}

/// Runs delegate resolution over a [`MapperModel`].
pub struct DelegationPass<'a> {
    model: &'a MapperModel,
    interner: &'a StringInterner,
    config: DelegationConfig,
    resolver: CandidateResolver<'a>,
    queue: DiagnosticQueue,
}

impl<'a> DelegationPass<'a> {
    pub fn new(model: &'a MapperModel, interner: &'a StringInterner, config: DelegationConfig) -> Self {
        DelegationPass {
            model,
            interner,
            resolver: CandidateResolver::new(model, config.qualifier_matching),
            queue: DiagnosticQueue::with_config(config.diagnostics.clone()),
            config,
        }
    }

    pub fn config(&self) -> &DelegationConfig {
        &self.config
    }

    /// Generate every delegating method of `unit`, in declaration order.
    #[tracing::instrument(level = "debug", skip_all, fields(
        unit = self.interner.lookup(self.model.unit(unit).name),
    ))]
    pub fn run_unit(&mut self, unit: UnitId) -> UnitReport {
        let model = self.model;
        let mut report = UnitReport {
            unit,
            generated: Vec::new(),
            outcomes: Vec::new(),
            aborted: None,
        };

        for id in model.delegating_methods(unit) {
            let mut lifecycle = Lifecycle::new();
            let step = self.run_method(id, &mut lifecycle);
            report.outcomes.push(MethodOutcome {
                method: id,
                state: lifecycle.state(),
            });

            match step {
                Step::Generated(generated) => report.generated.push(generated),
                Step::Rejected => {}
                Step::Fatal(guarantee) => {
                    report.aborted.get_or_insert(guarantee);
                }
            }
        }

        if report.is_aborted() {
            report.generated.clear();
            tracing::debug!(methods = report.outcomes.len(), "unit generation aborted");
        } else {
            tracing::debug!(generated = report.generated.len(), "unit generated");
        }
        report
    }

    /// Run every unit of the model and collect the sorted diagnostics.
    #[tracing::instrument(level = "debug", skip_all, fields(units = self.model.unit_count()))]
    pub fn run_model(mut self) -> DelegationOutput {
        let model = self.model;
        let reports = model.units().map(|(id, _)| self.run_unit(id)).collect();
        DelegationOutput {
            reports,
            diagnostics: self.queue.flush(),
        }
    }

    /// Check if any errors were emitted so far and get proof if so.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        self.queue.has_errors()
    }

    /// Diagnostics emitted so far, in emission order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.queue.peek()
    }

    /// Finish a run made of [`run_unit`](Self::run_unit) calls and return
    /// the sorted diagnostics.
    pub fn finish(mut self) -> Vec<Diagnostic> {
        self.queue.flush()
    }

    fn run_method(&mut self, id: MethodId, lifecycle: &mut Lifecycle) -> Step {
        match self.drive(id, lifecycle) {
            Ok(step) => step,
            Err(error) => {
                let method = self.model.method(id);
                let problem = DelegationProblem::Internal {
                    span: method.span,
                    method: method.name,
                    error,
                };
                Step::Fatal(self.report_error(&problem))
            }
        }
    }

    /// The pipeline for one method. Problems become diagnostics here; the
    /// only `Err` is an illegal lifecycle transition.
    #[tracing::instrument(level = "debug", skip_all, fields(
        method = self.interner.lookup(self.model.method(id).name),
    ))]
    fn drive(&mut self, id: MethodId, lifecycle: &mut Lifecycle) -> Result<Step, TransitionError> {
        let model = self.model;
        let method = model.method(id);

        if let Err(problem) = validate(model, id) {
            lifecycle.advance(MethodState::Rejected)?;
            self.report_error(&problem);
            return Ok(Step::Rejected);
        }
        lifecycle.advance(MethodState::Validated)?;
        lifecycle.advance(MethodState::Resolving)?;

        let qualifier = method.delegate.as_ref().and_then(Qualifier::from_attrs);
        let found = match self.config.ambiguity {
            AmbiguityPolicy::FirstMatch => self
                .resolver
                .find(id, qualifier.as_ref())
                .map(|chosen| (chosen, Vec::new())),
            AmbiguityPolicy::Warn => self
                .resolver
                .resolve_all(id, qualifier.as_ref())
                .map(|resolution| (resolution.chosen, resolution.alternatives)),
        };

        let Some((chosen, alternatives)) = found else {
            lifecycle.advance(MethodState::ResolutionFailed)?;
            let problem = DelegationProblem::NoDelegateFound {
                span: method.span,
                method: method.name,
                unit: model.unit(method.unit).name,
                qualifier,
                attribute_span: method.delegate.as_ref().map_or(Span::DUMMY, |d| d.span),
            };
            return Ok(Step::Fatal(self.report_error(&problem)));
        };
        lifecycle.advance(MethodState::Resolved)?;

        let reference = self.resolver.reference(id, chosen);
        if self.config.warn_same_unit && reference.is_same_unit() {
            self.report_warning(&DelegationProblem::SameUnitDelegate {
                span: method.span,
                method: method.name,
                delegate: reference.target_name,
            });
        }
        if !alternatives.is_empty() {
            self.report_warning(&DelegationProblem::AmbiguousDelegate {
                span: method.span,
                method: method.name,
                chosen: reference.target_name,
                others: alternatives
                    .iter()
                    .map(|c| model.method(c.method).name)
                    .collect(),
            });
        }

        let call = render_call(Some(&reference), &reference.call_site(), self.interner);
        let body = DelegationBody::for_method(method, call);
        lifecycle.advance(MethodState::Rendered)?;

        Ok(Step::Generated(GeneratedMethod {
            method: id,
            required_types: required_types(model, method, &reference),
            reference,
            body,
            overrides: method.overrides,
        }))
    }

    fn report_error(&mut self, problem: &DelegationProblem) -> ErrorGuaranteed {
        let diag = problem.into_diagnostic(self.interner);
        tracing::debug!(code = %diag.code, "delegation error");
        self.queue.emit_error(diag)
    }

    fn report_warning(&mut self, problem: &DelegationProblem) {
        let diag = problem.into_diagnostic(self.interner);
        tracing::debug!(code = %diag.code, "delegation warning");
        self.queue.add(diag);
    }
}

/// Types the emitter must import for a generated delegating method.
fn required_types(model: &MapperModel, method: &Method, reference: &MethodReference) -> Vec<TypeRef> {
    let owner = match reference.owner {
        Owner::SameUnit => None,
        Owner::OtherUnit(used) => Some(model.unit(used.unit).ty),
    };

    let mut seen = FxHashSet::default();
    method
        .params
        .iter()
        .map(|p| p.ty)
        .chain(Some(method.return_type).filter(|ty| !ty.is_void()))
        .chain(owner)
        .filter(|ty| seen.insert(*ty))
        .collect()
}
