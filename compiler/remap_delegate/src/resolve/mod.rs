//! Candidate discovery for delegating methods.
//!
//! Two passes, in priority order:
//!
//! 1. **Cross-unit**: every used unit of the delegating method's unit, in
//!    declaration order; within a unit every public method, in declaration
//!    order. Constructors and non-public members are never candidates.
//! 2. **Same unit**, only if pass 1 found nothing: every method of the
//!    declaring unit except the delegating method itself, other delegating
//!    methods, constructors and private members.
//!
//! With a name qualifier a candidate is accepted when its name matches;
//! otherwise it must be signature-compatible. The first accepted candidate
//! wins. Excluding delegating methods from
//! pass 2 means delegation never chains, so no cycle can form.

use remap_ir::{MapperModel, Method, MethodId, Visibility};

use crate::{build, compatible, MethodReference, Owner, Qualifier, QualifierMatching};

/// An accepted candidate, before it is materialized into a reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub method: MethodId,
    pub owner: Owner,
}

/// The winning candidate plus every other accepted candidate of the same pass.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub chosen: Candidate,
    /// Other matches, in search order. Empty when the choice was unique.
    pub alternatives: Vec<Candidate>,
}

impl Resolution {
    pub fn is_ambiguous(&self) -> bool {
        !self.alternatives.is_empty()
    }
}

/// Searches a [`MapperModel`] for delegates.
#[derive(Copy, Clone, Debug)]
pub struct CandidateResolver<'m> {
    model: &'m MapperModel,
    matching: QualifierMatching,
}

impl<'m> CandidateResolver<'m> {
    pub fn new(model: &'m MapperModel, matching: QualifierMatching) -> Self {
        CandidateResolver { model, matching }
    }

    /// Find the delegate for `id` and materialize it.
    ///
    /// Returns `None` when neither pass accepts a candidate.
    #[tracing::instrument(level = "debug", skip_all, fields(method = ?id))]
    pub fn resolve(&self, id: MethodId, qualifier: Option<&Qualifier>) -> Option<MethodReference> {
        let candidate = self.find(id, qualifier)?;
        tracing::debug!(delegate = ?candidate.method, owner = ?candidate.owner, "delegate resolved");
        Some(self.reference(id, candidate))
    }

    /// Find the winning candidate without materializing it.
    pub fn find(&self, id: MethodId, qualifier: Option<&Qualifier>) -> Option<Candidate> {
        self.cross_unit_candidates(id, qualifier)
            .next()
            .or_else(|| self.same_unit_candidates(id, qualifier).next())
    }

    /// Find the winning candidate together with the other matches of the
    /// pass that produced it.
    pub fn resolve_all(&self, id: MethodId, qualifier: Option<&Qualifier>) -> Option<Resolution> {
        let mut cross = self.cross_unit_candidates(id, qualifier);
        if let Some(chosen) = cross.next() {
            return Some(Resolution {
                chosen,
                alternatives: cross.collect(),
            });
        }

        let mut same = self.same_unit_candidates(id, qualifier);
        let chosen = same.next()?;
        Some(Resolution {
            chosen,
            alternatives: same.collect(),
        })
    }

    /// Materialize a candidate for the delegating method `id`.
    pub fn reference(&self, id: MethodId, candidate: Candidate) -> MethodReference {
        build(
            self.model.method(id),
            candidate.method,
            self.model.method(candidate.method),
            candidate.owner,
        )
    }

    /// Accepted candidates of the cross-unit pass, lazily, in search order.
    pub fn cross_unit_candidates<'a>(
        &'a self,
        id: MethodId,
        qualifier: Option<&'a Qualifier>,
    ) -> impl Iterator<Item = Candidate> + 'a {
        let model: &'a MapperModel = self.model;
        let matching = self.matching;
        let source = model.method(id);

        model.unit(source.unit).uses.iter().flat_map(move |used| {
            model
                .methods_of(used.unit)
                .filter(move |(_, candidate)| {
                    candidate.is_method()
                        && candidate.visibility.is_public()
                        && accepts(matching, source, candidate, qualifier)
                })
                .map(move |(method, _)| {
                    tracing::trace!(?method, unit = ?used.unit, "cross-unit candidate accepted");
                    Candidate {
                        method,
                        owner: Owner::OtherUnit(*used),
                    }
                })
        })
    }

    /// Accepted candidates of the same-unit pass, lazily, in search order.
    pub fn same_unit_candidates<'a>(
        &'a self,
        id: MethodId,
        qualifier: Option<&'a Qualifier>,
    ) -> impl Iterator<Item = Candidate> + 'a {
        let model: &'a MapperModel = self.model;
        let matching = self.matching;
        let source = model.method(id);

        model
            .methods_of(source.unit)
            .filter(move |(method, candidate)| {
                *method != id
                    && !candidate.is_delegating()
                    && candidate.is_method()
                    && candidate.visibility != Visibility::Private
                    && accepts(matching, source, candidate, qualifier)
            })
            .map(|(method, _)| {
                tracing::trace!(?method, "same-unit candidate accepted");
                Candidate {
                    method,
                    owner: Owner::SameUnit,
                }
            })
    }
}

/// The per-candidate test shared by both passes.
///
/// A name qualifier selects on the name alone. Type qualifiers and
/// unqualified searches select on signature compatibility.
fn accepts(
    matching: QualifierMatching,
    source: &Method,
    candidate: &Method,
    qualifier: Option<&Qualifier>,
) -> bool {
    match qualifier {
        Some(qualifier) if matches!(qualifier, Qualifier::ByName(_)) => {
            qualifier.admits(candidate, matching)
        }
        _ => compatible(source, candidate),
    }
}
