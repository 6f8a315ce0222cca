//! Signature compatibility between a delegating method and a candidate.

use remap_ir::Method;

/// Check if `target` can stand in for `source` as a drop-in call.
///
/// Requires equal arity, equal return type and equal type at every
/// parameter position. Equality is nominal: no widening, no variance,
/// no boxing. Parameter names are irrelevant.
pub fn compatible(source: &Method, target: &Method) -> bool {
    source.return_type == target.return_type
        && source.arity() == target.arity()
        && source
            .params
            .iter()
            .zip(&target.params)
            .all(|(s, t)| s.ty == t.ty)
}
