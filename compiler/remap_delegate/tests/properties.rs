//! Property tests for delegate resolution over generated mapper models.

#![allow(clippy::unwrap_used, reason = "generated models are well-formed")]

use proptest::prelude::*;
use remap_delegate::{
    compatible, CandidateResolver, DelegationConfig, DelegationPass, Owner, Qualifier,
    QualifierMatching,
};
use remap_ir::{MapperModel, MethodDecl, ModelBuilder, StringInterner, Visibility};

const TYPES: [&str; 3] = ["A", "B", "C"];
const TAGS: [&str; 2] = ["x", "y"];
const PARAMS: [&str; 3] = ["first", "second", "third"];

#[derive(Clone, Debug)]
struct MethodShape {
    params: Vec<usize>,
    ret: usize,
    delegating: bool,
    qualifier: Option<usize>,
    tag: Option<usize>,
    public: bool,
}

fn method_shape() -> impl Strategy<Value = MethodShape> {
    (
        prop::collection::vec(0..TYPES.len(), 0..3),
        0..TYPES.len(),
        any::<bool>(),
        prop::option::of(0..TAGS.len()),
        prop::option::of(0..TAGS.len()),
        any::<bool>(),
    )
        .prop_map(|(params, ret, delegating, qualifier, tag, public)| MethodShape {
            params,
            ret,
            delegating,
            qualifier,
            tag,
            public,
        })
}

/// Units with their methods. The first unit uses every other unit.
fn model_shape() -> impl Strategy<Value = Vec<Vec<MethodShape>>> {
    prop::collection::vec(prop::collection::vec(method_shape(), 1..6), 1..4)
}

fn build(interner: &StringInterner, shape: &[Vec<MethodShape>]) -> MapperModel {
    let mut builder = ModelBuilder::new(interner);
    let units: Vec<_> = (0..shape.len())
        .map(|u| builder.add_unit(&format!("Mapper{u}")).unwrap())
        .collect();
    for &used in &units[1..] {
        builder.add_use(units[0], used).unwrap();
    }

    for (u, methods) in shape.iter().enumerate() {
        for (i, m) in methods.iter().enumerate() {
            let name = format!("m{u}x{i}");
            let mut decl = MethodDecl::new(&name).returns(TYPES[m.ret]);
            for (p, ty) in m.params.iter().enumerate() {
                decl = decl.param(PARAMS[p], TYPES[*ty]);
            }
            if let Some(tag) = m.tag {
                decl = decl.named(TAGS[tag]);
            }
            if !m.public {
                decl = decl.visibility(Visibility::Private);
            }
            if m.delegating {
                decl = match m.qualifier {
                    Some(q) => decl.qualified_by_name(TAGS[q]),
                    None => decl.delegating(),
                };
            }
            builder.add_method(units[u], decl).unwrap();
        }
    }
    builder.finish()
}

/// One dimension of a signature to perturb.
#[derive(Clone, Debug)]
enum Mutation {
    Arity,
    Return,
    Param(prop::sample::Index),
}

fn mutation() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        Just(Mutation::Arity),
        Just(Mutation::Return),
        any::<prop::sample::Index>().prop_map(Mutation::Param),
    ]
}

fn signature<'a>(name: &'a str, params: &[usize], ret: usize, reversed_names: bool) -> MethodDecl<'a> {
    let mut decl = MethodDecl::new(name).returns(TYPES[ret]);
    for (p, ty) in params.iter().enumerate() {
        let param = if reversed_names {
            PARAMS[params.len() - 1 - p]
        } else {
            PARAMS[p]
        };
        decl = decl.param(param, TYPES[*ty]);
    }
    decl
}

fn next_type(ty: usize) -> usize {
    (ty + 1) % TYPES.len()
}

proptest! {
    #[test]
    fn compatibility_is_exact(
        params in prop::collection::vec(0..TYPES.len(), 0..=PARAMS.len()),
        ret in 0..TYPES.len(),
        mutation in mutation(),
    ) {
        let mut mutated_params = params.clone();
        let mut mutated_ret = ret;
        match mutation {
            Mutation::Arity if params.len() == PARAMS.len() => {
                mutated_params.pop();
            }
            Mutation::Arity => mutated_params.push(0),
            Mutation::Return => mutated_ret = next_type(ret),
            Mutation::Param(_) if params.is_empty() => mutated_params.push(0),
            Mutation::Param(index) => {
                let i = index.index(params.len());
                mutated_params[i] = next_type(mutated_params[i]);
            }
        }

        let interner = StringInterner::new();
        let mut builder = ModelBuilder::new(&interner);
        let unit = builder.add_unit("Mapper").unwrap();
        let source = builder.add_method(unit, signature("source", &params, ret, false)).unwrap();
        let renamed = builder.add_method(unit, signature("renamed", &params, ret, true)).unwrap();
        let mutated = builder
            .add_method(unit, signature("mutated", &mutated_params, mutated_ret, false))
            .unwrap();
        let model = builder.finish();
        let (source, renamed, mutated) =
            (model.method(source), model.method(renamed), model.method(mutated));

        prop_assert!(compatible(source, source));
        prop_assert!(compatible(source, renamed));
        prop_assert!(compatible(renamed, source));
        prop_assert!(!compatible(source, mutated));
        prop_assert!(!compatible(mutated, source));
    }

    #[test]
    fn resolved_delegates_are_valid(shape in model_shape()) {
        let interner = StringInterner::new();
        let model = build(&interner, &shape);
        let matching = QualifierMatching::default();
        let resolver = CandidateResolver::new(&model, matching);

        for (unit, _) in model.units() {
            for id in model.delegating_methods(unit) {
                let method = model.method(id);
                let qualifier = method.delegate.as_ref().and_then(Qualifier::from_attrs);
                let Some(reference) = resolver.resolve(id, qualifier.as_ref()) else {
                    continue;
                };
                let target = model.method(reference.target);

                // Never itself; never another delegating method of the same unit.
                prop_assert_ne!(reference.target, id);
                if reference.is_same_unit() {
                    prop_assert!(!target.is_delegating());
                    prop_assert_eq!(target.unit, unit);
                }

                let call_site: Vec<_> = reference.call_site().to_vec();
                let params: Vec<_> = method.param_names().collect();
                match qualifier {
                    // Qualifier precedence: the name decides.
                    Some(q @ Qualifier::ByName(_)) => {
                        prop_assert!(q.admits(target, matching));
                        let bound = target.arity().min(method.arity());
                        prop_assert_eq!(&call_site[..], &params[..bound]);
                    }
                    // Exact signature match, arguments passed through in order.
                    _ => {
                        prop_assert!(compatible(method, target));
                        prop_assert_eq!(call_site, params);
                    }
                }
            }
        }
    }

    #[test]
    fn used_units_take_priority(shape in model_shape()) {
        let interner = StringInterner::new();
        let model = build(&interner, &shape);
        let matching = QualifierMatching::default();
        let resolver = CandidateResolver::new(&model, matching);
        let (root, root_unit) = model.units().next().unwrap();

        for id in model.delegating_methods(root) {
            let method = model.method(id);
            let qualifier = method.delegate.as_ref().and_then(Qualifier::from_attrs);
            let cross_exists = root_unit.uses.iter().any(|used| {
                model.methods_of(used.unit).any(|(_, c)| {
                    let accepted = match qualifier {
                        Some(q @ Qualifier::ByName(_)) => q.admits(c, matching),
                        _ => compatible(method, c),
                    };
                    c.visibility.is_public() && accepted
                })
            });

            let reference = resolver.resolve(id, qualifier.as_ref());
            if cross_exists {
                let reference = reference.unwrap();
                let is_cross = matches!(reference.owner, Owner::OtherUnit(_));
                prop_assert!(is_cross);
            } else if let Some(reference) = reference {
                prop_assert!(reference.is_same_unit());
            }
        }
    }

    #[test]
    fn pass_is_deterministic(shape in model_shape()) {
        let first_interner = StringInterner::new();
        let first_model = build(&first_interner, &shape);
        let first = DelegationPass::new(&first_model, &first_interner, DelegationConfig::strict())
            .run_model();

        let second_interner = StringInterner::new();
        let second_model = build(&second_interner, &shape);
        let second = DelegationPass::new(&second_model, &second_interner, DelegationConfig::strict())
            .run_model();

        prop_assert_eq!(first, second);
    }
}
