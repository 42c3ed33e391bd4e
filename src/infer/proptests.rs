//! Property-based tests for unification and inference.

use std::collections::BTreeSet;

use proptest::prelude::*;

use super::{generalize, infer_scheme, infer_with_subst, unify, InferState, TypeEnv};
use crate::ast::Expr;
use crate::builtins::initial_env;
use crate::error::TypeError;
use crate::types::{Substitutable, TVar, Type, TypeScheme};

// Small id range so generated types share variables often
fn tvar_strategy() -> impl Strategy<Value = TVar> {
    (0u32..5).prop_map(TVar)
}

fn type_strategy() -> impl Strategy<Value = Type> {
    let leaf = prop_oneof![
        tvar_strategy().prop_map(Type::Var),
        Just(Type::int()),
        Just(Type::bool()),
    ];

    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(d, c)| Type::func(d, c)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Type::product(l, r)),
            (inner.clone(), inner).prop_map(|(l, r)| Type::sum(l, r)),
        ]
    })
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["x", "y", "f", "g"]).prop_map(String::from)
}

fn builtin_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "zero", "true", "succ", "if", "pair", "fst", "snd", "inl", "case",
    ])
    .prop_map(String::from)
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        name_strategy().prop_map(Expr::Var),
        builtin_strategy().prop_map(Expr::Var),
    ];

    leaf.prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (name_strategy(), inner.clone()).prop_map(|(p, b)| Expr::lambda(p, b)),
            (inner.clone(), inner.clone()).prop_map(|(f, a)| Expr::app(f, a)),
            (name_strategy(), inner.clone(), inner).prop_map(|(n, v, b)| Expr::let_in(n, v, b)),
        ]
    })
}

fn mono_env_strategy() -> impl Strategy<Value = TypeEnv> {
    prop::collection::vec((name_strategy(), type_strategy()), 0..4).prop_map(|bindings| {
        bindings
            .into_iter()
            .map(|(name, ty)| (name, TypeScheme::mono(ty)))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_unify_reflexive(ty in type_strategy()) {
        let subst = unify(&ty, &ty);
        prop_assert!(subst.is_ok_and(|s| s.is_empty()));
    }

    #[test]
    fn prop_unifier_equates_and_is_idempotent(t1 in type_strategy(), t2 in type_strategy()) {
        if let Ok(subst) = unify(&t1, &t2) {
            let left = subst.apply(&t1);
            let right = subst.apply(&t2);
            prop_assert_eq!(&left, &right);
            prop_assert_eq!(subst.apply(&left), left);
        }
    }

    #[test]
    fn prop_unify_success_is_symmetric(t1 in type_strategy(), t2 in type_strategy()) {
        prop_assert_eq!(unify(&t1, &t2).is_ok(), unify(&t2, &t1).is_ok());
    }

    #[test]
    fn prop_occurs_check_rejects_cycles(var in tvar_strategy(), other in type_strategy()) {
        let ty = Type::func(Type::Var(var), other);
        prop_assert_eq!(
            unify(&Type::Var(var), &ty),
            Err(TypeError::OccursCheck { var, ty: ty.clone() })
        );
    }

    #[test]
    fn prop_generalize_respects_env(env in mono_env_strategy(), ty in type_strategy()) {
        let env_vars = env.free_vars();
        let scheme = generalize(&env, &ty);

        let quantified: BTreeSet<TVar> = scheme.vars().iter().copied().collect();
        prop_assert!(quantified.is_disjoint(&env_vars));
        prop_assert!(scheme.free_vars().is_subset(&env_vars));

        let all: BTreeSet<TVar> = quantified.union(&scheme.free_vars()).copied().collect();
        prop_assert_eq!(all, ty.free_vars());
    }

    #[test]
    fn prop_instantiation_is_fresh_renaming(ty in type_strategy()) {
        let scheme = TypeScheme::poly(ty.free_vars(), ty.clone());
        let mut state = InferState::starting_at(10);

        let inst = state.instantiate(&scheme).unwrap();

        prop_assert!(inst.free_vars().iter().all(|v| v.id() >= 10));
        prop_assert_eq!(inst.free_vars().len(), scheme.vars().len());
        prop_assert!(unify(&inst, &ty).is_ok());
    }

    #[test]
    fn prop_inferred_type_is_fully_substituted(expr in expr_strategy()) {
        let env = initial_env();
        if let Ok((subst, ty)) = infer_with_subst(&env, &expr) {
            prop_assert_eq!(subst.apply(&ty), ty);
            // The builtins are closed, so nothing in them gets refined
            prop_assert_eq!(env.apply_subst(&subst), env);
        }
    }

    #[test]
    fn prop_let_bound_value_keeps_scheme(expr in expr_strategy()) {
        let env = initial_env();
        let wrapped = Expr::let_in("bound", expr.clone(), Expr::var("bound"));

        let direct = infer_scheme(&env, &expr).map(|s| s.to_string());
        let via_let = infer_scheme(&env, &wrapped).map(|s| s.to_string());
        prop_assert_eq!(direct, via_let);
    }
}
