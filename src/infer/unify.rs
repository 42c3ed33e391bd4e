//! Unification algorithm for type inference.
//!
//! Computes the most general substitution making two types equal. Compound
//! types are unified component by component, left before right, with the
//! left substitution applied to the right components first.

use crate::error::TypeError;
use crate::types::{Subst, TVar, Type};

/// Result type for unification.
pub type UnifyResult<T> = Result<T, TypeError>;

/// Unify two types, returning the most general unifier.
pub fn unify(t1: &Type, t2: &Type) -> UnifyResult<Subst> {
    match (t1, t2) {
        // Same variable
        (Type::Var(v1), Type::Var(v2)) if v1 == v2 => Ok(Subst::empty()),

        // A variable binds to anything
        (Type::Var(var), t) | (t, Type::Var(var)) => var_bind(*var, t),

        (Type::Basic(n1), Type::Basic(n2)) if n1 == n2 => Ok(Subst::empty()),

        (Type::Func(d1, c1), Type::Func(d2, c2))
        | (Type::Product(d1, c1), Type::Product(d2, c2))
        | (Type::Sum(d1, c1), Type::Sum(d2, c2)) => unify_pair(d1, c1, d2, c2),

        // Mismatch
        _ => Err(TypeError::mismatch(t1, t2)),
    }
}

/// Unify `(l1, r1)` against `(l2, r2)` left to right.
fn unify_pair(l1: &Type, r1: &Type, l2: &Type, r2: &Type) -> UnifyResult<Subst> {
    let s1 = unify(l1, l2)?;
    // The left unifier may bind variables on the right
    let s2 = unify(&s1.apply(r1), &s1.apply(r2))?;
    Ok(s2.compose(&s1))
}

/// Bind a type variable to a type (with occurs check).
fn var_bind(var: TVar, ty: &Type) -> UnifyResult<Subst> {
    // Don't bind to itself
    if ty.as_var() == Some(var) {
        return Ok(Subst::empty());
    }

    // Standard occurs check, before anything is committed
    if ty.occurs(var) {
        return Err(TypeError::OccursCheck {
            var,
            ty: ty.clone(),
        });
    }

    tracing::trace!(%var, %ty, "bind type variable");
    Ok(Subst::singleton(var, ty.clone()))
}
