//! Substitution for type inference.
//!
//! Implements the substitution data structure and the Substitutable trait
//! for applying substitutions to types, type schemes, and other structures.

use std::collections::{BTreeSet, HashMap};

use super::ty::{TVar, TVarId, Type, TypeScheme};

/// A substitution mapping type variables to types.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Subst {
    map: HashMap<TVar, Type>,
}

impl Subst {
    /// Create an empty substitution.
    pub fn empty() -> Self {
        Subst {
            map: HashMap::new(),
        }
    }

    /// Create a singleton substitution.
    pub fn singleton(var: TVar, ty: Type) -> Self {
        let mut map = HashMap::new();
        map.insert(var, ty);
        Subst { map }
    }

    /// Check if the substitution is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Get the type for a variable, if present.
    pub fn get(&self, var: &TVar) -> Option<&Type> {
        self.map.get(var)
    }

    /// Check if a variable is in the domain.
    pub fn contains(&self, var: &TVar) -> bool {
        self.map.contains_key(var)
    }

    /// Get the domain (set of variables) of this substitution.
    pub fn domain(&self) -> BTreeSet<TVar> {
        self.map.keys().copied().collect()
    }

    /// Compose two substitutions: (self ∘ other)(x) = self(other(x))
    ///
    /// Every variable of `other` is mapped through `self`; mappings of `self`
    /// are added only for variables `other` does not bind. `other` must be
    /// the substitution derived first.
    pub fn compose(&self, other: &Subst) -> Subst {
        let mut result = HashMap::with_capacity(self.map.len() + other.map.len());

        for (var, ty) in &other.map {
            result.insert(*var, self.apply(ty));
        }

        for (var, ty) in &self.map {
            result.entry(*var).or_insert_with(|| ty.clone());
        }

        Subst { map: result }
    }

    /// Apply this substitution to a substitutable value.
    pub fn apply<T: Substitutable>(&self, t: &T) -> T {
        t.apply_subst(self)
    }

    /// Create a new substitution with certain variables removed.
    pub fn remove_vars(&self, vars: &[TVar]) -> Subst {
        if vars.iter().all(|v| !self.map.contains_key(v)) {
            return self.clone();
        }
        let mut map = self.map.clone();
        for var in vars {
            map.remove(var);
        }
        Subst { map }
    }

    /// Iterate over the mappings.
    pub fn iter(&self) -> impl Iterator<Item = (&TVar, &Type)> {
        self.map.iter()
    }
}

impl FromIterator<(TVar, Type)> for Subst {
    fn from_iter<T: IntoIterator<Item = (TVar, Type)>>(iter: T) -> Self {
        Subst {
            map: iter.into_iter().collect(),
        }
    }
}

/// Trait for types that can have substitutions applied.
pub trait Substitutable {
    /// Apply a substitution to this value.
    fn apply_subst(&self, subst: &Subst) -> Self;

    /// Collect all free type variables.
    fn free_vars(&self) -> BTreeSet<TVar>;
}

impl Substitutable for Type {
    fn apply_subst(&self, subst: &Subst) -> Self {
        if subst.is_empty() {
            return self.clone();
        }
        match self {
            Type::Basic(_) => self.clone(),

            // Single pass: composed substitutions are already idempotent.
            Type::Var(var) => subst.get(var).cloned().unwrap_or_else(|| self.clone()),

            Type::Func(domain, codomain) => {
                Type::func(domain.apply_subst(subst), codomain.apply_subst(subst))
            }
            Type::Product(left, right) => {
                Type::product(left.apply_subst(subst), right.apply_subst(subst))
            }
            Type::Sum(left, right) => Type::sum(left.apply_subst(subst), right.apply_subst(subst)),
        }
    }

    fn free_vars(&self) -> BTreeSet<TVar> {
        Type::free_vars(self)
    }
}

impl Substitutable for TypeScheme {
    fn apply_subst(&self, subst: &Subst) -> Self {
        // Quantified variables are bound by the scheme
        let quantified = self.vars();
        let inner = subst.remove_vars(quantified);
        if inner.is_empty() {
            return self.clone();
        }

        // A quantifier must not capture a variable the substitution brings in
        let incoming: BTreeSet<TVar> = self
            .free_vars()
            .iter()
            .filter_map(|v| inner.get(v))
            .flat_map(Type::free_vars)
            .collect();
        let captured: Vec<TVar> = quantified
            .iter()
            .copied()
            .filter(|v| incoming.contains(v))
            .collect();
        if captured.is_empty() {
            return TypeScheme::poly(quantified.iter().copied(), self.ty().apply_subst(&inner));
        }

        let mut used = self.ty().free_vars();
        used.extend(subst.domain());
        used.extend(subst.iter().flat_map(|(_, ty)| ty.free_vars()));
        let unused = (0..=TVarId::MAX).map(TVar).filter(|v| !used.contains(v));
        let renaming: Subst = captured
            .iter()
            .zip(unused)
            .map(|(old, new)| (*old, Type::Var(new)))
            .collect();
        tracing::trace!(renamed = renaming.len(), "renamed capturing quantifiers");

        let vars: Vec<TVar> = quantified
            .iter()
            .map(|v| renaming.get(v).and_then(Type::as_var).unwrap_or(*v))
            .collect();
        let ty = self.ty().apply_subst(&renaming).apply_subst(&inner);
        TypeScheme::poly(vars, ty)
    }

    fn free_vars(&self) -> BTreeSet<TVar> {
        TypeScheme::free_vars(self)
    }
}

impl<T: Substitutable> Substitutable for Vec<T> {
    fn apply_subst(&self, subst: &Subst) -> Self {
        self.iter().map(|t| t.apply_subst(subst)).collect()
    }

    fn free_vars(&self) -> BTreeSet<TVar> {
        let mut vars = BTreeSet::new();
        for t in self {
            vars.extend(t.free_vars());
        }
        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_subst() {
        let subst = Subst::empty();
        assert!(subst.is_empty());

        let ty = Type::var(0);
        assert_eq!(subst.apply(&ty), ty);
    }

    #[test]
    fn test_singleton_subst() {
        let subst = Subst::singleton(TVar(0), Type::int());
        assert_eq!(subst.apply(&Type::var(0)), Type::int());
    }

    #[test]
    fn test_subst_preserves_other_vars() {
        let subst = Subst::singleton(TVar(0), Type::int());
        assert_eq!(subst.apply(&Type::var(1)), Type::var(1));
    }

    #[test]
    fn test_subst_recurses_structurally() {
        let subst = Subst::singleton(TVar(0), Type::int());
        let ty = Type::func(
            Type::product(Type::var(0), Type::bool()),
            Type::sum(Type::var(0), Type::var(1)),
        );

        assert_eq!(
            subst.apply(&ty),
            Type::func(
                Type::product(Type::int(), Type::bool()),
                Type::sum(Type::int(), Type::var(1)),
            )
        );
    }

    #[test]
    fn test_compose() {
        // outer: t0 -> Int
        // inner: t1 -> t0
        // compose(outer, inner): t0 -> Int, t1 -> Int
        let outer = Subst::singleton(TVar(0), Type::int());
        let inner = Subst::singleton(TVar(1), Type::var(0));
        let composed = outer.compose(&inner);

        assert_eq!(composed.apply(&Type::var(0)), Type::int());
        assert_eq!(composed.apply(&Type::var(1)), Type::int());
        assert_eq!(composed.len(), 2);
    }

    #[test]
    fn test_compose_inner_key_wins() {
        // Both bind t0; inner's binding (mapped through outer) is kept.
        let outer = Subst::singleton(TVar(0), Type::bool());
        let inner = Subst::singleton(TVar(0), Type::int());
        let composed = outer.compose(&inner);

        assert_eq!(composed.get(&TVar(0)), Some(&Type::int()));
    }

    #[test]
    fn test_compose_is_not_commutative() {
        let s1 = Subst::singleton(TVar(0), Type::var(1));
        let s2 = Subst::singleton(TVar(1), Type::int());

        let a = s2.compose(&s1);
        let b = s1.compose(&s2);

        assert_eq!(a.apply(&Type::var(0)), Type::int());
        assert_eq!(b.apply(&Type::var(0)), Type::var(1));
    }

    #[test]
    fn test_compose_is_associative() {
        let s1 = Subst::singleton(TVar(0), Type::func(Type::var(1), Type::var(2)));
        let s2 = Subst::singleton(TVar(1), Type::product(Type::var(2), Type::int()));
        let s3 = Subst::singleton(TVar(2), Type::bool());

        let left = s3.compose(&s2).compose(&s1);
        let right = s3.compose(&s2.compose(&s1));

        for id in 0..3 {
            assert_eq!(left.apply(&Type::var(id)), right.apply(&Type::var(id)));
        }
    }

    #[test]
    fn test_composed_subst_is_idempotent() {
        let s1 = Subst::singleton(TVar(0), Type::func(Type::var(1), Type::var(1)));
        let s2 = Subst::singleton(TVar(1), Type::int());
        let composed = s2.compose(&s1);

        let ty = Type::product(Type::var(0), Type::var(1));
        let once = composed.apply(&ty);
        assert_eq!(composed.apply(&once), once);
    }

    #[test]
    fn test_free_vars() {
        let ty = Type::func(Type::var(0), Type::product(Type::var(1), Type::int()));
        let vars = Substitutable::free_vars(&ty);

        assert!(vars.contains(&TVar(0)));
        assert!(vars.contains(&TVar(1)));
        assert_eq!(vars.len(), 2);
    }

    #[test]
    fn test_scheme_subst_respects_quantifiers() {
        // forall t0. t0 -> t1
        let scheme = TypeScheme::poly([TVar(0)], Type::func(Type::var(0), Type::var(1)));

        let subst: Subst = [(TVar(0), Type::int()), (TVar(1), Type::bool())]
            .into_iter()
            .collect();
        let result = subst.apply(&scheme);

        assert_eq!(result.vars(), [TVar(0)]);
        assert_eq!(result.ty(), &Type::func(Type::var(0), Type::bool()));
    }

    #[test]
    fn test_scheme_subst_renames_capturing_quantifier() {
        // forall t0. t0 -> t1 under t1 := t0 must keep t0 free
        let scheme = TypeScheme::poly([TVar(0)], Type::func(Type::var(0), Type::var(1)));
        let subst = Subst::singleton(TVar(1), Type::var(0));

        let result = subst.apply(&scheme);

        assert_eq!(
            result,
            TypeScheme::poly([TVar(2)], Type::func(Type::var(2), Type::var(0)))
        );
        assert_eq!(result.free_vars(), BTreeSet::from([TVar(0)]));
    }

    #[test]
    fn test_scheme_subst_renamed_quantifier_avoids_subst_domain() {
        // t2 is bound by the substitution, so the renamed quantifier skips it
        let scheme = TypeScheme::poly([TVar(0)], Type::func(Type::var(0), Type::var(1)));
        let subst: Subst = [(TVar(1), Type::var(0)), (TVar(2), Type::int())]
            .into_iter()
            .collect();

        let result = subst.apply(&scheme);

        assert_eq!(
            result,
            TypeScheme::poly([TVar(3)], Type::func(Type::var(3), Type::var(0)))
        );
    }
}
