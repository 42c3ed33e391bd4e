//! Type environment for name bindings.
//!
//! The type environment maps variable names to their type schemes,
//! supporting scoping through immutable extension. Extension shares
//! structure with the receiver, so deep `let`/lambda nesting does not copy
//! the whole map at every level.

use std::collections::BTreeSet;

use im::OrdMap;

use crate::types::{Subst, Substitutable, TVar, TVarId, TypeScheme};

/// Type environment mapping names to type schemes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeEnv {
    bindings: OrdMap<String, TypeScheme>,
}

impl TypeEnv {
    /// Create an empty environment.
    pub fn empty() -> Self {
        TypeEnv {
            bindings: OrdMap::new(),
        }
    }

    /// Look up a name in the environment.
    pub fn lookup(&self, name: &str) -> Option<&TypeScheme> {
        self.bindings.get(name)
    }

    /// Extend the environment with a new binding, shadowing any previous
    /// binding of `name`. Returns a new environment (immutable extension).
    pub fn extend(&self, name: impl Into<String>, scheme: TypeScheme) -> Self {
        TypeEnv {
            bindings: self.bindings.update(name.into(), scheme),
        }
    }

    /// Check if a name is bound in the environment.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Get all free type variables in the environment.
    pub fn free_vars(&self) -> BTreeSet<TVar> {
        let mut vars = BTreeSet::new();
        for scheme in self.bindings.values() {
            vars.extend(scheme.free_vars());
        }
        vars
    }

    /// Largest variable id mentioned anywhere in the environment, bound or
    /// free.
    pub fn max_var_id(&self) -> Option<TVarId> {
        self.bindings
            .values()
            .filter_map(TypeScheme::max_var_id)
            .max()
    }

    /// Get all bound names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.bindings.keys()
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over all bindings, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TypeScheme)> {
        self.bindings.iter()
    }
}

impl Substitutable for TypeEnv {
    fn apply_subst(&self, subst: &Subst) -> Self {
        if subst.is_empty() {
            return self.clone();
        }
        let bindings = self
            .bindings
            .iter()
            .map(|(name, scheme)| (name.clone(), scheme.apply_subst(subst)))
            .collect();
        TypeEnv { bindings }
    }

    fn free_vars(&self) -> BTreeSet<TVar> {
        TypeEnv::free_vars(self)
    }
}

impl<S: Into<String>> FromIterator<(S, TypeScheme)> for TypeEnv {
    fn from_iter<T: IntoIterator<Item = (S, TypeScheme)>>(iter: T) -> Self {
        TypeEnv {
            bindings: iter
                .into_iter()
                .map(|(name, scheme)| (name.into(), scheme))
                .collect(),
        }
    }
}
