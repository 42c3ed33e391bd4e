//! Inference state management.
//!
//! `InferState` owns the fresh-variable counter for one inference run.
//! Everything else the engine works with (substitutions, environments) is a
//! value passed in and returned, so independent runs never share mutable
//! state.

use crate::error::TypeError;
use crate::types::{Subst, TVar, TVarId, Type, TypeScheme};

use super::env::TypeEnv;
use super::infer::InferResult;

/// Inference state tracking type variable generation.
#[derive(Debug, Default)]
pub struct InferState {
    /// Next fresh type variable id, `None` once every id has been handed out.
    name_source: Option<TVarId>,
}

impl InferState {
    /// Create a new inference state starting at variable id 0.
    ///
    /// Fresh variables may collide with ids already used in a caller's
    /// environment. Use [`InferState::for_env`] when inferring against a
    /// non-empty environment.
    pub fn new() -> Self {
        InferState {
            name_source: Some(0),
        }
    }

    /// Create an inference state whose first fresh variable is `id`.
    ///
    /// The supply ends at `TVarId::MAX`; asking for a variable after that
    /// fails with `TypeError::FreshVarsExhausted`.
    pub fn starting_at(id: TVarId) -> Self {
        InferState {
            name_source: Some(id),
        }
    }

    /// Create an inference state whose fresh variables cannot collide with
    /// any variable mentioned in `env`.
    pub fn for_env(env: &TypeEnv) -> Self {
        match env.max_var_id() {
            Some(max) => InferState {
                name_source: max.checked_add(1),
            },
            None => InferState::new(),
        }
    }

    /// Get the next type variable ID without consuming it.
    pub fn next_var_id(&self) -> Option<TVarId> {
        self.name_source
    }

    /// Generate a fresh type variable.
    pub fn fresh_var(&mut self) -> InferResult<TVar> {
        let id = self.name_source.ok_or(TypeError::FreshVarsExhausted)?;
        self.name_source = id.checked_add(1);
        Ok(TVar(id))
    }

    /// Generate a fresh type variable (as a Type).
    pub fn fresh_type_var(&mut self) -> InferResult<Type> {
        self.fresh_var().map(Type::Var)
    }

    /// Instantiate a type scheme with fresh variables.
    pub fn instantiate(&mut self, scheme: &TypeScheme) -> InferResult<Type> {
        if scheme.is_mono() {
            return Ok(scheme.ty().clone());
        }

        let subst = scheme
            .vars()
            .iter()
            .map(|var| Ok((*var, self.fresh_type_var()?)))
            .collect::<InferResult<Subst>>()?;

        Ok(subst.apply(scheme.ty()))
    }
}

/// Generalize `ty` over its free variables that are not free in `env`.
///
/// Needs no fresh variables, so it does not take the inference state.
pub fn generalize(env: &TypeEnv, ty: &Type) -> TypeScheme {
    let env_vars = env.free_vars();
    let gen_vars = ty
        .free_vars()
        .into_iter()
        .filter(|v| !env_vars.contains(v));

    TypeScheme::poly(gen_vars, ty.clone())
}
