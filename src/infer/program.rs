//! Checking sequences of top-level bindings.
//!
//! - `infer_program` threads the environment: each binding is generalized
//!   and visible, polymorphically, to the bindings after it.
//! - `infer_independent` checks bindings that do not see each other, in
//!   parallel, each with its own `InferState`.

use rayon::prelude::*;

use crate::ast::{Binding, Program};
use crate::error::ProgramError;
use crate::types::{Substitutable, TypeScheme};

use super::env::TypeEnv;
use super::infer::{infer_scheme, InferResult};
use super::state::{generalize, InferState};

impl InferState {
    /// Infer every binding of `program` in order, returning the environment
    /// extended with all of them.
    pub fn infer_program(
        &mut self,
        env: &TypeEnv,
        program: &Program,
    ) -> Result<TypeEnv, ProgramError> {
        let mut current_env = env.clone();

        for binding in &program.bindings {
            let (subst, ty) = self
                .infer_expr(&current_env, &binding.value)
                .map_err(|source| ProgramError::Binding {
                    name: binding.name.clone(),
                    source,
                })?;

            current_env = current_env.apply_subst(&subst);
            let scheme = generalize(&current_env, &subst.apply(&ty));
            tracing::debug!(name = %binding.name, %scheme, "added top-level binding");
            current_env = current_env.extend(binding.name.clone(), scheme);
        }

        Ok(current_env)
    }
}

/// Check `program` against `env` with a fresh `InferState`.
pub fn check_program(env: &TypeEnv, program: &Program) -> Result<TypeEnv, ProgramError> {
    InferState::for_env(env).infer_program(env, program)
}

/// Infer each binding's principal scheme against the same base environment.
///
/// Bindings do not see each other. They are checked in parallel and results
/// come back in input order.
pub fn infer_independent(
    env: &TypeEnv,
    bindings: &[Binding],
) -> Vec<(String, InferResult<TypeScheme>)> {
    tracing::debug!(count = bindings.len(), "checking independent bindings");
    bindings
        .par_iter()
        .map(|binding| (binding.name.clone(), infer_scheme(env, &binding.value)))
        .collect()
}
