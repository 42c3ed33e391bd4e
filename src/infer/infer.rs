//! Core type inference algorithm.
//!
//! Algorithm W over `Expr`: every step returns the substitution it derived
//! together with the inferred type, and callers compose substitutions in the
//! order they were derived.

use crate::ast::Expr;
use crate::error::TypeError;
use crate::types::{Subst, Substitutable, Type, TypeScheme};

use super::env::TypeEnv;
use super::state::{generalize, InferState};
use super::unify::unify;

/// Result type for inference operations.
pub type InferResult<T> = Result<T, TypeError>;

impl InferState {
    /// Infer the type of an expression, returning the substitution derived
    /// along the way and the inferred type (already under that substitution).
    ///
    /// The state's fresh variables must not already occur in `env`; build it
    /// with [`InferState::for_env`] rather than [`InferState::new`] when `env`
    /// mentions any type variables.
    #[tracing::instrument(level = "trace", skip_all, fields(expr = %expr))]
    pub fn infer_expr(&mut self, env: &TypeEnv, expr: &Expr) -> InferResult<(Subst, Type)> {
        match expr {
            Expr::Var(name) => self.infer_var(env, name),
            Expr::Lambda(param, body) => self.infer_lambda(env, param, body),
            Expr::App(func, arg) => self.infer_app(env, func, arg),
            Expr::Let(name, value, body) => self.infer_let(env, name, value, body),
        }
    }

    fn infer_var(&mut self, env: &TypeEnv, name: &str) -> InferResult<(Subst, Type)> {
        match env.lookup(name) {
            Some(scheme) => Ok((Subst::empty(), self.instantiate(scheme)?)),
            None => Err(TypeError::unbound_variable(name)),
        }
    }

    fn infer_lambda(
        &mut self,
        env: &TypeEnv,
        param: &str,
        body: &Expr,
    ) -> InferResult<(Subst, Type)> {
        // Lambda-bound names stay monomorphic
        let param_ty = self.fresh_type_var()?;
        let body_env = env.extend(param, TypeScheme::mono(param_ty.clone()));

        let (subst, body_ty) = self.infer_expr(&body_env, body)?;
        let func_ty = Type::func(subst.apply(&param_ty), body_ty);
        Ok((subst, func_ty))
    }

    fn infer_app(&mut self, env: &TypeEnv, func: &Expr, arg: &Expr) -> InferResult<(Subst, Type)> {
        let (s1, func_ty) = self.infer_expr(env, func)?;
        let (s2, arg_ty) = self.infer_expr(&env.apply_subst(&s1), arg)?;

        let result_ty = self.fresh_type_var()?;
        let s3 = unify(&s2.apply(&func_ty), &Type::func(arg_ty, result_ty.clone()))?;

        let subst = s3.compose(&s2.compose(&s1));
        Ok((subst, s3.apply(&result_ty)))
    }

    fn infer_let(
        &mut self,
        env: &TypeEnv,
        name: &str,
        value: &Expr,
        body: &Expr,
    ) -> InferResult<(Subst, Type)> {
        let (s1, value_ty) = self.infer_expr(env, value)?;

        let env1 = env.apply_subst(&s1);
        let scheme = generalize(&env1, &value_ty);
        tracing::debug!(name, %scheme, "generalized let binding");

        let (s2, body_ty) = self.infer_expr(&env1.extend(name, scheme), body)?;
        Ok((s2.compose(&s1), body_ty))
    }
}

/// Infer the type of `expr` under `env`.
///
/// Runs with a fresh `InferState` whose variables cannot collide with any
/// variable in `env`.
pub fn infer(env: &TypeEnv, expr: &Expr) -> InferResult<Type> {
    let (subst, ty) = infer_with_subst(env, expr)?;
    Ok(subst.apply(&ty))
}

/// Like [`infer`], but also returns the residual substitution.
pub fn infer_with_subst(env: &TypeEnv, expr: &Expr) -> InferResult<(Subst, Type)> {
    InferState::for_env(env).infer_expr(env, expr)
}

/// Infer the principal type scheme of `expr`: its type generalized over
/// every variable not free in `env`.
pub fn infer_scheme(env: &TypeEnv, expr: &Expr) -> InferResult<TypeScheme> {
    let (subst, ty) = infer_with_subst(env, expr)?;
    Ok(generalize(&env.apply_subst(&subst), &subst.apply(&ty)))
}
