//! hmcore: Hindley-Milner type inference for a small lambda calculus.
//!
//! This library infers principal types for expressions built from variables,
//! lambdas, application and `let`. It features:
//!
//! - **Algorithm W** with explicit substitution threading
//! - **Let-polymorphism**: `let`-bound values are generalized, lambda
//!   parameters stay monomorphic
//! - **Occurs check** rejecting infinite types
//! - **Product and sum types** alongside functions and named base types
//! - **Program checking** for sequences of top-level bindings, sequentially
//!   or in parallel for independent bindings
//!
//! ```
//! use hmcore::{builtins::initial_env, infer_scheme, Expr};
//!
//! let id = Expr::lambda("x", Expr::var("x"));
//! let expr = Expr::let_in("id", id, Expr::app(Expr::var("id"), Expr::var("zero")));
//!
//! let scheme = infer_scheme(&initial_env(), &expr).unwrap();
//! assert_eq!(scheme.to_string(), "Int");
//! ```

pub mod ast;
pub mod builtins;
pub mod error;
pub mod infer;
pub mod types;

pub use ast::{Binding, Expr, Program};
pub use error::{ProgramError, Result, TypeError};
pub use infer::{
    check_program, generalize, infer, infer_independent, infer_scheme, infer_with_subst, unify,
    InferState, TypeEnv,
};
pub use types::{Subst, Substitutable, TVar, TVarId, Type, TypeScheme};
