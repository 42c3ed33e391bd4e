//! Type inference module for hmcore.
//!
//! This module provides the core type inference implementation:
//! - `state`: Fresh variable generation, instantiation and generalization
//! - `env`: Type environment for variable bindings
//! - `unify`: Unification algorithm with occurs check
//! - `infer`: Algorithm W over expressions
//! - `program`: Checking sequences of top-level bindings

mod env;
mod infer;
mod program;
mod state;
mod unify;

#[cfg(test)]
mod proptests;

pub use env::TypeEnv;
pub use infer::{infer, infer_scheme, infer_with_subst, InferResult};
pub use program::{check_program, infer_independent};
pub use state::{generalize, InferState};
pub use unify::{unify, UnifyResult};
