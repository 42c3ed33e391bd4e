//! Type system module for hmcore.
//!
//! This module provides the core type definitions, substitution implementation,
//! and pretty-printing for the Hindley-Milner inference engine.

mod pretty;
mod subst;
mod ty;

pub use pretty::PrettyContext;
pub use subst::{Subst, Substitutable};
pub use ty::{TVar, TVarId, Type, TypeScheme};
