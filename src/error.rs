//! Error types for the hmcore type checker.

use thiserror::Error;

use crate::types::{PrettyContext, TVar, Type};

/// Result type for inference operations.
pub type Result<T> = std::result::Result<T, TypeError>;

/// Type checking errors.
///
/// Every error aborts the inference call that raised it. The variants carry
/// the structural data a renderer needs to produce a diagnostic.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unbound variable '{name}'")]
    UnboundVariable { name: String },

    #[error("type mismatch: {}", mismatch_message(.expected, .actual))]
    TypeMismatch { expected: Type, actual: Type },

    #[error("infinite type: {}", occurs_message(.var, .ty))]
    OccursCheck { var: TVar, ty: Type },

    #[error("ran out of fresh type variables")]
    FreshVarsExhausted,
}

// Both sides share one naming context so equal variables print equally.
fn mismatch_message(expected: &Type, actual: &Type) -> String {
    let mut ctx = PrettyContext::new();
    let expected = ctx.format_type(expected);
    let actual = ctx.format_type(actual);
    format!("expected {}, found {}", expected, actual)
}

fn occurs_message(var: &TVar, ty: &Type) -> String {
    let mut ctx = PrettyContext::new();
    let var = ctx.format_type(&Type::Var(*var));
    let ty = ctx.format_type(ty);
    format!("{} occurs in {}", var, ty)
}

impl TypeError {
    pub fn unbound_variable(name: impl Into<String>) -> Self {
        TypeError::UnboundVariable { name: name.into() }
    }

    pub fn mismatch(expected: &Type, actual: &Type) -> Self {
        TypeError::TypeMismatch {
            expected: expected.clone(),
            actual: actual.clone(),
        }
    }
}

/// Errors from checking a sequence of top-level bindings.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProgramError {
    #[error("in binding '{name}': {source}")]
    Binding {
        name: String,
        #[source]
        source: TypeError,
    },
}

impl ProgramError {
    /// The name of the binding that failed.
    pub fn binding_name(&self) -> &str {
        match self {
            ProgramError::Binding { name, .. } => name,
        }
    }

    /// The underlying type error.
    pub fn type_error(&self) -> &TypeError {
        match self {
            ProgramError::Binding { source, .. } => source,
        }
    }
}
