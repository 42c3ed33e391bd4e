//! Core type definitions for hmcore type inference.
//!
//! This module defines the type representation for a Hindley-Milner system
//! with let-polymorphism:
//! - Named nullary types (`Int`, `Bool`, ...)
//! - Function, product and sum types
//! - Type schemes quantifying over type variables

use std::collections::BTreeSet;

/// Unique identifier for type variables.
pub type TVarId = u32;

/// A type variable. Identity is the id and nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TVar(pub TVarId);

impl TVar {
    pub fn id(&self) -> TVarId {
        self.0
    }
}

/// Core type representation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    /// Type variable.
    Var(TVar),

    /// Nullary named type such as `Int` or `Bool`.
    Basic(String),

    /// Function type: domain -> codomain
    Func(Box<Type>, Box<Type>),

    /// Product type: left * right
    Product(Box<Type>, Box<Type>),

    /// Sum type: left + right
    Sum(Box<Type>, Box<Type>),
}

impl Type {
    // === Constructors ===

    /// Create a type variable.
    pub fn var(id: TVarId) -> Self {
        Type::Var(TVar(id))
    }

    /// Create a named basic type.
    pub fn basic(name: impl Into<String>) -> Self {
        Type::Basic(name.into())
    }

    pub fn int() -> Self {
        Type::basic("Int")
    }

    pub fn bool() -> Self {
        Type::basic("Bool")
    }

    /// Create a function type.
    pub fn func(domain: Type, codomain: Type) -> Self {
        Type::Func(Box::new(domain), Box::new(codomain))
    }

    /// Create a product type.
    pub fn product(left: Type, right: Type) -> Self {
        Type::Product(Box::new(left), Box::new(right))
    }

    /// Create a sum type.
    pub fn sum(left: Type, right: Type) -> Self {
        Type::Sum(Box::new(left), Box::new(right))
    }

    // === Predicates ===

    /// Check if this is a type variable.
    pub fn is_var(&self) -> bool {
        matches!(self, Type::Var(_))
    }

    /// Check if this is a function type.
    pub fn is_func(&self) -> bool {
        matches!(self, Type::Func(..))
    }

    // === Accessors ===

    /// Get the type variable if this is a Var.
    pub fn as_var(&self) -> Option<TVar> {
        match self {
            Type::Var(var) => Some(*var),
            _ => None,
        }
    }

    /// Get (domain, codomain) if this is a Func.
    pub fn as_func(&self) -> Option<(&Type, &Type)> {
        match self {
            Type::Func(domain, codomain) => Some((domain, codomain)),
            _ => None,
        }
    }

    /// Collect all free type variables in this type.
    pub fn free_vars(&self) -> BTreeSet<TVar> {
        let mut vars = BTreeSet::new();
        self.collect_free_vars(&mut vars);
        vars
    }

    fn collect_free_vars(&self, vars: &mut BTreeSet<TVar>) {
        match self {
            Type::Basic(_) => {}
            Type::Var(var) => {
                vars.insert(*var);
            }
            Type::Func(left, right) | Type::Product(left, right) | Type::Sum(left, right) => {
                left.collect_free_vars(vars);
                right.collect_free_vars(vars);
            }
        }
    }

    /// Check whether `var` appears anywhere in this type.
    pub fn occurs(&self, var: TVar) -> bool {
        match self {
            Type::Basic(_) => false,
            Type::Var(v) => *v == var,
            Type::Func(left, right) | Type::Product(left, right) | Type::Sum(left, right) => {
                left.occurs(var) || right.occurs(var)
            }
        }
    }

    /// Largest variable id mentioned in this type.
    pub fn max_var_id(&self) -> Option<TVarId> {
        match self {
            Type::Basic(_) => None,
            Type::Var(v) => Some(v.id()),
            Type::Func(left, right) | Type::Product(left, right) | Type::Sum(left, right) => {
                left.max_var_id().max(right.max_var_id())
            }
        }
    }
}

/// Type scheme: a universally quantified type.
/// Represents ∀α₁...αₙ. τ
///
/// Built only through `mono` and `poly`, so every quantified variable occurs
/// in the body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeScheme {
    /// Quantified type variables, sorted and without duplicates.
    vars: Vec<TVar>,
    /// The type body.
    ty: Type,
}

impl TypeScheme {
    /// Create a monomorphic type scheme (no quantification).
    pub fn mono(ty: Type) -> Self {
        TypeScheme { vars: vec![], ty }
    }

    /// Create a type scheme quantifying `vars`.
    ///
    /// Variables that do not occur in `ty` are dropped.
    pub fn poly(vars: impl IntoIterator<Item = TVar>, ty: Type) -> Self {
        let body_vars = ty.free_vars();
        let vars: BTreeSet<TVar> = vars
            .into_iter()
            .filter(|v| body_vars.contains(v))
            .collect();
        TypeScheme {
            vars: vars.into_iter().collect(),
            ty,
        }
    }

    /// Quantified variables, sorted by id.
    pub fn vars(&self) -> &[TVar] {
        &self.vars
    }

    /// The type body.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Check if this is a monomorphic type (no quantified variables).
    pub fn is_mono(&self) -> bool {
        self.vars.is_empty()
    }

    /// Collect all free type variables (not including quantified ones).
    pub fn free_vars(&self) -> BTreeSet<TVar> {
        let mut vars = self.ty.free_vars();
        for v in &self.vars {
            vars.remove(v);
        }
        vars
    }

    /// Largest variable id mentioned in this scheme, quantified or free.
    pub fn max_var_id(&self) -> Option<TVarId> {
        let quantified = self.vars.iter().map(TVar::id).max();
        quantified.max(self.ty.max_var_id())
    }
}

impl From<Type> for TypeScheme {
    fn from(ty: Type) -> Self {
        TypeScheme::mono(ty)
    }
}
