//! Abstract Syntax Tree definitions for the expression language.
//!
//! Trees are built by an external parser (or by hand with the helper
//! constructors below) and are only read by the inference engine.

use std::fmt;

/// Expressions of the lambda calculus with let.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Variable reference: `x`
    Var(String),

    /// Single-parameter abstraction: `\x. body`
    Lambda(String, Box<Expr>),

    /// Application: `func arg`
    App(Box<Expr>, Box<Expr>),

    /// Let binding: `let name = value in body`
    /// Only here is the bound name generalized.
    Let(String, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn lambda(param: impl Into<String>, body: Expr) -> Self {
        Expr::Lambda(param.into(), Box::new(body))
    }

    pub fn app(func: Expr, arg: Expr) -> Self {
        Expr::App(Box::new(func), Box::new(arg))
    }

    pub fn let_in(name: impl Into<String>, value: Expr, body: Expr) -> Self {
        Expr::Let(name.into(), Box::new(value), Box::new(body))
    }

    /// Apply `func` to each argument in turn: `((f a) b) c`.
    pub fn apply(func: Expr, args: impl IntoIterator<Item = Expr>) -> Self {
        args.into_iter().fold(func, Expr::app)
    }

    /// Curried abstraction over `params`: `\a. \b. body`.
    pub fn lambdas<S: Into<String>>(params: impl IntoIterator<Item = S>, body: Expr) -> Self {
        let params: Vec<String> = params.into_iter().map(Into::into).collect();
        params
            .into_iter()
            .rev()
            .fold(body, |body, param| Expr::lambda(param, body))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Lambda(param, body) => write!(f, "\\{}. {}", param, body),
            Expr::App(func, arg) => {
                match **func {
                    Expr::Lambda(..) | Expr::Let(..) => write!(f, "({})", func)?,
                    _ => write!(f, "{}", func)?,
                }
                write!(f, " ")?;
                match **arg {
                    Expr::Var(_) => write!(f, "{}", arg),
                    _ => write!(f, "({})", arg),
                }
            }
            Expr::Let(name, value, body) => write!(f, "let {} = {} in {}", name, value, body),
        }
    }
}

/// A named top-level binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub value: Expr,
}

impl Binding {
    pub fn new(name: impl Into<String>, value: Expr) -> Self {
        Binding {
            name: name.into(),
            value,
        }
    }
}

/// A program is a sequence of top-level bindings, each visible to the ones
/// after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub bindings: Vec<Binding>,
}

impl Program {
    pub fn new(bindings: Vec<Binding>) -> Self {
        Program { bindings }
    }
}

impl FromIterator<Binding> for Program {
    fn from_iter<T: IntoIterator<Item = Binding>>(iter: T) -> Self {
        Program {
            bindings: iter.into_iter().collect(),
        }
    }
}
