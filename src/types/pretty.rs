//! Pretty-printing for types.
//!
//! Provides human-readable string representations of types and type
//! schemes. Variables are renamed `a`, `b`, ... in order of first appearance
//! so output does not depend on internal ids.

use std::collections::HashMap;
use std::fmt::{self, Display, Write};

use super::ty::{TVar, TVarId, Type, TypeScheme};

/// Binding strength of a type constructor when printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Prec {
    Arrow,
    Sum,
    Product,
    Atom,
}

fn prec_of(ty: &Type) -> Prec {
    match ty {
        Type::Func(..) => Prec::Arrow,
        Type::Sum(..) => Prec::Sum,
        Type::Product(..) => Prec::Product,
        Type::Var(_) | Type::Basic(_) => Prec::Atom,
    }
}

/// Variables of `ty` in order of first appearance, left to right.
fn vars_in_order(ty: &Type, out: &mut Vec<TVar>) {
    match ty {
        Type::Basic(_) => {}
        Type::Var(var) => {
            if !out.contains(var) {
                out.push(*var);
            }
        }
        Type::Func(left, right) | Type::Product(left, right) | Type::Sum(left, right) => {
            vars_in_order(left, out);
            vars_in_order(right, out);
        }
    }
}

/// Context for pretty-printing, tracking variable names.
pub struct PrettyContext {
    /// Mapping from type variable IDs to display names.
    var_names: HashMap<TVarId, String>,
    /// Counter for generating fresh names.
    next_name: usize,
}

impl PrettyContext {
    /// Create a new pretty-printing context.
    pub fn new() -> Self {
        PrettyContext {
            var_names: HashMap::new(),
            next_name: 0,
        }
    }

    /// Get or generate a name for a type variable.
    fn get_var_name(&mut self, id: TVarId) -> String {
        if let Some(name) = self.var_names.get(&id) {
            return name.clone();
        }

        let name = self.generate_name();
        self.var_names.insert(id, name.clone());
        name
    }

    /// Generate the next fresh variable name.
    fn generate_name(&mut self) -> String {
        let idx = self.next_name;
        self.next_name += 1;

        if idx < 26 {
            // a, b, c, ..., z
            char::from(b'a' + idx as u8).to_string()
        } else {
            // a1, b1, ..., z1, a2, ...
            let letter = char::from(b'a' + (idx % 26) as u8);
            let num = idx / 26;
            format!("{}{}", letter, num)
        }
    }

    /// Format a type to a string.
    pub fn format_type(&mut self, ty: &Type) -> String {
        let mut s = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_type(&mut s, ty);
        s
    }

    /// Format a type scheme to a string.
    pub fn format_scheme(&mut self, scheme: &TypeScheme) -> String {
        let mut s = String::new();
        let _ = self.write_scheme(&mut s, scheme);
        s
    }

    /// Write a type to the given writer.
    fn write_type<W: Write>(&mut self, w: &mut W, ty: &Type) -> fmt::Result {
        match ty {
            Type::Basic(name) => write!(w, "{}", name),

            Type::Var(var) => self.write_var(w, *var),

            Type::Func(domain, codomain) => {
                // Right-associative: only the domain may need parentheses
                self.write_operand(w, domain, Prec::Arrow)?;
                write!(w, " -> ")?;
                self.write_type(w, codomain)
            }

            Type::Product(left, right) => {
                self.write_operand(w, left, Prec::Product)?;
                write!(w, " * ")?;
                self.write_operand(w, right, Prec::Product)
            }

            Type::Sum(left, right) => {
                self.write_operand(w, left, Prec::Sum)?;
                write!(w, " + ")?;
                self.write_operand(w, right, Prec::Sum)
            }
        }
    }

    /// Write `ty` as an operand of a constructor binding at `parent`,
    /// parenthesizing anything that binds no tighter.
    fn write_operand<W: Write>(&mut self, w: &mut W, ty: &Type, parent: Prec) -> fmt::Result {
        if prec_of(ty) <= parent {
            write!(w, "(")?;
            self.write_type(w, ty)?;
            write!(w, ")")
        } else {
            self.write_type(w, ty)
        }
    }

    /// Write a type variable.
    fn write_var<W: Write>(&mut self, w: &mut W, var: TVar) -> fmt::Result {
        let var_name = self.get_var_name(var.id());
        write!(w, "{}", var_name)
    }

    /// Write a type scheme.
    fn write_scheme<W: Write>(&mut self, w: &mut W, scheme: &TypeScheme) -> fmt::Result {
        if !scheme.is_mono() {
            // Name variables in body order, not id order
            let mut body_names = String::new();
            self.write_type(&mut body_names, scheme.ty())?;

            let mut order = Vec::new();
            vars_in_order(scheme.ty(), &mut order);

            write!(w, "forall")?;
            for var in order.into_iter().filter(|v| scheme.vars().contains(v)) {
                write!(w, " ")?;
                self.write_var(w, var)?;
            }
            return write!(w, ". {}", body_names);
        }

        self.write_type(w, scheme.ty())
    }
}

impl Default for PrettyContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Display implementation for types using a fresh context.
impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ctx = PrettyContext::new();
        write!(f, "{}", ctx.format_type(self))
    }
}

impl Display for TypeScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ctx = PrettyContext::new();
        write!(f, "{}", ctx.format_scheme(self))
    }
}

impl Display for TVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}
