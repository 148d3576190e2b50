use std::{fmt, rc::Rc};

use crate::{ast::Expr, interpreter::lexer::Location};

/// Represents a runtime value in the interpreter.
///
/// Values are dynamically typed. Every builtin checks the variant it
/// receives and reports a type error instead of assuming one.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean, produced by `<` and consumed by `if`.
    Bool(bool),
    /// A user-defined function created by `func`.
    Function(Rc<Closure>),
}

/// A function created by a `func` form.
///
/// A closure holds its parameter names and shares its body with the syntax
/// tree it was defined in. It does not hold an environment: each call runs
/// in a copy of the caller's environment with the parameters bound on top.
#[derive(Debug)]
pub struct Closure {
    /// The name the function was defined under.
    pub name:     String,
    /// Parameter names, in declaration order.
    pub params:   Vec<String>,
    /// The children of the body list.
    pub body:     Rc<[Expr]>,
    /// Location of the body list.
    pub location: Location,
}

impl Value {
    /// A short name for the type of this value, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Bool(_) => "boolean",
            Self::Function(_) => "function",
        }
    }

    /// Describes an optional value for error messages, naming an absent
    /// value `nothing`.
    #[must_use]
    pub fn describe(value: Option<&Self>) -> String {
        value.map_or_else(|| "nothing".to_string(), |v| v.type_name().to_string())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Function(closure) => write!(f, "<func {}>", closure.name),
        }
    }
}
