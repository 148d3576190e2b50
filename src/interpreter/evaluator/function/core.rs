use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, environment::Environment, function::builtin},
        lexer::Location,
        value::core::Value,
    },
};

/// Type alias for builtin form handlers.
///
/// A builtin receives its argument expressions unevaluated, the environment
/// of the call and the location of the call. It decides itself which
/// arguments to evaluate and when.
type BuiltinFn = fn(&[Expr], &mut Environment, Location) -> EvalResult<Option<Value>>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

/// Defines builtin forms by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the form.
///
/// The macro produces:
/// - `BuiltinDef` (the table entry),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FORMS` (public list of builtin names).
macro_rules! builtin_forms {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// One entry of the builtin table.
        pub struct BuiltinDef {
            /// The name the form is invoked by.
            pub name:  &'static str,
            /// The accepted argument counts.
            pub arity: Arity,
            func:      BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all builtin forms.
        pub const BUILTIN_FORMS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_forms! {
    "if"    => { arity: Arity::Exact(3), func: builtin::if_form },
    "<"     => { arity: Arity::Exact(2), func: builtin::less_than },
    "+"     => { arity: Arity::AtLeast(0), func: builtin::add },
    "-"     => { arity: Arity::AtLeast(1), func: builtin::subtract },
    "begin" => { arity: Arity::AtLeast(0), func: builtin::begin },
    "func"  => { arity: Arity::Exact(3), func: builtin::func },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }

    /// Describes the constraint for error messages, e.g. `exactly 3`.
    #[must_use]
    pub fn describe(self) -> String {
        match self {
            Self::Exact(m) => format!("exactly {m}"),
            Self::AtLeast(m) => format!("at least {m}"),
        }
    }
}

impl BuiltinDef {
    /// Checks the argument count and runs the form.
    ///
    /// # Errors
    /// `BuiltinArity` if the count is not accepted, otherwise whatever the
    /// form itself raises.
    pub fn call(&self,
                args: &[Expr],
                env: &mut Environment,
                location: Location)
                -> EvalResult<Option<Value>> {
        if !self.arity.check(args.len()) {
            return Err(RuntimeError::BuiltinArity { name: self.name,
                                                    expected: self.arity.describe(),
                                                    found: args.len(),
                                                    location });
        }
        (self.func)(args, env, location)
    }
}

/// Looks up a builtin form by name.
///
/// # Example
/// ```
/// use lispwalk::interpreter::evaluator::function::core::{Arity, find_builtin};
///
/// assert_eq!(find_builtin("if").map(|b| b.arity), Some(Arity::Exact(3)));
/// assert!(find_builtin("add").is_none());
/// ```
#[must_use]
pub fn find_builtin(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// Whether `name` is reserved for a builtin form.
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_FORMS.contains(&name)
}
