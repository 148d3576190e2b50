use log::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            environment::Environment,
            function::builtin,
            utils::eval_value,
        },
        lexer::Location,
        value::core::{Closure, Value},
    },
};

impl Context {
    /// Calls a user-defined function.
    ///
    /// The arguments are evaluated left to right in the caller's
    /// environment. The body then runs in a copy of the caller's environment
    /// with each parameter bound to its argument. Bindings made by the body
    /// are dropped when the call returns.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if the number of arguments differs from the
    ///   number of parameters.
    /// - `MissingValue` if an argument produces no value.
    pub fn call_closure(closure: &Closure,
                        args: &[Expr],
                        env: &mut Environment,
                        location: Location)
                        -> EvalResult<Option<Value>> {
        let values = args.iter()
                         .map(|arg| eval_value(arg, env))
                         .collect::<EvalResult<Vec<_>>>()?;

        if values.len() != closure.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: closure.name.clone(),
                                                             expected: closure.params.len(),
                                                             found: values.len(),
                                                             location });
        }

        debug!("calling '{}' with {} args", closure.name, values.len());

        let mut local = env.snapshot_with(&closure.params, values);
        Self::eval_body(closure, &mut local)
    }

    /// Runs a function body.
    ///
    /// A body that starts with an atom, such as `(+ a b)`, is a single
    /// application. A body that starts with a list, such as
    /// `((func sq (x) (+ x x)) (sq a))`, is a sequence of forms whose last
    /// value is returned.
    fn eval_body(closure: &Closure, env: &mut Environment) -> EvalResult<Option<Value>> {
        match closure.body.first() {
            Some(Expr::List { .. }) => builtin::begin(&closure.body, env, closure.location),
            _ => Self::eval_application(&closure.body, closure.location, env),
        }
    }
}
