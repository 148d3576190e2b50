use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            environment::Environment,
        },
        value::core::Value,
    },
};

/// Evaluates a subexpression and ensures that it produces a value.
///
/// # Errors
/// `MissingValue` if the expression produces nothing, such as an empty
/// `begin`.
pub fn eval_value(expr: &Expr, env: &mut Environment) -> EvalResult<Value> {
    Context::eval(expr, env)?.ok_or(RuntimeError::MissingValue { location: expr.location() })
}

/// Evaluates a subexpression that must produce an integer.
///
/// # Errors
/// `ExpectedInteger` for any other result, reported at the subexpression.
pub fn eval_integer(expr: &Expr, env: &mut Environment) -> EvalResult<i64> {
    match Context::eval(expr, env)? {
        Some(Value::Integer(n)) => Ok(n),
        other => Err(RuntimeError::ExpectedInteger { found:    Value::describe(other.as_ref()),
                                                     location: expr.location(), }),
    }
}

/// Evaluates a subexpression that must produce a boolean.
///
/// # Errors
/// `ExpectedBoolean` for any other result, reported at the subexpression.
pub fn eval_bool(expr: &Expr, env: &mut Environment) -> EvalResult<bool> {
    match Context::eval(expr, env)? {
        Some(Value::Bool(b)) => Ok(b),
        other => Err(RuntimeError::ExpectedBoolean { found:    Value::describe(other.as_ref()),
                                                     location: expr.location(), }),
    }
}
