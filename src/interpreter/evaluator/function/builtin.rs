use std::rc::Rc;

use log::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            environment::Environment,
            function::core::is_builtin,
            utils::{eval_bool, eval_integer},
        },
        lexer::Location,
        value::core::{Closure, Value},
    },
};

/// `(if condition then else)`
///
/// Evaluates the condition, then exactly one of the branches. The branch
/// that is not chosen is never evaluated.
///
/// # Errors
/// `ExpectedBoolean` if the condition is not a boolean.
pub fn if_form(args: &[Expr], env: &mut Environment, _: Location) -> EvalResult<Option<Value>> {
    if eval_bool(&args[0], env)? {
        Context::eval(&args[1], env)
    } else {
        Context::eval(&args[2], env)
    }
}

/// `(< a b)`
pub fn less_than(args: &[Expr], env: &mut Environment, _: Location) -> EvalResult<Option<Value>> {
    let left = eval_integer(&args[0], env)?;
    let right = eval_integer(&args[1], env)?;
    Ok(Some(Value::Bool(left < right)))
}

/// `(+ a b ...)`
///
/// Sums its operands left to right. With no operands the sum is `0`.
pub fn add(args: &[Expr], env: &mut Environment, location: Location) -> EvalResult<Option<Value>> {
    let mut total: i64 = 0;
    for arg in args {
        let n = eval_integer(arg, env)?;
        total = total.checked_add(n)
                     .ok_or(RuntimeError::Overflow { location })?;
    }
    Ok(Some(Value::Integer(total)))
}

/// `(- a b ...)`
///
/// Starts from the first operand and subtracts each following operand in
/// order. A single operand is returned unchanged.
pub fn subtract(args: &[Expr],
                env: &mut Environment,
                location: Location)
                -> EvalResult<Option<Value>> {
    let mut total = eval_integer(&args[0], env)?;
    for arg in &args[1..] {
        let n = eval_integer(arg, env)?;
        total = total.checked_sub(n)
                     .ok_or(RuntimeError::Overflow { location })?;
    }
    Ok(Some(Value::Integer(total)))
}

/// `(begin form ...)`
///
/// Evaluates each form in order in the current environment, so a `func`
/// inside a `begin` binds where the `begin` runs. Returns the value of the
/// last form, or nothing if there are none.
pub fn begin(args: &[Expr], env: &mut Environment, _: Location) -> EvalResult<Option<Value>> {
    let mut last = None;
    for arg in args {
        last = Context::eval(arg, env)?;
    }
    Ok(last)
}

/// `(func name (params ...) body)`
///
/// Builds a closure, binds it under `name` in the current environment and
/// returns it.
///
/// # Errors
/// `InvalidFunctionDefinition` if the name is not an identifier or names a
/// builtin form, if the parameters are not a list of identifiers, or if the
/// body is not a list.
pub fn func(args: &[Expr], env: &mut Environment, _: Location) -> EvalResult<Option<Value>> {
    let name = args[0].as_identifier()
                      .ok_or_else(|| RuntimeError::InvalidFunctionDefinition {
                          details:  format!("expected a function name, got {}", args[0]),
                          location: args[0].location(),
                      })?;

    if is_builtin(name) {
        return Err(RuntimeError::InvalidFunctionDefinition {
            details:  format!("cannot redefine builtin '{name}'"),
            location: args[0].location(),
        });
    }

    let params = args[1].as_list()
                        .ok_or_else(|| RuntimeError::InvalidFunctionDefinition {
                            details:  format!("expected a parameter list, got {}", args[1]),
                            location: args[1].location(),
                        })?
                        .iter()
                        .map(|param| {
                            param.as_identifier().map(str::to_string).ok_or_else(|| {
                                RuntimeError::InvalidFunctionDefinition {
                                    details:  format!("expected a parameter name, got {param}"),
                                    location: param.location(),
                                }
                            })
                        })
                        .collect::<EvalResult<Vec<_>>>()?;

    let Expr::List { items: body, location } = &args[2] else {
        return Err(RuntimeError::InvalidFunctionDefinition {
            details:  format!("expected a body list, got {}", args[2]),
            location: args[2].location(),
        });
    };

    debug!("defining function '{name}' with {} parameters", params.len());

    let closure = Rc::new(Closure { name: name.to_string(),
                                    params,
                                    body: Rc::clone(body),
                                    location: *location });
    env.define(name, Value::Function(Rc::clone(&closure)));

    Ok(Some(Value::Function(closure)))
}
