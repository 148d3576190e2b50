use std::rc::Rc;

use log::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{environment::Environment, function::core::find_builtin},
        lexer::{Location, Token, TokenKind},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns the root environment that top-level forms run in.
/// Functions defined at the top level of one program stay bound in it, so a
/// context can evaluate several programs in sequence and later ones see the
/// definitions of earlier ones. A fresh context starts with no bindings.
#[derive(Debug, Default)]
pub struct Context {
    /// Bindings made by top-level forms.
    pub globals: Environment,
}

impl Context {
    /// Creates a new evaluation context with an empty root environment.
    #[must_use]
    pub fn new() -> Self {
        Self { globals: Environment::new() }
    }

    /// Evaluates a parsed program in the root environment.
    ///
    /// # Returns
    /// The value of the last top-level form, or `None` for an empty program.
    ///
    /// # Example
    /// ```
    /// use lispwalk::interpreter::{
    ///     evaluator::core::Context, lexer::lex, parser::program::parse_program,
    ///     value::core::Value,
    /// };
    ///
    /// let tokens = lex("(func add (a b) (+ a b)) (add 3 4)").unwrap();
    /// let program = parse_program(&tokens).unwrap();
    ///
    /// let mut ctx = Context::new();
    /// assert_eq!(ctx.eval_program(&program).unwrap(), Some(Value::Integer(7)));
    /// assert!(ctx.globals.get("add").is_some());
    /// ```
    pub fn eval_program(&mut self, program: &Expr) -> EvalResult<Option<Value>> {
        Self::eval(program, &mut self.globals)
    }

    /// Evaluates an expression in the given environment.
    ///
    /// Atoms are integer literals or identifier lookups. Lists are
    /// applications: the head must name a builtin form or a bound function.
    ///
    /// # Returns
    /// `Some(Value)` for expressions that produce a value, or `None` for an
    /// empty `begin`.
    pub fn eval(expr: &Expr, env: &mut Environment) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Atom(token) => Self::eval_atom(token, env).map(Some),
            Expr::List { items, location } => Self::eval_application(items, *location, env),
        }
    }

    /// Evaluates an atom.
    ///
    /// Integer tokens are parsed as base-10 `i64`; anything that does not
    /// fit is a `NumericFormat` error. Identifiers must be bound.
    pub fn eval_atom(token: &Token, env: &Environment) -> EvalResult<Value> {
        match token.kind {
            TokenKind::Integer => {
                token.text
                     .parse::<i64>()
                     .map(Value::Integer)
                     .map_err(|_| RuntimeError::NumericFormat { text:     token.text.clone(),
                                                                location: token.location, })
            },
            _ => env.get(&token.text)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownVariable { name:     token.text.clone(),
                                                                   location: token.location, }),
        }
    }

    /// Evaluates a list as an application.
    ///
    /// Builtin forms take precedence over bindings of the same name and
    /// receive their arguments unevaluated. A bound function gets its
    /// arguments evaluated first.
    ///
    /// # Errors
    /// `ExpectedFunction` if the list is empty, its head is not an
    /// identifier, or the identifier names neither a builtin nor a bound
    /// function.
    pub fn eval_application(items: &[Expr],
                            location: Location,
                            env: &mut Environment)
                            -> EvalResult<Option<Value>> {
        let Some((head, args)) = items.split_first() else {
            return Err(RuntimeError::ExpectedFunction { name: "()".to_string(),
                                                        location });
        };

        let Some(name) = head.as_identifier() else {
            return Err(RuntimeError::ExpectedFunction { name:     head.to_string(),
                                                        location: head.location(), });
        };

        trace!("applying `{name}` to {} args at {location}", args.len());

        if let Some(builtin) = find_builtin(name) {
            return builtin.call(args, env, location);
        }

        let closure = match env.get(name) {
            Some(Value::Function(closure)) => Rc::clone(closure),
            Some(other) => {
                return Err(RuntimeError::ExpectedFunction { name:     format!("{name} ({})",
                                                                              other.type_name()),
                                                            location: head.location(), });
            },
            None => {
                return Err(RuntimeError::ExpectedFunction { name:     name.to_string(),
                                                            location: head.location(), });
            },
        };

        Self::call_closure(&closure, args, env, location)
    }
}
