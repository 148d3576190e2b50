use log::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Location, Token},
        parser::core::{ParseResult, parse},
    },
};

/// Parses a whole program.
///
/// Every top-level form must be a parenthesized list. The forms are wrapped
/// as the children of a synthetic `(begin ...)` list, so evaluating the
/// result runs them in source order and yields the value of the last one.
/// An empty token sequence gives an empty `begin`.
///
/// # Errors
/// - `ExpectedOpenParen` if a top-level token is not `(`.
/// - `ExpectedClosingParen` if the last form is not closed.
/// - `IncompleteParse` if tokens remain after the last form.
///
/// # Example
/// ```
/// use lispwalk::interpreter::{lexer::lex, parser::program::parse_program};
///
/// let tokens = lex("(func id (x) (+ x)) (id 4)").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.to_string(), "(begin (func id (x) (+ x)) (id 4))");
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Expr> {
    let mut forms = vec![Expr::Atom(Token::synthetic("begin"))];
    let mut index = 0;

    while index < tokens.len() {
        let (form, next) = parse(tokens, index)?;
        forms.push(form);
        index = next;
    }

    if let Some(token) = tokens.get(index) {
        return Err(ParseError::IncompleteParse { token:    token.text.clone(),
                                                 location: token.location, });
    }

    debug!("parsed {} top-level forms from {} tokens", forms.len() - 1, tokens.len());

    Ok(Expr::list(forms, Location::new(1, 1)))
}
