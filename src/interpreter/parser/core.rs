use crate::{ast::Expr, error::ParseError, interpreter::lexer::Token};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one parenthesized list starting at `index`.
///
/// The token at `index` must be `(`. Nested lists are parsed recursively and
/// every other token becomes an atom. Parsing stops at the matching `)`.
///
/// # Parameters
/// - `tokens`: The full token sequence.
/// - `index`: Position of the opening parenthesis.
///
/// # Returns
/// The list node and the index just past its closing parenthesis.
///
/// # Errors
/// - `ExpectedOpenParen` if the token at `index` is not `(` or there is no
///   token there.
/// - `ExpectedClosingParen` if the tokens run out before the list is closed,
///   located at the last token.
///
/// # Example
/// ```
/// use lispwalk::interpreter::{lexer::lex, parser::core::parse};
///
/// let tokens = lex("(+ 1 (- 5 2)) (foo)").unwrap();
/// let (list, next) = parse(&tokens, 0).unwrap();
///
/// assert_eq!(list.to_string(), "(+ 1 (- 5 2))");
/// assert_eq!(next, 9);
/// ```
pub fn parse(tokens: &[Token], index: usize) -> ParseResult<(Expr, usize)> {
    let open = match tokens.get(index) {
        Some(token) if token.is_open() => token,
        Some(token) => {
            return Err(ParseError::ExpectedOpenParen { found:    token.text.clone(),
                                                       location: token.location, });
        },
        None => {
            let location = tokens.last().map(|t| t.location).unwrap_or_default();
            return Err(ParseError::ExpectedOpenParen { found: "end of input".to_string(),
                                                       location });
        },
    };

    let mut items = Vec::new();
    let mut index = index + 1;

    while let Some(token) = tokens.get(index) {
        if token.is_open() {
            let (child, next) = parse(tokens, index)?;
            items.push(child);
            index = next;
            continue;
        }

        if token.is_close() {
            return Ok((Expr::list(items, open.location), index + 1));
        }

        items.push(Expr::Atom(token.clone()));
        index += 1;
    }

    // The opening parenthesis itself was consumed, so there is always a last
    // token here.
    let location = tokens.last().map_or(open.location, |t| t.location);
    Err(ParseError::ExpectedClosingParen { location })
}
