use crate::interpreter::lexer::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A boolean value was expected, but something else was found.
    ExpectedBoolean {
        /// The type of the value actually found.
        found:    String,
        /// The source location of the offending expression.
        location: Location,
    },
    /// An integer value was expected, but something else was found.
    ExpectedInteger {
        /// The type of the value actually found.
        found:    String,
        /// The source location of the offending expression.
        location: Location,
    },
    /// The head of a list does not name a builtin or a bound function.
    ExpectedFunction {
        /// What was found in head position.
        name:     String,
        /// The source location of the head, or of the list if it is empty.
        location: Location,
    },
    /// Tried to use an identifier that has no binding.
    UnknownVariable {
        /// The name of the identifier.
        name:     String,
        /// The source location of the identifier.
        location: Location,
    },
    /// A user-defined function was called with the wrong number of
    /// arguments.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source location of the call.
        location: Location,
    },
    /// A builtin form was given a number of arguments it does not accept.
    BuiltinArity {
        /// The name of the builtin.
        name:     &'static str,
        /// A description of the accepted counts, such as `exactly 3`.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
        /// The source location of the call.
        location: Location,
    },
    /// An integer literal does not fit in a 64-bit signed integer.
    NumericFormat {
        /// The literal text.
        text:     String,
        /// The source location of the literal.
        location: Location,
    },
    /// A `func` form is malformed.
    InvalidFunctionDefinition {
        /// Details about what is wrong.
        details:  String,
        /// The source location of the offending part.
        location: Location,
    },
    /// An expression whose value is needed produced no value, such as an
    /// empty `begin` passed as a function argument.
    MissingValue {
        /// The source location of the expression.
        location: Location,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source location of the operation.
        location: Location,
    },
}

impl RuntimeError {
    /// The location reported with this error.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::ExpectedBoolean { location, .. }
            | Self::ExpectedInteger { location, .. }
            | Self::ExpectedFunction { location, .. }
            | Self::UnknownVariable { location, .. }
            | Self::ArgumentCountMismatch { location, .. }
            | Self::BuiltinArity { location, .. }
            | Self::NumericFormat { location, .. }
            | Self::InvalidFunctionDefinition { location, .. }
            | Self::MissingValue { location }
            | Self::Overflow { location } => *location,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedBoolean { found, .. } => write!(f, "Expected boolean, got {found}"),
            Self::ExpectedInteger { found, .. } => write!(f, "Expected integer, got {found}"),
            Self::ExpectedFunction { name, .. } => write!(f, "Expected function, got {name}"),
            Self::UnknownVariable { name, .. } => write!(f, "Unknown variable '{name}'"),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          .. } => {
                write!(f, "Expected {expected} args to `{name}`, got {found}")
            },
            Self::BuiltinArity { name,
                                 expected,
                                 found,
                                 .. } => {
                write!(f, "`{name}` takes {expected} args, got {found}")
            },
            Self::NumericFormat { text, .. } => write!(f, "Expected an integer, got: {text}"),
            Self::InvalidFunctionDefinition { details, .. } => {
                write!(f, "Invalid function definition: {details}")
            },
            Self::MissingValue { .. } => write!(f, "Expected a value, got nothing"),
            Self::Overflow { .. } => write!(f, "Integer overflow while trying to compute result"),
        }
    }
}

impl std::error::Error for RuntimeError {}
