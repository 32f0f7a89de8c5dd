//! The one error type surfaced by this crate.
//!
//! Everything that can go wrong at the library level — lexing an unknown
//! character, an unexpected token, a missing argument, an internal builder
//! invariant violation — is reported as a [`ParseError`] carrying a
//! categorised [`ParseErrorKind`] plus the position and length of the
//! offending source region when one is known.

use crate::parser::parse_node::NodeType;
use crate::symbols::Mode;
use crate::types::SourceLocation;
use alloc::boxed::Box;
use core::fmt;
use thiserror::Error;

/// Error thrown when parsing or building an expression fails.
///
/// Distinguishes problems in the user-supplied expression (most kinds) from
/// internal invariant violations (`Message` kinds ending in "please report").
#[derive(Debug, Error)]
#[error("mathtex parse error: {kind}")]
pub struct ParseError {
    /// Categorised reason for the failure.
    #[source]
    pub kind: Box<ParseErrorKind>,
    /// Byte offset of the start of the offending region, when known.
    pub position: Option<usize>,
    /// Byte length of the offending region, when known.
    pub length: Option<usize>,
}

impl ParseError {
    /// Create an error with no location information.
    pub fn new<T: Into<ParseErrorKind>>(kind: T) -> Self {
        Self {
            kind: Box::new(kind.into()),
            position: None,
            length: None,
        }
    }

    /// Create an error located at a token or parse node.
    pub fn with_token<T: Into<ParseErrorKind>>(kind: T, token: &dyn ErrorLocationProvider) -> Self {
        let mut err = Self::new(kind);
        if let Some(loc) = token.loc().filter(|loc| loc.start() <= loc.end()) {
            err.position = Some(loc.start());
            err.length = Some(loc.end() - loc.start());
        }
        err
    }
}

impl From<fmt::Error> for ParseError {
    fn from(_: fmt::Error) -> Self {
        Self::new(ParseErrorKind::Message("failed to write markup"))
    }
}

/// Anything that can point into the source: tokens, parse nodes, locations.
pub trait ErrorLocationProvider {
    /// The source location, if one is attached.
    fn loc(&self) -> Option<&SourceLocation>;
}

impl ErrorLocationProvider for SourceLocation {
    fn loc(&self) -> Option<&SourceLocation> {
        Some(self)
    }
}

/// Describes the specific reason for a [`ParseError`].
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("{0}")]
    Message(&'static str),
    #[error("Unexpected character: '{character}'")]
    UnexpectedCharacter { character: String },
    #[error("Expected '{expected}', got '{found}'")]
    ExpectedToken { expected: String, found: String },
    #[error(r"Undefined control sequence: {name}")]
    UndefinedControlSequence { name: String },
    #[error("Too many expansions: infinite loop or need to increase maxExpand setting")]
    TooManyExpansions,
    #[error("Extra }}")]
    ExtraCloseBrace,
    #[error("Unexpected end of input in a macro argument, expected '{expected}'")]
    UnexpectedEndOfMacroArgument { expected: String },
    #[error("Incomplete placeholder at end of macro body")]
    IncompletePlaceholder,
    #[error("Not a valid argument number")]
    InvalidArgumentNumber,
    #[error("Use of the macro doesn't match its definition")]
    MacroUseMismatch,
    #[error("Double superscript")]
    DoubleSuperscript,
    #[error("Double subscript")]
    DoubleSubscript,
    #[error(r"Limit controls must follow a math operator")]
    LimitsMustFollowBase,
    #[error("only one infix operator per group")]
    OnlyOneInfixPerGroup,
    #[error("infix operator at start of expression")]
    InfixAtStart,
    #[error("Invalid {context}: '{value}'")]
    InvalidValue { context: String, value: String },
    #[error("Invalid size: '{size}'")]
    InvalidSize { size: String },
    #[error("Invalid unit: '{unit}'")]
    InvalidUnit { unit: String },
    #[error("Expected group after '{symbol}'")]
    ExpectedGroupAfterSymbol { symbol: String },
    #[error("Expected group as {context}")]
    ExpectedGroupAs { context: String },
    #[error("{func} missing arguments; it cannot be used in {context}")]
    FunctionMissingArguments { func: String, context: String },
    #[error("Can't use function '{func}' in {mode} mode")]
    FunctionDisallowedInMode { func: String, mode: Mode },
    #[error("No function handler for {name}")]
    NoFunctionHandler { name: String },
    #[error("Null argument, please report this as a bug")]
    NullArgument,
    #[error("Got group of unknown type: '{group_type}'")]
    UnknownGroupType { group_type: NodeType },
    #[error("Unsupported symbol {symbol} and font size {font}")]
    UnsupportedSymbolFont { symbol: String, font: String },
    #[error("Illegal delimiter: '{delim}'")]
    IllegalDelimiter { delim: String },
    #[error("Invalid delimiter '{delim}' after '{context}'")]
    InvalidDelimiter { delim: String, context: String },
    #[error(r"\middle without preceding \left")]
    MiddleWithoutLeft,
    #[error(r"Expected \right after \left")]
    ExpectedRight,
    #[error("No such environment: {name}")]
    UnknownEnvironment { name: String },
    #[error(r"Mismatch: \begin{{{expected}}} matched by \end{{{found}}}")]
    MismatchedEnvironment { expected: String, found: String },
    #[error(r"Expected & or \\ or \cr or \end, found {found}")]
    ExpectedArrayDelimiter { found: String },
    #[error("Too many tab characters: expected at most {expected} columns")]
    TooManyColumns { expected: usize },
    #[error(r"Invalid \arraystretch: {stretch}")]
    InvalidArrayStretch { stretch: String },
    #[error(r"\tag works only in display equations")]
    TagOnlyInDisplayMode,
    #[error("{{{env}}} can be used only in display mode.")]
    DisplayModeOnly { env: String },
    #[error("LaTeX-incompatible input: {message} [{code}]")]
    StrictModeError { message: String, code: String },
    #[error("Font metrics not found for font: {font_family}")]
    FontMetricsNotFound { font_family: String },
    #[error("Unknown accent '{accent}'")]
    UnknownAccent { accent: String },
    #[error("Accent {accent} unsupported in {mode} mode")]
    UnsupportedAccentInMode { accent: String, mode: Mode },
    #[error("Unknown stretchy element {label}")]
    UnknownStretchyElement { label: String },
    #[error("Invalid attribute name '{attr}'")]
    InvalidAttributeName { attr: String },
    #[error("Unbalanced namespace destruction: attempt to pop global namespace; please report this as a bug")]
    UnbalancedNamespaceDestruction,
    #[error(r"Invalid \genfrac style: {level}")]
    InvalidGenfracStyle { level: String },
    #[error("Unrecognized genfrac command: {command}")]
    UnrecognizedGenfracCommand { command: String },
    #[error("{command} is not trusted")]
    NotTrusted { command: String },
    #[error("Invalid base-{base} digit {digit}")]
    InvalidBaseDigit { base: u32, digit: String },
    #[error(r"Expected a control sequence after {command}, got {found}")]
    ExpectedControlSequence { command: String, found: String },
}

impl From<&'static str> for ParseErrorKind {
    fn from(message: &'static str) -> Self {
        Self::Message(message)
    }
}
