//! Environment definition plumbing and the array-family environments.

pub mod array;

use crate::define_function::{HtmlBuilder, MathMlBuilder};
use crate::parser::Parser;
use crate::parser::parse_node::{AnyParseNode, NodeType};
use crate::types::{ArgType, Mode, ParseError};

pub use array::define_array;

/// What an environment handler sees while `\begin{…}` is being parsed.
pub struct EnvContext<'a, 'b> {
    /// Current mode.
    pub mode: Mode,
    /// The environment's name, e.g. `"pmatrix"`.
    pub env_name: String,
    /// The parser, positioned after `\begin{name}` and its arguments.
    pub parser: &'a mut Parser<'b>,
}

/// Environment handler: parses the body up to `\end` and builds the node.
pub type EnvHandler = fn(
    context: EnvContext,
    args: Vec<AnyParseNode>,
    opt_args: Vec<Option<AnyParseNode>>,
) -> Result<AnyParseNode, ParseError>;

/// Argument-shape properties of an environment.
#[derive(Debug, Clone, Default)]
pub struct EnvProps {
    /// Number of required arguments after `\begin{name}`.
    pub num_args: usize,
    /// Per-argument parse types.
    pub arg_types: Option<Vec<ArgType>>,
    /// Legal in text mode.
    pub allowed_in_text: bool,
    /// Number of leading optional arguments.
    pub num_optional_args: usize,
}

/// The per-name record stored in the registry.
#[derive(Debug, Clone)]
pub struct EnvSpec {
    /// Node type the handler produces.
    pub node_type: NodeType,
    /// Number of required arguments.
    pub num_args: usize,
    /// Per-argument parse types.
    pub arg_types: Option<Vec<ArgType>>,
    /// Legal in text mode.
    pub allowed_in_text: bool,
    /// Number of optional arguments.
    pub num_optional_args: usize,
    /// The handler.
    pub handler: EnvHandler,
}

/// An environment family's registration record.
pub struct EnvDefSpec {
    /// Node type the handler produces.
    pub node_type: NodeType,
    /// Environment names sharing this handler.
    pub names: &'static [&'static str],
    /// Argument-shape properties.
    pub props: EnvProps,
    /// The handler.
    pub handler: EnvHandler,
    /// Visual builder for the produced node type.
    pub html_builder: Option<HtmlBuilder>,
    /// Semantic builder for the produced node type.
    pub mathml_builder: Option<MathMlBuilder>,
}
