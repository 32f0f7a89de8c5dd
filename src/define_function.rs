//! Registration plumbing for control-sequence functions.
//!
//! Each function family registers one [`FunctionDefSpec`]: the spellings it
//! answers to, argument-shape props, a parse handler, and the HTML/MathML
//! builders for the node type it produces. The context derives the two
//! builder dispatch tables from these registrations.

use crate::context::MathTexContext;
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::MathDomNode;
use crate::options::Options;
use crate::parser::Parser;
use crate::parser::parse_node::{NodeType, ParseNode};
use crate::types::{ArgType, BreakToken, ParseError, SourceLocation, Token};

/// What a handler sees while its function's arguments are being parsed.
pub struct FunctionContext<'a, 'b> {
    /// The spelling that invoked the handler.
    pub func_name: String,
    /// The parser, for mode switches and further token consumption.
    pub parser: &'a mut Parser<'b>,
    /// The invoking token.
    pub token: Option<&'a Token>,
    /// The token text the surrounding expression stops at.
    pub break_on_token_text: Option<&'a BreakToken>,
}

impl FunctionContext<'_, '_> {
    /// Source location of the invoking token.
    #[must_use]
    pub fn loc(&self) -> Option<SourceLocation> {
        self.token.and_then(|t| t.loc.clone())
    }
}

/// Parse handler: builds the parse node from parsed arguments.
pub type FunctionHandler = fn(
    context: FunctionContext,
    args: Vec<ParseNode>,
    opt_args: Vec<Option<ParseNode>>,
) -> Result<ParseNode, ParseError>;

/// Visual builder for one node type.
pub type HtmlBuilder =
    fn(node: &ParseNode, options: &Options, ctx: &MathTexContext) -> Result<HtmlDomNode, ParseError>;

/// Semantic builder for one node type.
pub type MathMlBuilder =
    fn(node: &ParseNode, options: &Options, ctx: &MathTexContext) -> Result<MathDomNode, ParseError>;

/// Argument-shape and placement properties of a function.
#[derive(Debug, Clone, Default)]
pub struct FunctionPropSpec {
    /// Number of required arguments.
    pub num_args: usize,
    /// Per-argument parse types; `None` means all `Original`.
    pub arg_types: Option<Vec<ArgType>>,
    /// Usable as a bare (unbraced) argument of another function.
    pub allowed_in_argument: bool,
    /// Legal in text mode.
    pub allowed_in_text: bool,
    /// Legal in math mode.
    pub allowed_in_math: bool,
    /// Number of leading optional arguments.
    pub num_optional_args: usize,
    /// Infix operator (collected by `parse_expression`).
    pub infix: bool,
    /// TeX primitive: single-token arguments.
    pub primitive: bool,
}

impl FunctionPropSpec {
    /// Props for an ordinary math-only function with `num_args` arguments.
    #[must_use]
    pub fn with_num_args(num_args: usize) -> Self {
        Self {
            num_args,
            allowed_in_math: true,
            ..Self::with_default()
        }
    }

    /// The base props: zero arguments, math mode only.
    #[must_use]
    pub fn with_default() -> Self {
        Self {
            allowed_in_math: true,
            ..Self::default()
        }
    }
}

/// A function family's registration record.
pub struct FunctionDefSpec<'b> {
    /// The node type the handler produces; `None` for handler-only entries.
    pub node_type: Option<NodeType>,
    /// Spellings sharing this handler.
    pub names: &'b [&'b str],
    /// Argument-shape properties.
    pub props: FunctionPropSpec,
    /// Parse handler.
    pub handler: Option<FunctionHandler>,
    /// Visual builder.
    pub html_builder: Option<HtmlBuilder>,
    /// Semantic builder.
    pub mathml_builder: Option<MathMlBuilder>,
}

/// The per-spelling record stored in the registry.
#[derive(Debug, Clone)]
pub struct FunctionSpec {
    /// The node type produced.
    pub node_type: Option<NodeType>,
    /// Number of required arguments.
    pub num_args: usize,
    /// Per-argument parse types.
    pub arg_types: Option<Vec<ArgType>>,
    /// Usable as a bare argument.
    pub allowed_in_argument: bool,
    /// Legal in text mode.
    pub allowed_in_text: bool,
    /// Legal in math mode.
    pub allowed_in_math: bool,
    /// Number of optional arguments.
    pub num_optional_args: usize,
    /// Infix operator.
    pub infix: bool,
    /// TeX primitive.
    pub primitive: bool,
    /// Parse handler.
    pub handler: Option<FunctionHandler>,
}

/// Unwrap a single-element ordgroup argument.
#[must_use]
pub fn normalize_argument(arg: &ParseNode) -> &ParseNode {
    match arg {
        ParseNode::OrdGroup(ord) if ord.body.len() == 1 => &ord.body[0],
        _ => arg,
    }
}

/// Flatten an argument into the list of nodes it contributes.
#[must_use]
pub fn ord_argument(arg: &ParseNode) -> Vec<ParseNode> {
    match arg {
        ParseNode::OrdGroup(ord) => ord.body.clone(),
        _ => vec![arg.clone()],
    }
}
