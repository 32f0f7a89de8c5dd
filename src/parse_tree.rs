//! Parse an expression string into a tree, enforcing the `\df@tag` contract.

use crate::context::MathTexContext;
use crate::parser::Parser;
use crate::parser::parse_node::AnyParseNode;
use crate::types::{ParseError, Settings};

/// Parse `expression` into a list of parse nodes.
pub fn parse_tree(
    ctx: &MathTexContext,
    expression: &str,
    settings: &Settings,
) -> Result<Vec<AnyParseNode>, ParseError> {
    // A fresh parser per invocation: its macro namespace dies on return.
    settings.macros.borrow_mut().remove("\\df@tag");
    let mut parser = Parser::new(expression, settings, ctx);
    parser.parse()
}
