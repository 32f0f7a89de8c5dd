//! `\relax`: does nothing, expandably.

use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::parser::parse_node::{self, NodeType, ParseNode};

/// Register `\relax`.
pub fn define_relax(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Internal),
        names: &["\\relax"],
        props: FunctionPropSpec {
            allowed_in_text: true,
            primitive: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, _args, _opt_args| {
            Ok(ParseNode::Internal(parse_node::ParseNodeInternal {
                mode: context.parser.mode,
                loc: context.loc(),
            }))
        }),
        html_builder: None,
        mathml_builder: None,
    });
}
