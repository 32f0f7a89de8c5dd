//! `\html@mathml`: different renderings for the two output trees.

use crate::build_common::make_fragment;
use crate::build_html::{self, GroupType};
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec, ord_argument};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::MathDomNode;
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::ParseError;

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::HtmlMathMl(group) = node else {
        return Err(ParseError::new("Expected HtmlMathMl node"));
    };
    let elements =
        build_html::build_expression(ctx, &group.html, options, GroupType::False, (None, None))?;
    Ok(make_fragment(&elements).into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::HtmlMathMl(group) = node else {
        return Err(ParseError::new("Expected HtmlMathMl node"));
    };
    build_mathml::build_expression_row(ctx, &group.mathml, options, false)
}

/// Register `\html@mathml`.
pub fn define_htmlmathml(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::HtmlMathMl),
        names: &["\\html@mathml"],
        props: FunctionPropSpec {
            num_args: 2,
            allowed_in_text: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            Ok(ParseNode::HtmlMathMl(parse_node::ParseNodeHtmlMathMl {
                mode: context.parser.mode,
                loc: context.loc(),
                html: ord_argument(&args[0]),
                mathml: ord_argument(&args[1]),
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
