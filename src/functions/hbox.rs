//! `\hbox`: a text-mode box whose extent is protected from smashing.

use crate::build_common::make_span;
use crate::build_html::{self, GroupType};
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec, ord_argument};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::{ArgType, ParseError};

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Hbox(group) = node else {
        return Err(ParseError::new("Expected Hbox node"));
    };
    let elements =
        build_html::build_expression(ctx, &group.body, options, GroupType::False, (None, None))?;
    Ok(make_span(vec!["mord".to_owned(), "hbox".to_owned()], elements, Some(options), None).into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Hbox(group) = node else {
        return Err(ParseError::new("Expected Hbox node"));
    };
    let children = build_mathml::build_expression(ctx, &group.body, options, false)?;
    Ok(MathNode::with_children(MathNodeType::Mrow, children).into())
}

/// Register `\hbox`.
pub fn define_hbox(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Hbox),
        names: &["\\hbox"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: Some(vec![ArgType::Hbox]),
            allowed_in_argument: true,
            allowed_in_text: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            Ok(ParseNode::Hbox(parse_node::ParseNodeHbox {
                mode: context.parser.mode,
                loc: context.loc(),
                body: ord_argument(&args[0]),
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
