//! `\color` and `\textcolor`.

use crate::build_common::make_fragment;
use crate::build_html::{self, GroupType};
use crate::build_mathml::{self, make_color_row};
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec, ord_argument};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::MathDomNode;
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::{ArgType, ParseError};

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Color(group) = node else {
        return Err(ParseError::new("Expected Color node"));
    };
    // Build as a partial group: the fragment splices inline, and spacing is
    // decided by the parent as if the wrapper were not there.
    let elements = build_html::build_expression(
        ctx,
        &group.body,
        &options.with_color(group.color.clone()),
        GroupType::False,
        (None, None),
    )?;
    Ok(make_fragment(&elements).into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Color(group) = node else {
        return Err(ParseError::new("Expected Color node"));
    };
    let children = build_mathml::build_expression(
        ctx,
        &group.body,
        &options.with_color(group.color.clone()),
        false,
    )?;
    Ok(make_color_row(&group.color, children).into())
}

/// Register the color commands.
pub fn define_color(ctx: &mut MathTexContext) {
    // \textcolor{color}{content}
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Color),
        names: &["\\textcolor"],
        props: FunctionPropSpec {
            num_args: 2,
            allowed_in_text: true,
            arg_types: Some(vec![ArgType::Color, ArgType::Original]),
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let ParseNode::ColorToken(color) = &args[0] else {
                return Err(ParseError::new("Expected color token"));
            };
            let body = ord_argument(&args[1]);
            Ok(ParseNode::Color(parse_node::ParseNodeColor {
                mode: context.parser.mode,
                loc: context.loc(),
                color: color.color.clone(),
                body,
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });

    // \color{color}: affects the rest of the group.
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Color),
        names: &["\\color"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            arg_types: Some(vec![ArgType::Color]),
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let ParseNode::ColorToken(color) = &args[0] else {
                return Err(ParseError::new("Expected color token"));
            };
            let color = color.color.clone();
            // Parse out the rest of the enclosing group as the body.
            let body = context
                .parser
                .parse_expression(true, context.break_on_token_text)?;
            Ok(ParseNode::Color(parse_node::ParseNodeColor {
                mode: context.parser.mode,
                loc: context.loc(),
                color,
                body,
            }))
        }),
        html_builder: None,
        mathml_builder: None,
    });
}
