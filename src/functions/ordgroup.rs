//! Builders for brace groups.

use crate::build_html::{self, GroupType};
use crate::build_mathml;
use crate::build_common::make_span;
use crate::context::MathTexContext;
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::MathDomNode;
use crate::options::Options;
use crate::parser::parse_node::{NodeType, ParseNode};
use crate::types::ParseError;

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::OrdGroup(group) = node else {
        return Err(ParseError::new("Expected OrdGroup node"));
    };
    if group.semisimple {
        // \begingroup groups are transparent to spacing.
        let children =
            build_html::build_expression(ctx, &group.body, options, GroupType::False, (None, None))?;
        return Ok(crate::build_common::make_fragment(&children).into());
    }
    let children =
        build_html::build_expression(ctx, &group.body, options, GroupType::True, (None, None))?;
    Ok(make_span(vec!["mord".to_owned()], children, Some(options), None).into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::OrdGroup(group) = node else {
        return Err(ParseError::new("Expected OrdGroup node"));
    };
    build_mathml::build_expression_row(ctx, &group.body, options, true)
}

/// Register the ordgroup builders.
pub fn define_ordgroup(ctx: &mut MathTexContext) {
    ctx.define_function_builders(NodeType::OrdGroup, Some(html_builder), Some(mathml_builder));
}
