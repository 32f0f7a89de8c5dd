//! Builders for `\tag`-wrapped trees. The HTML side is assembled directly in
//! `build_html`; this registers the MathML rendering (a labeled table row).

use crate::build_mathml;
use crate::context::MathTexContext;
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{NodeType, ParseNode};
use crate::types::ParseError;

fn html_builder(
    _node: &ParseNode,
    _options: &Options,
    _ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    // build_html strips the tag wrapper before dispatching.
    Err(ParseError::new(
        "tag node reached the html builder; please report this as a bug",
    ))
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Tag(group) = node else {
        return Err(ParseError::new("Expected Tag node"));
    };

    let cell = |children: Vec<MathDomNode>| {
        MathNode::with_children(MathNodeType::Mtd, children)
    };

    let body = build_mathml::build_expression(ctx, &group.body, options, false)?;
    let tag = build_mathml::build_expression(ctx, &group.tag, options, false)?;

    let mut label = cell(tag);
    label.classes.push("tml-tag".to_owned());
    let row = MathNode::with_children(
        MathNodeType::Mlabeledtr,
        vec![label.into(), cell(body).into()],
    );
    let mut table = MathNode::with_children(MathNodeType::Mtable, vec![row.into()]);
    table.set_attribute("side", "right");
    table.set_attribute("width", "100%");
    Ok(table.into())
}

/// Register the tag builders.
pub fn define_tag(ctx: &mut MathTexContext) {
    ctx.define_function_builders(NodeType::Tag, Some(html_builder), Some(mathml_builder));
}
