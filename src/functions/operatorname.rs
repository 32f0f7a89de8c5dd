//! `\operatorname` and `\operatorname*`.

use crate::build_common::{make_span, try_combine_chars};
use crate::build_html::{self, GroupType};
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec, ord_argument};
use crate::dom_tree::HtmlDomNode;
use crate::functions::op::assemble_sup_sub;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType, TextNode};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::style::DISPLAY;
use crate::types::ParseError;

fn unwrap<'a>(
    node: &'a ParseNode,
) -> Result<
    (
        &'a parse_node::ParseNodeOperatorName,
        Option<&'a ParseNode>,
        Option<&'a ParseNode>,
    ),
    ParseError,
> {
    match node {
        ParseNode::OperatorName(op) => Ok((op, None, None)),
        ParseNode::SupSub(supsub) => {
            let Some(ParseNode::OperatorName(op)) = supsub.base.as_deref() else {
                return Err(ParseError::new("Expected OperatorName node as supsub base"));
            };
            Ok((op, supsub.sup.as_deref(), supsub.sub.as_deref()))
        }
        _ => Err(ParseError::new("Expected OperatorName node")),
    }
}

/// The operator name set upright: letters via mathrm, `*`→`\ast`-free.
fn build_name_span(
    body: &[ParseNode],
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    // Render the name in the upright text font.
    let upright = options.with_font("mathrm".to_owned());
    let mut children =
        build_html::build_expression(ctx, body, &upright, GroupType::True, (None, None))?;
    for child in &mut children {
        if let Some(classes) = child.classes_mut() {
            classes.retain(|c| c != "mbin" && c != "mrel");
        }
    }
    try_combine_chars(&mut children);
    Ok(make_span(vec!["mop".to_owned()], children, Some(options), None).into())
}

pub(super) fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let (op, sup, sub) = unwrap(node)?;
    let base = build_name_span(&op.body, options, ctx)?;

    let has_limits =
        op.limits && (options.style.size == DISPLAY.size || op.always_handle_sup_sub);
    if (sup.is_some() || sub.is_some()) && has_limits {
        return assemble_sup_sub(base, sup, sub, options, options.style, 0.0, 0.0, ctx);
    }
    Ok(base)
}

pub(super) fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let (op, _, _) = unwrap(node)?;
    let mut children = build_mathml::build_expression(ctx, &op.body, options, false)?;

    let mut mo = MathNode::with_children(MathNodeType::Mo, {
        // Flatten to an <mo> of the name's text.
        let text: String = children
            .drain(..)
            .map(|child| child.to_text())
            .collect();
        vec![TextNode { text }.into()]
    });
    mo.set_attribute("movablelimits", "false");
    let mut applied = MathNode::with_children(
        MathNodeType::Mo,
        vec![
            TextNode {
                text: "\u{2061}".to_owned(),
            }
            .into(),
        ],
    );
    applied.set_attribute("lspace", "0em");
    Ok(MathNode::with_children(MathNodeType::Mrow, vec![mo.into(), applied.into()]).into())
}

/// Register `\operatorname`.
pub fn define_operatorname(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::OperatorName),
        names: &["\\operatorname@", "\\operatornamewithlimits"],
        props: FunctionPropSpec::with_num_args(1),
        handler: Some(|context, args, _opt_args| {
            let body = ord_argument(&args[0]);
            let with_limits = context.func_name == "\\operatornamewithlimits";
            Ok(ParseNode::OperatorName(parse_node::ParseNodeOperatorName {
                mode: context.parser.mode,
                loc: context.loc(),
                body,
                always_handle_sup_sub: with_limits,
                limits: with_limits,
                parent_is_sup_sub: false,
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });

}
