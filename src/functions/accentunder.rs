//! Accents below a base: `\underleftarrow`, `\utilde`, ….

use crate::build_common::{VListChild, VListElem, VListKern, VListParam, make_span, make_v_list};
use crate::build_html;
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::stretchy;
use crate::types::ParseError;

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::AccentUnder(group) = node else {
        return Err(ParseError::new("Expected AccentUnder node"));
    };

    let inner = build_html::build_group(ctx, &group.base, options, None)?;
    let accent = stretchy::svg_span(node, options)?;
    let kern = if group.label == "\\utilde" { 0.12 } else { 0.0 };

    let vlist = make_v_list(
        VListParam::Top {
            position_data: inner.height(),
            children: vec![
                VListElem::builder()
                    .elem(accent)
                    .wrapper_classes(vec!["svg-align".to_owned()])
                    .build()
                    .into(),
                VListChild::Kern(VListKern { size: kern }),
                VListElem::builder().elem(inner).build().into(),
            ],
        },
        options,
    )?;

    Ok(make_span(
        vec!["mord".to_owned(), "accentunder".to_owned()],
        vec![vlist.into()],
        Some(options),
        None,
    )
    .into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::AccentUnder(group) = node else {
        return Err(ParseError::new("Expected AccentUnder node"));
    };
    let accent = stretchy::math_ml_node(&group.label);
    let base = build_mathml::build_group(ctx, &group.base, options)?;
    let mut munder = MathNode::with_children(MathNodeType::Munder, vec![base, accent.into()]);
    munder.set_attribute("accentunder", "true");
    Ok(munder.into())
}

/// Register the under-accent family.
pub fn define_accentunder(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::AccentUnder),
        names: &[
            "\\underleftarrow",
            "\\underrightarrow",
            "\\underleftrightarrow",
            "\\undergroup",
            "\\utilde",
        ],
        props: FunctionPropSpec::with_num_args(1),
        handler: Some(|context, args, _opt_args| {
            Ok(ParseNode::AccentUnder(Box::new(
                parse_node::ParseNodeAccentUnder {
                    mode: context.parser.mode,
                    loc: context.loc(),
                    label: context.func_name.clone(),
                    base: Box::new(args[0].clone()),
                },
            )))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
